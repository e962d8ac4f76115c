//! Error types for the protocol layer.
//!
//! Each crate in Chessroom defines its own error enum. A `ProtocolError`
//! means a value coming off the wire could not be turned into one of our
//! types: a side name nobody recognises, a square that is not on the board.

/// Errors that can occur when parsing wire values.
///
/// `#[derive(thiserror::Error)]` generates the `std::error::Error` impl;
/// the `#[error("...")]` attribute is the message shown in logs and in
/// the `error` field of a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// A side other than `"white"` or `"black"`.
    #[error("invalid side: {0:?}")]
    InvalidSide(String),

    /// A row or column outside `0..8`.
    #[error("square [{row}, {col}] is off the board")]
    SquareOutOfRange { row: i64, col: i64 },

    /// A board cell string that is neither empty nor a piece glyph.
    #[error("invalid piece glyph: {0:?}")]
    InvalidGlyph(String),

    /// A board that is not 8 rows of 8 cells.
    #[error("board must be 8x8, got {0}")]
    InvalidBoardShape(String),
}
