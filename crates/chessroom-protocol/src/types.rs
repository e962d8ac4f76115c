//! Core value types shared by every Chessroom layer.
//!
//! These are the small, copyable things that travel on the wire and sit
//! inside a room: who is playing ([`Side`]), what is on a square
//! ([`Piece`]), where a square is ([`Square`]), and which room a request
//! is about ([`RoomCode`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ProtocolError;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

// ---------------------------------------------------------------------------
// RoomCode
// ---------------------------------------------------------------------------

/// The short code a room is addressed by, e.g. `"K7Q2M"`.
///
/// Newtype over `String` so a room code can't be confused with any other
/// string floating around a handler. Lookups are exact: the code a client
/// sends is compared byte-for-byte with the live codes, so a malformed
/// code is simply a room that doesn't exist.
///
/// `#[serde(transparent)]` serializes this as the bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomCode(String);

impl RoomCode {
    /// Wraps a code string.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for RoomCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

/// One of the two seats in a room, and the colour of a piece.
///
/// Serialized lowercase (`"white"`, `"black"`), which is what the browser
/// client sends in `?side=` and expects in `turn` / `players`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Both sides, in seating-preference order.
    pub const ALL: [Side; 2] = [Side::White, Side::Black];

    /// The other side.
    pub fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row delta a piece of this side advances by.
    ///
    /// White starts on rows 6–7 and moves toward row 0; black moves the
    /// other way.
    pub fn forward(self) -> i64 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::White => write!(f, "white"),
            Self::Black => write!(f, "black"),
        }
    }
}

impl FromStr for Side {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" => Ok(Self::White),
            "black" => Ok(Self::Black),
            other => Err(ProtocolError::InvalidSide(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Piece
// ---------------------------------------------------------------------------

/// The kind of a chess piece, independent of colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

/// A piece token: kind and side encoded together.
///
/// On the wire a piece is its Unicode chess glyph (`"♙"` is a white pawn,
/// `"♛"` a black queen). See [`Piece::glyph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(side: Side, kind: PieceKind) -> Self {
        Self { side, kind }
    }

    pub const fn white(kind: PieceKind) -> Self {
        Self::new(Side::White, kind)
    }

    pub const fn black(kind: PieceKind) -> Self {
        Self::new(Side::Black, kind)
    }

    /// The Unicode glyph for this piece.
    pub fn glyph(self) -> &'static str {
        use PieceKind::*;
        match (self.side, self.kind) {
            (Side::White, King) => "♔",
            (Side::White, Queen) => "♕",
            (Side::White, Rook) => "♖",
            (Side::White, Bishop) => "♗",
            (Side::White, Knight) => "♘",
            (Side::White, Pawn) => "♙",
            (Side::Black, King) => "♚",
            (Side::Black, Queen) => "♛",
            (Side::Black, Rook) => "♜",
            (Side::Black, Bishop) => "♝",
            (Side::Black, Knight) => "♞",
            (Side::Black, Pawn) => "♟",
        }
    }

    /// Parses a glyph back into a piece.
    pub fn from_glyph(glyph: &str) -> Result<Self, ProtocolError> {
        use PieceKind::*;
        let piece = match glyph {
            "♔" => Self::white(King),
            "♕" => Self::white(Queen),
            "♖" => Self::white(Rook),
            "♗" => Self::white(Bishop),
            "♘" => Self::white(Knight),
            "♙" => Self::white(Pawn),
            "♚" => Self::black(King),
            "♛" => Self::black(Queen),
            "♜" => Self::black(Rook),
            "♝" => Self::black(Bishop),
            "♞" => Self::black(Knight),
            "♟" => Self::black(Pawn),
            other => return Err(ProtocolError::InvalidGlyph(other.to_string())),
        };
        Ok(piece)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

// ---------------------------------------------------------------------------
// Square
// ---------------------------------------------------------------------------

/// A square on the board, guaranteed to be in range.
///
/// Serialized as a two-element array `[row, col]`, the shape the client
/// uses for `from`, `to`, and the entries of `moves`. Deserializing an
/// off-board pair fails, so a handler never sees a square it can't index.
///
/// `try_from` / `into` tell serde to go through `[i64; 2]` and our
/// conversion impls below instead of deriving a struct representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[i64; 2]", into = "[i64; 2]")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Builds a square, rejecting coordinates outside `0..8`.
    pub fn new(row: i64, col: i64) -> Result<Self, ProtocolError> {
        let in_range = |v: i64| (0..BOARD_SIZE as i64).contains(&v);
        if in_range(row) && in_range(col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(ProtocolError::SquareOutOfRange { row, col })
        }
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }
}

impl TryFrom<[i64; 2]> for Square {
    type Error = ProtocolError;

    fn try_from([row, col]: [i64; 2]) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Square> for [i64; 2] {
    fn from(square: Square) -> Self {
        [square.row as i64, square.col as i64]
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent_alternates() {
        assert_eq!(Side::White.opponent(), Side::Black);
        assert_eq!(Side::Black.opponent(), Side::White);
    }

    #[test]
    fn test_side_from_str_rejects_unknown() {
        assert_eq!("white".parse::<Side>(), Ok(Side::White));
        assert_eq!("black".parse::<Side>(), Ok(Side::Black));
        assert_eq!(
            "White".parse::<Side>(),
            Err(ProtocolError::InvalidSide("White".into()))
        );
    }

    #[test]
    fn test_side_serializes_lowercase() {
        let json = serde_json::to_string(&Side::Black).unwrap();
        assert_eq!(json, "\"black\"");
    }

    #[test]
    fn test_piece_glyph_covers_every_piece() {
        use PieceKind::*;
        for side in Side::ALL {
            for kind in [King, Queen, Rook, Bishop, Knight, Pawn] {
                let piece = Piece::new(side, kind);
                assert_eq!(Piece::from_glyph(piece.glyph()), Ok(piece));
            }
        }
    }

    #[test]
    fn test_piece_from_glyph_rejects_letters() {
        assert!(Piece::from_glyph("P").is_err());
        assert!(Piece::from_glyph("").is_err());
    }

    #[test]
    fn test_square_new_rejects_off_board() {
        assert!(Square::new(0, 0).is_ok());
        assert!(Square::new(7, 7).is_ok());
        assert_eq!(
            Square::new(8, 0),
            Err(ProtocolError::SquareOutOfRange { row: 8, col: 0 })
        );
        assert!(Square::new(0, -1).is_err());
    }

    #[test]
    fn test_square_deserializes_from_pair() {
        let square: Square = serde_json::from_str("[6, 0]").unwrap();
        assert_eq!((square.row(), square.col()), (6, 0));
        assert_eq!(serde_json::to_string(&square).unwrap(), "[6,0]");
    }

    #[test]
    fn test_square_deserialize_off_board_fails() {
        let result = serde_json::from_str::<Square>("[9, 0]");
        assert!(result.is_err());
    }

    #[test]
    fn test_room_code_is_transparent() {
        let code = RoomCode::new("ABCDE");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"ABCDE\"");
        assert_eq!(code.to_string(), "ABCDE");
    }
}
