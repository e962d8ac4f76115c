//! The 8×8 board and its wire representation.

use serde::{Deserialize, Serialize};

use crate::{BOARD_SIZE, Piece, PieceKind, ProtocolError, Side, Square};

/// One square's contents: a piece or nothing.
pub type Cell = Option<Piece>;

/// Back rank layout, column 0 to 7, shared by both sides.
const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8×8 grid of cells, indexed `[row][col]`.
///
/// Row 0 is black's back rank, row 7 is white's. On the wire the board is
/// a list of 8 rows, each a list of 8 strings: the piece glyph, or `""`
/// for an empty square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// A board with no pieces on it.
    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The standard chess starting position.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            board.cells[0][col] = Some(Piece::black(kind));
            board.cells[1][col] = Some(Piece::black(PieceKind::Pawn));
            board.cells[6][col] = Some(Piece::white(PieceKind::Pawn));
            board.cells[7][col] = Some(Piece::white(kind));
        }
        board
    }

    pub fn get(&self, square: Square) -> Cell {
        self.cells[square.row()][square.col()]
    }

    pub fn set(&mut self, square: Square, cell: Cell) {
        self.cells[square.row()][square.col()] = cell;
    }

    /// Number of pieces belonging to `side`.
    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| matches!(cell, Some(p) if p.side == side))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl From<Board> for Vec<Vec<String>> {
    fn from(board: Board) -> Self {
        board
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map(Piece::glyph).unwrap_or_default().to_string())
                    .collect()
            })
            .collect()
    }
}

impl TryFrom<Vec<Vec<String>>> for Board {
    type Error = ProtocolError;

    fn try_from(rows: Vec<Vec<String>>) -> Result<Self, Self::Error> {
        if rows.len() != BOARD_SIZE || rows.iter().any(|r| r.len() != BOARD_SIZE) {
            let shape: Vec<usize> = rows.iter().map(Vec::len).collect();
            return Err(ProtocolError::InvalidBoardShape(format!("{shape:?}")));
        }

        let mut board = Self::empty();
        for (r, row) in rows.iter().enumerate() {
            for (c, glyph) in row.iter().enumerate() {
                if !glyph.is_empty() {
                    board.cells[r][c] = Some(Piece::from_glyph(glyph)?);
                }
            }
        }
        Ok(board)
    }
}
