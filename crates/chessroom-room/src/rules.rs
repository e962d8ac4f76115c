//! Placeholder movement rules.
//!
//! Chessroom does not implement chess. Every piece, whatever its kind,
//! "moves" like a pawn that may always advance one or two rows, and any
//! move a client submits is applied as-is. The browser client relies on
//! exactly this behaviour, so it must not drift toward real chess here;
//! a real ruleset belongs in its own module with its own version.
//!
//! Squares are bounds-checked when a request is decoded, so an
//! off-board column never reaches these functions; only the row of a
//! computed destination is filtered here.

use chessroom_protocol::{Board, Side, Square};

/// Candidate destinations for whatever stands on `from`.
///
/// White pieces advance toward row 0. Anything else, including an empty
/// square, advances toward row 7. Candidates are one and two rows ahead
/// in the same column, in that order; rows off the board are dropped.
/// Destination occupancy is not looked at.
pub fn candidate_moves(board: &Board, from: Square) -> Vec<Square> {
    let direction = match board.get(from) {
        Some(piece) if piece.side == Side::White => Side::White.forward(),
        _ => Side::Black.forward(),
    };

    [1, 2]
        .into_iter()
        .filter_map(|steps| {
            let row = from.row() as i64 + direction * steps;
            Square::new(row, from.col() as i64).ok()
        })
        .collect()
}

/// Copies the contents of `from` onto `to` and clears `from`.
///
/// Whatever was on `to` is overwritten. When `from == to` the square ends
/// up empty: the clear runs after the copy.
pub fn apply_move(board: &mut Board, from: Square, to: Square) {
    let moving = board.get(from);
    board.set(to, moving);
    board.set(from, None);
}

#[cfg(test)]
mod tests {
    use chessroom_protocol::{Piece, PieceKind};

    use super::*;

    fn sq(row: i64, col: i64) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_candidate_moves_white_pawn_advances_up() {
        let board = Board::starting();
        assert_eq!(candidate_moves(&board, sq(6, 3)), vec![sq(5, 3), sq(4, 3)]);
    }

    #[test]
    fn test_candidate_moves_black_pawn_advances_down() {
        let board = Board::starting();
        assert_eq!(candidate_moves(&board, sq(1, 3)), vec![sq(2, 3), sq(3, 3)]);
    }

    #[test]
    fn test_candidate_moves_ignores_piece_kind_and_occupancy() {
        // White knight on its home square: same forward rule, and row 6
        // is full of white pawns.
        let board = Board::starting();
        assert_eq!(candidate_moves(&board, sq(7, 1)), vec![sq(6, 1), sq(5, 1)]);
    }

    #[test]
    fn test_candidate_moves_drops_rows_off_board() {
        let board = Board::starting();
        // Black rook on row 0 moves down, both candidates in range.
        assert_eq!(candidate_moves(&board, sq(0, 0)), vec![sq(1, 0), sq(2, 0)]);

        let mut board = Board::empty();
        board.set(sq(1, 5), Some(Piece::white(PieceKind::Pawn)));
        assert_eq!(candidate_moves(&board, sq(1, 5)), vec![sq(0, 5)]);

        board.set(sq(0, 5), Some(Piece::white(PieceKind::Queen)));
        assert!(candidate_moves(&board, sq(0, 5)).is_empty());
    }

    #[test]
    fn test_candidate_moves_empty_square_moves_down() {
        let board = Board::starting();
        assert_eq!(candidate_moves(&board, sq(4, 4)), vec![sq(5, 4), sq(6, 4)]);

        let empty = Board::empty();
        assert_eq!(candidate_moves(&empty, sq(6, 2)), vec![sq(7, 2)]);
        assert!(candidate_moves(&empty, sq(7, 2)).is_empty());
    }

    #[test]
    fn test_apply_move_copies_and_clears() {
        let mut board = Board::starting();
        apply_move(&mut board, sq(6, 0), sq(4, 0));
        assert_eq!(board.get(sq(4, 0)), Some(Piece::white(PieceKind::Pawn)));
        assert_eq!(board.get(sq(6, 0)), None);
    }

    #[test]
    fn test_apply_move_overwrites_destination() {
        let mut board = Board::starting();
        apply_move(&mut board, sq(7, 3), sq(0, 3));
        assert_eq!(board.get(sq(0, 3)), Some(Piece::white(PieceKind::Queen)));
        assert_eq!(board.count(Side::Black), 15);
    }

    #[test]
    fn test_apply_move_same_square_loses_piece() {
        let mut board = Board::starting();
        apply_move(&mut board, sq(6, 2), sq(6, 2));
        assert_eq!(board.get(sq(6, 2)), None);
        assert_eq!(board.count(Side::White), 15);
    }

    #[test]
    fn test_apply_move_from_empty_square_clears_destination() {
        let mut board = Board::starting();
        apply_move(&mut board, sq(4, 4), sq(6, 4));
        assert_eq!(board.get(sq(6, 4)), None);
    }
}
