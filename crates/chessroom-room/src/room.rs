//! A single game session's state: board, turn, and who is seated.

use chessroom_protocol::{Board, RoomSnapshot, Side, Square};

use crate::rules;

/// Maximum number of seated players in a room.
pub const MAX_PLAYERS: usize = Side::ALL.len();

/// The mutable state of one room.
///
/// A `Room` knows nothing about locking or its own code; the
/// [`RoomStore`](crate::RoomStore) wraps each room in its own mutex and
/// keys it by code. Everything here assumes the caller holds that lock.
///
/// Invariants kept by the methods below:
/// - `players` never holds the same side twice, so never more than two.
/// - `turn` flips exactly once per [`apply_move`](Self::apply_move).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    board: Board,
    turn: Side,
    /// Seated sides in the order they sat down.
    players: Vec<Side>,
}

impl Room {
    /// A fresh room: starting position, white to move, and the creator
    /// already seated as white.
    pub fn new() -> Self {
        Self {
            board: Board::starting(),
            turn: Side::White,
            players: vec![Side::White],
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn players(&self) -> &[Side] {
        &self.players
    }

    /// `true` once the last player has left. A vacant room is on its way
    /// out of the store and must be treated as gone.
    pub fn is_vacant(&self) -> bool {
        self.players.is_empty()
    }

    /// Seats a new player on the first free side, white before black.
    ///
    /// Returns `None` when both sides are taken.
    pub fn seat(&mut self) -> Option<Side> {
        if self.players.len() >= MAX_PLAYERS {
            return None;
        }
        let side = Side::ALL
            .into_iter()
            .find(|side| !self.players.contains(side))?;
        self.players.push(side);
        Some(side)
    }

    /// Unseats `side`. Returns `false` if it wasn't seated.
    pub fn vacate(&mut self, side: Side) -> bool {
        let before = self.players.len();
        self.players.retain(|seated| *seated != side);
        self.players.len() != before
    }

    /// Candidate destinations for the piece on `from`. See
    /// [`rules::candidate_moves`].
    pub fn candidate_moves(&self, from: Square) -> Vec<Square> {
        rules::candidate_moves(&self.board, from)
    }

    /// Applies a move unconditionally and passes the turn.
    ///
    /// No legality, ownership, or turn checks: whoever calls this moves
    /// whatever is on `from`, and the turn flips regardless.
    pub fn apply_move(&mut self, from: Square, to: Square) {
        rules::apply_move(&mut self.board, from, to);
        self.turn = self.turn.opponent();
    }

    /// A copy of the room's state for the wire.
    pub fn snapshot(&self) -> RoomSnapshot {
        RoomSnapshot {
            board: self.board,
            turn: self.turn,
            players: self.players.clone(),
        }
    }
}

impl Default for Room {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chessroom_protocol::{Piece, PieceKind};

    use super::*;

    fn sq(row: i64, col: i64) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_new_room_seats_creator_as_white() {
        let room = Room::new();
        assert_eq!(room.players(), &[Side::White]);
        assert_eq!(room.turn(), Side::White);
        assert_eq!(room.board(), &Board::starting());
        assert!(!room.is_vacant());
    }

    #[test]
    fn test_seat_fills_black_then_refuses() {
        let mut room = Room::new();
        assert_eq!(room.seat(), Some(Side::Black));
        assert_eq!(room.seat(), None);
        assert_eq!(room.players(), &[Side::White, Side::Black]);
    }

    #[test]
    fn test_seat_prefers_white_when_free() {
        let mut room = Room::new();
        room.seat();
        assert!(room.vacate(Side::White));

        assert_eq!(room.seat(), Some(Side::White));
        // Join order is kept: black sat first this time round.
        assert_eq!(room.players(), &[Side::Black, Side::White]);
    }

    #[test]
    fn test_vacate_absent_side_is_noop() {
        let mut room = Room::new();
        assert!(!room.vacate(Side::Black));
        assert_eq!(room.players(), &[Side::White]);
    }

    #[test]
    fn test_vacate_last_player_leaves_room_vacant() {
        let mut room = Room::new();
        assert!(room.vacate(Side::White));
        assert!(room.is_vacant());
    }

    #[test]
    fn test_apply_move_flips_turn_every_call() {
        let mut room = Room::new();
        room.apply_move(sq(6, 0), sq(4, 0));
        assert_eq!(room.turn(), Side::Black);
        // Another white move: no turn check, turn still flips.
        room.apply_move(sq(6, 1), sq(5, 1));
        assert_eq!(room.turn(), Side::White);
        // Moving from an empty square still counts.
        room.apply_move(sq(3, 3), sq(3, 4));
        assert_eq!(room.turn(), Side::Black);
    }

    #[test]
    fn test_snapshot_reflects_moves() {
        let mut room = Room::new();
        room.apply_move(sq(1, 4), sq(3, 4));
        let snapshot = room.snapshot();
        assert_eq!(snapshot.turn, Side::Black);
        assert_eq!(snapshot.board.get(sq(3, 4)), Some(Piece::black(PieceKind::Pawn)));
        assert_eq!(snapshot.players, vec![Side::White]);
    }
}
