//! The session service: every room operation the API exposes.
//!
//! Each method is one atomic step against the [`RoomStore`]. Anything
//! that reads a room and then writes it (seating a player, applying a
//! move, unseating the last player and deleting the room) happens while
//! holding that room's lock, so two requests for the same room can never
//! both act on the same "before" state.
//!
//! # Vacant rooms
//!
//! Looking up a room and locking it are two steps. Between them, a
//! concurrent leave may empty the room and delete it from the store. A
//! room that is vacant once locked is therefore reported as not found,
//! exactly as if the lookup had missed. Since a live room always has at
//! least one seated player, this never hides a room that still exists.

use std::sync::Arc;

use chessroom_protocol::{RoomCode, RoomSnapshot, Side, Square};
use chessroom_room::{Room, RoomHandle, RoomStore};
use tokio::sync::OwnedMutexGuard;

use crate::SessionError;

/// Runs room operations against a shared [`RoomStore`].
///
/// Cheap to clone: it only holds an `Arc` to the store.
#[derive(Debug, Clone)]
pub struct SessionService {
    store: Arc<RoomStore>,
}

impl SessionService {
    /// Creates a service over `store`.
    pub fn new(store: Arc<RoomStore>) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<RoomStore> {
        &self.store
    }

    /// Number of live rooms.
    pub async fn room_count(&self) -> usize {
        self.store.len().await
    }

    /// Opens a new room with the caller seated as white and returns its code.
    ///
    /// # Errors
    /// [`SessionError::Store`] if the store can't allocate a code.
    pub async fn create_room(&self) -> Result<RoomCode, SessionError> {
        let code = self.store.create(Room::new()).await?;
        tracing::info!(room = %code, side = %Side::White, "player joined");
        Ok(code)
    }

    /// Seats a player in `code`: white if free, else black.
    ///
    /// # Errors
    /// - [`SessionError::RoomNotFound`]: no such room
    /// - [`SessionError::RoomFull`]: both sides taken
    pub async fn join_room(&self, code: &RoomCode) -> Result<Side, SessionError> {
        let (_, mut room) = self.lock_occupied(code).await?;

        match room.seat() {
            Some(side) => {
                tracing::info!(
                    room = %code,
                    %side,
                    players = room.players().len(),
                    "player joined"
                );
                Ok(side)
            }
            None => {
                tracing::warn!(room = %code, "join rejected, room is full");
                Err(SessionError::RoomFull(code.clone()))
            }
        }
    }

    /// Returns a copy of the room's board, turn, and players.
    ///
    /// # Errors
    /// [`SessionError::RoomNotFound`] if there is no such room.
    pub async fn get_state(&self, code: &RoomCode) -> Result<RoomSnapshot, SessionError> {
        let (_, room) = self.lock_occupied(code).await?;
        tracing::debug!(room = %code, turn = %room.turn(), "state read");
        Ok(room.snapshot())
    }

    /// Lists candidate destinations for the piece on `from`.
    ///
    /// Uses the placeholder rules in [`chessroom_room::rules`]; no
    /// ownership or turn check is made.
    ///
    /// # Errors
    /// [`SessionError::RoomNotFound`] if there is no such room.
    pub async fn get_moves(
        &self,
        code: &RoomCode,
        from: Square,
    ) -> Result<Vec<Square>, SessionError> {
        let (_, room) = self.lock_occupied(code).await?;
        let moves = room.candidate_moves(from);
        tracing::debug!(room = %code, %from, candidates = moves.len(), "moves listed");
        Ok(moves)
    }

    /// Moves whatever is on `from` to `to` and passes the turn.
    ///
    /// Applied unconditionally: no legality, ownership, or turn check.
    ///
    /// # Errors
    /// [`SessionError::RoomNotFound`] if there is no such room.
    pub async fn execute_move(
        &self,
        code: &RoomCode,
        from: Square,
        to: Square,
    ) -> Result<(), SessionError> {
        let (_, mut room) = self.lock_occupied(code).await?;
        room.apply_move(from, to);
        tracing::debug!(room = %code, %from, %to, turn = %room.turn(), "move applied");
        Ok(())
    }

    /// Unseats `side` from `code`, deleting the room if it is now empty.
    ///
    /// Never fails: an unknown room or a side that isn't seated is a
    /// no-op. Clients send this best-effort as they go away.
    pub async fn leave_room(&self, code: &RoomCode, side: Side) {
        let Ok((handle, mut room)) = self.lock_occupied(code).await else {
            tracing::debug!(room = %code, %side, "leave for unknown room ignored");
            return;
        };

        if !room.vacate(side) {
            tracing::debug!(room = %code, %side, "leave for unseated side ignored");
            return;
        }
        tracing::info!(
            room = %code,
            %side,
            players = room.players().len(),
            "player left"
        );

        if room.is_vacant() {
            // Still holding the room lock: nobody can seat a player in
            // between, and late arrivals will see a vacant room.
            self.store.delete_if_current(code, &handle).await;
        }
    }

    /// Looks up `code` and locks it, treating a vacant room as missing.
    async fn lock_occupied(
        &self,
        code: &RoomCode,
    ) -> Result<(RoomHandle, OwnedMutexGuard<Room>), SessionError> {
        let handle = self.store.get(code).await?;
        let room = Arc::clone(&handle).lock_owned().await;
        if room.is_vacant() {
            return Err(SessionError::RoomNotFound(code.clone()));
        }
        Ok((handle, room))
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! Unit tests for `SessionService`.
    //!
    //! Naming follows `test_{operation}_{scenario}_{expected}`. Stores use a
    //! fixed-code generator where a test needs to know the code up front.

    use chessroom_protocol::{Board, Piece, PieceKind};
    use chessroom_room::StoreConfig;

    use super::*;

    // -- Helpers ----------------------------------------------------------

    fn service() -> SessionService {
        SessionService::new(Arc::new(RoomStore::default()))
    }

    fn sq(row: i64, col: i64) -> Square {
        Square::new(row, col).unwrap()
    }

    // =====================================================================
    // create_room()
    // =====================================================================

    #[tokio::test]
    async fn test_create_room_seeds_white_creator() {
        let svc = service();

        let code = svc.create_room().await.unwrap();
        let state = svc.get_state(&code).await.unwrap();

        assert_eq!(state.players, vec![Side::White]);
        assert_eq!(state.turn, Side::White);
        assert_eq!(state.board, Board::starting());
    }

    #[tokio::test]
    async fn test_create_room_exhausted_store_is_fatal() {
        let store = RoomStore::with_generator(
            StoreConfig {
                max_code_attempts: 3,
                ..StoreConfig::default()
            },
            |_len: usize| RoomCode::new("ABCDE"),
        );
        let svc = SessionService::new(Arc::new(store));

        svc.create_room().await.unwrap();
        let result = svc.create_room().await;

        assert!(matches!(result, Err(SessionError::Store(_))));
    }

    // =====================================================================
    // join_room()
    // =====================================================================

    #[tokio::test]
    async fn test_join_room_fresh_room_gets_black_then_full() {
        let svc = service();
        let code = svc.create_room().await.unwrap();

        assert_eq!(svc.join_room(&code).await.unwrap(), Side::Black);
        assert!(matches!(
            svc.join_room(&code).await,
            Err(SessionError::RoomFull(_))
        ));
    }

    #[tokio::test]
    async fn test_join_room_prefers_white_when_vacated() {
        let svc = service();
        let code = svc.create_room().await.unwrap();
        svc.join_room(&code).await.unwrap();
        svc.leave_room(&code, Side::White).await;

        assert_eq!(svc.join_room(&code).await.unwrap(), Side::White);
        let state = svc.get_state(&code).await.unwrap();
        assert_eq!(state.players, vec![Side::Black, Side::White]);
    }

    #[tokio::test]
    async fn test_join_room_unknown_code_not_found() {
        let svc = service();
        let result = svc.join_room(&RoomCode::new("NOPE1")).await;
        assert!(matches!(result, Err(SessionError::RoomNotFound(_))));
    }

    // =====================================================================
    // get_moves()
    // =====================================================================

    #[tokio::test]
    async fn test_get_moves_white_and_black_directions() {
        let svc = service();
        let code = svc.create_room().await.unwrap();

        let white = svc.get_moves(&code, sq(6, 4)).await.unwrap();
        let black = svc.get_moves(&code, sq(1, 4)).await.unwrap();

        assert_eq!(white, vec![sq(5, 4), sq(4, 4)]);
        assert_eq!(black, vec![sq(2, 4), sq(3, 4)]);
    }

    #[tokio::test]
    async fn test_get_moves_ignores_turn() {
        let svc = service();
        let code = svc.create_room().await.unwrap();

        // White to move, black piece queried anyway.
        let moves = svc.get_moves(&code, sq(0, 1)).await.unwrap();
        assert_eq!(moves, vec![sq(1, 1), sq(2, 1)]);
    }

    #[tokio::test]
    async fn test_get_moves_unknown_room_not_found() {
        let svc = service();
        let result = svc.get_moves(&RoomCode::new("NOPE1"), sq(6, 0)).await;
        assert!(matches!(result, Err(SessionError::RoomNotFound(_))));
    }

    // =====================================================================
    // execute_move()
    // =====================================================================

    #[tokio::test]
    async fn test_execute_move_moves_piece_and_flips_turn() {
        let svc = service();
        let code = svc.create_room().await.unwrap();

        svc.execute_move(&code, sq(6, 0), sq(4, 0)).await.unwrap();

        let state = svc.get_state(&code).await.unwrap();
        assert_eq!(state.board.get(sq(4, 0)), Some(Piece::white(PieceKind::Pawn)));
        assert_eq!(state.board.get(sq(6, 0)), None);
        assert_eq!(state.turn, Side::Black);
    }

    #[tokio::test]
    async fn test_execute_move_turn_alternates_regardless_of_content() {
        let svc = service();
        let code = svc.create_room().await.unwrap();

        let mut expected = Side::White;
        for _ in 0..5 {
            // Same degenerate move every time; the turn still flips.
            svc.execute_move(&code, sq(7, 0), sq(7, 0)).await.unwrap();
            expected = expected.opponent();
            assert_eq!(svc.get_state(&code).await.unwrap().turn, expected);
        }
    }

    #[tokio::test]
    async fn test_execute_move_same_square_loses_piece() {
        let svc = service();
        let code = svc.create_room().await.unwrap();

        svc.execute_move(&code, sq(7, 4), sq(7, 4)).await.unwrap();

        let state = svc.get_state(&code).await.unwrap();
        assert_eq!(state.board.get(sq(7, 4)), None);
        assert_eq!(state.board.count(Side::White), 15);
    }

    #[tokio::test]
    async fn test_execute_move_unknown_room_not_found() {
        let svc = service();
        let result = svc
            .execute_move(&RoomCode::new("NOPE1"), sq(6, 0), sq(4, 0))
            .await;
        assert!(matches!(result, Err(SessionError::RoomNotFound(_))));
    }

    // =====================================================================
    // leave_room()
    // =====================================================================

    #[tokio::test]
    async fn test_leave_room_last_player_deletes_room() {
        let svc = service();
        let code = svc.create_room().await.unwrap();

        svc.leave_room(&code, Side::White).await;

        assert!(matches!(
            svc.get_state(&code).await,
            Err(SessionError::RoomNotFound(_))
        ));
        assert_eq!(svc.room_count().await, 0);
    }

    #[tokio::test]
    async fn test_leave_room_one_of_two_keeps_room() {
        let svc = service();
        let code = svc.create_room().await.unwrap();
        svc.join_room(&code).await.unwrap();

        svc.leave_room(&code, Side::Black).await;

        let state = svc.get_state(&code).await.unwrap();
        assert_eq!(state.players, vec![Side::White]);
    }

    #[tokio::test]
    async fn test_leave_room_unseated_side_is_noop() {
        let svc = service();
        let code = svc.create_room().await.unwrap();

        svc.leave_room(&code, Side::Black).await;

        let state = svc.get_state(&code).await.unwrap();
        assert_eq!(state.players, vec![Side::White]);
    }

    #[tokio::test]
    async fn test_leave_room_unknown_room_leaves_others_alone() {
        let svc = service();
        let code = svc.create_room().await.unwrap();

        svc.leave_room(&RoomCode::new("NOPE1"), Side::White).await;

        assert_eq!(svc.room_count().await, 1);
        assert_eq!(svc.get_state(&code).await.unwrap().players, vec![Side::White]);
    }

    #[tokio::test]
    async fn test_stale_handle_after_delete_reports_not_found() {
        let svc = service();
        let code = svc.create_room().await.unwrap();
        let stale = svc.store().get(&code).await.unwrap();

        svc.leave_room(&code, Side::White).await;

        // Someone who looked the room up before the delete sees it vacant.
        assert!(stale.lock().await.is_vacant());
        assert!(matches!(
            svc.join_room(&code).await,
            Err(SessionError::RoomNotFound(_))
        ));
    }
}
