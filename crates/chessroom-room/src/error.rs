//! Error types for the room layer.

use chessroom_protocol::RoomCode;

/// Errors that can occur during room store operations.
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    /// No live room has this code.
    #[error("room {0} not found")]
    NotFound(RoomCode),

    /// The generator kept producing codes that are already live.
    /// Either the code space is saturated or the generator is broken;
    /// in both cases the store can't allocate a room.
    #[error("no unique room code found after {attempts} attempts")]
    CodeSpaceExhausted { attempts: usize },
}
