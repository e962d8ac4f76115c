//! Error types for the session layer.

use chessroom_protocol::RoomCode;
use chessroom_room::RoomError;

/// Errors a session operation can return.
///
/// The first two are ordinary outcomes a client should expect and
/// handle. `Store` is the only fatal one: the store couldn't allocate a
/// room.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// No live room has this code (or it was deleted mid-request).
    #[error("Room not found")]
    RoomNotFound(RoomCode),

    /// Both sides are already seated.
    #[error("Room is full")]
    RoomFull(RoomCode),

    /// The room store failed.
    #[error(transparent)]
    Store(RoomError),
}

impl SessionError {
    /// The room code this error is about, when there is one.
    pub fn room(&self) -> Option<&RoomCode> {
        match self {
            Self::RoomNotFound(code) | Self::RoomFull(code) => Some(code),
            Self::Store(_) => None,
        }
    }
}

/// Lookups that miss become `RoomNotFound`; anything else is a store
/// failure.
impl From<RoomError> for SessionError {
    fn from(err: RoomError) -> Self {
        match err {
            RoomError::NotFound(code) => Self::RoomNotFound(code),
            other => Self::Store(other),
        }
    }
}
