//! Room session operations for Chessroom.
//!
//! This crate is the operations layer between the HTTP API and the room
//! store. Each public method on [`SessionService`] is one thing a client
//! can ask for:
//!
//! 1. **Create**: open a room, seated as white
//! 2. **Join**: take the free side of an existing room
//! 3. **State**: read the board, turn, and seated sides
//! 4. **Moves**: list candidate destinations for a square
//! 5. **Move**: apply a move and pass the turn
//! 6. **Leave**: give up a side; the last one out deletes the room
//!
//! # How it fits in the stack
//!
//! ```text
//! HTTP layer (above)  ← decodes requests, maps SessionError to statuses
//!     ↕
//! Session layer (this crate)  ← one atomic operation per request
//!     ↕
//! Room layer (below)  ← Room state, RoomStore with per-room locks
//! ```

mod error;
mod service;

pub use error::SessionError;
pub use service::SessionService;
