//! # Chessroom
//!
//! HTTP backend for two-player board games played in short-lived rooms.
//!
//! A player creates a room and gets a five-character code; a second
//! player joins with the code. Both poll the room's state, ask for move
//! hints, and post moves. When the last player leaves, the room is gone.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chessroom::prelude::*;
//!
//! # async fn run() -> Result<(), ChessroomError> {
//! let server = ChessroomServer::builder()
//!     .config(ServerConfig::from_env()?)
//!     .build()
//!     .await?;
//! server.run().await
//! # }
//! ```

mod config;
mod error;
mod handler;
mod server;

pub use config::{BIND_ENV, CODE_LENGTH_ENV, MAX_CODE_ATTEMPTS_ENV, ServerConfig};
pub use error::{ApiError, ChessroomError};
pub use server::{ChessroomServer, ChessroomServerBuilder};

/// Everything needed to run a server or drive the service directly.
pub mod prelude {
    pub use crate::{ChessroomError, ChessroomServer, ChessroomServerBuilder, ServerConfig};
    pub use chessroom_protocol::{Board, Piece, PieceKind, RoomCode, RoomSnapshot, Side, Square};
    pub use chessroom_room::{CodeGenerator, RoomStore, StoreConfig};
    pub use chessroom_session::{SessionError, SessionService};
}
