//! Rooms and the room store for Chessroom.
//!
//! A room is one game: a board, whose turn it is, and which sides are
//! seated. The store keeps every live room under a short code and gives
//! each its own lock, so requests for different rooms never queue behind
//! each other.
//!
//! # Key types
//!
//! - [`Room`]: the state of one game
//! - [`RoomStore`]: creates, finds, and deletes rooms
//! - [`RoomHandle`]: a locked-access handle to one room
//! - [`CodeGenerator`]: where room codes come from
//! - [`StoreConfig`]: code length and allocation limits
//! - [`rules`]: the placeholder movement rules

mod codegen;
mod config;
mod error;
mod room;
pub mod rules;
mod store;

pub use codegen::{CODE_ALPHABET, CodeGenerator, RandomCodeGenerator};
pub use config::StoreConfig;
pub use error::RoomError;
pub use room::{MAX_PLAYERS, Room};
pub use store::{RoomHandle, RoomStore};
