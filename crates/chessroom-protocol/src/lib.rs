//! Wire protocol for Chessroom.
//!
//! This crate defines the values every other layer agrees on:
//!
//! - **Types** ([`Side`], [`Piece`], [`Square`], [`RoomCode`]): the
//!   small building blocks of a room.
//! - **Board** ([`Board`]): the 8×8 grid and its glyph-based JSON form.
//! - **Wire** ([`MoveRequest`], [`StatusResponse`], [`RoomSnapshot`], ...):
//!   the request and response bodies of the HTTP API.
//! - **Errors** ([`ProtocolError`]): what can go wrong turning wire
//!   values into our types.
//!
//! # Architecture
//!
//! ```text
//! HTTP (chessroom) → Session (operations) → Room (state + store)
//!          \______________ protocol (shared types) _____________/
//! ```

mod board;
mod error;
mod types;
mod wire;

pub use board::{Board, Cell};
pub use error::ProtocolError;
pub use types::{BOARD_SIZE, Piece, PieceKind, RoomCode, Side, Square};
pub use wire::{
    CreateRoomResponse, ErrorResponse, LeaveQuery, MoveRequest, MovesQuery, MovesResponse,
    RoomQuery, RoomSnapshot, Status, StatusResponse,
};
