//! Request and response bodies for the HTTP API.
//!
//! Field names here are the JSON keys the browser client reads and writes,
//! so renaming a field is a breaking protocol change.

use serde::{Deserialize, Serialize};

use crate::{Board, RoomCode, Side, Square};

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// `?room=` query used by `/join` and `/state`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomQuery {
    pub room: RoomCode,
}

/// `?room=&row=&col=` query used by `/moves`.
///
/// Coordinates arrive as plain integers and are turned into a [`Square`]
/// by the handler, so an off-board square is reported as a client error
/// rather than a deserialization failure with an opaque message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovesQuery {
    pub room: RoomCode,
    pub row: i64,
    pub col: i64,
}

/// `?room=&side=` query used by `/leave`.
///
/// Both fields are optional: leave is sent best-effort from a closing
/// browser tab and must never fail, whatever it carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveQuery {
    pub room: Option<RoomCode>,
    pub side: Option<String>,
}

/// JSON body of `POST /move`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub room: RoomCode,
    pub from: Square,
    pub to: Square,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Body of a successful `POST /create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRoomResponse {
    pub room: RoomCode,
}

/// The `status` field used by the join, move, and leave responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
    Ok,
}

/// Body of `/join`, `/move` and `/leave` responses.
///
/// `side` is present on a successful join, `message` on a failed one;
/// both are omitted otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self {
            status: Status::Success,
            side: None,
            message: None,
        }
    }

    pub fn joined(side: Side) -> Self {
        Self {
            side: Some(side),
            ..Self::success()
        }
    }

    pub fn ok() -> Self {
        Self {
            status: Status::Ok,
            side: None,
            message: None,
        }
    }

    pub fn error() -> Self {
        Self {
            status: Status::Error,
            side: None,
            message: None,
        }
    }

    pub fn error_with(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::error()
        }
    }
}

/// A full copy of a room's state, as returned by `GET /state`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub board: Board,
    pub turn: Side,
    pub players: Vec<Side>,
}

/// Body of `GET /moves`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovesResponse {
    pub moves: Vec<Square>,
}

/// Body of `/state`, `/moves` and malformed-request errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
