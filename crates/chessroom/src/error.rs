//! Error types for the Chessroom server.
//!
//! Two kinds of error live here:
//!
//! - [`ChessroomError`] wraps everything that can stop the server itself
//!   (bad configuration, a port that won't bind).
//! - [`ApiError`] is what a request handler returns. It knows which
//!   endpoint failed, because each endpoint reports failure in its own
//!   JSON shape, and turns itself into an HTTP response.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chessroom_protocol::{ErrorResponse, ProtocolError, StatusResponse};
use chessroom_room::RoomError;
use chessroom_session::SessionError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attribute on each variant generates the `From` impl, so
/// `?` converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum ChessroomError {
    /// Binding or serving the listener failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// An environment setting couldn't be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A wire value was rejected.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A session operation failed.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The room store failed.
    #[error(transparent)]
    Room(#[from] RoomError),
}

/// A failed API request.
///
/// The variant picks the response body shape the client expects for that
/// endpoint; the wrapped [`SessionError`] picks the status code.
#[derive(Debug)]
pub enum ApiError {
    /// `POST /join` failed: `{"status": "error", "message": ...}`.
    Join(SessionError),

    /// `GET /state` or `GET /moves` failed: `{"error": ...}`.
    Read(SessionError),

    /// `POST /move` failed: `{"status": "error"}`.
    Move(SessionError),

    /// `POST /create` failed: `{"error": ...}`.
    Create(SessionError),

    /// The request couldn't be decoded: `{"error": ...}` with 400.
    BadRequest(String),
}

impl ApiError {
    /// Status code for a session failure.
    fn status_for(err: &SessionError) -> StatusCode {
        match err {
            SessionError::RoomNotFound(_) => StatusCode::NOT_FOUND,
            SessionError::RoomFull(_) => StatusCode::BAD_REQUEST,
            SessionError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ProtocolError> for ApiError {
    fn from(err: ProtocolError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (err, body) = match self {
            ApiError::BadRequest(message) => {
                tracing::debug!(%message, "rejected malformed request");
                return (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
                    .into_response();
            }
            ApiError::Join(err) => {
                let body = Json(StatusResponse::error_with(err.to_string())).into_response();
                (err, body)
            }
            ApiError::Move(err) if !matches!(err, SessionError::Store(_)) => {
                (err, Json(StatusResponse::error()).into_response())
            }
            ApiError::Read(err) | ApiError::Create(err) | ApiError::Move(err) => {
                let body = Json(ErrorResponse::new(err.to_string())).into_response();
                (err, body)
            }
        };

        let status = Self::status_for(&err);
        if status.is_server_error() {
            tracing::error!(%status, error = %err, "request failed");
        } else {
            tracing::debug!(%status, room = ?err.room(), error = %err, "request rejected");
        }
        (status, body).into_response()
    }
}
