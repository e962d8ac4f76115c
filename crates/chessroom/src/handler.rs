//! HTTP handlers: one per API route.
//!
//! Each handler decodes its request, runs exactly one
//! [`SessionService`](chessroom_session::SessionService) operation, and
//! encodes the result. Decoding failures come back as 400s through
//! [`ApiError::BadRequest`]; extractor rejections are taken as `Result`s
//! so they go through the same path instead of axum's plain-text bodies.
//!
//! Routes:
//!
//! | Method | Path      | Operation   |
//! |--------|-----------|-------------|
//! | GET    | `/health` | liveness    |
//! | POST   | `/create` | create room |
//! | POST   | `/join`   | join room   |
//! | GET    | `/state`  | room state  |
//! | GET    | `/moves`  | move hints  |
//! | POST   | `/move`   | apply move  |
//! | POST   | `/leave`  | leave room  |

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chessroom_protocol::{
    CreateRoomResponse, LeaveQuery, MoveRequest, MovesQuery, MovesResponse, RoomQuery,
    RoomSnapshot, Side, Square, StatusResponse,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::ApiError;
use crate::server::ServerState;

/// Builds the API router over `state`.
///
/// CORS is wide open: the browser client is served from a different
/// origin and sends its leave notification with `mode: "no-cors"`.
pub(crate) fn router(state: ServerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/create", post(create_room))
        .route("/join", post(join_room))
        .route("/state", get(get_state))
        .route("/moves", get(get_moves))
        .route("/move", post(execute_move))
        .route("/leave", post(leave_room))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint to verify API status.
async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "Healthy!")
}

async fn create_room(
    State(state): State<ServerState>,
) -> Result<Json<CreateRoomResponse>, ApiError> {
    let room = state.sessions.create_room().await.map_err(ApiError::Create)?;
    Ok(Json(CreateRoomResponse { room }))
}

async fn join_room(
    State(state): State<ServerState>,
    query: Result<Query<RoomQuery>, QueryRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let Query(RoomQuery { room }) = query?;
    let side = state.sessions.join_room(&room).await.map_err(ApiError::Join)?;
    Ok(Json(StatusResponse::joined(side)))
}

async fn get_state(
    State(state): State<ServerState>,
    query: Result<Query<RoomQuery>, QueryRejection>,
) -> Result<Json<RoomSnapshot>, ApiError> {
    let Query(RoomQuery { room }) = query?;
    let snapshot = state.sessions.get_state(&room).await.map_err(ApiError::Read)?;
    Ok(Json(snapshot))
}

async fn get_moves(
    State(state): State<ServerState>,
    query: Result<Query<MovesQuery>, QueryRejection>,
) -> Result<Json<MovesResponse>, ApiError> {
    let Query(MovesQuery { room, row, col }) = query?;
    let from = Square::new(row, col)?;
    let moves = state
        .sessions
        .get_moves(&room, from)
        .await
        .map_err(ApiError::Read)?;
    Ok(Json(MovesResponse { moves }))
}

async fn execute_move(
    State(state): State<ServerState>,
    body: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let Json(MoveRequest { room, from, to }) = body?;
    state
        .sessions
        .execute_move(&room, from, to)
        .await
        .map_err(ApiError::Move)?;
    Ok(Json(StatusResponse::success()))
}

/// Always answers `{"status": "ok"}`, whatever the query holds.
async fn leave_room(
    State(state): State<ServerState>,
    query: Result<Query<LeaveQuery>, QueryRejection>,
) -> Json<StatusResponse> {
    let LeaveQuery { room, side } = query.map(|Query(q)| q).unwrap_or_default();

    let side = side.as_deref().map(str::parse::<Side>);
    match (room, side) {
        (Some(room), Some(Ok(side))) => state.sessions.leave_room(&room, side).await,
        (room, side) => {
            tracing::debug!(?room, ?side, "leave without a usable room and side ignored");
        }
    }

    Json(StatusResponse::ok())
}
