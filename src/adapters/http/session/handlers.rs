//! HTTP handlers for session lifecycle endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{error_response, ErrorResponse};
use crate::application::handlers::session::{
    ExtendSessionCommand, ExtendSessionHandler, JoinSessionCommand, JoinSessionHandler,
    LeaveSessionCommand, LeaveSessionHandler, SessionStatusHandler, SessionStatusQuery,
    StartSessionCommand, StartSessionHandler,
};
use crate::domain::foundation::{EventId, UserId};
use crate::domain::session::SessionError;

use super::dto::{
    ExtendSessionRequest, ExtendSessionResponse, JoinSessionRequest, JoinSessionResponse,
    LeaveSessionRequest, LeaveSessionResponse, SessionResponse, SessionStatusResponse,
    StartSessionRequest,
};

/// Shared state for the session endpoints.
#[derive(Clone)]
pub struct SessionHandlers {
    start_handler: Arc<StartSessionHandler>,
    join_handler: Arc<JoinSessionHandler>,
    leave_handler: Arc<LeaveSessionHandler>,
    extend_handler: Arc<ExtendSessionHandler>,
    status_handler: Arc<SessionStatusHandler>,
}

impl SessionHandlers {
    pub fn new(
        start_handler: Arc<StartSessionHandler>,
        join_handler: Arc<JoinSessionHandler>,
        leave_handler: Arc<LeaveSessionHandler>,
        extend_handler: Arc<ExtendSessionHandler>,
        status_handler: Arc<SessionStatusHandler>,
    ) -> Self {
        Self {
            start_handler,
            join_handler,
            leave_handler,
            extend_handler,
            status_handler,
        }
    }
}

/// POST /api/events/:event_id/session/start
pub async fn start_session(
    State(handlers): State<SessionHandlers>,
    Path(event_id): Path<i64>,
    Json(req): Json<StartSessionRequest>,
) -> Response {
    let actor_id = match parse_user_id(&req.user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = StartSessionCommand {
        event_id: EventId::new(event_id),
        actor_id,
        duration_minutes: req.duration_minutes,
    };

    match handlers.start_handler.handle(cmd).await {
        Ok(result) => {
            let response: SessionResponse = result.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// POST /api/events/:event_id/session/join
pub async fn join_session(
    State(handlers): State<SessionHandlers>,
    Path(event_id): Path<i64>,
    Json(req): Json<JoinSessionRequest>,
) -> Response {
    let actor_id = match parse_user_id(&req.user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = JoinSessionCommand {
        event_id: EventId::new(event_id),
        actor_id,
        username: req.username,
        requested_minutes: req.duration_minutes,
    };

    match handlers.join_handler.handle(cmd).await {
        Ok(result) => {
            let response: JoinSessionResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// POST /api/events/:event_id/session/leave
pub async fn leave_session(
    State(handlers): State<SessionHandlers>,
    Path(event_id): Path<i64>,
    Json(req): Json<LeaveSessionRequest>,
) -> Response {
    let actor_id = match parse_user_id(&req.user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = LeaveSessionCommand {
        event_id: EventId::new(event_id),
        actor_id,
    };

    match handlers.leave_handler.handle(cmd).await {
        Ok(result) => {
            let response: LeaveSessionResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// POST /api/events/:event_id/session/extend
pub async fn extend_session(
    State(handlers): State<SessionHandlers>,
    Path(event_id): Path<i64>,
    Json(req): Json<ExtendSessionRequest>,
) -> Response {
    let actor_id = match parse_user_id(&req.user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = ExtendSessionCommand {
        event_id: EventId::new(event_id),
        actor_id,
        additional_minutes: req.additional_minutes,
    };

    match handlers.extend_handler.handle(cmd).await {
        Ok(result) => {
            let response: ExtendSessionResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// GET /api/events/:event_id/session
pub async fn session_status(
    State(handlers): State<SessionHandlers>,
    Path(event_id): Path<i64>,
) -> Response {
    let query = SessionStatusQuery {
        event_id: EventId::new(event_id),
    };

    match handlers.status_handler.handle(query).await {
        Ok(view) => {
            let response: SessionStatusResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

fn parse_user_id(raw: &str) -> Result<UserId, Response> {
    UserId::new(raw).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(e.to_string())),
        )
            .into_response()
    })
}

fn handle_session_error(error: SessionError) -> Response {
    error_response(error.code(), error.message())
}
