//! HTTP routes for session lifecycle endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    extend_session, join_session, leave_session, session_status, start_session, SessionHandlers,
};

/// Creates the session router, nested under `/api/events`.
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/:event_id/session", get(session_status))
        .route("/:event_id/session/start", post(start_session))
        .route("/:event_id/session/join", post(join_session))
        .route("/:event_id/session/leave", post(leave_session))
        .route("/:event_id/session/extend", post(extend_session))
        .with_state(handlers)
}
