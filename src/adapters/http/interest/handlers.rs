//! HTTP handlers for interest registry endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{error_response, ErrorResponse};
use crate::application::handlers::interest::{
    ListInterestedHandler, ListInterestedQuery, RegisterInterestCommand, RegisterInterestHandler,
    ToggleConnectionCommand, ToggleConnectionHandler, WithdrawInterestCommand,
    WithdrawInterestHandler,
};
use crate::domain::foundation::{EventId, UserId};
use crate::domain::interest::InterestError;

use super::dto::{
    InterestResponse, InterestRosterResponse, RegisterInterestRequest, WithdrawInterestRequest,
};

/// Shared state for the interest endpoints.
#[derive(Clone)]
pub struct InterestHandlers {
    register_handler: Arc<RegisterInterestHandler>,
    toggle_handler: Arc<ToggleConnectionHandler>,
    withdraw_handler: Arc<WithdrawInterestHandler>,
    list_handler: Arc<ListInterestedHandler>,
}

impl InterestHandlers {
    pub fn new(
        register_handler: Arc<RegisterInterestHandler>,
        toggle_handler: Arc<ToggleConnectionHandler>,
        withdraw_handler: Arc<WithdrawInterestHandler>,
        list_handler: Arc<ListInterestedHandler>,
    ) -> Self {
        Self {
            register_handler,
            toggle_handler,
            withdraw_handler,
            list_handler,
        }
    }
}

/// POST /api/events/:event_id/interest
pub async fn register_interest(
    State(handlers): State<InterestHandlers>,
    Path(event_id): Path<i64>,
    Json(req): Json<RegisterInterestRequest>,
) -> Response {
    let actor_id = match parse_user_id(&req.user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = RegisterInterestCommand {
        event_id: EventId::new(event_id),
        actor_id,
        username: req.username,
    };

    match handlers.register_handler.handle(cmd).await {
        Ok(interest) => {
            let response: InterestResponse = interest.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_interest_error(e),
    }
}

/// POST /api/events/:event_id/interest/toggle
pub async fn toggle_connection(
    State(handlers): State<InterestHandlers>,
    Path(event_id): Path<i64>,
    Json(req): Json<WithdrawInterestRequest>,
) -> Response {
    let actor_id = match parse_user_id(&req.user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = ToggleConnectionCommand {
        event_id: EventId::new(event_id),
        actor_id,
    };

    match handlers.toggle_handler.handle(cmd).await {
        Ok(interest) => {
            let response: InterestResponse = interest.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_interest_error(e),
    }
}

/// DELETE /api/events/:event_id/interest
pub async fn withdraw_interest(
    State(handlers): State<InterestHandlers>,
    Path(event_id): Path<i64>,
    Json(req): Json<WithdrawInterestRequest>,
) -> Response {
    let actor_id = match parse_user_id(&req.user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = WithdrawInterestCommand {
        event_id: EventId::new(event_id),
        actor_id,
    };

    match handlers.withdraw_handler.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_interest_error(e),
    }
}

/// GET /api/events/:event_id/interest
pub async fn list_interested(
    State(handlers): State<InterestHandlers>,
    Path(event_id): Path<i64>,
) -> Response {
    let query = ListInterestedQuery {
        event_id: EventId::new(event_id),
    };

    match handlers.list_handler.handle(query).await {
        Ok(roster) => {
            let response: InterestRosterResponse = roster.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_interest_error(e),
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

fn handle_interest_error(error: InterestError) -> Response {
    error_response(error.code(), error.message())
}
