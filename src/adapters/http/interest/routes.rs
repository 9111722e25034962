//! HTTP routes for interest registry endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    list_interested, register_interest, toggle_connection, withdraw_interest, InterestHandlers,
};

/// Creates the interest router, nested under `/api/events`.
pub fn interest_routes(handlers: InterestHandlers) -> Router {
    Router::new()
        .route(
            "/:event_id/interest",
            get(list_interested)
                .post(register_interest)
                .delete(withdraw_interest),
        )
        .route("/:event_id/interest/toggle", post(toggle_connection))
        .with_state(handlers)
}
