//! HTTP adapter for interest registry endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    InterestResponse, InterestRosterResponse, RegisterInterestRequest, WithdrawInterestRequest,
};
pub use handlers::InterestHandlers;
pub use routes::interest_routes;
