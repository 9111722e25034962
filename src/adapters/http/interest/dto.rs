//! HTTP DTOs for interest registry endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::interest::InterestRoster;
use crate::domain::interest::Interest;

/// Request to register interest in an event.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterInterestRequest {
    pub user_id: String,
    pub username: String,
}

/// Request to withdraw interest (also used for toggling).
#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawInterestRequest {
    pub user_id: String,
}

/// One interest registration.
#[derive(Debug, Clone, Serialize)]
pub struct InterestResponse {
    pub user_id: String,
    pub username: String,
    pub wants_connection: bool,
}

impl From<Interest> for InterestResponse {
    fn from(interest: Interest) -> Self {
        Self {
            user_id: interest.user_id().to_string(),
            username: interest.username().to_string(),
            wants_connection: interest.wants_connection(),
        }
    }
}

/// Everyone registered for an event.
#[derive(Debug, Clone, Serialize)]
pub struct InterestRosterResponse {
    pub description: String,
    pub open_to_connect: Vec<String>,
    pub attending_only: Vec<String>,
    pub total: usize,
}

impl From<InterestRoster> for InterestRosterResponse {
    fn from(roster: InterestRoster) -> Self {
        Self {
            description: roster.description,
            open_to_connect: roster.open_to_connect,
            attending_only: roster.attending_only,
            total: roster.total,
        }
    }
}
