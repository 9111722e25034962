//! HTTP DTOs for session lifecycle endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent
//! evolution.

use serde::{Deserialize, Serialize};

use crate::application::handlers::session::{
    ExtendSessionResult, JoinSessionResult, LeaveSessionResult, SessionStatusView,
    StartSessionResult,
};
use crate::domain::session::Participant;

/// Request to start a session for an event.
#[derive(Debug, Clone, Deserialize)]
pub struct StartSessionRequest {
    pub user_id: String,
    pub duration_minutes: i64,
}

/// Request to join a running session.
#[derive(Debug, Clone, Deserialize)]
pub struct JoinSessionRequest {
    pub user_id: String,
    pub username: String,
    #[serde(default)]
    pub duration_minutes: Option<i64>,
}

/// Request to leave a session.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveSessionRequest {
    pub user_id: String,
}

/// Request to extend a running session.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtendSessionRequest {
    pub user_id: String,
    pub additional_minutes: i64,
}

/// Session state returned after a start.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub event_id: i64,
    pub start_time: String,
    pub end_time: String,
    pub is_active: bool,
}

impl From<StartSessionResult> for SessionResponse {
    fn from(result: StartSessionResult) -> Self {
        Self {
            event_id: result.session.event_id().as_i64(),
            start_time: result.session.start_time().as_datetime().to_rfc3339(),
            end_time: result.session.end_time().as_datetime().to_rfc3339(),
            is_active: result.session.is_active(),
        }
    }
}

/// Participant details in status responses.
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantResponse {
    pub user_id: String,
    pub username: String,
    pub join_time: String,
    pub planned_minutes: i64,
}

impl From<Participant> for ParticipantResponse {
    fn from(p: Participant) -> Self {
        Self {
            user_id: p.user_id().to_string(),
            username: p.username().to_string(),
            join_time: p.join_time().as_datetime().to_rfc3339(),
            planned_minutes: p.planned_minutes(),
        }
    }
}

/// Response after joining a session.
#[derive(Debug, Clone, Serialize)]
pub struct JoinSessionResponse {
    pub planned_minutes: i64,
}

impl From<JoinSessionResult> for JoinSessionResponse {
    fn from(result: JoinSessionResult) -> Self {
        Self {
            planned_minutes: result.participant.planned_minutes(),
        }
    }
}

/// Response after leaving a session.
#[derive(Debug, Clone, Serialize)]
pub struct LeaveSessionResponse {
    pub realized_minutes: i64,
}

impl From<LeaveSessionResult> for LeaveSessionResponse {
    fn from(result: LeaveSessionResult) -> Self {
        Self {
            realized_minutes: result.realized_minutes,
        }
    }
}

/// Response after extending a session.
#[derive(Debug, Clone, Serialize)]
pub struct ExtendSessionResponse {
    pub new_end_time: String,
}

impl From<ExtendSessionResult> for ExtendSessionResponse {
    fn from(result: ExtendSessionResult) -> Self {
        Self {
            new_end_time: result.new_end_time.as_datetime().to_rfc3339(),
        }
    }
}

/// Snapshot of a running session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatusResponse {
    pub description: String,
    pub end_time: String,
    pub remaining_minutes: i64,
    pub participant_count: usize,
    pub participants: Vec<ParticipantResponse>,
}

impl From<SessionStatusView> for SessionStatusResponse {
    fn from(view: SessionStatusView) -> Self {
        Self {
            description: view.description,
            end_time: view.end_time.as_datetime().to_rfc3339(),
            remaining_minutes: view.remaining_minutes,
            participant_count: view.participant_count,
            participants: view.participants.into_iter().map(Into::into).collect(),
        }
    }
}
