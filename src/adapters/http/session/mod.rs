//! HTTP adapter for session lifecycle endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ExtendSessionRequest, ExtendSessionResponse, JoinSessionRequest, JoinSessionResponse,
    LeaveSessionRequest, LeaveSessionResponse, ParticipantResponse, SessionResponse,
    SessionStatusResponse, StartSessionRequest,
};
pub use handlers::SessionHandlers;
pub use routes::session_routes;
