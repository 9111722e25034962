//! Application layer - the session lifecycle engine and command handlers.

pub mod engine;
pub mod handlers;
