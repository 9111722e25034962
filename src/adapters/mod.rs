//! Adapters - implementations of the ports.
//!
//! - `clock` - system time source
//! - `memory` - in-memory adapters for tests and development
//! - `postgres` - sqlx-backed persistent adapters
//! - `webhook` - chat delivery over outbound webhooks
//! - `http` - axum binding exposing the engine over HTTP

mod clock;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod webhook;

pub use clock::SystemClock;
