//! HTTP adapters - REST API implementations.
//!
//! The chat front end forwards slash commands here; the acting user's id
//! arrives in the request payload, already authenticated by the platform.

mod error;
pub mod interest;
pub mod session;

pub use error::ErrorResponse;
pub use interest::{interest_routes, InterestHandlers};
pub use session::{session_routes, SessionHandlers};
