//! Session module - the live session aggregate and its participants.

mod errors;
mod participant;
mod session;

pub use errors::SessionError;
pub use participant::Participant;
pub use session::LiveSession;
