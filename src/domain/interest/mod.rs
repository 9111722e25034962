//! Interest module - per-event interest registrations.

mod errors;
mod interest;

pub use errors::InterestError;
pub use interest::Interest;
