//! Domain layer - aggregates, value objects, and domain errors.

pub mod event;
pub mod foundation;
pub mod interest;
pub mod session;
