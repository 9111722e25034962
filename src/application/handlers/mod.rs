//! Command handlers, one per exposed operation.

pub mod interest;
pub mod session;
