//! Event module - static event metadata owned by the directory collaborator.

mod record;

pub use record::EventRecord;
