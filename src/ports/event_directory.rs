//! Event directory port.
//!
//! The directory owns static event metadata (organizer, description). The
//! engine only reads it for authorization checks and notification text.

use crate::domain::event::EventRecord;
use crate::domain::foundation::{DomainError, EventId};
use async_trait::async_trait;

/// Lookup of static event metadata by event id.
#[async_trait]
pub trait EventDirectory: Send + Sync {
    /// Find an event by its id.
    ///
    /// Returns `None` if the event does not exist.
    async fn get_event(&self, event_id: EventId) -> Result<Option<EventRecord>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn event_directory_is_object_safe() {
        fn _accepts_dyn(_directory: &dyn EventDirectory) {}
    }
}
