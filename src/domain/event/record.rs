//! Static event metadata returned by the event directory.

use crate::domain::foundation::{EventId, UserId};
use serde::{Deserialize, Serialize};

/// Static event metadata, looked up by id from the event directory.
///
/// The engine only consults the organizer for authorization and passes the
/// description through into notification text; everything else about the
/// event lives in the directory collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    event_id: EventId,
    organizer_id: UserId,
    organizer_name: String,
    description: String,
}

impl EventRecord {
    /// Creates an event record.
    pub fn new(
        event_id: EventId,
        organizer_id: UserId,
        organizer_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            event_id,
            organizer_id,
            organizer_name: organizer_name.into(),
            description: description.into(),
        }
    }

    /// Returns the event id.
    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    /// Returns the organizer's user id.
    pub fn organizer_id(&self) -> &UserId {
        &self.organizer_id
    }

    /// Returns the organizer's display name.
    pub fn organizer_name(&self) -> &str {
        &self.organizer_name
    }

    /// Returns the event description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Checks whether the given user organizes this event.
    pub fn is_organizer(&self, user_id: &UserId) -> bool {
        &self.organizer_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organizer_check_matches_only_the_organizer() {
        let organizer = UserId::new("org-1").unwrap();
        let record = EventRecord::new(EventId::new(1), organizer.clone(), "Sam", "Board games");

        assert!(record.is_organizer(&organizer));
        assert!(!record.is_organizer(&UserId::new("someone-else").unwrap()));
    }
}
