//! Interest entity - a user's registered interest in an event.

use crate::domain::foundation::{EventId, UserId};
use serde::{Deserialize, Serialize};

/// One user's interest registration for one event.
///
/// # Invariants
///
/// - Unique per `(event_id, user_id)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interest {
    event_id: EventId,
    user_id: UserId,
    username: String,

    /// Whether the user also wants to connect with other attendees.
    wants_connection: bool,
}

impl Interest {
    /// Registers interest in an event. Connection preference starts off.
    pub fn register(event_id: EventId, user_id: UserId, username: impl Into<String>) -> Self {
        Self {
            event_id,
            user_id,
            username: username.into(),
            wants_connection: false,
        }
    }

    /// Reconstitutes an interest row from persistence.
    pub fn reconstitute(
        event_id: EventId,
        user_id: UserId,
        username: String,
        wants_connection: bool,
    ) -> Self {
        Self {
            event_id,
            user_id,
            username,
            wants_connection,
        }
    }

    /// Returns the event id.
    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    /// Returns the user id.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the user's display name.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the connection preference.
    pub fn wants_connection(&self) -> bool {
        self.wants_connection
    }

    /// Flips the connection preference and returns the new value.
    pub fn toggle_connection(&mut self) -> bool {
        self.wants_connection = !self.wants_connection;
        self.wants_connection
    }
}
