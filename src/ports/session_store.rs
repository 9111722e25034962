//! Session store port.
//!
//! Defines the persistence contract for session and participant rows.
//! The store is a passive surface: all lifecycle transitions are decided
//! by the engine, which re-reads current state before every decision.

use crate::domain::foundation::{DomainError, EventId, Timestamp, UserId};
use crate::domain::session::{LiveSession, Participant};
use async_trait::async_trait;

/// Durable records for live sessions and their participants.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Find the session row for an event.
    ///
    /// Returns `None` if no session has ever run for this event.
    async fn get_session(&self, event_id: EventId) -> Result<Option<LiveSession>, DomainError>;

    /// Upsert the session row for an event.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn put_session(&self, session: &LiveSession) -> Result<(), DomainError>;

    /// List participants still in the session (no leave time).
    async fn list_active_participants(
        &self,
        event_id: EventId,
    ) -> Result<Vec<Participant>, DomainError>;

    /// Find a user's open participant row, if any.
    async fn find_open_participant(
        &self,
        event_id: EventId,
        user_id: &UserId,
    ) -> Result<Option<Participant>, DomainError>;

    /// Insert a new participant row.
    async fn insert_participant(&self, participant: &Participant) -> Result<(), DomainError>;

    /// Close a user's open participant row.
    ///
    /// Returns `false` if the user has no open row.
    async fn set_participant_left(
        &self,
        event_id: EventId,
        user_id: &UserId,
        leave_time: Timestamp,
    ) -> Result<bool, DomainError>;

    /// Close every open participant row for an event.
    ///
    /// Used by expiry reconciliation. Returns the number of rows closed.
    async fn bulk_close_participants(
        &self,
        event_id: EventId,
        leave_time: Timestamp,
    ) -> Result<u64, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn session_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn SessionStore) {}
    }
}
