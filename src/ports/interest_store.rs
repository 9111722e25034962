//! Interest store port.

use crate::domain::foundation::{DomainError, EventId, UserId};
use crate::domain::interest::Interest;
use async_trait::async_trait;

/// Durable interest registrations, unique per `(event_id, user_id)`.
#[async_trait]
pub trait InterestStore: Send + Sync {
    /// Find a user's registration for an event.
    async fn get_interest(
        &self,
        event_id: EventId,
        user_id: &UserId,
    ) -> Result<Option<Interest>, DomainError>;

    /// Insert a new registration.
    ///
    /// # Errors
    ///
    /// - `AlreadyRegistered` if a row already exists for this pair
    async fn insert_interest(&self, interest: &Interest) -> Result<(), DomainError>;

    /// Update an existing registration (connection preference).
    ///
    /// # Errors
    ///
    /// - `NotRegistered` if no row exists for this pair
    async fn update_interest(&self, interest: &Interest) -> Result<(), DomainError>;

    /// Delete a registration.
    ///
    /// Returns `false` if no row existed.
    async fn delete_interest(
        &self,
        event_id: EventId,
        user_id: &UserId,
    ) -> Result<bool, DomainError>;

    /// List all registrations for an event, ordered by username.
    async fn list_for_event(&self, event_id: EventId) -> Result<Vec<Interest>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn interest_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn InterestStore) {}
    }
}
