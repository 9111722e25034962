//! In-memory interest store.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, EventId, UserId};
use crate::domain::interest::Interest;
use crate::ports::InterestStore;

/// In-memory interest registrations keyed by `(event_id, user_id)`.
#[derive(Debug, Default)]
pub struct InMemoryInterestStore {
    interests: RwLock<HashMap<(EventId, UserId), Interest>>,
}

impl InMemoryInterestStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InterestStore for InMemoryInterestStore {
    async fn get_interest(
        &self,
        event_id: EventId,
        user_id: &UserId,
    ) -> Result<Option<Interest>, DomainError> {
        Ok(self
            .interests
            .read()
            .expect("interest lock poisoned")
            .get(&(event_id, user_id.clone()))
            .cloned())
    }

    async fn insert_interest(&self, interest: &Interest) -> Result<(), DomainError> {
        let mut rows = self.interests.write().expect("interest lock poisoned");
        let key = (interest.event_id(), interest.user_id().clone());
        if rows.contains_key(&key) {
            return Err(DomainError::new(
                ErrorCode::AlreadyRegistered,
                format!(
                    "User {} is already registered for event {}",
                    interest.user_id(),
                    interest.event_id()
                ),
            ));
        }
        rows.insert(key, interest.clone());
        Ok(())
    }

    async fn update_interest(&self, interest: &Interest) -> Result<(), DomainError> {
        let mut rows = self.interests.write().expect("interest lock poisoned");
        let key = (interest.event_id(), interest.user_id().clone());
        if !rows.contains_key(&key) {
            return Err(DomainError::new(
                ErrorCode::NotRegistered,
                format!(
                    "User {} is not registered for event {}",
                    interest.user_id(),
                    interest.event_id()
                ),
            ));
        }
        rows.insert(key, interest.clone());
        Ok(())
    }

    async fn delete_interest(
        &self,
        event_id: EventId,
        user_id: &UserId,
    ) -> Result<bool, DomainError> {
        Ok(self
            .interests
            .write()
            .expect("interest lock poisoned")
            .remove(&(event_id, user_id.clone()))
            .is_some())
    }

    async fn list_for_event(&self, event_id: EventId) -> Result<Vec<Interest>, DomainError> {
        let mut rows: Vec<Interest> = self
            .interests
            .read()
            .expect("interest lock poisoned")
            .values()
            .filter(|i| i.event_id() == event_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.username().cmp(b.username()));
        Ok(rows)
    }
}
