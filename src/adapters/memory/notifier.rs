//! Recording notifier for tests.

use std::collections::HashSet;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventId, UserId};
use crate::ports::Notifier;

/// Notifier that records every delivery instead of sending it.
///
/// Individual users can be marked as unreachable to exercise the
/// best-effort delivery paths.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    broadcasts: RwLock<Vec<(EventId, String)>>,
    direct_messages: RwLock<Vec<(UserId, String)>>,
    unreachable: RwLock<HashSet<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All broadcasts recorded so far.
    pub fn broadcasts(&self) -> Vec<(EventId, String)> {
        self.broadcasts.read().expect("notifier lock poisoned").clone()
    }

    /// All direct messages recorded so far.
    pub fn direct_messages(&self) -> Vec<(UserId, String)> {
        self.direct_messages
            .read()
            .expect("notifier lock poisoned")
            .clone()
    }

    /// Make every direct message to this user fail.
    pub fn fail_direct_messages_to(&self, user_id: &str) {
        self.unreachable
            .write()
            .expect("notifier lock poisoned")
            .insert(user_id.to_string());
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn broadcast(&self, event_id: EventId, text: &str) -> Result<(), DomainError> {
        self.broadcasts
            .write()
            .expect("notifier lock poisoned")
            .push((event_id, text.to_string()));
        Ok(())
    }

    async fn direct_message(&self, user_id: &UserId, text: &str) -> Result<(), DomainError> {
        if self
            .unreachable
            .read()
            .expect("notifier lock poisoned")
            .contains(user_id.as_str())
        {
            return Err(DomainError::storage(format!(
                "user {} is unreachable",
                user_id
            )));
        }
        self.direct_messages
            .write()
            .expect("notifier lock poisoned")
            .push((user_id.clone(), text.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    #[tokio::test]
    async fn records_deliveries_in_order() {
        let notifier = RecordingNotifier::new();
        notifier.broadcast(EventId::new(1), "hello").await.unwrap();
        notifier.direct_message(&user("alice"), "hi").await.unwrap();

        assert_eq!(notifier.broadcasts(), vec![(EventId::new(1), "hello".to_string())]);
        assert_eq!(notifier.direct_messages(), vec![(user("alice"), "hi".to_string())]);
    }

    #[tokio::test]
    async fn unreachable_users_fail_without_recording() {
        let notifier = RecordingNotifier::new();
        notifier.fail_direct_messages_to("bob");

        assert!(notifier.direct_message(&user("bob"), "hi").await.is_err());
        assert!(notifier.direct_messages().is_empty());
    }
}
