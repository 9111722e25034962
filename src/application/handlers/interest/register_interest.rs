//! RegisterInterestHandler - a user registers interest in an event.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{EventId, UserId};
use crate::domain::interest::{Interest, InterestError};
use crate::ports::{EventDirectory, InterestStore};

/// Command to register interest in an event.
#[derive(Debug, Clone)]
pub struct RegisterInterestCommand {
    pub event_id: EventId,
    pub actor_id: UserId,
    pub username: String,
}

/// Handler for registering interest.
pub struct RegisterInterestHandler {
    directory: Arc<dyn EventDirectory>,
    interests: Arc<dyn InterestStore>,
}

impl RegisterInterestHandler {
    pub fn new(directory: Arc<dyn EventDirectory>, interests: Arc<dyn InterestStore>) -> Self {
        Self {
            directory,
            interests,
        }
    }

    pub async fn handle(&self, cmd: RegisterInterestCommand) -> Result<Interest, InterestError> {
        self.directory
            .get_event(cmd.event_id)
            .await
            .map_err(|e| InterestError::Storage(e.to_string()))?
            .ok_or(InterestError::EventNotFound(cmd.event_id))?;

        if self
            .interests
            .get_interest(cmd.event_id, &cmd.actor_id)
            .await?
            .is_some()
        {
            return Err(InterestError::AlreadyRegistered);
        }

        let interest = Interest::register(cmd.event_id, cmd.actor_id, cmd.username);
        self.interests.insert_interest(&interest).await?;

        info!(event_id = %cmd.event_id, user_id = %interest.user_id(), "interest registered");
        Ok(interest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryEventDirectory, InMemoryInterestStore};
    use crate::domain::event::EventRecord;

    fn cmd() -> RegisterInterestCommand {
        RegisterInterestCommand {
            event_id: EventId::new(1),
            actor_id: UserId::new("alice").unwrap(),
            username: "Alice".to_string(),
        }
    }

    fn handler() -> RegisterInterestHandler {
        let directory = Arc::new(InMemoryEventDirectory::new());
        directory.put_event(EventRecord::new(
            EventId::new(1),
            UserId::new("org-1").unwrap(),
            "Sam",
            "Board game night",
        ));
        RegisterInterestHandler::new(directory, Arc::new(InMemoryInterestStore::new()))
    }

    #[tokio::test]
    async fn registers_new_interest() {
        let handler = handler();

        let interest = handler.handle(cmd()).await.unwrap();

        assert_eq!(interest.username(), "Alice");
        assert!(!interest.wants_connection());
    }

    #[tokio::test]
    async fn duplicate_registration_is_rejected() {
        let handler = handler();

        handler.handle(cmd()).await.unwrap();
        let result = handler.handle(cmd()).await;

        assert_eq!(result.unwrap_err(), InterestError::AlreadyRegistered);
    }

    #[tokio::test]
    async fn unknown_event_is_rejected() {
        let handler = handler();

        let result = handler
            .handle(RegisterInterestCommand {
                event_id: EventId::new(99),
                actor_id: UserId::new("alice").unwrap(),
                username: "Alice".to_string(),
            })
            .await;

        assert_eq!(
            result.unwrap_err(),
            InterestError::EventNotFound(EventId::new(99))
        );
    }
}
