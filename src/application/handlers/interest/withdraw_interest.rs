//! WithdrawInterestHandler - a user cancels their registration.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{EventId, UserId};
use crate::domain::interest::InterestError;
use crate::ports::InterestStore;

/// Command to withdraw interest from an event.
#[derive(Debug, Clone)]
pub struct WithdrawInterestCommand {
    pub event_id: EventId,
    pub actor_id: UserId,
}

/// Handler for withdrawing interest.
pub struct WithdrawInterestHandler {
    interests: Arc<dyn InterestStore>,
}

impl WithdrawInterestHandler {
    pub fn new(interests: Arc<dyn InterestStore>) -> Self {
        Self { interests }
    }

    pub async fn handle(&self, cmd: WithdrawInterestCommand) -> Result<(), InterestError> {
        if !self
            .interests
            .delete_interest(cmd.event_id, &cmd.actor_id)
            .await?
        {
            return Err(InterestError::NotRegistered);
        }

        info!(event_id = %cmd.event_id, user_id = %cmd.actor_id, "interest withdrawn");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryInterestStore;
    use crate::domain::interest::Interest;

    fn alice() -> UserId {
        UserId::new("alice").unwrap()
    }

    #[tokio::test]
    async fn withdraw_removes_the_registration() {
        let store = Arc::new(InMemoryInterestStore::new());
        store
            .insert_interest(&Interest::register(EventId::new(1), alice(), "Alice"))
            .await
            .unwrap();
        let handler = WithdrawInterestHandler::new(store.clone());

        handler
            .handle(WithdrawInterestCommand {
                event_id: EventId::new(1),
                actor_id: alice(),
            })
            .await
            .unwrap();

        assert!(store
            .get_interest(EventId::new(1), &alice())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn withdraw_without_registration_is_rejected() {
        let handler = WithdrawInterestHandler::new(Arc::new(InMemoryInterestStore::new()));

        let result = handler
            .handle(WithdrawInterestCommand {
                event_id: EventId::new(1),
                actor_id: alice(),
            })
            .await;

        assert_eq!(result.unwrap_err(), InterestError::NotRegistered);
    }
}
