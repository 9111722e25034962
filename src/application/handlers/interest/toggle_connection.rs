//! ToggleConnectionHandler - flip a registration's connection preference.

use std::sync::Arc;

use crate::domain::foundation::{EventId, UserId};
use crate::domain::interest::{Interest, InterestError};
use crate::ports::InterestStore;

/// Command to toggle the wants-connection flag.
#[derive(Debug, Clone)]
pub struct ToggleConnectionCommand {
    pub event_id: EventId,
    pub actor_id: UserId,
}

/// Handler for toggling connection preference.
pub struct ToggleConnectionHandler {
    interests: Arc<dyn InterestStore>,
}

impl ToggleConnectionHandler {
    pub fn new(interests: Arc<dyn InterestStore>) -> Self {
        Self { interests }
    }

    pub async fn handle(&self, cmd: ToggleConnectionCommand) -> Result<Interest, InterestError> {
        let mut interest = self
            .interests
            .get_interest(cmd.event_id, &cmd.actor_id)
            .await?
            .ok_or(InterestError::NotRegistered)?;

        interest.toggle_connection();
        self.interests.update_interest(&interest).await?;
        Ok(interest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryInterestStore;

    fn alice() -> UserId {
        UserId::new("alice").unwrap()
    }

    #[tokio::test]
    async fn toggle_flips_the_stored_preference() {
        let store = Arc::new(InMemoryInterestStore::new());
        store
            .insert_interest(&Interest::register(EventId::new(1), alice(), "Alice"))
            .await
            .unwrap();
        let handler = ToggleConnectionHandler::new(store.clone());

        let cmd = ToggleConnectionCommand {
            event_id: EventId::new(1),
            actor_id: alice(),
        };
        let updated = handler.handle(cmd.clone()).await.unwrap();
        assert!(updated.wants_connection());

        let stored = store.get_interest(EventId::new(1), &alice()).await.unwrap();
        assert!(stored.unwrap().wants_connection());

        let reverted = handler.handle(cmd).await.unwrap();
        assert!(!reverted.wants_connection());
    }

    #[tokio::test]
    async fn toggle_without_registration_is_rejected() {
        let handler = ToggleConnectionHandler::new(Arc::new(InMemoryInterestStore::new()));

        let result = handler
            .handle(ToggleConnectionCommand {
                event_id: EventId::new(1),
                actor_id: alice(),
            })
            .await;

        assert_eq!(result.unwrap_err(), InterestError::NotRegistered);
    }
}
