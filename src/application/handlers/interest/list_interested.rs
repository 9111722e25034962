//! ListInterestedHandler - roster of everyone registered for an event.

use std::sync::Arc;

use crate::domain::foundation::EventId;
use crate::domain::interest::InterestError;
use crate::ports::{EventDirectory, InterestStore};

/// Query for the interest roster of an event.
#[derive(Debug, Clone)]
pub struct ListInterestedQuery {
    pub event_id: EventId,
}

/// Everyone registered for an event, split by connection preference.
#[derive(Debug, Clone)]
pub struct InterestRoster {
    pub description: String,
    /// Usernames that opted in to being connected with other attendees.
    pub open_to_connect: Vec<String>,
    /// Usernames that registered without a connection preference.
    pub attending_only: Vec<String>,
    pub total: usize,
}

/// Handler for listing registered interest.
pub struct ListInterestedHandler {
    directory: Arc<dyn EventDirectory>,
    interests: Arc<dyn InterestStore>,
}

impl ListInterestedHandler {
    pub fn new(directory: Arc<dyn EventDirectory>, interests: Arc<dyn InterestStore>) -> Self {
        Self {
            directory,
            interests,
        }
    }

    pub async fn handle(&self, query: ListInterestedQuery) -> Result<InterestRoster, InterestError> {
        let event = self
            .directory
            .get_event(query.event_id)
            .await?
            .ok_or(InterestError::EventNotFound(query.event_id))?;

        let rows = self.interests.list_for_event(query.event_id).await?;
        let total = rows.len();
        let mut open_to_connect = Vec::new();
        let mut attending_only = Vec::new();
        for row in rows {
            if row.wants_connection() {
                open_to_connect.push(row.username().to_string());
            } else {
                attending_only.push(row.username().to_string());
            }
        }

        Ok(InterestRoster {
            description: event.description().to_string(),
            open_to_connect,
            attending_only,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryEventDirectory, InMemoryInterestStore};
    use crate::domain::event::EventRecord;
    use crate::domain::foundation::UserId;
    use crate::domain::interest::Interest;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn fixture() -> (Arc<InMemoryEventDirectory>, Arc<InMemoryInterestStore>) {
        let directory = Arc::new(InMemoryEventDirectory::new());
        directory.put_event(EventRecord::new(
            EventId::new(1),
            user("org"),
            "Organizer",
            "Board games night",
        ));
        (directory, Arc::new(InMemoryInterestStore::new()))
    }

    #[tokio::test]
    async fn roster_splits_by_connection_preference() {
        let (directory, store) = fixture();
        store
            .insert_interest(&Interest::register(EventId::new(1), user("alice"), "Alice"))
            .await
            .unwrap();
        let mut bob = Interest::register(EventId::new(1), user("bob"), "Bob");
        bob.toggle_connection();
        store.insert_interest(&bob).await.unwrap();
        let handler = ListInterestedHandler::new(directory, store);

        let roster = handler
            .handle(ListInterestedQuery {
                event_id: EventId::new(1),
            })
            .await
            .unwrap();

        assert_eq!(roster.description, "Board games night");
        assert_eq!(roster.open_to_connect, vec!["Bob".to_string()]);
        assert_eq!(roster.attending_only, vec!["Alice".to_string()]);
        assert_eq!(roster.total, 2);
    }

    #[tokio::test]
    async fn empty_roster_for_event_without_registrations() {
        let (directory, store) = fixture();
        let handler = ListInterestedHandler::new(directory, store);

        let roster = handler
            .handle(ListInterestedQuery {
                event_id: EventId::new(1),
            })
            .await
            .unwrap();

        assert_eq!(roster.total, 0);
        assert!(roster.open_to_connect.is_empty());
        assert!(roster.attending_only.is_empty());
    }

    #[tokio::test]
    async fn unknown_event_is_rejected() {
        let (directory, store) = fixture();
        let handler = ListInterestedHandler::new(directory, store);

        let result = handler
            .handle(ListInterestedQuery {
                event_id: EventId::new(99),
            })
            .await;

        assert_eq!(
            result.unwrap_err(),
            InterestError::EventNotFound(EventId::new(99))
        );
    }
}
