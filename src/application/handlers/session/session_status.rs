//! SessionStatusHandler - read-only view of a running session.

use std::sync::Arc;

use crate::domain::foundation::{EventId, Timestamp};
use crate::domain::session::{Participant, SessionError};
use crate::ports::{Clock, EventDirectory, SessionStore};

/// Query for a session's current status.
#[derive(Debug, Clone)]
pub struct SessionStatusQuery {
    pub event_id: EventId,
}

/// Snapshot of a running session.
#[derive(Debug, Clone)]
pub struct SessionStatusView {
    /// Event description, passed through for display.
    pub description: String,
    pub end_time: Timestamp,
    /// Whole minutes until the deadline, clamped to zero.
    pub remaining_minutes: i64,
    pub participant_count: usize,
    pub participants: Vec<Participant>,
}

/// Handler for session status queries.
pub struct SessionStatusHandler {
    directory: Arc<dyn EventDirectory>,
    store: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
}

impl SessionStatusHandler {
    pub fn new(
        directory: Arc<dyn EventDirectory>,
        store: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            directory,
            store,
            clock,
        }
    }

    pub async fn handle(
        &self,
        query: SessionStatusQuery,
    ) -> Result<SessionStatusView, SessionError> {
        let now = self.clock.now();

        let session = self
            .store
            .get_session(query.event_id)
            .await?
            .ok_or(SessionError::SessionNotActive)?;
        if !session.is_active() {
            return Err(SessionError::SessionNotActive);
        }

        let participants = self.store.list_active_participants(query.event_id).await?;
        let description = match self.directory.get_event(query.event_id).await {
            Ok(Some(event)) => event.description().to_string(),
            _ => format!("event {}", query.event_id),
        };

        Ok(SessionStatusView {
            description,
            end_time: session.end_time(),
            remaining_minutes: session.remaining_minutes(now),
            participant_count: participants.len(),
            participants,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryEventDirectory, InMemorySessionStore};
    use crate::adapters::SystemClock;
    use crate::domain::event::EventRecord;
    use crate::domain::foundation::UserId;
    use crate::domain::session::LiveSession;

    async fn fixture() -> (Arc<InMemorySessionStore>, SessionStatusHandler) {
        let directory = Arc::new(InMemoryEventDirectory::new());
        directory.put_event(EventRecord::new(
            EventId::new(1),
            UserId::new("org-1").unwrap(),
            "Sam",
            "Board game night",
        ));
        let store = Arc::new(InMemorySessionStore::new());
        let handler = SessionStatusHandler::new(directory, store.clone(), Arc::new(SystemClock));
        (store, handler)
    }

    fn status_query() -> SessionStatusQuery {
        SessionStatusQuery {
            event_id: EventId::new(1),
        }
    }

    #[tokio::test]
    async fn status_reports_remaining_time_and_participants() {
        let (store, handler) = fixture().await;
        let now = Timestamp::now();
        let session = LiveSession::begin(EventId::new(1), now, 60).unwrap();
        store.put_session(&session).await.unwrap();
        let participant = Participant::join(
            EventId::new(1),
            UserId::new("alice").unwrap(),
            "Alice",
            now,
            None,
            60,
        )
        .unwrap();
        store.insert_participant(&participant).await.unwrap();

        let view = handler.handle(status_query()).await.unwrap();

        assert_eq!(view.description, "Board game night");
        assert!(view.remaining_minutes >= 59 && view.remaining_minutes <= 60);
        assert_eq!(view.participant_count, 1);
        assert_eq!(view.participants[0].username(), "Alice");
    }

    #[tokio::test]
    async fn status_without_session_signals_not_active() {
        let (_store, handler) = fixture().await;

        let result = handler.handle(status_query()).await;

        assert_eq!(result.unwrap_err(), SessionError::SessionNotActive);
    }

    #[tokio::test]
    async fn status_on_closed_session_signals_not_active() {
        let (store, handler) = fixture().await;
        let mut session = LiveSession::begin(EventId::new(1), Timestamp::now(), 60).unwrap();
        session.close();
        store.put_session(&session).await.unwrap();

        let result = handler.handle(status_query()).await;

        assert_eq!(result.unwrap_err(), SessionError::SessionNotActive);
    }

    #[tokio::test]
    async fn remaining_minutes_clamps_to_zero_past_deadline() {
        let (store, handler) = fixture().await;
        let stale = LiveSession::reconstitute(
            EventId::new(1),
            Timestamp::now().minus_minutes(120),
            Timestamp::now().minus_minutes(30),
            true,
        );
        store.put_session(&stale).await.unwrap();

        let view = handler.handle(status_query()).await.unwrap();

        assert_eq!(view.remaining_minutes, 0);
    }
}
