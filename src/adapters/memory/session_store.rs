//! In-memory session store.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventId, Timestamp, UserId};
use crate::domain::session::{LiveSession, Participant};
use crate::ports::SessionStore;

/// In-memory session and participant rows.
///
/// Participant rows append like database rows: a user who rejoins after
/// leaving gets a second row, and only rows with no leave time count as
/// open.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<EventId, LiveSession>>,
    participants: RwLock<Vec<Participant>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get_session(&self, event_id: EventId) -> Result<Option<LiveSession>, DomainError> {
        Ok(self
            .sessions
            .read()
            .expect("session lock poisoned")
            .get(&event_id)
            .cloned())
    }

    async fn put_session(&self, session: &LiveSession) -> Result<(), DomainError> {
        self.sessions
            .write()
            .expect("session lock poisoned")
            .insert(session.event_id(), session.clone());
        Ok(())
    }

    async fn list_active_participants(
        &self,
        event_id: EventId,
    ) -> Result<Vec<Participant>, DomainError> {
        Ok(self
            .participants
            .read()
            .expect("participant lock poisoned")
            .iter()
            .filter(|p| p.event_id() == event_id && p.is_in_session())
            .cloned()
            .collect())
    }

    async fn find_open_participant(
        &self,
        event_id: EventId,
        user_id: &UserId,
    ) -> Result<Option<Participant>, DomainError> {
        Ok(self
            .participants
            .read()
            .expect("participant lock poisoned")
            .iter()
            .find(|p| p.event_id() == event_id && p.user_id() == user_id && p.is_in_session())
            .cloned())
    }

    async fn insert_participant(&self, participant: &Participant) -> Result<(), DomainError> {
        self.participants
            .write()
            .expect("participant lock poisoned")
            .push(participant.clone());
        Ok(())
    }

    async fn set_participant_left(
        &self,
        event_id: EventId,
        user_id: &UserId,
        leave_time: Timestamp,
    ) -> Result<bool, DomainError> {
        let mut rows = self.participants.write().expect("participant lock poisoned");
        match rows
            .iter_mut()
            .find(|p| p.event_id() == event_id && p.user_id() == user_id && p.is_in_session())
        {
            Some(row) => {
                row.leave(leave_time)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn bulk_close_participants(
        &self,
        event_id: EventId,
        leave_time: Timestamp,
    ) -> Result<u64, DomainError> {
        let mut rows = self.participants.write().expect("participant lock poisoned");
        let mut closed = 0u64;
        for row in rows
            .iter_mut()
            .filter(|p| p.event_id() == event_id && p.is_in_session())
        {
            row.leave(leave_time)?;
            closed += 1;
        }
        Ok(closed)
    }
}
