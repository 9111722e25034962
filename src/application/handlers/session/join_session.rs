//! JoinSessionHandler - a user joins a running session.

use std::sync::Arc;

use tracing::info;

use crate::application::engine::EventLockRegistry;
use crate::domain::foundation::{EventId, UserId};
use crate::domain::session::{Participant, SessionError};
use crate::ports::{Clock, SessionStore};

/// Command to join a running session.
#[derive(Debug, Clone)]
pub struct JoinSessionCommand {
    pub event_id: EventId,
    pub actor_id: UserId,
    pub username: String,
    /// Minutes the user intends to stay; all remaining time when omitted.
    pub requested_minutes: Option<i64>,
}

/// Result of a successful join.
#[derive(Debug, Clone)]
pub struct JoinSessionResult {
    pub participant: Participant,
}

/// Handler for joining sessions.
pub struct JoinSessionHandler {
    store: Arc<dyn SessionStore>,
    locks: Arc<EventLockRegistry>,
    clock: Arc<dyn Clock>,
}

impl JoinSessionHandler {
    pub fn new(
        store: Arc<dyn SessionStore>,
        locks: Arc<EventLockRegistry>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            locks,
            clock,
        }
    }

    pub async fn handle(&self, cmd: JoinSessionCommand) -> Result<JoinSessionResult, SessionError> {
        let _guard = self.locks.acquire(cmd.event_id).await;
        let now = self.clock.now();

        let session = self
            .store
            .get_session(cmd.event_id)
            .await?
            .ok_or(SessionError::SessionNotActive)?;
        // A session past its deadline but not yet reaped counts as not
        // active; the scheduler will reconcile it shortly.
        if !session.is_joinable(now) {
            return Err(SessionError::SessionNotActive);
        }

        if self
            .store
            .find_open_participant(cmd.event_id, &cmd.actor_id)
            .await?
            .is_some()
        {
            return Err(SessionError::AlreadyJoined);
        }

        let participant = Participant::join(
            cmd.event_id,
            cmd.actor_id,
            cmd.username,
            now,
            cmd.requested_minutes,
            session.remaining_minutes(now),
        )?;
        self.store.insert_participant(&participant).await?;

        info!(
            event_id = %cmd.event_id,
            user_id = %participant.user_id(),
            planned_minutes = participant.planned_minutes(),
            "participant joined"
        );
        Ok(JoinSessionResult { participant })
    }
}
