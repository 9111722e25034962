//! LeaveSessionHandler - a participant leaves before the session ends.

use std::sync::Arc;

use tracing::info;

use crate::application::engine::EventLockRegistry;
use crate::domain::foundation::{EventId, UserId};
use crate::domain::session::SessionError;
use crate::ports::{Clock, SessionStore};

/// Command to leave a session.
#[derive(Debug, Clone)]
pub struct LeaveSessionCommand {
    pub event_id: EventId,
    pub actor_id: UserId,
}

/// Result of a successful leave.
#[derive(Debug, Clone)]
pub struct LeaveSessionResult {
    /// Whole minutes the user actually stayed.
    pub realized_minutes: i64,
}

/// Handler for leaving sessions.
pub struct LeaveSessionHandler {
    store: Arc<dyn SessionStore>,
    locks: Arc<EventLockRegistry>,
    clock: Arc<dyn Clock>,
}

impl LeaveSessionHandler {
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

    pub async fn handle(
        &self,
        cmd: LeaveSessionCommand,
    ) -> Result<LeaveSessionResult, SessionError> {
        let _guard = self.locks.acquire(cmd.event_id).await;
        let now = self.clock.now();

        let mut participant = self
            .store
            .find_open_participant(cmd.event_id, &cmd.actor_id)
            .await?
            .ok_or(SessionError::NotParticipating)?;
        let realized_minutes = participant.leave(now)?;

        if !self
            .store
            .set_participant_left(cmd.event_id, &cmd.actor_id, now)
            .await?
        {
            return Err(SessionError::NotParticipating);
        }

        info!(
            event_id = %cmd.event_id,
            user_id = %cmd.actor_id,
            realized_minutes,
            "participant left"
        );
        Ok(LeaveSessionResult { realized_minutes })
    }
}
