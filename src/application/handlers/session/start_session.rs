//! StartSessionHandler - the organizer opens a live session.

use std::sync::Arc;

use tracing::info;

use crate::application::engine::{DeadlineScheduler, EventLockRegistry, NotificationDispatcher};
use crate::domain::foundation::{EventId, UserId};
use crate::domain::session::{LiveSession, SessionError};
use crate::ports::{Clock, EventDirectory, SessionStore};

/// Command to start a session for an event.
#[derive(Debug, Clone)]
pub struct StartSessionCommand {
    pub event_id: EventId,
    pub actor_id: UserId,
    pub duration_minutes: i64,
}

/// Result of a successful start.
#[derive(Debug, Clone)]
pub struct StartSessionResult {
    pub session: LiveSession,
}

/// Handler for starting sessions.
pub struct StartSessionHandler {
    directory: Arc<dyn EventDirectory>,
    store: Arc<dyn SessionStore>,
    locks: Arc<EventLockRegistry>,
    scheduler: Arc<DeadlineScheduler>,
    dispatcher: NotificationDispatcher,
    clock: Arc<dyn Clock>,
}

impl StartSessionHandler {
    pub fn new(
        directory: Arc<dyn EventDirectory>,
        store: Arc<dyn SessionStore>,
        locks: Arc<EventLockRegistry>,
        scheduler: Arc<DeadlineScheduler>,
        dispatcher: NotificationDispatcher,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            directory,
            store,
            locks,
            scheduler,
            dispatcher,
            clock,
        }
    }

    pub async fn handle(
        &self,
        cmd: StartSessionCommand,
    ) -> Result<StartSessionResult, SessionError> {
        let session = {
            let _guard = self.locks.acquire(cmd.event_id).await;

            // 1. The event must exist and the actor must organize it.
            let event = self
                .directory
                .get_event(cmd.event_id)
                .await
                .map_err(|e| SessionError::storage(e.to_string()))?
                .ok_or(SessionError::EventNotFound(cmd.event_id))?;
            if !event.is_organizer(&cmd.actor_id) {
                return Err(SessionError::Unauthorized);
            }

            // 2. At most one active session per event.
            if let Some(existing) = self.store.get_session(cmd.event_id).await? {
                if existing.is_active() {
                    return Err(SessionError::AlreadyActive);
                }
            }

            // 3. Open a fresh session instance over any historical row.
            let session =
                LiveSession::begin(cmd.event_id, self.clock.now(), cmd.duration_minutes)?;
            self.store.put_session(&session).await?;

            // Armed while the lock is still held, so a concurrent extend
            // cannot slip its re-arm between our write and our arm.
            self.scheduler.arm(cmd.event_id, session.end_time()).await;
            session
        };

        info!(
            event_id = %cmd.event_id,
            duration_minutes = cmd.duration_minutes,
            "session started"
        );

        let event = self.directory.get_event(cmd.event_id).await;
        let description = match &event {
            Ok(Some(event)) => event.description().to_string(),
            _ => format!("event {}", cmd.event_id),
        };
        self.dispatcher.broadcast(
            cmd.event_id,
            format!(
                "\u{1F389} The session for {} is live for the next {} minutes! Join in!",
                description, cmd.duration_minutes
            ),
        );

        Ok(StartSessionResult { session })
    }
}
