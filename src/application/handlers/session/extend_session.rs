//! ExtendSessionHandler - the organizer pushes the deadline forward.

use std::sync::Arc;

use tracing::info;

use crate::application::engine::{DeadlineScheduler, EventLockRegistry, NotificationDispatcher};
use crate::domain::foundation::{EventId, Timestamp, UserId};
use crate::domain::session::{LiveSession, SessionError};
use crate::ports::{EventDirectory, SessionStore};

/// Command to extend a running session.
#[derive(Debug, Clone)]
pub struct ExtendSessionCommand {
    pub event_id: EventId,
    pub actor_id: UserId,
    pub additional_minutes: i64,
}

/// Result of a successful extension.
#[derive(Debug, Clone)]
pub struct ExtendSessionResult {
    pub session: LiveSession,
    pub new_end_time: Timestamp,
}

/// Handler for extending sessions.
pub struct ExtendSessionHandler {
    directory: Arc<dyn EventDirectory>,
    store: Arc<dyn SessionStore>,
    locks: Arc<EventLockRegistry>,
    scheduler: Arc<DeadlineScheduler>,
    dispatcher: NotificationDispatcher,
}

impl ExtendSessionHandler {
    pub fn new(
        directory: Arc<dyn EventDirectory>,
        store: Arc<dyn SessionStore>,
        locks: Arc<EventLockRegistry>,
        scheduler: Arc<DeadlineScheduler>,
        dispatcher: NotificationDispatcher,
    ) -> Self {
        Self {
            directory,
            store,
            locks,
            scheduler,
            dispatcher,
        }
    }

    pub async fn handle(
        &self,
        cmd: ExtendSessionCommand,
    ) -> Result<ExtendSessionResult, SessionError> {
        let session = {
            let _guard = self.locks.acquire(cmd.event_id).await;

            let event = self
                .directory
                .get_event(cmd.event_id)
                .await
                .map_err(|e| SessionError::storage(e.to_string()))?
                .ok_or(SessionError::EventNotFound(cmd.event_id))?;
            if !event.is_organizer(&cmd.actor_id) {
                return Err(SessionError::Unauthorized);
            }

            // Re-read under the lock: a recent start is no guarantee the
            // session is still active by the time this runs.
            let mut session = self
                .store
                .get_session(cmd.event_id)
                .await?
                .filter(LiveSession::is_active)
                .ok_or(SessionError::SessionNotActive)?;
            session.extend(cmd.additional_minutes)?;
            self.store.put_session(&session).await?;

            // Re-arming aborts the stale timer pair before scheduling the
            // new one, so the pre-extension expiry can never fire. Done
            // under the lock to keep the arm ordered with the write.
            self.scheduler.arm(cmd.event_id, session.end_time()).await;
            session
        };

        info!(
            event_id = %cmd.event_id,
            additional_minutes = cmd.additional_minutes,
            "session extended"
        );
        self.dispatcher.broadcast(
            cmd.event_id,
            format!(
                "\u{23F3} The session has been extended by {} minutes!",
                cmd.additional_minutes
            ),
        );

        Ok(ExtendSessionResult {
            new_end_time: session.end_time(),
            session,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryEventDirectory, InMemorySessionStore, RecordingNotifier};
    use crate::adapters::SystemClock;
    use crate::domain::event::EventRecord;
    use crate::ports::DeadlineHandler;
    use async_trait::async_trait;

    struct NoopDeadlineHandler;

    #[async_trait]
    impl DeadlineHandler for NoopDeadlineHandler {
        async fn on_warning(&self, _event_id: EventId) {}
        async fn on_expire(&self, _event_id: EventId) {}
    }

    fn organizer() -> UserId {
        UserId::new("org-1").unwrap()
    }

    struct Fixture {
        store: Arc<InMemorySessionStore>,
        locks: Arc<EventLockRegistry>,
        scheduler: Arc<DeadlineScheduler>,
        handler: ExtendSessionHandler,
    }

    async fn fixture_with_session() -> Fixture {
        let directory = Arc::new(InMemoryEventDirectory::new());
        directory.put_event(EventRecord::new(
            EventId::new(1),
            organizer(),
            "Sam",
            "Board game night",
        ));
        let store = Arc::new(InMemorySessionStore::new());
        let session = LiveSession::begin(EventId::new(1), Timestamp::now(), 60).unwrap();
        store.put_session(&session).await.unwrap();
        let locks = Arc::new(EventLockRegistry::new());
        let scheduler = Arc::new(DeadlineScheduler::new(
            Arc::new(NoopDeadlineHandler),
            Arc::new(SystemClock),
            5,
        ));
        let handler = ExtendSessionHandler::new(
            directory,
            store.clone(),
            locks.clone(),
            scheduler.clone(),
            NotificationDispatcher::new(Arc::new(RecordingNotifier::new())),
        );
        Fixture {
            store,
            locks,
            scheduler,
            handler,
        }
    }

    fn extend_cmd(actor: UserId, minutes: i64) -> ExtendSessionCommand {
        ExtendSessionCommand {
            event_id: EventId::new(1),
            actor_id: actor,
            additional_minutes: minutes,
        }
    }

    #[tokio::test]
    async fn extend_moves_deadline_by_exact_minutes() {
        let fx = fixture_with_session().await;
        let before = fx.store.get_session(EventId::new(1)).await.unwrap().unwrap();

        let result = fx.handler.handle(extend_cmd(organizer(), 30)).await.unwrap();

        assert_eq!(result.new_end_time, before.end_time().plus_minutes(30));
        let stored = fx.store.get_session(EventId::new(1)).await.unwrap().unwrap();
        assert_eq!(stored.end_time(), result.new_end_time);
        assert!(fx.scheduler.is_armed(EventId::new(1)).await);
    }

    #[tokio::test]
    async fn non_organizer_extend_mutates_nothing() {
        let fx = fixture_with_session().await;
        let before = fx.store.get_session(EventId::new(1)).await.unwrap().unwrap();

        let result = fx
            .handler
            .handle(extend_cmd(UserId::new("random").unwrap(), 30))
            .await;

        assert_eq!(result.unwrap_err(), SessionError::Unauthorized);
        let after = fx.store.get_session(EventId::new(1)).await.unwrap().unwrap();
        assert_eq!(after.end_time(), before.end_time());
        assert!(!fx.scheduler.is_armed(EventId::new(1)).await);
    }

    #[tokio::test]
    async fn extend_on_closed_session_is_rejected() {
        let fx = fixture_with_session().await;
        let mut session = fx.store.get_session(EventId::new(1)).await.unwrap().unwrap();
        session.close();
        fx.store.put_session(&session).await.unwrap();

        let result = fx.handler.handle(extend_cmd(organizer(), 30)).await;

        assert_eq!(result.unwrap_err(), SessionError::SessionNotActive);
    }

    #[tokio::test]
    async fn rearm_completes_before_the_event_lock_is_released() {
        let fx = fixture_with_session().await;
        let handler = Arc::new(fx.handler);

        // Park the extend on the event lock.
        let guard = fx.locks.acquire(EventId::new(1)).await;
        let task = tokio::spawn({
            let handler = Arc::clone(&handler);
            async move { handler.handle(extend_cmd(organizer(), 30)).await }
        });
        for _ in 0..20 {
            tokio::task::yield_now().await;
        }
        assert!(!fx.scheduler.is_armed(EventId::new(1)).await);

        // The lock is fair, so after release the parked extend runs first;
        // holding the lock again means its re-arm has already happened.
        drop(guard);
        let _guard = fx.locks.acquire(EventId::new(1)).await;
        assert!(fx.scheduler.is_armed(EventId::new(1)).await);
        drop(_guard);

        task.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn shrinking_is_rejected() {
        let fx = fixture_with_session().await;
        let before = fx.store.get_session(EventId::new(1)).await.unwrap().unwrap();

        let result = fx.handler.handle(extend_cmd(organizer(), -15)).await;

        assert!(matches!(result, Err(SessionError::InvalidDuration(_))));
        let after = fx.store.get_session(EventId::new(1)).await.unwrap().unwrap();
        assert_eq!(after.end_time(), before.end_time());
    }
}
