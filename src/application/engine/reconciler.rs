//! Session reconciler - warning and expiry callbacks from the scheduler.
//!
//! Expiry is the single reconciliation point guaranteeing no session is
//! left active with a deadline in the past once the callback has run.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::foundation::EventId;
use crate::ports::{Clock, DeadlineHandler, EventDirectory, SessionStore};

use super::NotificationDispatcher;

/// Applies time-based transitions when a session's timers fire.
pub struct SessionReconciler {
    store: Arc<dyn SessionStore>,
    directory: Arc<dyn EventDirectory>,
    locks: Arc<super::EventLockRegistry>,
    dispatcher: NotificationDispatcher,
    clock: Arc<dyn Clock>,
    warning_lead_minutes: i64,
}

impl SessionReconciler {
    pub fn new(
        store: Arc<dyn SessionStore>,
        directory: Arc<dyn EventDirectory>,
        locks: Arc<super::EventLockRegistry>,
        dispatcher: NotificationDispatcher,
        clock: Arc<dyn Clock>,
        warning_lead_minutes: i64,
    ) -> Self {
        Self {
            store,
            directory,
            locks,
            dispatcher,
            clock,
            warning_lead_minutes,
        }
    }

    /// Event description for notification text, best-effort.
    async fn describe(&self, event_id: EventId) -> String {
        match self.directory.get_event(event_id).await {
            Ok(Some(event)) => event.description().to_string(),
            _ => format!("event {}", event_id),
        }
    }
}

#[async_trait]
impl DeadlineHandler for SessionReconciler {
    async fn on_warning(&self, event_id: EventId) {
        let participants = {
            let _guard = self.locks.acquire(event_id).await;

            match self.store.get_session(event_id).await {
                // Session ended before the warning fired: no-op.
                Ok(Some(session)) if session.is_active() => {}
                Ok(_) => return,
                Err(err) => {
                    error!(event_id = %event_id, error = %err, "warning reconciliation failed");
                    return;
                }
            }

            match self.store.list_active_participants(event_id).await {
                Ok(participants) => participants,
                Err(err) => {
                    error!(event_id = %event_id, error = %err, "warning reconciliation failed");
                    return;
                }
            }
        };

        let text = format!(
            "\u{23F0} {} minutes left in the session for {}!",
            self.warning_lead_minutes,
            self.describe(event_id).await
        );
        self.dispatcher.broadcast(event_id, text.clone());
        self.dispatcher.message_participants(participants, text);
    }

    async fn on_expire(&self, event_id: EventId) {
        let now = self.clock.now();
        let closed = {
            let _guard = self.locks.acquire(event_id).await;

            let mut session = match self.store.get_session(event_id).await {
                // Already reconciled: running again is a no-op.
                Ok(Some(session)) if session.is_active() => session,
                Ok(_) => return,
                Err(err) => {
                    error!(event_id = %event_id, error = %err, "expiry reconciliation failed");
                    return;
                }
            };

            session.close();
            if let Err(err) = self.store.put_session(&session).await {
                error!(event_id = %event_id, error = %err, "expiry reconciliation failed");
                return;
            }

            match self.store.bulk_close_participants(event_id, now).await {
                Ok(closed) => closed,
                Err(err) => {
                    error!(event_id = %event_id, error = %err, "expiry reconciliation failed");
                    return;
                }
            }
        };

        info!(event_id = %event_id, participants_closed = closed, "session expired");
        let text = format!(
            "\u{1F3C1} The session for {} has ended. Thanks for coming!",
            self.describe(event_id).await
        );
        self.dispatcher.broadcast(event_id, text);
    }
}
