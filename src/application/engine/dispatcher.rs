//! Notification dispatcher - lock-free fan-out of lifecycle messages.
//!
//! Delivery runs on spawned tasks so no per-event lock is ever held
//! across a network call, and every failure is logged and swallowed: an
//! unreachable channel or user must not block a lifecycle transition.

use std::sync::Arc;

use tracing::warn;

use crate::domain::foundation::{EventId, UserId};
use crate::domain::session::Participant;
use crate::ports::Notifier;

/// Fans lifecycle text out to the broadcast channel and to participants.
#[derive(Clone)]
pub struct NotificationDispatcher {
    notifier: Arc<dyn Notifier>,
}

impl NotificationDispatcher {
    /// Creates a dispatcher delivering through `notifier`.
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Delivers to the event's broadcast channel. Fire-and-forget.
    pub fn broadcast(&self, event_id: EventId, text: String) {
        let notifier = Arc::clone(&self.notifier);
        tokio::spawn(async move {
            if let Err(err) = notifier.broadcast(event_id, &text).await {
                warn!(event_id = %event_id, error = %err, "broadcast delivery failed");
            }
        });
    }

    /// Delivers a direct message to one user. Fire-and-forget.
    pub fn direct_message(&self, user_id: UserId, text: String) {
        let notifier = Arc::clone(&self.notifier);
        tokio::spawn(async move {
            if let Err(err) = notifier.direct_message(&user_id, &text).await {
                warn!(user_id = %user_id, error = %err, "direct message delivery failed");
            }
        });
    }

    /// Direct-messages every participant in turn.
    ///
    /// A failure for one recipient does not abort delivery to the rest.
    pub fn message_participants(&self, participants: Vec<Participant>, text: String) {
        let notifier = Arc::clone(&self.notifier);
        tokio::spawn(async move {
            for participant in &participants {
                if let Err(err) = notifier.direct_message(participant.user_id(), &text).await {
                    warn!(
                        user_id = %participant.user_id(),
                        error = %err,
                        "participant notification failed"
                    );
                }
            }
        });
    }
}
