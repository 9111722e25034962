//! Deadline handler port - scheduler callbacks into the lifecycle engine.

use crate::domain::foundation::EventId;
use async_trait::async_trait;

/// Receives timer firings from the deadline scheduler.
///
/// Implementations handle their own failures; a callback has nowhere
/// useful to propagate an error, so both hooks are infallible at the
/// contract level and log internally.
#[async_trait]
pub trait DeadlineHandler: Send + Sync {
    /// The warning threshold before expiry was reached.
    ///
    /// Must be a no-op if the session is no longer active.
    async fn on_warning(&self, event_id: EventId);

    /// The session deadline passed. Terminal for this armed timer pair.
    async fn on_expire(&self, event_id: EventId);
}
