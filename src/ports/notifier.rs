//! Notifier port.
//!
//! Delivery is best-effort from the engine's perspective: the dispatcher
//! logs and swallows every failure, so an unreachable channel or user can
//! never block a lifecycle transition.

use crate::domain::foundation::{DomainError, EventId, UserId};
use async_trait::async_trait;

/// Text message delivery to the chat transport.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver to the broadcast channel for this event's context.
    async fn broadcast(&self, event_id: EventId, text: &str) -> Result<(), DomainError>;

    /// Deliver a direct message to one user.
    async fn direct_message(&self, user_id: &UserId, text: &str) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn notifier_is_object_safe() {
        fn _accepts_dyn(_notifier: &dyn Notifier) {}
    }
}
