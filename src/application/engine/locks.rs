//! Per-event mutual exclusion.
//!
//! All mutating operations on one event's session (start, join, leave,
//! extend, and the scheduler callbacks) run under that event's lock, so a
//! leave racing an expiry cannot produce conflicting writes. Distinct
//! events share nothing and proceed fully in parallel.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::foundation::EventId;

/// Registry of per-event async locks.
#[derive(Default)]
pub struct EventLockRegistry {
    locks: Mutex<HashMap<EventId, Arc<Mutex<()>>>>,
}

impl EventLockRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock for one event, creating it on first use.
    ///
    /// The returned guard is owned, so it can be held across await points
    /// and dropped before notification dispatch.
    pub async fn acquire(&self, event_id: EventId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            Arc::clone(locks.entry(event_id).or_default())
        };
        lock.lock_owned().await
    }
}
