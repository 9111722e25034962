//! In-memory event directory.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::event::EventRecord;
use crate::domain::foundation::{DomainError, EventId};
use crate::ports::EventDirectory;

/// In-memory event metadata, seeded by tests.
#[derive(Debug, Default)]
pub struct InMemoryEventDirectory {
    events: RwLock<HashMap<EventId, EventRecord>>,
}

impl InMemoryEventDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed or replace an event record.
    pub fn put_event(&self, record: EventRecord) {
        self.events
            .write()
            .expect("event directory lock poisoned")
            .insert(record.event_id(), record);
    }
}

#[async_trait]
impl EventDirectory for InMemoryEventDirectory {
    async fn get_event(&self, event_id: EventId) -> Result<Option<EventRecord>, DomainError> {
        Ok(self
            .events
            .read()
            .expect("event directory lock poisoned")
            .get(&event_id)
            .cloned())
    }
}
