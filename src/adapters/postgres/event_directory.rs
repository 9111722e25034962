//! PostgreSQL implementation of EventDirectory.
//!
//! Reads the `events` table owned by the chat front end. The engine never
//! writes to it.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::event::EventRecord;
use crate::domain::foundation::{DomainError, EventId, UserId};
use crate::ports::EventDirectory;

/// PostgreSQL implementation of EventDirectory.
#[derive(Clone)]
pub struct PostgresEventDirectory {
    pool: PgPool,
}

impl PostgresEventDirectory {
    /// Creates a new PostgresEventDirectory.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventDirectory for PostgresEventDirectory {
    async fn get_event(&self, event_id: EventId) -> Result<Option<EventRecord>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT event_id, organizer_id, organizer_name, description
            FROM events
            WHERE event_id = $1
            "#,
        )
        .bind(event_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to fetch event: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_event(row)?)),
            None => Ok(None),
        }
    }
}

fn row_to_event(row: sqlx::postgres::PgRow) -> Result<EventRecord, DomainError> {
    let event_id: i64 = row
        .try_get("event_id")
        .map_err(|e| DomainError::storage(format!("Failed to get event_id: {}", e)))?;
    let organizer_id: String = row
        .try_get("organizer_id")
        .map_err(|e| DomainError::storage(format!("Failed to get organizer_id: {}", e)))?;
    let organizer_name: String = row
        .try_get("organizer_name")
        .map_err(|e| DomainError::storage(format!("Failed to get organizer_name: {}", e)))?;
    let description: String = row
        .try_get("description")
        .map_err(|e| DomainError::storage(format!("Failed to get description: {}", e)))?;

    Ok(EventRecord::new(
        EventId::new(event_id),
        UserId::new(organizer_id)
            .map_err(|e| DomainError::storage(format!("Invalid organizer_id: {}", e)))?,
        organizer_name,
        description,
    ))
}
