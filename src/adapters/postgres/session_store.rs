//! PostgreSQL implementation of SessionStore.
//!
//! One row per event in `live_sessions`; participant rows append to
//! `session_participants` and are closed by setting `left_at`.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, EventId, Timestamp, UserId};
use crate::domain::session::{LiveSession, Participant};
use crate::ports::SessionStore;

/// PostgreSQL implementation of SessionStore.
#[derive(Clone)]
pub struct PostgresSessionStore {
    pool: PgPool,
}

impl PostgresSessionStore {
    /// Creates a new PostgresSessionStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for PostgresSessionStore {
    async fn get_session(&self, event_id: EventId) -> Result<Option<LiveSession>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT event_id, start_time, end_time, is_active
            FROM live_sessions
            WHERE event_id = $1
            "#,
        )
        .bind(event_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to fetch session: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_session(row)?)),
            None => Ok(None),
        }
    }

    async fn put_session(&self, session: &LiveSession) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO live_sessions (event_id, start_time, end_time, is_active)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (event_id) DO UPDATE SET
                start_time = EXCLUDED.start_time,
                end_time = EXCLUDED.end_time,
                is_active = EXCLUDED.is_active
            "#,
        )
        .bind(session.event_id().as_i64())
        .bind(session.start_time().as_datetime())
        .bind(session.end_time().as_datetime())
        .bind(session.is_active())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to upsert session: {}", e)))?;

        Ok(())
    }

    async fn list_active_participants(
        &self,
        event_id: EventId,
    ) -> Result<Vec<Participant>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT event_id, user_id, username, join_time, planned_minutes, left_at
            FROM session_participants
            WHERE event_id = $1 AND left_at IS NULL
            ORDER BY join_time
            "#,
        )
        .bind(event_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list participants: {}", e)))?;

        rows.into_iter().map(row_to_participant).collect()
    }

    async fn find_open_participant(
        &self,
        event_id: EventId,
        user_id: &UserId,
    ) -> Result<Option<Participant>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT event_id, user_id, username, join_time, planned_minutes, left_at
            FROM session_participants
            WHERE event_id = $1 AND user_id = $2 AND left_at IS NULL
            "#,
        )
        .bind(event_id.as_i64())
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to find participant: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_participant(row)?)),
            None => Ok(None),
        }
    }

    async fn insert_participant(&self, participant: &Participant) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO session_participants (
                event_id, user_id, username, join_time, planned_minutes, left_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(participant.event_id().as_i64())
        .bind(participant.user_id().as_str())
        .bind(participant.username())
        .bind(participant.join_time().as_datetime())
        .bind(participant.planned_minutes())
        .bind(participant.left_at().map(|t| *t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to insert participant: {}", e)))?;

        Ok(())
    }

    async fn set_participant_left(
        &self,
        event_id: EventId,
        user_id: &UserId,
        leave_time: Timestamp,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE session_participants SET left_at = $3
            WHERE event_id = $1 AND user_id = $2 AND left_at IS NULL
            "#,
        )
        .bind(event_id.as_i64())
        .bind(user_id.as_str())
        .bind(leave_time.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to close participant: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn bulk_close_participants(
        &self,
        event_id: EventId,
        leave_time: Timestamp,
    ) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE session_participants SET left_at = $2
            WHERE event_id = $1 AND left_at IS NULL
            "#,
        )
        .bind(event_id.as_i64())
        .bind(leave_time.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to close participants: {}", e)))?;

        Ok(result.rows_affected())
    }
}

fn row_to_session(row: sqlx::postgres::PgRow) -> Result<LiveSession, DomainError> {
    let event_id: i64 = row
        .try_get("event_id")
        .map_err(|e| DomainError::storage(format!("Failed to get event_id: {}", e)))?;
    let start_time: chrono::DateTime<chrono::Utc> = row
        .try_get("start_time")
        .map_err(|e| DomainError::storage(format!("Failed to get start_time: {}", e)))?;
    let end_time: chrono::DateTime<chrono::Utc> = row
        .try_get("end_time")
        .map_err(|e| DomainError::storage(format!("Failed to get end_time: {}", e)))?;
    let is_active: bool = row
        .try_get("is_active")
        .map_err(|e| DomainError::storage(format!("Failed to get is_active: {}", e)))?;

    Ok(LiveSession::reconstitute(
        EventId::new(event_id),
        Timestamp::from_datetime(start_time),
        Timestamp::from_datetime(end_time),
        is_active,
    ))
}

fn row_to_participant(row: sqlx::postgres::PgRow) -> Result<Participant, DomainError> {
    let event_id: i64 = row
        .try_get("event_id")
        .map_err(|e| DomainError::storage(format!("Failed to get event_id: {}", e)))?;
    let user_id: String = row
        .try_get("user_id")
        .map_err(|e| DomainError::storage(format!("Failed to get user_id: {}", e)))?;
    let username: String = row
        .try_get("username")
        .map_err(|e| DomainError::storage(format!("Failed to get username: {}", e)))?;
    let join_time: chrono::DateTime<chrono::Utc> = row
        .try_get("join_time")
        .map_err(|e| DomainError::storage(format!("Failed to get join_time: {}", e)))?;
    let planned_minutes: i64 = row
        .try_get("planned_minutes")
        .map_err(|e| DomainError::storage(format!("Failed to get planned_minutes: {}", e)))?;
    let left_at: Option<chrono::DateTime<chrono::Utc>> = row
        .try_get("left_at")
        .map_err(|e| DomainError::storage(format!("Failed to get left_at: {}", e)))?;

    Ok(Participant::reconstitute(
        EventId::new(event_id),
        UserId::new(user_id)
            .map_err(|e| DomainError::storage(format!("Invalid user_id: {}", e)))?,
        username,
        Timestamp::from_datetime(join_time),
        planned_minutes,
        left_at.map(Timestamp::from_datetime),
    ))
}
