//! PostgreSQL implementation of InterestStore.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, EventId, UserId};
use crate::domain::interest::Interest;
use crate::ports::InterestStore;

/// PostgreSQL implementation of InterestStore.
#[derive(Clone)]
pub struct PostgresInterestStore {
    pool: PgPool,
}

impl PostgresInterestStore {
    /// Creates a new PostgresInterestStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InterestStore for PostgresInterestStore {
    async fn get_interest(
        &self,
        event_id: EventId,
        user_id: &UserId,
    ) -> Result<Option<Interest>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT event_id, user_id, username, wants_connection
            FROM event_interests
            WHERE event_id = $1 AND user_id = $2
            "#,
        )
        .bind(event_id.as_i64())
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to fetch interest: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_interest(row)?)),
            None => Ok(None),
        }
    }

    async fn insert_interest(&self, interest: &Interest) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO event_interests (event_id, user_id, username, wants_connection)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (event_id, user_id) DO NOTHING
            "#,
        )
        .bind(interest.event_id().as_i64())
        .bind(interest.user_id().as_str())
        .bind(interest.username())
        .bind(interest.wants_connection())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to insert interest: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::AlreadyRegistered,
                format!(
                    "User {} is already registered for event {}",
                    interest.user_id(),
                    interest.event_id()
                ),
            ));
        }

        Ok(())
    }

    async fn update_interest(&self, interest: &Interest) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE event_interests SET username = $3, wants_connection = $4
            WHERE event_id = $1 AND user_id = $2
            "#,
        )
        .bind(interest.event_id().as_i64())
        .bind(interest.user_id().as_str())
        .bind(interest.username())
        .bind(interest.wants_connection())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update interest: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::NotRegistered,
                format!(
                    "User {} is not registered for event {}",
                    interest.user_id(),
                    interest.event_id()
                ),
            ));
        }

        Ok(())
    }

    async fn delete_interest(
        &self,
        event_id: EventId,
        user_id: &UserId,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(
            "DELETE FROM event_interests WHERE event_id = $1 AND user_id = $2",
        )
        .bind(event_id.as_i64())
        .bind(user_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to delete interest: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_for_event(&self, event_id: EventId) -> Result<Vec<Interest>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT event_id, user_id, username, wants_connection
            FROM event_interests
            WHERE event_id = $1
            ORDER BY username
            "#,
        )
        .bind(event_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list interests: {}", e)))?;

        rows.into_iter().map(row_to_interest).collect()
    }
}

fn row_to_interest(row: sqlx::postgres::PgRow) -> Result<Interest, DomainError> {
    let event_id: i64 = row
        .try_get("event_id")
        .map_err(|e| DomainError::storage(format!("Failed to get event_id: {}", e)))?;
    let user_id: String = row
        .try_get("user_id")
        .map_err(|e| DomainError::storage(format!("Failed to get user_id: {}", e)))?;
    let username: String = row
        .try_get("username")
        .map_err(|e| DomainError::storage(format!("Failed to get username: {}", e)))?;
    let wants_connection: bool = row
        .try_get("wants_connection")
        .map_err(|e| DomainError::storage(format!("Failed to get wants_connection: {}", e)))?;

    Ok(Interest::reconstitute(
        EventId::new(event_id),
        UserId::new(user_id)
            .map_err(|e| DomainError::storage(format!("Invalid user_id: {}", e)))?,
        username,
        wants_connection,
    ))
}
