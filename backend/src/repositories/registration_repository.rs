//! Database repository for event registrations.

use crate::database::models::Registration;
use anyhow::Result;
use async_trait::async_trait;
use sqlx::SqlitePool;

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Inserts a registration row. Duplicate (user, event) pairs are allowed.
    async fn register_event(&self, user_id: i64, event_id: i64) -> Result<i64>;
    /// Oldest registration matching the pair, if any.
    async fn get_registration(&self, user_id: i64, event_id: i64)
    -> Result<Option<Registration>>;
    async fn delete_registration(&self, id: i64) -> Result<()>;
}

/// Repository for registration database operations.
#[derive(Clone)]
pub struct SqlRegistrationRepository {
    /// Shared SQLite connection pool
    pool: SqlitePool,
}

impl SqlRegistrationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationRepository for SqlRegistrationRepository {
    async fn register_event(&self, user_id: i64, event_id: i64) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO registrations (user_id, event_id)
            VALUES (?, ?)
            "#,
        )
        .bind(user_id)
        .bind(event_id)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn get_registration(
        &self,
        user_id: i64,
        event_id: i64,
    ) -> Result<Option<Registration>> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            SELECT id, event_id, user_id
            FROM registrations
            WHERE user_id = ? AND event_id = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(registration)
    }

    async fn delete_registration(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM registrations WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
