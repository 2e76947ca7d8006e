//! Database repository for user management operations.
//!
//! Provides the persistence operations for system users.

use crate::database::models::User;
use anyhow::Result;
use async_trait::async_trait;
use sqlx::SqlitePool;

/// Storage capabilities the user service depends on.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a user with an already hashed password and returns its id.
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<i64>;
    /// Retrieves a user by email, `None` if no row matches.
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    /// Retrieves every user in insertion order.
    async fn get_users(&self) -> Result<Vec<User>>;
}

/// Repository for user database operations.
///
/// Handles all persistence operations for the User entity.
#[derive(Clone)]
pub struct SqlUserRepository {
    /// Shared SQLite connection pool
    pool: SqlitePool,
}

impl SqlUserRepository {
    /// Creates a new SqlUserRepository instance.
    ///
    /// # Arguments
    /// * `pool` - SQLite connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (email, password)
            VALUES (?, ?)
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password
            FROM users WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn get_users(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}
