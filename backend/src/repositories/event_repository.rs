//! Database repository for event management operations.

use crate::database::models::{CreateEvent, Event};
use anyhow::Result;
use async_trait::async_trait;
use sqlx::SqlitePool;

/// Storage capabilities the event services depend on.
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create_event(&self, event: CreateEvent) -> Result<Event>;
    async fn get_events(&self) -> Result<Vec<Event>>;
    async fn get_event_by_id(&self, id: i64) -> Result<Option<Event>>;
    /// Persists name, description, location and date-time of `event`.
    async fn update_event(&self, event: &Event) -> Result<()>;
    async fn delete_event(&self, id: i64) -> Result<()>;
}

/// Repository for event database operations.
#[derive(Clone)]
pub struct SqlEventRepository {
    /// Shared SQLite connection pool
    pool: SqlitePool,
}

impl SqlEventRepository {
    /// Creates a new SqlEventRepository instance.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for SqlEventRepository {
    async fn create_event(&self, event: CreateEvent) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (name, description, location, datetime, user_id)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, description, location, datetime, user_id
            "#,
        )
        .bind(event.name)
        .bind(event.description)
        .bind(event.location)
        .bind(event.date_time)
        .bind(event.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    async fn get_events(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, name, description, location, datetime, user_id
            FROM events
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    async fn get_event_by_id(&self, id: i64) -> Result<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, name, description, location, datetime, user_id
            FROM events WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    async fn update_event(&self, event: &Event) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE events
            SET name = ?, description = ?, location = ?, datetime = ?
            WHERE id = ?
            "#,
        )
        .bind(&event.name)
        .bind(&event.description)
        .bind(&event.location)
        .bind(event.date_time)
        .bind(event.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_event(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_support::setup_test_db;
    use crate::repositories::user_repository::{SqlUserRepository, UserRepository};
    use chrono::{Duration, DurationRound, Utc};

    fn new_event(user_id: i64) -> CreateEvent {
        CreateEvent {
            name: "Test Event".to_string(),
            description: "Test Description for event".to_string(),
            location: "Test Location".to_string(),
            // whole seconds so the stored value compares equal after a round-trip
            date_time: (Utc::now() + Duration::hours(24))
                .duration_trunc(Duration::seconds(1))
                .unwrap(),
            user_id,
        }
    }

    async fn setup() -> (SqlEventRepository, i64) {
        let db = setup_test_db().await;
        let owner = SqlUserRepository::new(db.pool().clone())
            .create_user("owner@example.com", "hash")
            .await
            .unwrap();
        (SqlEventRepository::new(db.pool().clone()), owner)
    }

    #[tokio::test]
    async fn test_create_and_get_event() {
        let (repo, owner) = setup().await;
        let input = new_event(owner);

        let created = repo.create_event(input.clone()).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.user_id, owner);

        let fetched = repo.get_event_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.date_time, input.date_time);
    }

    #[tokio::test]
    async fn test_get_missing_event_is_none() {
        let (repo, _) = setup().await;
        assert!(repo.get_event_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_events_lists_all() {
        let (repo, owner) = setup().await;
        repo.create_event(new_event(owner)).await.unwrap();
        repo.create_event(new_event(owner)).await.unwrap();

        let events = repo.get_events().await.unwrap();
        assert_eq!(events.len(), 2);
        assert!(events[0].id < events[1].id);
    }

    #[tokio::test]
    async fn test_update_event_overwrites_fields() {
        let (repo, owner) = setup().await;
        let mut event = repo.create_event(new_event(owner)).await.unwrap();

        event.name = "Renamed Event".to_string();
        event.location = "Elsewhere".to_string();
        repo.update_event(&event).await.unwrap();

        let fetched = repo.get_event_by_id(event.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Renamed Event");
        assert_eq!(fetched.location, "Elsewhere");
        assert_eq!(fetched.user_id, owner);
    }

    #[tokio::test]
    async fn test_delete_event() {
        let (repo, owner) = setup().await;
        let event = repo.create_event(new_event(owner)).await.unwrap();

        repo.delete_event(event.id).await.unwrap();
        assert!(repo.get_event_by_id(event.id).await.unwrap().is_none());
    }
}
