//! In-memory repository fakes for service tests.

use super::event_repository::EventRepository;
use super::registration_repository::RegistrationRepository;
use super::user_repository::UserRepository;
use crate::database::models::{CreateEvent, Event, Registration, User};
use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use std::sync::Mutex;

/// Rows are kept in insertion order, ids start at 1.
#[derive(Default)]
pub struct InMemoryUsers {
    rows: Mutex<Vec<User>>,
    failing: bool,
}

impl InMemoryUsers {
    /// A store whose every call fails like a dropped connection.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<i64> {
        if self.failing {
            bail!("database connection failed");
        }
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|u| u.email == email) {
            bail!("UNIQUE constraint failed: users.email");
        }
        let id = rows.len() as i64 + 1;
        rows.push(User {
            id,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        });
        Ok(id)
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        if self.failing {
            bail!("database connection failed");
        }
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|u| u.email == email).cloned())
    }

    async fn get_users(&self) -> Result<Vec<User>> {
        if self.failing {
            bail!("database connection failed");
        }
        Ok(self.rows.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct InMemoryEvents {
    rows: Mutex<Vec<Event>>,
    next_id: Mutex<i64>,
    failing: bool,
}

impl InMemoryEvents {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn get(&self, id: i64) -> Option<Event> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned()
    }
}

#[async_trait]
impl EventRepository for InMemoryEvents {
    async fn create_event(&self, event: CreateEvent) -> Result<Event> {
        if self.failing {
            bail!("database connection failed");
        }
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let created = Event {
            id: *next_id,
            name: event.name,
            description: event.description,
            location: event.location,
            date_time: event.date_time,
            user_id: event.user_id,
        };
        self.rows.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn get_events(&self) -> Result<Vec<Event>> {
        if self.failing {
            bail!("database connection failed");
        }
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn get_event_by_id(&self, id: i64) -> Result<Option<Event>> {
        if self.failing {
            bail!("database connection failed");
        }
        Ok(self.get(id))
    }

    async fn update_event(&self, event: &Event) -> Result<()> {
        if self.failing {
            bail!("database connection failed");
        }
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|e| e.id == event.id)
            .ok_or_else(|| anyhow!("no event with id {}", event.id))?;
        row.name = event.name.clone();
        row.description = event.description.clone();
        row.location = event.location.clone();
        row.date_time = event.date_time;
        Ok(())
    }

    async fn delete_event(&self, id: i64) -> Result<()> {
        if self.failing {
            bail!("database connection failed");
        }
        self.rows.lock().unwrap().retain(|e| e.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryRegistrations {
    rows: Mutex<Vec<Registration>>,
    next_id: Mutex<i64>,
}

impl InMemoryRegistrations {
    pub fn count(&self, user_id: i64, event_id: i64) -> usize {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id && r.event_id == event_id)
            .count()
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryRegistrations {
    async fn register_event(&self, user_id: i64, event_id: i64) -> Result<i64> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        self.rows.lock().unwrap().push(Registration {
            id: *next_id,
            event_id,
            user_id,
        });
        Ok(*next_id)
    }

    async fn get_registration(
        &self,
        user_id: i64,
        event_id: i64,
    ) -> Result<Option<Registration>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|r| r.user_id == user_id && r.event_id == event_id)
            .cloned())
    }

    async fn delete_registration(&self, id: i64) -> Result<()> {
        self.rows.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }
}
