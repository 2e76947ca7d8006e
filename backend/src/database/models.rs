//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database. Request payloads that feed them live next to them so the
//! validation rules sit beside the columns they protect.

use crate::utils::validators::validate_future_date;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    /// Bcrypt hash, never the plaintext.
    #[serde(rename = "password")]
    #[sqlx(rename = "password")]
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub location: String,
    #[sqlx(rename = "datetime")]
    pub date_time: DateTime<Utc>,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: i64,
    pub event_id: i64,
    pub user_id: i64,
}

/// Event fields supplied by a client on create and update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    #[validate(length(
        min = 3,
        max = 100,
        message = "Event name must be between 3-100 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 5,
        max = 500,
        message = "Description must be between 5-500 characters"
    ))]
    pub description: String,

    #[validate(length(
        min = 3,
        max = 100,
        message = "Location must be between 3-100 characters"
    ))]
    pub location: String,

    #[serde(alias = "datetime")]
    #[validate(custom(function = "validate_future_date"))]
    pub date_time: DateTime<Utc>,
}

/// Insert payload for the events table.
#[derive(Debug, Clone)]
pub struct CreateEvent {
    pub name: String,
    pub description: String,
    pub location: String,
    pub date_time: DateTime<Utc>,
    pub user_id: i64,
}

impl CreateEvent {
    pub fn from_request(request: EventRequest, user_id: i64) -> Self {
        Self {
            name: request.name,
            description: request.description,
            location: request.location,
            date_time: request.date_time,
            user_id,
        }
    }
}

impl Event {
    /// Overwrites the mutable fields; id and owner stay as they are.
    pub fn apply(&mut self, request: EventRequest) {
        self.name = request.name;
        self.description = request.description;
        self.location = request.location;
        self.date_time = request.date_time;
    }
}
