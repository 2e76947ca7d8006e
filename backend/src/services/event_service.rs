//! Event business logic service.
//!
//! Reads and creation are open to any authenticated user; updates and
//! deletes are reserved for the event's owner.

use crate::database::models::{CreateEvent, Event, EventRequest};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::event_repository::EventRepository;
use std::sync::Arc;

pub(crate) const FORBIDDEN_MESSAGE: &str = "You're not allowed to perform this action";

/// Service layer for event operations.
pub struct EventService {
    repo: Arc<dyn EventRepository>,
}

impl EventService {
    /// Creates a new EventService instance.
    pub fn new(repo: Arc<dyn EventRepository>) -> Self {
        Self { repo }
    }

    /// Retrieves all events.
    pub async fn list_events(&self) -> ServiceResult<Vec<Event>> {
        Ok(self.repo.get_events().await?)
    }

    /// Retrieves an event by id.
    ///
    /// # Errors
    /// Returns `ServiceError::NotFound` if the event doesn't exist
    pub async fn get_event(&self, id: i64) -> ServiceResult<Event> {
        self.repo
            .get_event_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Event", id.to_string()))
    }

    /// Creates an event owned by `owner_id`.
    pub async fn create_event(&self, request: EventRequest, owner_id: i64) -> ServiceResult<Event> {
        let event = self
            .repo
            .create_event(CreateEvent::from_request(request, owner_id))
            .await?;

        tracing::info!("User {} created event {}", owner_id, event.id);
        Ok(event)
    }

    /// Overwrites an event's details on behalf of its owner.
    ///
    /// # Errors
    /// `NotFound` if the event doesn't exist, `PermissionDenied` if the
    /// requester is not the owner.
    pub async fn update_event(
        &self,
        id: i64,
        requester_id: i64,
        request: EventRequest,
    ) -> ServiceResult<Event> {
        let mut event = self.owned_event(id, requester_id).await?;
        event.apply(request);

        self.repo.update_event(&event).await?;
        Ok(event)
    }

    /// Deletes an event on behalf of its owner.
    ///
    /// # Errors
    /// `NotFound` if the event doesn't exist, `PermissionDenied` if the
    /// requester is not the owner.
    pub async fn delete_event(&self, id: i64, requester_id: i64) -> ServiceResult<()> {
        let event = self.owned_event(id, requester_id).await?;

        self.repo.delete_event(event.id).await?;
        tracing::info!("User {} deleted event {}", requester_id, id);
        Ok(())
    }

    async fn owned_event(&self, id: i64, requester_id: i64) -> ServiceResult<Event> {
        let event = self.get_event(id).await?;

        if event.user_id != requester_id {
            tracing::warn!(
                "User {} attempted to modify event {} owned by {}",
                requester_id,
                id,
                event.user_id
            );
            return Err(ServiceError::permission_denied(FORBIDDEN_MESSAGE));
        }

        Ok(event)
    }
}
