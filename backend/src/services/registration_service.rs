//! Registration business logic service.

use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::event_repository::EventRepository;
use crate::repositories::registration_repository::RegistrationRepository;
use std::sync::Arc;

/// Service layer for registering users to events.
pub struct EventRegisterService {
    events: Arc<dyn EventRepository>,
    registrations: Arc<dyn RegistrationRepository>,
}

impl EventRegisterService {
    pub fn new(
        events: Arc<dyn EventRepository>,
        registrations: Arc<dyn RegistrationRepository>,
    ) -> Self {
        Self {
            events,
            registrations,
        }
    }

    /// Registers a user for an event. Registering twice adds a second row.
    ///
    /// # Errors
    /// Returns `ServiceError::NotFound` if the event doesn't exist
    pub async fn register_for_event(&self, user_id: i64, event_id: i64) -> ServiceResult<()> {
        self.ensure_event_exists(event_id).await?;

        let id = self
            .registrations
            .register_event(user_id, event_id)
            .await?;
        tracing::info!(
            "User {} registered for event {} (registration {})",
            user_id,
            event_id,
            id
        );
        Ok(())
    }

    /// Cancels the user's oldest registration for an event.
    ///
    /// # Errors
    /// Returns `ServiceError::NotFound` for entity `Event` if the event doesn't
    /// exist and for entity `Registration` if the user isn't registered.
    pub async fn cancel_registration(&self, user_id: i64, event_id: i64) -> ServiceResult<()> {
        self.ensure_event_exists(event_id).await?;

        let registration = self
            .registrations
            .get_registration(user_id, event_id)
            .await?
            .ok_or_else(|| {
                ServiceError::not_found(
                    "Registration",
                    format!("user {} for event {}", user_id, event_id),
                )
            })?;

        self.registrations
            .delete_registration(registration.id)
            .await?;
        tracing::info!("User {} cancelled registration for event {}", user_id, event_id);
        Ok(())
    }

    async fn ensure_event_exists(&self, event_id: i64) -> ServiceResult<()> {
        match self.events.get_event_by_id(event_id).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::not_found("Event", event_id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::CreateEvent;
    use crate::repositories::memory::{InMemoryEvents, InMemoryRegistrations};
    use chrono::{Duration, Utc};

    struct Fixture {
        service: EventRegisterService,
        registrations: Arc<InMemoryRegistrations>,
        event_id: i64,
    }

    async fn setup() -> Fixture {
        let events = Arc::new(InMemoryEvents::default());
        let registrations = Arc::new(InMemoryRegistrations::default());
        let event = events
            .create_event(CreateEvent {
                name: "Test Event".to_string(),
                description: "Test Description for event".to_string(),
                location: "Test Location".to_string(),
                date_time: Utc::now() + Duration::hours(24),
                user_id: 1,
            })
            .await
            .unwrap();

        Fixture {
            service: EventRegisterService::new(events, registrations.clone()),
            registrations,
            event_id: event.id,
        }
    }

    #[tokio::test]
    async fn test_register_for_event() {
        let f = setup().await;

        f.service.register_for_event(5, f.event_id).await.unwrap();
        assert_eq!(f.registrations.count(5, f.event_id), 1);
    }

    #[tokio::test]
    async fn test_register_for_missing_event() {
        let f = setup().await;

        let err = f.service.register_for_event(5, 999).await.unwrap_err();
        assert!(err.is_not_found("Event"));
        assert_eq!(f.registrations.count(5, 999), 0);
    }

    #[tokio::test]
    async fn test_duplicate_registrations_are_kept() {
        let f = setup().await;

        f.service.register_for_event(5, f.event_id).await.unwrap();
        f.service.register_for_event(5, f.event_id).await.unwrap();
        assert_eq!(f.registrations.count(5, f.event_id), 2);

        f.service.cancel_registration(5, f.event_id).await.unwrap();
        assert_eq!(f.registrations.count(5, f.event_id), 1);
    }

    #[tokio::test]
    async fn test_cancel_twice_fails_with_registration_not_found() {
        let f = setup().await;
        f.service.register_for_event(5, f.event_id).await.unwrap();

        f.service.cancel_registration(5, f.event_id).await.unwrap();
        let err = f
            .service
            .cancel_registration(5, f.event_id)
            .await
            .unwrap_err();

        assert!(err.is_not_found("Registration"));
        assert!(err.to_string().starts_with("Registration not found"));
    }

    #[tokio::test]
    async fn test_cancel_for_missing_event() {
        let f = setup().await;

        let err = f.service.cancel_registration(5, 999).await.unwrap_err();
        assert!(err.is_not_found("Event"));
    }

    #[tokio::test]
    async fn test_cancel_only_touches_own_registration() {
        let f = setup().await;
        f.service.register_for_event(5, f.event_id).await.unwrap();

        let err = f
            .service
            .cancel_registration(6, f.event_id)
            .await
            .unwrap_err();

        assert!(err.is_not_found("Registration"));
        assert_eq!(f.registrations.count(5, f.event_id), 1);
    }
}
