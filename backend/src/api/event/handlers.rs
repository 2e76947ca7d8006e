//! Handler functions for event management API endpoints.

use crate::api::common::{
    ApiError, MessageResponse, json_rejection_response, parse_id, service_error_to_http,
    validation_error_response,
};
use crate::database::models::{Event, EventRequest};
use crate::services::event_service::EventService;
use crate::utils::jwt::Claims;
use axum::{
    extract::{Extension, Json, Path, rejection::JsonRejection},
    http::StatusCode,
    response::Json as ResponseJson,
};
use serde::Serialize;
use std::sync::Arc;
use validator::Validate;

/// Body returned when an event is created.
#[derive(Debug, Serialize)]
pub struct CreatedEventResponse {
    pub message: String,
    pub event: Event,
}

fn bind_event(
    payload: Result<Json<EventRequest>, JsonRejection>,
) -> Result<EventRequest, ApiError> {
    let Json(request) = payload.map_err(json_rejection_response)?;
    request.validate().map_err(validation_error_response)?;
    Ok(request)
}

/// Retrieves all events.
#[axum::debug_handler]
pub async fn get_events(
    Extension(service): Extension<Arc<EventService>>,
) -> Result<ResponseJson<Vec<Event>>, ApiError> {
    let events = service.list_events().await.map_err(service_error_to_http)?;
    Ok(ResponseJson(events))
}

/// Retrieves a specific event by ID.
#[axum::debug_handler]
pub async fn get_event_by_id(
    Extension(service): Extension<Arc<EventService>>,
    Path(id): Path<String>,
) -> Result<ResponseJson<Event>, ApiError> {
    let id = parse_id(&id, "event")?;

    let event = service.get_event(id).await.map_err(service_error_to_http)?;
    Ok(ResponseJson(event))
}

/// Creates an event owned by the caller.
#[axum::debug_handler]
pub async fn create_event(
    Extension(claims): Extension<Claims>,
    Extension(service): Extension<Arc<EventService>>,
    payload: Result<Json<EventRequest>, JsonRejection>,
) -> Result<(StatusCode, ResponseJson<CreatedEventResponse>), ApiError> {
    let request = bind_event(payload)?;

    let event = service
        .create_event(request, claims.user_id())
        .await
        .map_err(service_error_to_http)?;

    Ok((
        StatusCode::CREATED,
        ResponseJson(CreatedEventResponse {
            message: "Event created".to_string(),
            event,
        }),
    ))
}

/// Replaces an event's details. Owner only.
#[axum::debug_handler]
pub async fn update_event(
    Extension(claims): Extension<Claims>,
    Extension(service): Extension<Arc<EventService>>,
    Path(id): Path<String>,
    payload: Result<Json<EventRequest>, JsonRejection>,
) -> Result<ResponseJson<MessageResponse>, ApiError> {
    let id = parse_id(&id, "event")?;
    let request = bind_event(payload)?;

    service
        .update_event(id, claims.user_id(), request)
        .await
        .map_err(service_error_to_http)?;

    Ok(ResponseJson(MessageResponse::new("Event updated successfully")))
}

/// Deletes an event. Owner only.
#[axum::debug_handler]
pub async fn delete_event(
    Extension(claims): Extension<Claims>,
    Extension(service): Extension<Arc<EventService>>,
    Path(id): Path<String>,
) -> Result<ResponseJson<MessageResponse>, ApiError> {
    let id = parse_id(&id, "event")?;

    service
        .delete_event(id, claims.user_id())
        .await
        .map_err(service_error_to_http)?;

    Ok(ResponseJson(MessageResponse::new("Event deleted successfully")))
}
