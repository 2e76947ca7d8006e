//! Handler functions for registering to and leaving events.

use crate::api::common::{ApiError, MessageResponse, parse_id, service_error_to_http};
use crate::services::registration_service::EventRegisterService;
use crate::utils::jwt::Claims;
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::Json as ResponseJson,
};
use std::sync::Arc;

/// Registers the caller for an event.
#[axum::debug_handler]
pub async fn register_for_event(
    Extension(claims): Extension<Claims>,
    Extension(service): Extension<Arc<EventRegisterService>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, ResponseJson<MessageResponse>), ApiError> {
    let event_id = parse_id(&id, "event")?;

    service
        .register_for_event(claims.user_id(), event_id)
        .await
        .map_err(service_error_to_http)?;

    Ok((
        StatusCode::CREATED,
        ResponseJson(MessageResponse::new("Registered for event")),
    ))
}

/// Cancels the caller's registration for an event.
#[axum::debug_handler]
pub async fn cancel_registration(
    Extension(claims): Extension<Claims>,
    Extension(service): Extension<Arc<EventRegisterService>>,
    Path(id): Path<String>,
) -> Result<ResponseJson<MessageResponse>, ApiError> {
    let event_id = parse_id(&id, "event")?;

    service
        .cancel_registration(claims.user_id(), event_id)
        .await
        .map_err(service_error_to_http)?;

    Ok(ResponseJson(MessageResponse::new("Registration cancelled")))
}
