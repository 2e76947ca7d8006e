//! Handler functions for signup and login.
//!
//! These functions bind and validate request bodies, then defer to
//! `UserService` for hashing, credential checks and token issuance.

use crate::api::common::{
    ApiError, MessageResponse, json_rejection_response, service_error_to_http,
    validation_error_response,
};
use crate::auth::models::{LoginRequest, LoginResponse, SignupRequest};
use crate::errors::ServiceError;
use crate::services::user_service::UserService;
use axum::{
    extract::{Extension, Json, rejection::JsonRejection},
    http::StatusCode,
    response::Json as ResponseJson,
};
use std::sync::Arc;
use validator::Validate;

/// Handle user signup request
#[axum::debug_handler]
pub async fn signup(
    Extension(service): Extension<Arc<UserService>>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, ResponseJson<MessageResponse>), ApiError> {
    let Json(payload) = payload.map_err(json_rejection_response)?;
    payload.validate().map_err(validation_error_response)?;

    service
        .create_user(&payload.email, &payload.password)
        .await
        .map_err(service_error_to_http)?;

    Ok((
        StatusCode::CREATED,
        ResponseJson(MessageResponse::new("User created successfully")),
    ))
}

/// Handle user login request
#[axum::debug_handler]
pub async fn login(
    Extension(service): Extension<Arc<UserService>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ResponseJson<LoginResponse>, ApiError> {
    let Json(payload) = payload.map_err(json_rejection_response)?;
    payload.validate().map_err(validation_error_response)?;

    let token = match service.login(&payload.email, &payload.password).await {
        Ok(token) => token,
        // Unknown email and wrong password look the same to the client.
        Err(ServiceError::NotFound { .. }) | Err(ServiceError::Unauthorized { .. }) => {
            tracing::info!("Failed login attempt for {}", payload.email);
            return Err(service_error_to_http(ServiceError::unauthorized(
                "Could not authenticate user",
            )));
        }
        Err(error) => return Err(service_error_to_http(error)),
    };

    Ok(ResponseJson(LoginResponse {
        message: "Login successful".to_string(),
        token,
    }))
}
