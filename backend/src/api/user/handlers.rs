//! Handler functions for user API endpoints.

use crate::api::common::{ApiError, service_error_to_http};
use crate::database::models::User;
use crate::services::user_service::UserService;
use crate::utils::jwt::Claims;
use axum::{
    extract::{Extension, Json},
    http::StatusCode,
};
use std::sync::Arc;

/// Lists every registered user.
#[axum::debug_handler]
pub async fn get_users(
    Extension(claims): Extension<Claims>,
    Extension(service): Extension<Arc<UserService>>,
) -> Result<Json<Vec<User>>, ApiError> {
    tracing::debug!("Listing users for user {}", claims.user_id());

    let users = service.list_users().await.map_err(service_error_to_http)?;
    Ok(Json(users))
}
