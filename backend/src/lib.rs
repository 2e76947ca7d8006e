//! Event booking backend.
//!
//! Users sign up and log in for a bearer token, then create, list, update and
//! delete events and register for them. The router is assembled here so the
//! binary and the HTTP tests share one wiring.

pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod utils;

use crate::api::common::ApiResponse;
use crate::config::Config;
use crate::database::Database;
use crate::repositories::event_repository::SqlEventRepository;
use crate::repositories::registration_repository::SqlRegistrationRepository;
use crate::repositories::user_repository::SqlUserRepository;
use crate::services::event_service::EventService;
use crate::services::registration_service::EventRegisterService;
use crate::services::user_service::UserService;
use crate::utils::jwt::JwtUtils;
use axum::{Extension, Router, response::Json, routing::get};
use std::sync::Arc;

/// Builds the application router on top of an open database.
pub fn app(db: &Database, config: &Config) -> Router {
    let pool = db.pool().clone();
    let jwt_utils = JwtUtils::new(&config.jwt_secret);

    let events = Arc::new(SqlEventRepository::new(pool.clone()));
    let user_service = Arc::new(UserService::new(
        Arc::new(SqlUserRepository::new(pool.clone())),
        jwt_utils.clone(),
        config.bcrypt_cost,
    ));
    let event_service = Arc::new(EventService::new(events.clone()));
    let register_service = Arc::new(EventRegisterService::new(
        events,
        Arc::new(SqlRegistrationRepository::new(pool)),
    ));

    Router::new()
        .route("/", get(root_handler))
        .merge(auth::routes::auth_router())
        .nest("/events", api::event::routes::event_router())
        .nest("/users", api::user::routes::user_router())
        .layer(Extension(user_service))
        .layer(Extension(event_service))
        .layer(Extension(register_service))
        .layer(Extension(jwt_utils))
}

async fn root_handler() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::success(
        serde_json::json!({
            "service": "Eventbook Backend",
            "version": env!("CARGO_PKG_VERSION")
        }),
        "Welcome to Eventbook API",
    ))
}
