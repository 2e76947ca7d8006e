//! Defines the HTTP routes for users.

use super::handlers::get_users;
use crate::auth::middleware::jwt_auth;
use axum::{Router, middleware, routing::get};

pub fn user_router() -> Router {
    Router::new()
        .route("/", get(get_users))
        .route_layer(middleware::from_fn(jwt_auth))
}
