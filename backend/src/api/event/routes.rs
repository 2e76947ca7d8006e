//! Defines the HTTP routes for event management.

use super::handlers::{create_event, delete_event, get_event_by_id, get_events, update_event};
use crate::api::registration::routes::registration_router;
use crate::auth::middleware::jwt_auth;
use axum::{Router, middleware, routing::get};

pub fn event_router() -> Router {
    Router::new()
        .route("/", get(get_events).post(create_event))
        .route(
            "/{id}",
            get(get_event_by_id).put(update_event).delete(delete_event),
        )
        .merge(registration_router())
        .route_layer(middleware::from_fn(jwt_auth))
}
