//! Registration routes, merged under `/events` by the event router.

use super::handlers::{cancel_registration, register_for_event};
use axum::{Router, routing::post};

pub fn registration_router() -> Router {
    Router::new().route(
        "/{id}/register",
        post(register_for_event).delete(cancel_registration),
    )
}
