//! Defines the HTTP routes for authentication.
//!
//! Both routes are public; everything else in the API sits behind `jwt_auth`.

use crate::auth::handlers::{login, signup};
use axum::{Router, routing::post};

/// Creates the authentication router with signup and login
pub fn auth_router() -> Router {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}
