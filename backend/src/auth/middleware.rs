//! Middleware for protecting authenticated routes.
//!
//! Validates the bearer token and hands the decoded claims to handlers
//! through request extensions.

use crate::api::common::{ApiError, error_response};
use crate::utils::jwt::JwtUtils;
use axum::{
    extract::Request,
    http::{StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

const BEARER_PREFIX: &str = "Bearer ";

fn not_authorized() -> ApiError {
    error_response(StatusCode::UNAUTHORIZED, "unauthorized", "Not authorized")
}

/// JWT authentication middleware
pub async fn jwt_auth(mut request: Request, next: Next) -> Result<Response, ApiError> {
    let jwt_utils = request.extensions().get::<JwtUtils>().cloned().ok_or_else(|| {
        tracing::error!("JwtUtils extension missing from router");
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            "Internal server error",
        )
    })?;

    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix(BEARER_PREFIX))
        .ok_or_else(not_authorized)?;

    match jwt_utils.validate_token(token) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(e) => {
            tracing::debug!("Rejected token: {}", e);
            Err(not_authorized())
        }
    }
}
