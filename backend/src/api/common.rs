//! JSON error envelope shared by every handler.
//!
//! Maps `ServiceError` onto status codes and turns validation failures,
//! unreadable bodies and non-numeric path ids into the same envelope.

use crate::errors::ServiceError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Error half of every handler's return type; axum sends it as JSON.
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

/// Standard API response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Indicates if the request was successful
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message
    pub message: String,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,
    /// Request timestamp
    pub timestamp: String,
}

/// Error details for failed requests
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Machine-readable error type identifier
    pub error_type: String,
    /// Field-specific validation errors when applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-specific validation error details
#[derive(Debug, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the field with validation error
    pub field: String,
    /// Description of the validation failure
    pub message: String,
}

/// Plain `{ "message": ... }` body used by mutating endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
            error: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Create an error response
    pub fn error(
        message: impl Into<String>,
        error_type: impl Into<String>,
        details: Option<Vec<FieldError>>,
    ) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message: message.into(),
            error: Some(ErrorDetails {
                error_type: error_type.into(),
                details,
            }),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Builds an error envelope with the given status.
pub fn error_response(
    status: StatusCode,
    error_type: &str,
    message: impl Into<String>,
) -> ApiError {
    (
        status,
        Json(ApiResponse::<()>::error(message, error_type, None)),
    )
}

/// Converts ServiceError to appropriate HTTP response with standard format
pub fn service_error_to_http(error: ServiceError) -> ApiError {
    let (status, error_type, message) = match error {
        ServiceError::Validation { message } => {
            (StatusCode::BAD_REQUEST, "validation_error", message)
        }
        ServiceError::Unauthorized { message } => {
            (StatusCode::UNAUTHORIZED, "unauthorized", message)
        }
        ServiceError::PermissionDenied { message } => {
            (StatusCode::FORBIDDEN, "permission_denied", message)
        }
        ServiceError::NotFound { entity, identifier } => (
            StatusCode::NOT_FOUND,
            "not_found",
            format!("{} '{}' not found", entity, identifier),
        ),
        ServiceError::Database { source } => {
            tracing::error!("Database error: {}", source);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "database_error",
                "Internal server error".to_string(),
            )
        }
        ServiceError::InternalError { message } => {
            tracing::error!("Internal error: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Internal server error".to_string(),
            )
        }
    };

    error_response(status, error_type, message)
}

/// Formats validator::ValidationErrors into field-specific error details
pub fn validation_errors_to_field_errors(errors: validator::ValidationErrors) -> Vec<FieldError> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Invalid value".to_string()),
            })
        })
        .collect()
}

/// Helper to create validation error response
pub fn validation_error_response(errors: validator::ValidationErrors) -> ApiError {
    let field_errors = validation_errors_to_field_errors(errors);
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error(
            "Validation failed",
            "validation_error",
            Some(field_errors),
        )),
    )
}

/// Body that could not be read as the expected JSON shape.
pub fn json_rejection_response(rejection: JsonRejection) -> ApiError {
    tracing::debug!("Rejected request body: {}", rejection.body_text());
    error_response(
        StatusCode::BAD_REQUEST,
        "invalid_request",
        "Cannot parse request data",
    )
}

/// Parses a numeric path segment, 400 when it isn't one.
pub fn parse_id(raw: &str, what: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| {
        error_response(
            StatusCode::BAD_REQUEST,
            "invalid_request",
            format!("Could not parse {} id", what),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use validator::Validate;

    fn body(response: &ApiError) -> Value {
        serde_json::to_value(&response.1.0).unwrap()
    }

    #[test]
    fn test_service_error_status_mapping() {
        let cases = [
            (ServiceError::validation("bad"), StatusCode::BAD_REQUEST),
            (ServiceError::unauthorized("no"), StatusCode::UNAUTHORIZED),
            (ServiceError::permission_denied("no"), StatusCode::FORBIDDEN),
            (ServiceError::not_found("Event", "1"), StatusCode::NOT_FOUND),
            (
                ServiceError::internal_error("boom"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(service_error_to_http(error).0, expected);
        }
    }

    #[test]
    fn test_not_found_message_names_entity() {
        let response = service_error_to_http(ServiceError::not_found("Event", "42"));
        let json = body(&response);

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Event '42' not found");
        assert_eq!(json["error"]["error_type"], "not_found");
    }

    #[test]
    fn test_database_error_hides_details() {
        let error = ServiceError::from(anyhow::anyhow!("no such table: secrets"));
        let response = service_error_to_http(error);

        assert_eq!(response.0, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body(&response).to_string().contains("secrets"));
        assert_eq!(body(&response)["message"], "Internal server error");
    }

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 3, message = "too short"))]
        name: String,
    }

    #[test]
    fn test_validation_error_response_lists_fields() {
        let errors = Probe {
            name: "ab".to_string(),
        }
        .validate()
        .unwrap_err();

        let response = validation_error_response(errors);
        let json = body(&response);

        assert_eq!(response.0, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Validation failed");
        assert_eq!(json["error"]["details"][0]["field"], "name");
        assert_eq!(json["error"]["details"][0]["message"], "too short");
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("17", "event").unwrap(), 17);

        let err = parse_id("abc", "event").unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
        assert_eq!(body(&err)["message"], "Could not parse event id");
    }
}
