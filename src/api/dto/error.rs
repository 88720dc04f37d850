//! Error response DTOs.

use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response format.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response with code and message.
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
            request_id: None,
        }
    }

    /// Creates a not-found error response for an entity lookup.
    pub fn not_found_error(entity: &str, field: &str, value: &str) -> Self {
        Self::new(
            "NOT_FOUND",
            &format!("{} with {} '{}' not found", entity, field, value),
        )
    }

    /// Creates a validation error response for a rejected field.
    pub fn validation_error(field: &str, reason: &str) -> Self {
        Self::new(
            "VALIDATION_ERROR",
            &format!("Validation failed for '{}': {}", field, reason),
        )
    }

    /// Adds details to the error response.
    pub fn with_details(mut self, details: &str) -> Self {
        self.details = Some(details.to_string());
        self
    }

    /// Adds request ID to the error response for correlation.
    pub fn with_request_id(mut self, request_id: &str) -> Self {
        self.request_id = Some(request_id.to_string());
        self
    }
}
