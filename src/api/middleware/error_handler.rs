//! Error handler for converting AppError to HTTP responses.
//!
//! This module implements the IntoResponse trait for AppError,
//! providing consistent error response formatting across the API.
//! Includes proper status code mapping and error message sanitization.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// # Status Code Mapping
    /// - NotFound → 404 NOT_FOUND
    /// - NoCompensation → 404 NOT_FOUND
    /// - ReportingCycle → 500 INTERNAL_SERVER_ERROR
    /// - Validation → 400 BAD_REQUEST
    /// - Store → 500 INTERNAL_SERVER_ERROR
    /// - Configuration → 500 INTERNAL_SERVER_ERROR
    /// - Internal → 500 INTERNAL_SERVER_ERROR
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            AppError::NotFound {
                entity,
                field,
                value,
            } => (
                StatusCode::NOT_FOUND,
                ErrorResponse::not_found_error(entity, field, value),
            ),
            AppError::NoCompensation { employee_id } => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(
                    "NO_COMPENSATION",
                    &format!("No compensation recorded for employee '{}'", employee_id),
                ),
            ),
            AppError::ReportingCycle { employee_id } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(
                    "REPORTING_CYCLE",
                    "Reporting structure is cyclic and cannot be counted",
                )
                .with_details(&format!("revisited employee '{}'", employee_id)),
            ),
            AppError::Validation { field, reason } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation_error(field, reason),
            ),
            AppError::Store { operation, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(
                    "STORE_ERROR",
                    &format!("Store operation failed: {}", operation),
                ),
            ),
            AppError::Configuration { key, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(
                    "CONFIGURATION_ERROR",
                    &format!("Configuration error: {}", key),
                ),
            ),
            AppError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred"),
            ),
        };

        (status, Json(error_response)).into_response()
    }
}

/// Maps an AppError variant to its corresponding HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::NoCompensation { .. } => StatusCode::NOT_FOUND,
        AppError::ReportingCycle { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Validation { .. } => StatusCode::BAD_REQUEST,
        AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Maps an AppError variant to its error code string.
pub fn error_to_code(error: &AppError) -> &'static str {
    match error {
        AppError::NotFound { .. } => "NOT_FOUND",
        AppError::NoCompensation { .. } => "NO_COMPENSATION",
        AppError::ReportingCycle { .. } => "REPORTING_CYCLE",
        AppError::Validation { .. } => "VALIDATION_ERROR",
        AppError::Store { .. } => "STORE_ERROR",
        AppError::Configuration { .. } => "CONFIGURATION_ERROR",
        AppError::Internal { .. } => "INTERNAL_ERROR",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn test_not_found_status_code() {
        let error = AppError::employee_not_found("16a596ae");
        assert_eq!(error_to_status_code(&error), StatusCode::NOT_FOUND);
        assert_eq!(error_to_code(&error), "NOT_FOUND");
    }

    #[test]
    fn test_no_compensation_status_code() {
        let error = AppError::NoCompensation {
            employee_id: "16a596ae".to_string(),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::NOT_FOUND);
        assert_eq!(error_to_code(&error), "NO_COMPENSATION");
    }

    #[test]
    fn test_reporting_cycle_status_code() {
        let error = AppError::ReportingCycle {
            employee_id: "16a596ae".to_string(),
        };
        assert_eq!(
            error_to_status_code(&error),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(error_to_code(&error), "REPORTING_CYCLE");
    }

    #[test]
    fn test_validation_status_code() {
        let error = AppError::Validation {
            field: "salary".to_string(),
            reason: "must not be blank".to_string(),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::BAD_REQUEST);
        assert_eq!(error_to_code(&error), "VALIDATION_ERROR");
    }

    #[test]
    fn test_store_status_code() {
        let error = AppError::Store {
            operation: "insert employee".to_string(),
            source: StoreError::Connection("connection refused".to_string()),
        };
        assert_eq!(
            error_to_status_code(&error),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(error_to_code(&error), "STORE_ERROR");
    }

    #[test]
    fn test_configuration_status_code() {
        let error = AppError::Configuration {
            key: "store.redis.url".to_string(),
            source: anyhow::anyhow!("missing config"),
        };
        assert_eq!(
            error_to_status_code(&error),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(error_to_code(&error), "CONFIGURATION_ERROR");
    }

    #[test]
    fn test_internal_status_code() {
        let error = AppError::Internal {
            source: anyhow::anyhow!("unexpected error"),
        };
        assert_eq!(
            error_to_status_code(&error),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(error_to_code(&error), "INTERNAL_ERROR");
    }

    #[test]
    fn test_into_response_maps_status() {
        let response = AppError::employee_not_found("missing").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::Internal {
            source: anyhow::anyhow!("sensitive detail that must not leak"),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
