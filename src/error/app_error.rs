use thiserror::Error;

use crate::config::ConfigError;
use crate::store::StoreError;

/// Application-wide error type that represents all possible errors in the system.
///
/// This enum provides structured error handling for the domain operations,
/// supporting automatic conversion from anyhow and detailed context for
/// debugging and user feedback.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found error with entity, field, and value information
    #[error("Resource not found: {entity} with {field}={value}")]
    NotFound {
        entity: String,
        field: String,
        value: String,
    },

    /// Employee exists but has no compensation attached
    #[error("No compensation recorded for employee {employee_id}")]
    NoCompensation { employee_id: String },

    /// Reporting traversal revisited an employee, the org data is cyclic
    /// or reaches the same employee via multiple paths
    #[error("Reporting structure revisits employee {employee_id}")]
    ReportingCycle { employee_id: String },

    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Store operation error with operation context
    #[error("Store operation failed: {operation}")]
    Store {
        operation: String,
        #[source]
        source: StoreError,
    },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Not-found error for an employee looked up by identifier.
    pub fn employee_not_found(id: &str) -> Self {
        AppError::NotFound {
            entity: "Employee".to_string(),
            field: "id".to_string(),
            value: id.to_string(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        AppError::Configuration {
            key: "configuration".to_string(),
            source: anyhow::Error::new(error),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
