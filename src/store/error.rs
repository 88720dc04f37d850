//! Store error types.

use thiserror::Error;

/// Errors that can occur during employee store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store operation failed: {0}")]
    Operation(String),

    #[error("Store connection failed: {0}")]
    Connection(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
