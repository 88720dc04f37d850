//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `employee` - Employee-related request DTOs
//! - `error` - Common error response DTOs
//! - `health` - Health check response DTOs

mod employee;
mod error;
mod health;

pub use employee::{CreateEmployeeRequest, UpdateEmployeeRequest};
pub use error::ErrorResponse;
pub use health::{ComponentHealth, HealthResponse, HealthStatus};
