//! Health check DTOs for API responses.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

/// Health check response structure.
///
/// Provides information about the application's health status
/// and various system components.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "status": "healthy",
    "version": "0.1.0",
    "timestamp": "2024-01-01T12:00:00.000Z",
    "checks": {
        "store": {
            "status": "healthy",
            "message": "Connected",
            "response_time_ms": 5
        }
    }
}))]
pub struct HealthResponse {
    /// Overall health status
    #[schema(example = "healthy")]
    pub status: HealthStatus,
    /// Application version
    #[schema(example = "0.1.0")]
    pub version: String,
    /// Timestamp of the health check (ISO 8601 format)
    #[schema(value_type = String, format = DateTime, example = "2024-01-01T12:00:00.000Z")]
    pub timestamp: String,
    /// Detailed checks for various components
    pub checks: HashMap<String, ComponentHealth>,
}

/// Health status enumeration.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// All systems operational
    Healthy,
    /// Some non-critical issues
    Degraded,
    /// Critical issues present
    Unhealthy,
}

/// Individual component health information.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "status": "healthy",
    "message": "Connected",
    "response_time_ms": 5
}))]
pub struct ComponentHealth {
    /// Component status
    #[schema(example = "healthy")]
    pub status: HealthStatus,
    /// Optional message with details
    #[schema(example = "Connected")]
    pub message: Option<String>,
    /// Response time in milliseconds
    #[schema(example = 5)]
    pub response_time_ms: Option<u64>,
}
