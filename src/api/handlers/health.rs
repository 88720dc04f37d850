//! Health check endpoint handlers.
//!
//! This module provides health check functionality for monitoring
//! and load balancer health checks. Health checks ping the employee
//! store directly for efficient connectivity testing.

use std::collections::HashMap;

use axum::{extract::State, http::StatusCode, response::Json};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::HEALTH_TAG;
use crate::api::dto::{ComponentHealth, HealthResponse, HealthStatus};
use crate::state::AppState;

/// Register health check routes.
///
/// Routes:
/// - GET /health        - Basic health check
/// - GET /health/ready  - Readiness probe
/// - GET /health/live   - Liveness probe
pub fn health_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(health_check))
        .routes(routes!(readiness_check))
        .routes(routes!(liveness_check))
}

/// Basic health check endpoint.
///
/// Returns comprehensive health information including store connectivity.
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = HealthResponse)
    )
)]
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let mut checks = HashMap::new();
    let mut overall_status = HealthStatus::Healthy;

    // Check store connectivity
    let store_check = check_store(&state).await;
    if matches!(store_check.status, HealthStatus::Unhealthy) {
        overall_status = HealthStatus::Unhealthy;
    } else if matches!(store_check.status, HealthStatus::Degraded)
        && matches!(overall_status, HealthStatus::Healthy)
    {
        overall_status = HealthStatus::Degraded;
    }
    checks.insert("store".to_string(), store_check);

    let response = HealthResponse {
        status: overall_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: jiff::Timestamp::now().to_string(),
        checks,
    };

    let status = match response.status {
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status, Json(response))
}

/// Readiness probe endpoint.
///
/// Indicates whether the service is ready to accept traffic.
/// Checks all dependencies including store connectivity.
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is ready"),
        (status = 503, description = "Service is not ready")
    )
)]
async fn readiness_check(State(state): State<AppState>) -> StatusCode {
    let store_check = check_store(&state).await;

    match store_check.status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Degraded | HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Liveness probe endpoint.
///
/// Indicates whether the service is alive and should not be restarted.
/// This is a lightweight check that doesn't test external dependencies.
#[utoipa::path(
    get,
    path = "/health/live",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is alive")
    )
)]
async fn liveness_check() -> StatusCode {
    // Simple liveness check - if we can respond, we're alive
    StatusCode::OK
}

/// Check store connectivity by pinging the configured backend.
///
/// This function bypasses the service layer and talks to the store handle
/// directly to provide a more accurate health check.
async fn check_store(state: &AppState) -> ComponentHealth {
    let start_time = std::time::Instant::now();

    match state.store.ping().await {
        Ok(()) => ComponentHealth {
            status: HealthStatus::Healthy,
            message: Some("Connected".to_string()),
            response_time_ms: Some(start_time.elapsed().as_millis() as u64),
        },
        Err(e) => ComponentHealth {
            status: HealthStatus::Unhealthy,
            message: Some(format!("Ping failed: {}", e)),
            response_time_ms: Some(start_time.elapsed().as_millis() as u64),
        },
    }
}
