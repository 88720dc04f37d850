//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs first):
/// 1. CORS (runs first) - answers preflight requests
/// 2. Response compression
/// 3. Request ID middleware - generates/propagates request IDs
/// 4. Logging middleware (runs last) - logs requests with request IDs
///
/// # Routes
/// - `/api/employees` - Employee records, reporting structure, compensation
/// - `/health` - Health, readiness, and liveness probes
/// - `/swagger-ui` - Interactive API documentation
pub fn create_router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api/employees", handlers::employees::employee_routes())
        .merge(handlers::health::health_routes())
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        // Middleware is applied in reverse order - last added runs first
        // So logging runs after request_id has set the ID
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use tower::ServiceExt;

    use super::*;
    use crate::store::{EmployeeStore, MemoryEmployeeStore};

    fn test_state() -> AppState {
        let store: Arc<dyn EmployeeStore> = Arc::new(MemoryEmployeeStore::new());
        AppState::new(store)
    }

    #[tokio::test]
    async fn test_router_serves_health() {
        let app = create_router(test_state());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_router_serves_openapi_document() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_router_attaches_request_id_header() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/employees")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_router_echoes_caller_request_id() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("x-request-id", "caller-supplied-id")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("x-request-id").unwrap(),
            "caller-supplied-id"
        );
    }
}
