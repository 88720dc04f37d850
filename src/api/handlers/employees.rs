//! Employee request handlers.
//!
//! Provides HTTP handlers for employee records, the derived reporting
//! structure, and compensation.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::{COMPENSATION_TAG, EMPLOYEE_TAG};
use crate::api::dto::{CreateEmployeeRequest, ErrorResponse, UpdateEmployeeRequest};
use crate::error::AppResult;
use crate::models::{Compensation, Employee, ReportingStructure};
use crate::state::AppState;

/// Register employee routes.
///
/// Routes:
/// - POST /                          - Create a new employee
/// - GET /{id}                       - Get employee by ID
/// - PUT /{id}                       - Replace employee by ID
/// - GET /{id}/reporting-structure   - Compute the transitive report count
/// - POST /{id}/compensation         - Attach compensation
/// - GET /{id}/compensation          - Get attached compensation
pub fn employee_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_employee))
        .routes(routes!(get_employee, update_employee))
        .routes(routes!(get_reporting_structure))
        .routes(routes!(get_compensation, create_compensation))
}

/// POST /api/employees - Create a new employee.
#[utoipa::path(
    post,
    path = "",
    tag = EMPLOYEE_TAG,
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created with an assigned ID", body = Employee)
    )
)]
async fn create_employee(
    State(state): State<AppState>,
    Json(payload): Json<CreateEmployeeRequest>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let employee = state
        .services
        .employees
        .create_employee(payload.into_employee())
        .await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /api/employees/{id} - Get employee by ID.
#[utoipa::path(
    get,
    path = "/{id}",
    tag = EMPLOYEE_TAG,
    params(
        ("id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found", body = ErrorResponse)
    )
)]
async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let employee = state.services.employees.get_employee(&id).await?;
    Ok(Json(employee))
}

/// PUT /api/employees/{id} - Replace an employee record.
///
/// The path selects the target record; any identifier inside the body is
/// ignored.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = EMPLOYEE_TAG,
    request_body = UpdateEmployeeRequest,
    params(
        ("id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee replaced", body = Employee),
        (status = 404, description = "Employee not found", body = ErrorResponse)
    )
)]
async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateEmployeeRequest>,
) -> AppResult<Json<Employee>> {
    let employee = state
        .services
        .employees
        .update_employee(payload.into_employee(id))
        .await?;
    Ok(Json(employee))
}

/// GET /api/employees/{id}/reporting-structure - Compute the reporting structure.
#[utoipa::path(
    get,
    path = "/{id}/reporting-structure",
    tag = EMPLOYEE_TAG,
    params(
        ("id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Transitive report count for the employee", body = ReportingStructure),
        (status = 404, description = "Employee or a referenced report not found", body = ErrorResponse)
    )
)]
async fn get_reporting_structure(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ReportingStructure>> {
    let structure = state.services.employees.reporting_structure(&id).await?;
    Ok(Json(structure))
}

/// GET /api/employees/{id}/compensation - Get attached compensation.
#[utoipa::path(
    get,
    path = "/{id}/compensation",
    tag = COMPENSATION_TAG,
    params(
        ("id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Compensation attached to the employee", body = Compensation),
        (status = 404, description = "Employee not found or has no compensation", body = ErrorResponse)
    )
)]
async fn get_compensation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Compensation>> {
    let compensation = state.services.employees.get_compensation(&id).await?;
    Ok(Json(compensation))
}

/// POST /api/employees/{id}/compensation - Attach compensation to an employee.
#[utoipa::path(
    post,
    path = "/{id}/compensation",
    tag = COMPENSATION_TAG,
    request_body = Compensation,
    params(
        ("id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 201, description = "Compensation attached", body = Compensation),
        (status = 404, description = "Employee not found", body = ErrorResponse)
    )
)]
async fn create_compensation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Compensation>,
) -> AppResult<(StatusCode, Json<Compensation>)> {
    let compensation = state
        .services
        .employees
        .attach_compensation(&id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(compensation)))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Method, Request, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::store::{EmployeeStore, MemoryEmployeeStore};

    fn test_app() -> Router {
        let store: Arc<dyn EmployeeStore> = Arc::new(MemoryEmployeeStore::new());
        let state = AppState::new(store);
        let (router, _api) = OpenApiRouter::new()
            .nest("/api/employees", employee_routes())
            .split_for_parts();
        router.with_state(state)
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create(app: &Router, body: Value) -> Value {
        let (status, created) = send(app, Method::POST, "/api/employees", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        created
    }

    #[tokio::test]
    async fn test_create_employee_returns_created_with_assigned_id() {
        let app = test_app();

        let created = create(
            &app,
            json!({
                "firstName": "John",
                "lastName": "Lennon",
                "position": "Development Manager",
                "department": "Engineering"
            }),
        )
        .await;

        assert!(!created["employeeId"].as_str().unwrap().is_empty());
        assert_eq!(created["firstName"], "John");
        assert_eq!(created["department"], "Engineering");
        // No compensation attached, the field is omitted from the wire shape
        assert!(created.get("compensation").is_none());
    }

    #[tokio::test]
    async fn test_get_employee_round_trip() {
        let app = test_app();

        let created = create(&app, json!({"firstName": "Paul", "position": "Developer I"})).await;
        let id = created["employeeId"].as_str().unwrap();

        let (status, fetched) =
            send(&app, Method::GET, &format!("/api/employees/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_unknown_employee_is_not_found() {
        let app = test_app();

        let (status, body) = send(&app, Method::GET, "/api/employees/invalid-id", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_update_employee_takes_id_from_path() {
        let app = test_app();

        let created = create(&app, json!({"firstName": "Ringo", "position": "Developer V"})).await;
        let id = created["employeeId"].as_str().unwrap();

        // A conflicting identifier in the body must not redirect the update
        let (status, updated) = send(
            &app,
            Method::PUT,
            &format!("/api/employees/{id}"),
            Some(json!({
                "employeeId": "somebody-else",
                "firstName": "Ringo",
                "position": "Developer VI"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["employeeId"], *id);
        assert_eq!(updated["position"], "Developer VI");

        let (_, fetched) = send(&app, Method::GET, &format!("/api/employees/{id}"), None).await;
        assert_eq!(fetched["position"], "Developer VI");
    }

    #[tokio::test]
    async fn test_update_unknown_employee_is_not_found() {
        let app = test_app();

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/employees/missing",
            Some(json!({"firstName": "Nobody"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_reporting_structure_counts_wired_reports() {
        let app = test_app();

        let leaf_a = create(&app, json!({"firstName": "Pete"})).await;
        let leaf_b = create(&app, json!({"firstName": "George"})).await;
        let root = create(&app, json!({"firstName": "Ringo"})).await;
        let root_id = root["employeeId"].as_str().unwrap();

        // Wire the reports through the public API, using a partial employee
        // snapshot in one slot to prove only the identifier is kept
        let (status, _) = send(
            &app,
            Method::PUT,
            &format!("/api/employees/{root_id}"),
            Some(json!({
                "firstName": "Ringo",
                "directReports": [
                    {"employeeId": leaf_a["employeeId"], "firstName": "stale"},
                    {"employeeId": leaf_b["employeeId"]}
                ]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, structure) = send(
            &app,
            Method::GET,
            &format!("/api/employees/{root_id}/reporting-structure"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(structure["employee"], *root_id);
        assert_eq!(structure["numberOfReports"], 2);
    }

    #[tokio::test]
    async fn test_reporting_structure_unknown_root_is_not_found() {
        let app = test_app();

        let (status, body) = send(
            &app,
            Method::GET,
            "/api/employees/missing/reporting-structure",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_compensation_create_then_fetch() {
        let app = test_app();

        let created = create(&app, json!({"firstName": "John"})).await;
        let id = created["employeeId"].as_str().unwrap();

        let (status, attached) = send(
            &app,
            Method::POST,
            &format!("/api/employees/{id}/compensation"),
            Some(json!({"salary": "65000", "effectiveDate": "2024-03-01"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(attached["salary"], "65000");

        let (status, fetched) = send(
            &app,
            Method::GET,
            &format!("/api/employees/{id}/compensation"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["salary"], "65000");
        assert_eq!(fetched["effectiveDate"], "2024-03-01");

        // The attached compensation also rides on the employee record
        let (_, record) = send(&app, Method::GET, &format!("/api/employees/{id}"), None).await;
        assert_eq!(record["compensation"]["salary"], "65000");
    }

    #[tokio::test]
    async fn test_compensation_missing_is_distinct_not_found() {
        let app = test_app();

        let created = create(&app, json!({"firstName": "Paul"})).await;
        let id = created["employeeId"].as_str().unwrap();

        let (status, body) = send(
            &app,
            Method::GET,
            &format!("/api/employees/{id}/compensation"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NO_COMPENSATION");
    }

    #[tokio::test]
    async fn test_compensation_for_unknown_employee_is_not_found() {
        let app = test_app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/employees/missing/compensation",
            Some(json!({"salary": "1", "effectiveDate": "2024-01-01"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let app = test_app();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/employees")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
