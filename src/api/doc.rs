use utoipa::OpenApi;

pub const EMPLOYEE_TAG: &str = "Employees";
pub const COMPENSATION_TAG: &str = "Compensation";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Orgdir",
        description = "An api server for the employee directory",
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
        )
    ),
    tags(
        (name = EMPLOYEE_TAG, description = "Employee record and reporting structure endpoints"),
        (name = COMPENSATION_TAG, description = "Compensation endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
