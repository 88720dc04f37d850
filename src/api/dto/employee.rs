//! Employee-related DTOs for API requests.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::{Compensation, Employee, EmployeeRef};

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new employee.
///
/// Carries no identifier field: the service assigns a fresh one on
/// creation, so nothing a client sends can pick the ID.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateEmployeeRequest {
    #[schema(example = "John")]
    pub first_name: String,
    #[schema(example = "Lennon")]
    pub last_name: String,
    #[schema(example = "Development Manager")]
    pub position: String,
    #[schema(example = "Engineering")]
    pub department: String,
    /// Direct reports referenced by employee ID
    pub direct_reports: Vec<EmployeeRef>,
    /// Compensation to attach at creation time
    pub compensation: Option<Compensation>,
}

impl CreateEmployeeRequest {
    /// Converts the request DTO into an Employee model awaiting an identifier.
    pub fn into_employee(self) -> Employee {
        Employee {
            employee_id: String::new(),
            first_name: self.first_name,
            last_name: self.last_name,
            position: self.position,
            department: self.department,
            direct_reports: self.direct_reports,
            compensation: self.compensation,
        }
    }
}

/// Request body for replacing an employee record.
///
/// The target identifier comes from the request path, never from the
/// body, so a payload cannot redirect the update to another record.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateEmployeeRequest {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub department: String,
    /// Direct reports referenced by employee ID
    pub direct_reports: Vec<EmployeeRef>,
    /// Replacement compensation; omitting it clears any attached one
    pub compensation: Option<Compensation>,
}

impl UpdateEmployeeRequest {
    /// Converts the request DTO into an Employee model carrying the given
    /// identifier.
    pub fn into_employee(self, employee_id: String) -> Employee {
        Employee {
            employee_id,
            first_name: self.first_name,
            last_name: self.last_name,
            position: self.position,
            department: self.department,
            direct_reports: self.direct_reports,
            compensation: self.compensation,
        }
    }
}
