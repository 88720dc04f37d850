use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Employee record as persisted and served, one JSON document per employee.
/// Field names follow the camelCase wire shape on both the store and the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Assigned by the service on creation, immutable afterwards.
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub department: String,
    /// Weak references to direct reports, ordered as supplied.
    #[serde(default)]
    pub direct_reports: Vec<EmployeeRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compensation: Option<Compensation>,
}

/// Reference-by-id entry in an employee's direct report list. Callers may
/// send partial employee snapshots here; only the identifier is kept, and
/// it is never trusted to be hydrated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRef {
    #[serde(default)]
    pub employee_id: String,
}

impl EmployeeRef {
    pub fn new(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
        }
    }
}

/// Compensation attached to exactly one employee. Salary and effective date
/// stay opaque text; replacement overwrites with no history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Compensation {
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub effective_date: String,
}

/// Derived view answering "how many people report up to this employee",
/// computed on demand and never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportingStructure {
    /// Identifier of the employee the count was computed for.
    pub employee: String,
    pub number_of_reports: u32,
}

// ============================================================================
// Tests
// ============================================================================
