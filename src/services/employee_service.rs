//! Employee service for business logic operations.
//!
//! Owns identifier assignment, whole-record updates, the transitive
//! reporting-structure computation, and compensation handling.

use std::collections::HashSet;

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Compensation, Employee, ReportingStructure};
use crate::repositories::EmployeeRepository;

/// Employee service for handling employee-related business logic.
///
/// This service wraps the `EmployeeRepository` and provides business-level
/// operations. Cloning is cheap since the repository shares its store handle.
#[derive(Clone)]
pub struct EmployeeService {
    repo: EmployeeRepository,
}

impl EmployeeService {
    /// Creates a new EmployeeService with the given repository.
    pub fn new(repo: EmployeeRepository) -> Self {
        Self { repo }
    }

    /// Creates a new employee.
    ///
    /// Any caller-supplied identifier is discarded; the service assigns a
    /// fresh UUID before persisting.
    ///
    /// # Returns
    /// The stored record with its assigned identifier
    pub async fn create_employee(&self, draft: Employee) -> AppResult<Employee> {
        let mut employee = draft;
        employee.employee_id = Uuid::new_v4().to_string();
        self.repo.insert(employee).await
    }

    /// Gets an employee by identifier.
    ///
    /// # Returns
    /// The employee if found, or `NotFound` error
    pub async fn get_employee(&self, id: &str) -> AppResult<Employee> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::employee_not_found(id))
    }

    /// Replaces an employee record wholesale.
    ///
    /// The identifier on the record selects the target. An update never
    /// creates: unknown identifiers fail with `NotFound` before any write.
    pub async fn update_employee(&self, employee: Employee) -> AppResult<Employee> {
        // Verify the record exists first
        self.get_employee(&employee.employee_id).await?;
        self.repo.save(employee).await
    }

    /// Computes the transitive report count for an employee.
    ///
    /// Walks the direct-report references with an explicit worklist, fetching
    /// each referenced employee in full; stored references are never trusted
    /// to be hydrated. Every direct-report entry counts once; entries without
    /// a usable identifier still count but are not expanded. A dangling
    /// identifier fails the whole computation with `NotFound`, and reaching
    /// the same employee twice fails with `ReportingCycle`.
    pub async fn reporting_structure(&self, id: &str) -> AppResult<ReportingStructure> {
        let root = self.get_employee(id).await?;

        let mut visited: HashSet<String> = HashSet::new();
        visited.insert(root.employee_id.clone());

        let mut number_of_reports: u32 = 0;
        let mut pending: Vec<String> = Vec::new();
        Self::collect_reports(&root, &mut number_of_reports, &mut pending);

        while let Some(next_id) = pending.pop() {
            if !visited.insert(next_id.clone()) {
                return Err(AppError::ReportingCycle {
                    employee_id: next_id,
                });
            }

            let report = self.get_employee(&next_id).await?;
            Self::collect_reports(&report, &mut number_of_reports, &mut pending);
        }

        Ok(ReportingStructure {
            employee: root.employee_id,
            number_of_reports,
        })
    }

    /// Counts an employee's direct-report entries and queues the ones that
    /// carry an identifier for expansion.
    fn collect_reports(employee: &Employee, count: &mut u32, pending: &mut Vec<String>) {
        for reference in &employee.direct_reports {
            *count += 1;
            if !reference.employee_id.is_empty() {
                pending.push(reference.employee_id.clone());
            }
        }
    }

    /// Attaches a compensation record to an employee, replacing any prior one.
    ///
    /// # Returns
    /// The compensation exactly as supplied
    pub async fn attach_compensation(
        &self,
        id: &str,
        compensation: Compensation,
    ) -> AppResult<Compensation> {
        let mut employee = self.get_employee(id).await?;
        employee.compensation = Some(compensation.clone());
        self.update_employee(employee).await?;
        Ok(compensation)
    }

    /// Gets the compensation attached to an employee.
    ///
    /// # Returns
    /// The compensation, `NotFound` for an unknown employee, or
    /// `NoCompensation` when the employee exists without one
    pub async fn get_compensation(&self, id: &str) -> AppResult<Compensation> {
        self.get_employee(id)
            .await?
            .compensation
            .ok_or_else(|| AppError::NoCompensation {
                employee_id: id.to_string(),
            })
    }
}

// ============================================================================
// Tests
// ============================================================================
