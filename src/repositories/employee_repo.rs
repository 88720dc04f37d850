//! Employee repository over the keyed document store.
//!
//! Thin typed pass-through that attaches operation context to store failures.

use std::sync::Arc;

use crate::error::AppError;
use crate::models::Employee;
use crate::store::EmployeeStore;

/// Employee repository holding a shared store handle.
///
/// Since the backend lives behind `Arc`, cloning is cheap (just reference
/// count increment). No need for `Arc<EmployeeRepository>`.
#[derive(Clone)]
pub struct EmployeeRepository {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeRepository {
    /// Creates a new EmployeeRepository over the given store backend.
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Persists a new employee record.
    ///
    /// # Arguments
    /// * `employee` - The record to insert, identifier already assigned
    ///
    /// # Returns
    /// The stored record
    pub async fn insert(&self, employee: Employee) -> Result<Employee, AppError> {
        self.store
            .insert(employee)
            .await
            .map_err(|e| AppError::Store {
                operation: "insert employee".to_string(),
                source: e,
            })
    }

    /// Finds an employee by identifier.
    ///
    /// # Returns
    /// `Some(Employee)` if found, `None` otherwise
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, AppError> {
        self.store
            .find_by_id(id)
            .await
            .map_err(|e| AppError::Store {
                operation: "find employee by id".to_string(),
                source: e,
            })
    }

    /// Writes a full employee record, replacing any existing one.
    pub async fn save(&self, employee: Employee) -> Result<Employee, AppError> {
        self.store.save(employee).await.map_err(|e| AppError::Store {
            operation: "save employee".to_string(),
            source: e,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
