//! Repository layer for data access operations.
//!
//! Provides typed async access to the employee document store.

mod employee_repo;

pub use employee_repo::EmployeeRepository;

use std::sync::Arc;

use crate::store::EmployeeStore;

/// Aggregates all repositories for convenient access.
///
/// This struct is designed to be carried inside the Axum application state.
/// Cloning is cheap, every repository shares the same store handle.
#[derive(Clone)]
pub struct Repositories {
    pub employees: EmployeeRepository,
}

impl Repositories {
    /// Creates a new Repositories instance with all repositories initialized.
    ///
    /// # Arguments
    /// * `store` - The employee store backend to read and write through
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self {
            employees: EmployeeRepository::new(store),
        }
    }
}
