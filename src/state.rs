//! Application state for Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use std::sync::Arc;

use crate::repositories::Repositories;
use crate::services::Services;
use crate::store::EmployeeStore;

/// Application state containing all shared services and resources.
///
/// This struct is designed to be used with Axum's State extractor.
/// Cloning is cheap since both Services and the store handle use Arc
/// internally.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Direct access to the employee store, used by health checks
    pub store: Arc<dyn EmployeeStore>,
}

impl AppState {
    /// Creates a new AppState from an employee store handle.
    ///
    /// Initializes all repositories and services from the provided store.
    ///
    /// # Example
    /// ```ignore
    /// let store = store::connect(&settings.store).await?;
    /// let state = AppState::new(store);
    /// ```
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        let repos = Repositories::new(store.clone());
        let services = Services::new(repos);
        Self { services, store }
    }
}
