//! EmployeeStore trait definition.

use async_trait::async_trait;

use crate::models::Employee;
use crate::store::StoreError;

/// Trait for the keyed employee document store.
///
/// All store backends must implement this trait to provide a unified
/// interface. Records are full JSON documents keyed by employee identifier;
/// the store enforces nothing beyond that keying.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Persist a new record under its identifier.
    async fn insert(&self, employee: Employee) -> Result<Employee, StoreError>;

    /// Fetch a record by identifier, `None` when absent.
    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, StoreError>;

    /// Write a full record under its identifier, replacing any existing one.
    async fn save(&self, employee: Employee) -> Result<Employee, StoreError>;

    /// Probe backend connectivity, used by health checks.
    async fn ping(&self) -> Result<(), StoreError>;
}
