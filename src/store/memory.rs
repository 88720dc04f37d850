//! In-memory store implementation backed by DashMap.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::models::Employee;
use crate::store::{EmployeeStore, StoreError};

/// In-process employee store. Records live for the lifetime of the process;
/// concurrent access goes through DashMap's sharded locking.
pub struct MemoryEmployeeStore {
    records: DashMap<String, Employee>,
}

impl MemoryEmployeeStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for MemoryEmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn insert(&self, employee: Employee) -> Result<Employee, StoreError> {
        self.records
            .insert(employee.employee_id.clone(), employee.clone());
        Ok(employee)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, StoreError> {
        Ok(self.records.get(id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, employee: Employee) -> Result<Employee, StoreError> {
        self.records
            .insert(employee.employee_id.clone(), employee.clone());
        Ok(employee)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: &str, first_name: &str) -> Employee {
        Employee {
            employee_id: id.to_string(),
            first_name: first_name.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_insert_then_find() {
        let store = MemoryEmployeeStore::new();
        store.insert(employee("e1", "John")).await.unwrap();

        let found = store.find_by_id("e1").await.unwrap();
        assert_eq!(found.unwrap().first_name, "John");
    }

    #[tokio::test]
    async fn test_find_absent_returns_none() {
        let store = MemoryEmployeeStore::new();
        assert!(store.find_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_replaces_whole_record() {
        let store = MemoryEmployeeStore::new();
        store.insert(employee("e1", "John")).await.unwrap();

        let mut updated = employee("e1", "Paul");
        updated.position = "Developer I".to_string();
        store.save(updated).await.unwrap();

        let found = store.find_by_id("e1").await.unwrap().unwrap();
        assert_eq!(found.first_name, "Paul");
        assert_eq!(found.position, "Developer I");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_save_without_existing_record_inserts() {
        let store = MemoryEmployeeStore::new();
        store.save(employee("e9", "Ringo")).await.unwrap();
        assert!(store.find_by_id("e9").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_ping_always_healthy() {
        let store = MemoryEmployeeStore::new();
        assert!(store.ping().await.is_ok());
    }
}
