//! Seed data bootstrap for the employee store.
//!
//! Loads an employee roster from a JSON file and applies it to the store on
//! startup. Seeding upserts by identifier, so restarting against a
//! persistent backend does not duplicate records.

use std::path::Path;
use std::sync::Arc;

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::Employee;
use crate::store::EmployeeStore;

/// Loads a seed roster from a JSON file containing an employee array.
pub fn load_seed_file(path: impl AsRef<Path>) -> AppResult<Vec<Employee>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| AppError::Configuration {
        key: "store.seed_file".to_string(),
        source: anyhow::Error::new(e)
            .context(format!("Failed to read seed file: {}", path.display())),
    })?;

    serde_json::from_str(&contents).map_err(|e| AppError::Configuration {
        key: "store.seed_file".to_string(),
        source: anyhow::Error::new(e)
            .context(format!("Failed to parse seed file: {}", path.display())),
    })
}

/// Applies a seed roster to the store, upserting by identifier.
///
/// Entries without an identifier get a fresh UUID, which makes them new
/// records on every run; seed files meant to be idempotent should carry
/// explicit identifiers.
///
/// # Returns
/// The number of records written
pub async fn apply_seed(
    store: &Arc<dyn EmployeeStore>,
    employees: Vec<Employee>,
) -> AppResult<usize> {
    let mut applied = 0;
    for mut employee in employees {
        if employee.employee_id.is_empty() {
            employee.employee_id = Uuid::new_v4().to_string();
        }
        store.save(employee).await.map_err(|e| AppError::Store {
            operation: "seed employee".to_string(),
            source: e,
        })?;
        applied += 1;
    }
    Ok(applied)
}

// ============================================================================
// Tests
// ============================================================================
