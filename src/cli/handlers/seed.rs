//! Seed command handler
//!
//! Handles loading employee rosters from JSON files into the configured store.

use crate::bootstrap::{apply_seed, load_seed_file};
use crate::config::settings::{Settings, StoreBackend};
use crate::error::{AppError, AppResult};
use crate::store;

/// Handler for the seed command
pub struct SeedCommandHandler {
    config: Settings,
}

impl SeedCommandHandler {
    /// Create a new seed command handler
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Execute the seed command with optional dry-run support
    ///
    /// # Arguments
    /// * `dry_run` - If true, parses the roster and reports without writing
    ///
    /// # Returns
    /// Returns Ok(()) on success, or AppError on failure
    ///
    /// # Errors
    /// - Missing or unreadable seed file
    /// - Store connection or write errors (if not dry-run)
    pub async fn execute(&self, dry_run: bool) -> AppResult<()> {
        let path = self.seed_file_path()?;

        let employees = load_seed_file(&path)?;
        println!(
            "Parsed {} employee record(s) from '{}'",
            employees.len(),
            path
        );

        if dry_run {
            println!("Dry run completed successfully - no records were written");
            return Ok(());
        }

        let store = store::connect(&self.config.store)
            .await
            .map_err(|e| AppError::Store {
                operation: "connect store for seeding".to_string(),
                source: e,
            })?;

        let count = apply_seed(&store, employees).await?;

        let backend = match self.config.store.backend {
            StoreBackend::Memory => "memory",
            StoreBackend::Redis => "redis",
        };
        println!("✓ Loaded {} employee record(s) into the {} store", count, backend);
        println!("Seeding completed successfully");

        Ok(())
    }

    /// Resolve the roster path from configuration
    fn seed_file_path(&self) -> AppResult<String> {
        self.config
            .store
            .seed_file
            .clone()
            .ok_or_else(|| AppError::Validation {
                field: "seed_file".to_string(),
                reason: "No seed file given. Pass --file or set store.seed_file in configuration."
                    .to_string(),
            })
    }

    /// Get the configuration
    pub fn config(&self) -> &Settings {
        &self.config
    }
}
