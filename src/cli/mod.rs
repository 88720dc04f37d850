//! CLI module for orgdir
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Configuration merging (CLI args + config files)
//! - Command execution and validation
//! - Command handlers for serve and seed operations

pub mod parser;
pub mod validation;
pub mod config_merger;
pub mod handlers;
pub mod executor;

// Re-export public types for convenience
pub use parser::{Cli, Commands, Environment, LogLevel};
pub use config_merger::ConfigurationMerger;
pub use executor::execute_command;

use crate::config::settings::Settings;
use crate::error::AppResult;

/// Load and merge configuration from CLI arguments
///
/// This function handles the complete configuration loading process:
/// 1. Load base configuration from files
/// 2. Merge CLI argument overrides
/// 3. Validate the final configuration
///
/// # Arguments
/// * `cli` - Parsed CLI arguments
///
/// # Returns
/// Merged and validated Settings
///
/// # Errors
/// Returns error if configuration loading, merging, or validation fails
pub fn load_and_merge_config(cli: &Cli) -> AppResult<Settings> {
    let merger = ConfigurationMerger::from_cli(cli)?;
    let settings = merger.merge_cli_args(cli)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_and_merge_config_rejects_missing_config_file() {
        let cli = Cli {
            command: None,
            config: Some(std::path::PathBuf::from("/nonexistent/config.toml")),
            env: None,
            verbose: false,
            quiet: false,
        };

        let result = load_and_merge_config(&cli);
        assert!(result.is_err());
    }
}
