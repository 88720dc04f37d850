//! Configuration merger for CLI arguments and config files
//!
//! This module handles merging CLI argument overrides with file-based configuration,
//! implementing the configuration precedence logic.

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, settings::Settings};
use std::path::PathBuf;

/// Configuration merger that handles CLI argument integration with file-based configuration
///
/// This struct implements the configuration precedence logic where CLI arguments
/// override configuration file values.
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    /// Create a new configuration merger with base configuration
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Create a configuration merger by loading configuration as directed by CLI arguments
    ///
    /// The --config flag selects a single configuration file instead of the
    /// layered directory, and --env overrides environment detection.
    ///
    /// # Errors
    /// Returns ConfigError if configuration loading or validation fails
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut loader = ConfigLoader::new()?;

        if let Some(path) = cli.config.as_ref() {
            // Validate file path accessibility (additional validation beyond clap)
            Self::validate_config_file_access(path)?;
            loader = loader.with_config_file(path.clone());
        }

        if let Some(env) = cli.env.as_ref() {
            loader = loader.with_environment(env.clone().into());
        }

        Ok(Self::new(loader.load()?))
    }

    /// Validate that the configuration file is accessible and readable
    fn validate_config_file_access(path: &PathBuf) -> Result<(), ConfigError> {
        // Check if file exists
        if !path.exists() {
            return Err(ConfigError::ValidationError {
                field: "config_file".to_string(),
                message: format!("Configuration file does not exist: '{}'", path.display()),
            });
        }

        // Check if it's a file (not a directory)
        if !path.is_file() {
            return Err(ConfigError::ValidationError {
                field: "config_file".to_string(),
                message: format!("Configuration path is not a file: '{}'", path.display()),
            });
        }

        // Check if file is readable
        match std::fs::File::open(path) {
            Ok(_) => Ok(()),
            Err(e) => Err(ConfigError::ValidationError {
                field: "config_file".to_string(),
                message: format!("Cannot read configuration file '{}': {}", path.display(), e),
            }),
        }
    }

    /// Merge CLI arguments with the base configuration
    ///
    /// This method applies CLI argument overrides according to the precedence rules:
    /// 1. CLI arguments have highest priority
    /// 2. Configuration file values are used as base
    ///
    /// # Arguments
    /// * `cli` - Parsed CLI arguments
    ///
    /// # Returns
    /// A new Settings instance with CLI overrides applied
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        // Apply global CLI overrides
        self.apply_global_overrides(&mut config, cli)?;

        // Apply command-specific overrides
        if let Some(ref command) = cli.command {
            self.apply_command_overrides(&mut config, command)?;
        }

        // Validate the merged configuration
        config.validate()?;

        Ok(config)
    }

    /// Apply global CLI argument overrides
    fn apply_global_overrides(&self, config: &mut Settings, cli: &Cli) -> Result<(), ConfigError> {
        // Apply logging level overrides from global flags
        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }

        Ok(())
    }

    /// Apply command-specific CLI argument overrides
    fn apply_command_overrides(
        &self,
        config: &mut Settings,
        command: &Commands,
    ) -> Result<(), ConfigError> {
        match command {
            Commands::Serve {
                host,
                port,
                log_level,
                dry_run: _,
            } => {
                // Override server host if provided
                if let Some(host_addr) = host {
                    config.server.host = host_addr.clone();
                }

                // Override server port if provided
                if let Some(port_num) = port {
                    config.server.port = *port_num;
                }

                // Override log level if provided (command-specific override takes precedence over global)
                if let Some(level) = log_level {
                    config.logger.level = level.clone().into();
                }
            }
            Commands::Seed { file, dry_run: _ } => {
                // A roster given on the command line replaces the configured seed file
                if let Some(path) = file {
                    config.store.seed_file = Some(path.display().to_string());
                }
            }
        }

        Ok(())
    }

    /// Get the current configuration (useful for inspection)
    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parser::Cli;
    use clap::Parser;

    #[test]
    fn test_configuration_merger_new() {
        let base_config = Settings::default();
        let merger = ConfigurationMerger::new(base_config.clone());
        assert_eq!(merger.config(), &base_config);
    }

    #[test]
    fn test_configuration_merger_merge_verbose_flag() {
        let merger = ConfigurationMerger::new(Settings::default());

        let cli = Cli::try_parse_from(&["orgdir", "--verbose"]).unwrap();
        let merged_config = merger.merge_cli_args(&cli).unwrap();

        assert_eq!(merged_config.logger.level, "debug");
    }

    #[test]
    fn test_configuration_merger_merge_quiet_flag() {
        let merger = ConfigurationMerger::new(Settings::default());

        let cli = Cli::try_parse_from(&["orgdir", "--quiet"]).unwrap();
        let merged_config = merger.merge_cli_args(&cli).unwrap();

        assert_eq!(merged_config.logger.level, "error");
    }

    #[test]
    fn test_configuration_merger_merge_serve_host() {
        let merger = ConfigurationMerger::new(Settings::default());

        let cli = Cli::try_parse_from(&["orgdir", "serve", "--host", "0.0.0.0"]).unwrap();
        let merged_config = merger.merge_cli_args(&cli).unwrap();

        assert_eq!(merged_config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_configuration_merger_merge_serve_port() {
        let merger = ConfigurationMerger::new(Settings::default());

        let cli = Cli::try_parse_from(&["orgdir", "serve", "--port", "8080"]).unwrap();
        let merged_config = merger.merge_cli_args(&cli).unwrap();

        assert_eq!(merged_config.server.port, 8080);
    }

    #[test]
    fn test_configuration_merger_command_log_level_overrides_global() {
        let merger = ConfigurationMerger::new(Settings::default());

        let cli = Cli::try_parse_from(&["orgdir", "--verbose", "serve", "--log-level", "warn"])
            .unwrap();
        let merged_config = merger.merge_cli_args(&cli).unwrap();

        assert_eq!(merged_config.logger.level, "warn");
    }

    #[test]
    fn test_configuration_merger_seed_file_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        std::fs::write(&path, "[]").unwrap();

        let merger = ConfigurationMerger::new(Settings::default());
        let cli = Cli::try_parse_from(&["orgdir", "seed", "--file", path.to_str().unwrap()])
            .unwrap();
        let merged_config = merger.merge_cli_args(&cli).unwrap();

        assert_eq!(
            merged_config.store.seed_file,
            Some(path.display().to_string())
        );
    }
}
