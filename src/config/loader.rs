//! Configuration loader for orgdir
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! configuration from multiple sources with proper precedence.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for configuration directory
const CONFIG_DIR_ENV: &str = "ORGDIR_CONFIG_DIR";

/// Environment variable for specific configuration file
const CONFIG_FILE_ENV: &str = "ORGDIR_CONFIG_FILE";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "ORGDIR";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader that handles layered configuration loading
///
/// The loader supports the following configuration sources (in order of priority):
/// 1. `default.toml` - Base default configuration (required)
/// 2. `{environment}.toml` - Environment-specific configuration (optional)
/// 3. `local.toml` - Local development overrides (optional)
/// 4. `ORGDIR_*` environment variables (highest priority)
#[derive(Debug)]
pub struct ConfigLoader {
    /// Configuration directory path
    config_dir: PathBuf,
    /// Specific configuration file path (if set, skips layered loading)
    config_file: Option<PathBuf>,
    /// Current application environment
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a new configuration loader
    ///
    /// This reads environment variables to determine:
    /// - Configuration directory (`ORGDIR_CONFIG_DIR`)
    /// - Specific configuration file (`ORGDIR_CONFIG_FILE`)
    /// - Application environment (`ORGDIR_APP_ENV`)
    ///
    /// # Errors
    ///
    /// Returns an error if both `ORGDIR_CONFIG_DIR` and `ORGDIR_CONFIG_FILE`
    /// are set, as they are mutually exclusive.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));

        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        // Check mutual exclusivity
        if config_file.is_some() && std::env::var(CONFIG_DIR_ENV).is_ok() {
            return Err(ConfigError::mutual_exclusivity(
                "ORGDIR_CONFIG_DIR and ORGDIR_CONFIG_FILE cannot both be set. \
                 Use ORGDIR_CONFIG_DIR for layered configuration or \
                 ORGDIR_CONFIG_FILE for a single configuration file.",
            ));
        }

        let environment = AppEnvironment::from_env();

        Ok(Self {
            config_dir,
            config_file,
            environment,
        })
    }

    /// Use a specific configuration file, skipping layered loading.
    ///
    /// Takes precedence over `ORGDIR_CONFIG_FILE`; used by the CLI's
    /// `--config` flag.
    pub fn with_config_file(mut self, path: PathBuf) -> Self {
        self.config_file = Some(path);
        self
    }

    /// Override the application environment; used by the CLI's `--env` flag.
    pub fn with_environment(mut self, environment: AppEnvironment) -> Self {
        self.environment = environment;
        self
    }

    /// Get the current application environment
    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    /// Get the configuration directory path
    #[allow(dead_code)]
    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }

    /// Load configuration from all sources
    ///
    /// If a specific configuration file is set, loads only that file.
    /// Otherwise, performs layered loading from the configuration directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `default.toml` is not found (when using layered loading)
    /// - Configuration parsing fails
    /// - Configuration validation fails
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        // Validate the loaded settings
        settings.validate()?;

        Ok(settings)
    }

    /// Build the config::Config instance from all sources
    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder();

        let builder = if let Some(ref config_file) = self.config_file {
            // Single file mode
            self.add_file_source(builder, config_file, true)?
        } else {
            // Layered loading mode
            self.build_layered_config(builder)?
        };

        // Add environment variables (always highest priority)
        // ORGDIR_SERVER__PORT -> server.port
        let builder = Self::add_env_source(builder);

        builder.build().map_err(ConfigError::from)
    }

    /// Build layered configuration from multiple files
    fn build_layered_config(
        &self,
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        // 1. Add default.toml (required)
        let default_path = self.config_dir.join("default.toml");
        let builder = self.add_file_source(builder, &default_path, true)?;

        // 2. Add {environment}.toml (optional)
        let env_path = self
            .config_dir
            .join(format!("{}.toml", self.environment.as_str()));
        let builder = self.add_file_source(builder, &env_path, false)?;

        // 3. Add local.toml (optional)
        let local_path = self.config_dir.join("local.toml");
        let builder = self.add_file_source(builder, &local_path, false)?;

        Ok(builder)
    }

    /// Add a file source to the config builder
    ///
    /// # Arguments
    ///
    /// * `builder` - The config builder to add the source to
    /// * `path` - Path to the configuration file
    /// * `required` - Whether the file is required to exist
    fn add_file_source(
        &self,
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        path: &Path,
        required: bool,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        if required && !path.exists() {
            return Err(ConfigError::file_not_found(format!(
                "Required configuration file not found: {}",
                path.display()
            )));
        }

        Ok(builder.add_source(
            File::new(path.to_str().unwrap_or_default(), FileFormat::Toml).required(required),
        ))
    }

    /// Add environment variable source to the config builder
    ///
    /// Environment variables with prefix `ORGDIR_` are mapped to configuration
    /// keys. Double underscores (`__`) are used as separators for nested keys.
    ///
    /// Examples:
    /// - `ORGDIR_SERVER__PORT` -> `server.port`
    /// - `ORGDIR_STORE__BACKEND` -> `store.backend`
    fn add_env_source(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> config::ConfigBuilder<config::builder::DefaultState> {
        builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        )
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file: None,
            environment: AppEnvironment::default(),
        })
    }
}
