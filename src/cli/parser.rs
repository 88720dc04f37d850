//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

// Include shadow-rs generated build information
use shadow_rs::shadow;
shadow!(build);

/// An HTTP service for employee records and reporting structures
#[derive(Parser, Debug)]
#[command(name = "orgdir")]
#[command(about = "An HTTP service for employee records and reporting structures")]
#[command(long_about = "
Orgdir is a Rust web service for managing employee records, their reporting
hierarchies, and compensation. It provides a RESTful API server with
comprehensive configuration management and flexible deployment options.

EXAMPLES:
    # Start the server with default configuration
    orgdir serve

    # Start server on custom host and port
    orgdir serve --host 0.0.0.0 --port 8080

    # Use custom configuration file
    orgdir --config /path/to/config.toml serve

    # Run in development mode with verbose logging
    orgdir --env development --verbose serve

    # Check configuration without starting server
    orgdir serve --dry-run

    # Load employee records into the configured store
    orgdir seed --file seeds/employees.json

    # Preview a seed file without writing anything
    orgdir seed --file seeds/employees.json --dry-run

For more information about configuration options, see the documentation.
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Specify a custom configuration file to use instead of the default.
    /// The file should be in TOML format and contain valid configuration sections.
    /// The file must exist and be readable.
    ///
    /// Example: --config /etc/orgdir/production.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Force the application to use a specific environment configuration.
    /// This affects which configuration files are loaded and default settings.
    ///
    /// Available values: development (dev), test, staging (stage), production (prod)
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging
    ///
    /// Increases log output to debug level, showing detailed information
    /// about application operations. Useful for troubleshooting.
    /// Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Reduces log output to error level only, hiding informational messages.
    /// Useful for production deployments or automated scripts.
    /// Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server (default)
    ///
    /// Launches the HTTP server with the configured settings. The server will
    /// bind to the specified host and port, connect the employee store,
    /// and begin accepting requests.
    ///
    /// Examples:
    ///   orgdir serve                           # Start with defaults
    ///   orgdir serve --host 0.0.0.0 --port 80 # Bind to all interfaces on port 80
    ///   orgdir serve --dry-run                 # Validate config without starting
    Serve {
        /// Host address to bind to
        ///
        /// The network interface address where the server will listen for connections.
        /// Use 127.0.0.1 for localhost only, or 0.0.0.0 to accept connections from any interface.
        /// Must be a valid IPv4 address, hostname, or 'localhost'.
        ///
        /// Default: 127.0.0.1
        #[arg(long, value_name = "ADDRESS", value_parser = super::validation::validate_host_address)]
        host: Option<String>,

        /// Port number to listen on
        ///
        /// The TCP port where the server will accept HTTP connections.
        /// Must be between 1 and 65535. Ports below 1024 typically require root privileges.
        ///
        /// Default: 3000
        #[arg(short, long, value_name = "PORT", value_parser = super::validation::validate_port)]
        port: Option<u16>,

        /// Log level override
        ///
        /// Set the logging verbosity for this server instance.
        /// This overrides both configuration file settings and global --verbose/--quiet flags.
        ///
        /// Available levels: error, warn, info, debug, trace
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,

        /// Validate configuration and exit
        ///
        /// Performs a complete configuration validation check without starting the server.
        /// Useful for testing configuration changes or deployment validation.
        /// Returns exit code 0 if valid, non-zero if invalid.
        #[arg(long)]
        dry_run: bool,
    },
    /// Load employee records into the store
    ///
    /// Reads a JSON roster of employees and writes every record into the
    /// configured store. Existing records with the same identifier are
    /// replaced, so re-running the command is safe.
    ///
    /// Examples:
    ///   orgdir seed                                  # Use the seed file from configuration
    ///   orgdir seed --file seeds/employees.json      # Load a specific roster
    ///   orgdir seed --file roster.json --dry-run     # Parse and report without writing
    Seed {
        /// Seed file path
        ///
        /// JSON file containing an array of employee records. When omitted,
        /// the store.seed_file setting from configuration is used instead.
        /// The file must exist and be readable.
        #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_seed_file_path)]
        file: Option<PathBuf>,

        /// Parse the seed file without writing
        ///
        /// Reads and validates the roster, reports how many records it holds,
        /// and exits without touching the store.
        #[arg(long)]
        dry_run: bool,
    },
}

/// Environment options
#[derive(ValueEnum, Clone, Debug)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

/// Log level options
#[derive(ValueEnum, Clone, Debug)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl Cli {
    /// Validate CLI arguments and provide detailed error messages
    ///
    /// This method performs additional validation beyond what clap provides,
    /// ensuring that all argument combinations are valid and providing
    /// specific error messages for validation failures.
    pub fn validate(&self) -> Result<(), String> {
        // Validate command-specific arguments
        if let Some(ref command) = self.command {
            match command {
                Commands::Serve {
                    host,
                    port,
                    log_level: _,
                    dry_run: _,
                } => {
                    if let Some(host_addr) = host {
                        // Host validation is already done by clap, but we can add additional checks
                        if host_addr == "0.0.0.0"
                            && port.is_some()
                            && *port.as_ref().unwrap() < 1024
                        {
                            return Err("Warning: Binding to 0.0.0.0 on a privileged port (< 1024) typically requires root privileges".to_string());
                        }
                    }
                }
                Commands::Seed { .. } => {
                    // File existence is checked by the clap value parser; the
                    // fallback to store.seed_file is resolved at execution time.
                }
            }
        }

        // Validate global argument combinations
        if self.verbose && self.quiet {
            return Err("Cannot use --verbose and --quiet together".to_string());
        }

        Ok(())
    }

    /// Get detailed help for validation errors
    pub fn get_validation_help() -> &'static str {
        r#"
Common validation errors and solutions:

Port validation:
  - Port must be between 1 and 65535
  - Ports below 1024 require root privileges on most systems
  - Example: --port 8080

Host validation:
  - Use 'localhost' or '127.0.0.1' for local access only
  - Use '0.0.0.0' to accept connections from any interface
  - IPv4 addresses must be in valid format (e.g., 192.168.1.100)
  - Example: --host 0.0.0.0

Configuration file validation:
  - File must exist and be readable
  - File must be in TOML format
  - Example: --config /path/to/config.toml

Seed file validation:
  - File must exist and be readable
  - File must be in JSON format
  - Example: --file seeds/employees.json

For more help, use: orgdir help <subcommand>
"#
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => "error".to_string(),
            LogLevel::Warn => "warn".to_string(),
            LogLevel::Info => "info".to_string(),
            LogLevel::Debug => "debug".to_string(),
            LogLevel::Trace => "trace".to_string(),
        }
    }
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_flag() {
        let result = Cli::try_parse_from(&["orgdir", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_flag() {
        let result = Cli::try_parse_from(&["orgdir", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_default_behavior() {
        let cli = Cli::try_parse_from(&["orgdir"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(!cli.quiet);
        assert!(cli.config.is_none());
        assert!(cli.env.is_none());
    }

    #[test]
    fn test_serve_command() {
        let cli =
            Cli::try_parse_from(&["orgdir", "serve", "--host", "0.0.0.0", "--port", "8080"])
                .unwrap();
        if let Some(Commands::Serve {
            host,
            port,
            log_level: _,
            dry_run,
        }) = cli.command
        {
            assert_eq!(host, Some("0.0.0.0".to_string()));
            assert_eq!(port, Some(8080));
            assert!(!dry_run);
        } else {
            panic!("Expected Serve command");
        }
    }

    #[test]
    fn test_seed_command() {
        let cli = Cli::try_parse_from(&["orgdir", "seed", "--dry-run"]).unwrap();
        if let Some(Commands::Seed { file, dry_run }) = cli.command {
            assert!(dry_run);
            assert!(file.is_none());
        } else {
            panic!("Expected Seed command");
        }
    }

    #[test]
    fn test_env_aliases() {
        let cli = Cli::try_parse_from(&["orgdir", "--env", "prod"]).unwrap();
        assert!(matches!(cli.env, Some(Environment::Production)));

        let cli = Cli::try_parse_from(&["orgdir", "--env", "dev"]).unwrap();
        assert!(matches!(cli.env, Some(Environment::Development)));
    }

    #[test]
    fn test_verbose_flag() {
        let cli = Cli::try_parse_from(&["orgdir", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_conflicting_verbose_quiet() {
        let result = Cli::try_parse_from(&["orgdir", "--verbose", "--quiet"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
