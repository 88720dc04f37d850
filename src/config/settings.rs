//! Configuration settings structures for orgdir
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use serde::{Deserialize, Serialize};

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "orgdir".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_keep_alive_timeout() -> u64 {
    75
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "logs/app.log".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_redis_url() -> String {
    "redis://127.0.0.1:6379".to_string()
}

fn default_redis_pool_size() -> u32 {
    4
}

fn default_redis_connection_timeout() -> u64 {
    5
}

fn default_redis_key_prefix() -> String {
    "orgdir".to_string()
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Keep-alive timeout in seconds
    #[serde(default = "default_keep_alive_timeout")]
    pub keep_alive_timeout: u64,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
            keep_alive_timeout: default_keep_alive_timeout(),
        }
    }
}

// ============================================================================
// Store Configuration
// ============================================================================

/// Employee store backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Memory,
    Redis,
}

/// Redis store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedisStoreConfig {
    /// Redis connection URL
    #[serde(default = "default_redis_url")]
    pub url: String,

    /// Connection pool size
    #[serde(default = "default_redis_pool_size")]
    pub pool_size: u32,

    /// Connection timeout in seconds
    #[serde(default = "default_redis_connection_timeout")]
    pub connection_timeout: u64,

    /// Key prefix for all stored documents
    #[serde(default = "default_redis_key_prefix")]
    pub key_prefix: String,
}

impl Default for RedisStoreConfig {
    fn default() -> Self {
        Self {
            url: default_redis_url(),
            pool_size: default_redis_pool_size(),
            connection_timeout: default_redis_connection_timeout(),
            key_prefix: default_redis_key_prefix(),
        }
    }
}

/// Employee store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    /// Store backend type
    #[serde(default)]
    pub backend: StoreBackend,

    /// Optional JSON seed file applied to the store at startup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_file: Option<String>,

    /// Redis store settings
    #[serde(default)]
    pub redis: RedisStoreConfig,
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    /// Whether console output is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether to use colored output
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            colored: default_true(),
        }
    }
}

/// File output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    /// Whether file output is enabled
    #[serde(default)]
    pub enabled: bool,

    /// Path to the log file
    #[serde(default = "default_log_path")]
    pub path: String,

    /// Whether to append to existing file
    #[serde(default = "default_true")]
    pub append: bool,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
            append: default_true(),
            format: default_log_format(),
        }
    }
}

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console output settings
    #[serde(default)]
    pub console: ConsoleSettings,

    /// File output settings
    #[serde(default)]
    pub file: FileSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        }
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete application settings
///
/// This structure represents the entire configuration that can be loaded
/// from TOML files and environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Application information
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Employee store configuration
    #[serde(default)]
    pub store: StoreConfig,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ========================================================================
    // Arbitrary implementations for property-based testing
    // ========================================================================

    fn arb_application_config() -> impl Strategy<Value = ApplicationConfig> {
        (
            "[a-z][a-z0-9-]{0,20}",                 // name: valid app name
            "[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}", // version: semver-like
        )
            .prop_map(|(name, version)| ApplicationConfig { name, version })
    }

    fn arb_server_config() -> impl Strategy<Value = ServerConfig> {
        (
            prop_oneof![
                Just("127.0.0.1".to_string()),
                Just("0.0.0.0".to_string()),
                Just("localhost".to_string()),
            ],
            1u16..=65535u16, // valid port range
            1u64..=300u64,   // request_timeout
            1u64..=300u64,   // keep_alive_timeout
        )
            .prop_map(
                |(host, port, request_timeout, keep_alive_timeout)| ServerConfig {
                    host,
                    port,
                    request_timeout,
                    keep_alive_timeout,
                },
            )
    }

    fn arb_store_config() -> impl Strategy<Value = StoreConfig> {
        (
            prop_oneof![Just(StoreBackend::Memory), Just(StoreBackend::Redis)],
            prop_oneof![
                Just(None),
                Just(Some("seeds/employees.json".to_string())),
                Just(Some("/var/data/employees.json".to_string())),
            ],
            prop_oneof![
                Just("redis://127.0.0.1:6379".to_string()),
                Just("redis://cache.internal:6380".to_string()),
            ],
            1u32..=32u32, // pool_size
            1u64..=60u64, // connection_timeout
            "[a-z][a-z0-9-]{0,12}",
        )
            .prop_map(
                |(backend, seed_file, url, pool_size, connection_timeout, key_prefix)| StoreConfig {
                    backend,
                    seed_file,
                    redis: RedisStoreConfig {
                        url,
                        pool_size,
                        connection_timeout,
                        key_prefix,
                    },
                },
            )
    }

    fn arb_console_settings() -> impl Strategy<Value = ConsoleSettings> {
        (any::<bool>(), any::<bool>())
            .prop_map(|(enabled, colored)| ConsoleSettings { enabled, colored })
    }

    fn arb_file_settings() -> impl Strategy<Value = FileSettings> {
        (
            any::<bool>(), // enabled
            prop_oneof![
                Just("logs/app.log".to_string()),
                Just("logs/test.log".to_string()),
                Just("/var/log/app.log".to_string()),
            ],
            any::<bool>(), // append
            prop_oneof![
                Just("json".to_string()),
                Just("full".to_string()),
                Just("compact".to_string()),
            ],
        )
            .prop_map(|(enabled, path, append, format)| FileSettings {
                enabled,
                path,
                append,
                format,
            })
    }

    fn arb_logger_settings() -> impl Strategy<Value = LoggerSettings> {
        (
            prop_oneof![
                Just("trace".to_string()),
                Just("debug".to_string()),
                Just("info".to_string()),
                Just("warn".to_string()),
                Just("error".to_string()),
            ],
            arb_console_settings(),
            arb_file_settings(),
        )
            .prop_map(|(level, console, file)| LoggerSettings {
                level,
                console,
                file,
            })
    }

    fn arb_settings() -> impl Strategy<Value = Settings> {
        (
            arb_application_config(),
            arb_server_config(),
            arb_store_config(),
            arb_logger_settings(),
        )
            .prop_map(|(application, server, store, logger)| Settings {
                application,
                server,
                store,
                logger,
            })
    }

    // ========================================================================
    // Property-based tests
    // ========================================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// For any valid Settings instance, serializing to TOML and then
        /// deserializing back produces an equivalent Settings instance.
        #[test]
        fn prop_settings_round_trip_serialization(settings in arb_settings()) {
            let toml_str = toml::to_string(&settings)
                .expect("Settings should serialize to TOML");

            let deserialized: Settings = toml::from_str(&toml_str)
                .expect("TOML should deserialize back to Settings");

            prop_assert_eq!(settings, deserialized);
        }
    }

    // ========================================================================
    // Unit tests
    // ========================================================================

    #[test]
    fn test_application_config_defaults() {
        let config = ApplicationConfig::default();
        assert_eq!(config.name, "orgdir");
        assert_eq!(config.version, crate::pkg_version());
    }

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.request_timeout, 30);
        assert_eq!(config.keep_alive_timeout, 75);
    }

    #[test]
    fn test_server_config_address() {
        let config = ServerConfig::default();
        assert_eq!(config.address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_store_config_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.backend, StoreBackend::Memory);
        assert!(config.seed_file.is_none());
        assert_eq!(config.redis.url, "redis://127.0.0.1:6379");
        assert_eq!(config.redis.pool_size, 4);
        assert_eq!(config.redis.connection_timeout, 5);
        assert_eq!(config.redis.key_prefix, "orgdir");
    }

    #[test]
    fn test_logger_settings_defaults() {
        let settings = LoggerSettings::default();
        assert_eq!(settings.level, "info");
        assert!(settings.console.enabled);
        assert!(settings.console.colored);
        assert!(!settings.file.enabled);
        assert_eq!(settings.file.path, "logs/app.log");
        assert!(settings.file.append);
        assert_eq!(settings.file.format, "json");
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.application.name, "orgdir");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.store.backend, StoreBackend::Memory);
        assert_eq!(settings.logger.level, "info");
    }

    #[test]
    fn test_settings_serialization_roundtrip() {
        let settings = Settings::default();
        let toml_str = toml::to_string(&settings).expect("Failed to serialize");
        let deserialized: Settings = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(settings, deserialized);
    }

    #[test]
    fn test_settings_deserialize_partial() {
        let toml_str = r#"
            [application]
            name = "my-app"

            [server]
            port = 8080
        "#;

        let settings: Settings = toml::from_str(toml_str).expect("Failed to deserialize");
        assert_eq!(settings.application.name, "my-app");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "127.0.0.1"); // default
        assert_eq!(settings.store.backend, StoreBackend::Memory); // default
    }

    #[test]
    fn test_settings_deserialize_full() {
        let toml_str = r#"
            [application]
            name = "test-app"
            version = "1.0.0"

            [server]
            host = "0.0.0.0"
            port = 8080
            request_timeout = 60
            keep_alive_timeout = 120

            [store]
            backend = "redis"
            seed_file = "seeds/employees.json"

            [store.redis]
            url = "redis://cache.internal:6380"
            pool_size = 8
            connection_timeout = 10
            key_prefix = "people"

            [logger]
            level = "debug"

            [logger.console]
            enabled = true
            colored = false

            [logger.file]
            enabled = true
            path = "logs/test.log"
            append = false
            format = "compact"
        "#;

        let settings: Settings = toml::from_str(toml_str).expect("Failed to deserialize");

        assert_eq!(settings.application.name, "test-app");
        assert_eq!(settings.application.version, "1.0.0");

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.request_timeout, 60);
        assert_eq!(settings.server.keep_alive_timeout, 120);

        assert_eq!(settings.store.backend, StoreBackend::Redis);
        assert_eq!(
            settings.store.seed_file.as_deref(),
            Some("seeds/employees.json")
        );
        assert_eq!(settings.store.redis.url, "redis://cache.internal:6380");
        assert_eq!(settings.store.redis.pool_size, 8);
        assert_eq!(settings.store.redis.connection_timeout, 10);
        assert_eq!(settings.store.redis.key_prefix, "people");

        assert_eq!(settings.logger.level, "debug");
        assert!(settings.logger.console.enabled);
        assert!(!settings.logger.console.colored);
        assert!(settings.logger.file.enabled);
        assert_eq!(settings.logger.file.path, "logs/test.log");
        assert!(!settings.logger.file.append);
        assert_eq!(settings.logger.file.format, "compact");
    }

    #[test]
    fn test_store_backend_parses_lowercase() {
        let toml_str = r#"
            [store]
            backend = "memory"
        "#;
        let settings: Settings = toml::from_str(toml_str).expect("Failed to deserialize");
        assert_eq!(settings.store.backend, StoreBackend::Memory);

        let toml_str = r#"
            [store]
            backend = "redis"
        "#;
        let settings: Settings = toml::from_str(toml_str).expect("Failed to deserialize");
        assert_eq!(settings.store.backend, StoreBackend::Redis);
    }
}
