//! Logger Module
//!
//! A logging system based on `tracing-subscriber` with support for:
//! - Console output with color control
//! - File output with multiple formats (Full, Compact, JSON)
//! - Append or truncate mode for the log file

use std::fs::{File, OpenOptions};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::settings::{ConsoleSettings, FileSettings, LoggerSettings};

/// Log format options for file output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(LogFormat::Full),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => anyhow::bail!(
                "Invalid log format '{}'. Valid formats are: full, compact, json",
                s
            ),
        }
    }
}

impl LogFormat {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Full => "full",
            LogFormat::Compact => "compact",
            LogFormat::Json => "json",
        }
    }
}

/// Initialize the logger with the given configuration
pub fn init_logger(config: &LoggerSettings) -> anyhow::Result<()> {
    config.validate()?;

    // Create filter from level string
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    match (config.console.enabled, config.file.enabled) {
        (true, true) => init_both(config, filter)?,
        (true, false) => init_console_only(&config.console, filter),
        (false, true) => init_file_only(&config.file, filter)?,
        (false, false) => anyhow::bail!("At least one output (console or file) must be enabled"),
    }

    Ok(())
}

/// Open the log file, creating parent directories as needed
fn open_log_file(config: &FileSettings) -> anyhow::Result<Arc<File>> {
    let path = Path::new(&config.path);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create log directory: {}", parent.display())
            })?;
        }
    }

    let mut options = OpenOptions::new();
    options.create(true);
    if config.append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }

    let file = options
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    Ok(Arc::new(file))
}

fn init_console_only(config: &ConsoleSettings, filter: EnvFilter) {
    let is_tty = std::io::stdout().is_terminal();
    let use_ansi = config.colored && is_tty;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_ansi(use_ansi)
                .with_target(true)
                .with_level(true),
        )
        .init();
}

fn init_file_only(config: &FileSettings, filter: EnvFilter) -> anyhow::Result<()> {
    let writer = open_log_file(config)?;

    match config.format.parse::<LogFormat>()? {
        LogFormat::Full => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_target(true)
                        .with_writer(writer),
                )
                .init();
        }
        LogFormat::Compact => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_target(true)
                        .compact()
                        .with_writer(writer),
                )
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).json().with_writer(writer))
                .init();
        }
    }

    Ok(())
}

fn init_both(config: &LoggerSettings, filter: EnvFilter) -> anyhow::Result<()> {
    let is_tty = std::io::stdout().is_terminal();
    let use_ansi = config.console.colored && is_tty;
    let writer = open_log_file(&config.file)?;

    // IMPORTANT: File layer must be added BEFORE console layer to avoid ANSI codes
    // leaking into file output. This is a known tracing-subscriber behavior where
    // span field formatting is affected by the first layer's ANSI setting.
    // See: https://github.com/tokio-rs/tracing/issues/1817
    match config.file.format.parse::<LogFormat>()? {
        LogFormat::Full => {
            let file_layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(writer);

            let console_layer = fmt::layer()
                .with_ansi(use_ansi)
                .with_target(true)
                .with_level(true);

            tracing_subscriber::registry()
                .with(filter)
                .with(file_layer)
                .with(console_layer)
                .init();
        }
        LogFormat::Compact => {
            let file_layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .compact()
                .with_writer(writer);

            let console_layer = fmt::layer()
                .with_ansi(use_ansi)
                .with_target(true)
                .with_level(true);

            tracing_subscriber::registry()
                .with(filter)
                .with(file_layer)
                .with(console_layer)
                .init();
        }
        LogFormat::Json => {
            let file_layer = fmt::layer().with_ansi(false).json().with_writer(writer);

            let console_layer = fmt::layer()
                .with_ansi(use_ansi)
                .with_target(true)
                .with_level(true);

            tracing_subscriber::registry()
                .with(filter)
                .with(file_layer)
                .with(console_layer)
                .init();
        }
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
