//! Command handlers for CLI operations
//!
//! This module contains handlers for different CLI commands,
//! separating command execution logic from parsing and validation.

pub mod seed;
pub mod serve;

pub use seed::SeedCommandHandler;
pub use serve::ServeCommandHandler;
