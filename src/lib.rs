//! Orgdir Library
//!
//! Core library modules for the orgdir employee directory service.

use shadow_rs::shadow;
shadow!(build);

pub mod api;
pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;
pub mod state;
pub mod store;

pub use state::AppState;

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}

pub fn clap_long_version() -> &'static str {
    build::CLAP_LONG_VERSION
}
