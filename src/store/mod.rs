//! Employee store module providing the keyed document store behind the
//! service, with runtime-selectable backends.
//!
//! # Configuration
//!
//! Configure the store in your TOML config file:
//!
//! ```toml
//! [store]
//! backend = "memory"  # or "redis"
//!
//! [store.redis]
//! url = "redis://127.0.0.1:6379"
//! pool_size = 4
//! connection_timeout = 5
//! key_prefix = "orgdir"
//! ```

mod error;
mod memory;
mod redis;
mod traits;

use std::sync::Arc;

pub use error::StoreError;
pub use memory::MemoryEmployeeStore;
pub use redis::RedisEmployeeStore;
pub use traits::EmployeeStore;

use crate::config::settings::{StoreBackend, StoreConfig};

/// Build the configured store backend.
///
/// Called once during startup; the returned handle is injected into the
/// application state rather than held in any global.
pub async fn connect(config: &StoreConfig) -> Result<Arc<dyn EmployeeStore>, StoreError> {
    let store: Arc<dyn EmployeeStore> = match config.backend {
        StoreBackend::Memory => Arc::new(MemoryEmployeeStore::new()),
        StoreBackend::Redis => Arc::new(RedisEmployeeStore::new(&config.redis).await?),
    };

    Ok(store)
}
