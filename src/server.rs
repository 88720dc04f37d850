//! Server module for managing HTTP server lifecycle
//!
//! This module handles server initialization, startup, and graceful shutdown.

use crate::api::routes::create_router;
use crate::bootstrap;
use crate::config::{Environment, settings::Settings};
use crate::state::AppState;
use crate::store;
use tokio::net::TcpListener;
use tokio::signal;

/// HTTP server manager
pub struct Server {
    settings: Settings,
}

impl Server {
    /// Create a new server with the given settings
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Start the server and run until shutdown signal
    ///
    /// This method:
    /// 1. Logs startup information
    /// 2. Connects the employee store backend
    /// 3. Applies seed data when configured
    /// 4. Creates application state
    /// 5. Binds to configured address
    /// 6. Starts the HTTP server with graceful shutdown
    ///
    /// # Errors
    /// - Store connection errors
    /// - Seed file errors
    /// - Address binding errors
    /// - Server runtime errors
    pub async fn run(self) -> anyhow::Result<()> {
        // Log application startup information
        tracing::info!(
            app_name = %self.settings.application.name,
            app_version = %self.settings.application.version,
            environment = %Environment::from_env().as_str(),
            "Application starting"
        );

        // Log server configuration
        tracing::info!(
            host = %self.settings.server.host,
            port = %self.settings.server.port,
            request_timeout = %self.settings.server.request_timeout,
            keep_alive_timeout = %self.settings.server.keep_alive_timeout,
            "Server configuration loaded"
        );

        // Log store configuration (without sensitive URL details)
        tracing::info!(
            backend = ?self.settings.store.backend,
            seed_file = %self.settings.store.seed_file.as_deref().unwrap_or("none"),
            "Store configuration loaded"
        );

        // Log logger configuration
        tracing::info!(
            level = %self.settings.logger.level,
            console_enabled = %self.settings.logger.console.enabled,
            file_enabled = %self.settings.logger.file.enabled,
            "Logger configuration loaded"
        );

        // Connect the employee store backend
        tracing::info!("Connecting employee store...");
        let store = store::connect(&self.settings.store).await?;
        tracing::info!("Employee store connected");

        // Apply seed data when a seed file is configured
        if let Some(path) = &self.settings.store.seed_file {
            let roster = bootstrap::load_seed_file(path)?;
            let applied = bootstrap::apply_seed(&store, roster).await?;
            tracing::info!(count = %applied, path = %path, "Seed data applied");
        }

        // Create application state with services
        let state = AppState::new(store);
        tracing::info!("Application state created");

        // Create router with all routes and middleware
        let router = create_router(state);
        tracing::info!("Router configured");

        // Bind to the configured address
        let address = self.settings.server.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!(error = %e, address = %address, "Failed to bind to address");
            anyhow::anyhow!("Failed to bind to {}: {}", address, e)
        })?;

        tracing::info!(address = %address, "Server listening");

        // Start the server with graceful shutdown
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

/// Waits for a shutdown signal (Ctrl+C or SIGTERM).
///
/// This function returns when either signal is received, allowing
/// the server to perform graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
