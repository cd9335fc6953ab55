//! Echo HTTP Server Binary
//!
//! Main entry point for the echo REST API server. It resolves the
//! configuration, sets up the HTTP router and serves until interrupted.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin echo-server
//!
//! # Bind elsewhere with error details and verbose logs
//! HOST=0.0.0.0 PORT=8080 ECHO_DEBUG=true cargo run --bin echo-server
//!
//! # Use an explicit config file
//! ECHO_CONFIG=backend/server.example.toml cargo run --bin echo-server
//! ```
//!
//! # Environment Variables
//!
//! - `ECHO_CONFIG`: TOML configuration file
//! - `HOST`: Server host (default: 127.0.0.1)
//! - `PORT`: Server port (default: 5000)
//! - `ECHO_DEBUG`: Include parser details in error bodies (default: false)
//! - `RUST_LOG`: Log filter (default: info, or debug when ECHO_DEBUG is set)

use tokio::signal;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use echo_backend::config::ServerConfig;
use echo_backend::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;

    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_new(config.log_filter())?)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting echo HTTP server");
    info!(
        host = %config.host,
        port = config.port,
        debug = config.debug,
        body_limit_bytes = config.body_limit_bytes,
        "Configuration loaded"
    );
    if config.debug {
        tracing::warn!("Debug mode is on: error responses include parser details");
    }

    let addr = config.socket_addr()?;

    // Create application state and router
    let state = AppState::new(config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
