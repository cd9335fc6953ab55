//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state passed to all handlers.
///
/// Built once at startup; handlers only read from it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Resolved server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new application state with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}
