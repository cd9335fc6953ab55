//! Server configuration.
//!
//! Settings are resolved in three layers: built-in defaults, an optional TOML
//! file, then environment variables.
//!
//! # Configuration file
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! debug = false
//! body_limit_bytes = 1048576
//!
//! [logging]
//! level = "info,tower_http=debug"
//! ```
//!
//! # Environment Variables
//!
//! - `ECHO_CONFIG`: path of the TOML file (default: `server.toml` or
//!   `backend/server.toml` when present)
//! - `HOST`: bind host
//! - `PORT`: bind port
//! - `ECHO_DEBUG`: `true`/`false`/`1`/`0`; adds parser details to error bodies
//! - `RUST_LOG`: log filter directive

use serde::Deserialize;
use std::env;
use std::fs;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

pub const CONFIG_PATH_ENV: &str = "ECHO_CONFIG";
pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const DEBUG_ENV: &str = "ECHO_DEBUG";
pub const LOG_ENV: &str = "RUST_LOG";

/// Errors raised while resolving the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value {value:?} for {var}: {reason}")]
    InvalidEnv {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("cannot resolve bind address {address}: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// On-disk layout of the configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    server: ServerSettings,
    #[serde(default)]
    logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ServerSettings {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default)]
    debug: bool,
    #[serde(default = "default_body_limit")]
    body_limit_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
            body_limit_bytes: default_body_limit(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LoggingSettings {
    #[serde(default)]
    level: Option<String>,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_body_limit() -> usize {
    DEFAULT_BODY_LIMIT_BYTES
}

/// Resolved server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host name or IP address to bind
    pub host: String,
    /// TCP port to bind
    pub port: u16,
    /// Include parser details in error responses and log at debug level
    pub debug: bool,
    /// Maximum accepted request body size
    pub body_limit_bytes: usize,
    /// Explicit log filter; `None` means derive it from `debug`
    pub log_level: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_layout(ConfigFile::default())
    }
}

impl ServerConfig {
    fn from_layout(file: ConfigFile) -> Self {
        Self {
            host: file.server.host,
            port: file.server.port,
            debug: file.server.debug,
            body_limit_bytes: file.server.body_limit_bytes,
            log_level: file.logging.level,
        }
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Self::parse(content, "<inline>")
    }

    /// Load a configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    fn parse(content: &str, origin: &str) -> ConfigResult<Self> {
        let file: ConfigFile = toml::from_str(content).map_err(|source| ConfigError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        let config = Self::from_layout(file);
        config.validate()?;
        Ok(config)
    }

    /// Load from the first standard location that exists.
    ///
    /// Searches for `server.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    ///
    /// Returns `Ok(None)` when no file is found.
    pub fn from_default_location() -> ConfigResult<Option<Self>> {
        let search_paths = [PathBuf::from("server.toml"), PathBuf::from("backend/server.toml")];

        for path in search_paths {
            if path.exists() {
                tracing::debug!(path = %path.display(), "Loading server config");
                return Self::from_file(&path).map(Some);
            }
        }

        Ok(None)
    }

    /// Resolve the full configuration: file (if any) then environment.
    pub fn load() -> ConfigResult<Self> {
        let base = match config_path_env() {
            Some(path) => Self::from_file(path)?,
            None => Self::from_default_location()?.unwrap_or_default(),
        };
        base.with_env_overrides()
    }

    /// Apply `HOST`, `PORT`, `ECHO_DEBUG` and `RUST_LOG` on top of `self`.
    pub fn with_env_overrides(mut self) -> ConfigResult<Self> {
        if let Some(host) = non_empty_env(HOST_ENV) {
            self.host = host;
        }

        if let Some(port) = non_empty_env(PORT_ENV) {
            self.port = port.parse::<u16>().map_err(|e| ConfigError::InvalidEnv {
                var: PORT_ENV,
                value: port.clone(),
                reason: e.to_string(),
            })?;
        }

        if let Some(debug) = non_empty_env(DEBUG_ENV) {
            self.debug = parse_flag(&debug).ok_or_else(|| ConfigError::InvalidEnv {
                var: DEBUG_ENV,
                value: debug.clone(),
                reason: "expected true, false, 1 or 0".to_string(),
            })?;
        }

        if let Some(level) = non_empty_env(LOG_ENV) {
            self.log_level = Some(level);
        }

        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Invalid("host must not be empty".to_string()));
        }
        if self.body_limit_bytes == 0 {
            return Err(ConfigError::Invalid(
                "body_limit_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Log filter directive to install.
    pub fn log_filter(&self) -> &str {
        match &self.log_level {
            Some(level) => level,
            None if self.debug => "debug",
            None => "info",
        }
    }

    /// `host:port` as written in the configuration.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Resolve the bind address to a socket address.
    pub fn socket_addr(&self) -> ConfigResult<SocketAddr> {
        let address = self.bind_address();
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| ConfigError::InvalidAddress {
                address: address.clone(),
                reason: e.to_string(),
            })?
            .next()
            .ok_or_else(|| ConfigError::InvalidAddress {
                address,
                reason: "no addresses resolved".to_string(),
            })
    }
}

/// `ECHO_CONFIG` read as an OS path, so non-Unicode paths still work.
/// Blank values count as unset, like the other variables.
fn config_path_env() -> Option<PathBuf> {
    env::var_os(CONFIG_PATH_ENV)
        .filter(|v| !v.to_string_lossy().trim().is_empty())
        .map(PathBuf::from)
}

fn non_empty_env(var: &str) -> Option<String> {
    env::var(var).ok().filter(|v| !v.trim().is_empty())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
