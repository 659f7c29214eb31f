//! Server configuration.
//!
//! Dataset location, bind address and logging destination.

use std::path::PathBuf;

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// SQLite dataset to serve (default: "Resources/hawaii.sqlite")
    pub db_path: PathBuf,

    /// Host to bind to (default: "127.0.0.1")
    pub host: String,

    /// Port to bind to (default: 5000)
    pub port: u16,

    /// Log level; falls back to the build-mode default when unset.
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files; stderr when unset.
    pub log_dir: Option<PathBuf>,
}

pub const DEFAULT_DB_PATH: &str = "Resources/hawaii.sqlite";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: None,
            log_dir: None,
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Effective log level, resolved against the build-mode default.
    pub fn effective_log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or(surfsup_core::default_log_level())
    }
}
