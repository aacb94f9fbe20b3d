//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; defaults suit local development.
//!
//! - `TEAWEB_DATABASE_URL` - `SQLite` connection string (default: `sqlite:teaweb.db`)
//! - `TEAWEB_HOST` - Bind address (default: 127.0.0.1)
//! - `TEAWEB_PORT` - Listen port (default: 8000)
//! - `TEAWEB_STATIC_DIR` - Directory with the web front end; when set, files
//!   in it (including `index.html` at `/`) are served for any path no API
//!   route claims

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `SQLite` database connection URL
    pub database_url: String,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory holding the static front end, if any
    pub static_dir: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `TEAWEB_HOST` or `TEAWEB_PORT` cannot be
    /// parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_env_or_default("TEAWEB_DATABASE_URL", "sqlite:teaweb.db");
        let host = get_env_or_default("TEAWEB_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("TEAWEB_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("TEAWEB_PORT", "8000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("TEAWEB_PORT".to_string(), e.to_string()))?;
        let static_dir = get_optional_env("TEAWEB_STATIC_DIR");

        Ok(Self {
            database_url,
            host,
            port,
            static_dir,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            database_url: "sqlite::memory:".to_string(),
            host: "127.0.0.1".parse().unwrap(),
            port: 8000,
            static_dir: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 8000);
    }
}
