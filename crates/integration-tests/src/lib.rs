//! Integration tests for teaweb.
//!
//! Tests run hermetically against an in-memory `SQLite` database: the
//! repository suites drive `teaweb_server::db` directly, and the API suite
//! drives the axum router with `tower::ServiceExt::oneshot`, no socket
//! bound.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p teaweb-integration-tests
//! ```

#![allow(clippy::expect_used)]

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use teaweb_server::catalog::Catalog;
use teaweb_server::config::ServerConfig;
use teaweb_server::db;
use teaweb_server::state::AppState;

/// Create an in-memory `SQLite` pool with the schema applied.
///
/// Capped at one connection: each in-memory connection is its own database,
/// so a larger pool would hand out empty databases.
///
/// # Panics
///
/// Panics if the pool cannot be created or the schema fails to apply;
/// either is a test-environment fault.
pub async fn memory_pool() -> SqlitePool {
    let options =
        SqliteConnectOptions::from_str("sqlite::memory:").expect("valid in-memory sqlite URL");
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("failed to open in-memory sqlite");
    db::init_schema(&pool).await.expect("failed to apply schema");
    pool
}

/// Configuration for tests; the database URL is informational since the
/// pool is built separately.
#[must_use]
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database_url: "sqlite::memory:".to_string(),
        host: std::net::IpAddr::from([127, 0, 0, 1]),
        port: 0,
        static_dir: None,
    }
}

/// Application state over a fresh in-memory database and the built-in
/// catalog.
pub async fn test_state() -> AppState {
    AppState::new(test_config(), memory_pool().await, Catalog::builtin())
}
