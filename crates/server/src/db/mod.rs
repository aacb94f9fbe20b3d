//! Database operations for the teaweb `SQLite` store.
//!
//! # Schema
//!
//! Two independent record collections in one database file:
//!
//! - `newsletter` - email primary key, last subscription timestamp
//! - `orders` - opaque order id primary key, timestamp, total, and the full
//!   order snapshot as a JSON blob
//!
//! The schema is created idempotently by [`init_schema`] on every startup.
//!
//! # Concurrency
//!
//! WAL journaling keeps concurrent short-lived writers safe; connections are
//! pooled and held only for the duration of one logical operation. Writes
//! are single statements, so a reader either sees a committed record or
//! nothing.

mod newsletter;
mod orders;

pub use newsletter::{NewsletterRepository, Subscription};
pub use orders::{Order, OrderRepository};

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use thiserror::Error;

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The underlying database operation failed. Propagated unmodified;
    /// retry policy belongs to the caller.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored record could not be decoded.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a `SQLite` connection pool with sensible defaults.
///
/// The database file is created if missing, with WAL journaling and
/// foreign keys enabled.
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is invalid or the connection cannot be
/// established.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}

/// Create the record collections if absent.
///
/// Idempotent; safe to call on every process startup regardless of prior
/// state.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if a DDL statement fails.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), RepositoryError> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS newsletter (
          email TEXT PRIMARY KEY,
          created_at INTEGER NOT NULL
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS orders (
          order_id TEXT PRIMARY KEY,
          created_at INTEGER NOT NULL,
          total INTEGER NOT NULL,
          payload_json TEXT NOT NULL
        )
        ",
    )
    .execute(pool)
    .await?;

    Ok(())
}
