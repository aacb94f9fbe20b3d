//! Newsletter subscription repository.

use serde::{Deserialize, Serialize};
use sqlx::{Row, SqlitePool};

use teaweb_core::Email;

use super::RepositoryError;

/// A stored newsletter subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Normalized subscriber email (primary key).
    pub email: Email,
    /// Last subscription time, epoch seconds.
    pub created_at: i64,
}

/// Repository for newsletter subscriptions.
pub struct NewsletterRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> NewsletterRepository<'a> {
    /// Create a new newsletter repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Subscribe an email, stamping the current time.
    ///
    /// Upsert by email primary key: subscribing twice updates the timestamp
    /// and never creates a duplicate row. The write is a single atomic
    /// statement.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the write cannot commit.
    pub async fn subscribe(&self, email: &Email) -> Result<Subscription, RepositoryError> {
        let created_at = chrono::Utc::now().timestamp();

        sqlx::query(
            r"
            INSERT INTO newsletter (email, created_at) VALUES (?1, ?2)
            ON CONFLICT(email) DO UPDATE SET created_at = excluded.created_at
            ",
        )
        .bind(email.as_str())
        .bind(created_at)
        .execute(self.pool)
        .await?;

        Ok(Subscription {
            email: email.clone(),
            created_at,
        })
    }

    /// Get a subscription by email. Absence is a valid, non-error outcome.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, email: &Email) -> Result<Option<Subscription>, RepositoryError> {
        let row = sqlx::query(
            r"
            SELECT created_at FROM newsletter WHERE email = ?1
            ",
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        match row {
            Some(r) => Ok(Some(Subscription {
                email: email.clone(),
                created_at: r.try_get("created_at")?,
            })),
            None => Ok(None),
        }
    }
}
