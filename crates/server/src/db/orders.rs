//! Order repository.

use serde::{Deserialize, Serialize};
use sqlx::{Row, SqlitePool};

use teaweb_core::{Email, OrderId};

use super::RepositoryError;
use crate::quote::Quote;

/// A persisted, immutable record of a completed checkout.
///
/// Created exactly once at checkout, never mutated or deleted, retrievable
/// indefinitely by id. The embedded [`Quote`] is a snapshot: later catalog
/// changes never alter a stored order's meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Opaque public lookup token.
    pub order_id: OrderId,
    /// Creation time, epoch seconds.
    pub created_at: i64,
    /// Contact email, if the customer gave one.
    pub email: Option<Email>,
    /// Priced quote at checkout time.
    pub quote: Quote,
}

/// Repository for order records.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a new order from a computed quote.
    ///
    /// Generates a fresh [`OrderId`], stamps the current time, and commits
    /// the full snapshot in one atomic statement. Returns the fully
    /// populated order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the write cannot commit (no
    /// internal retry) and `RepositoryError::DataCorruption` if the snapshot
    /// cannot be serialized.
    pub async fn create(
        &self,
        email: Option<Email>,
        quote: Quote,
    ) -> Result<Order, RepositoryError> {
        let order = Order {
            order_id: OrderId::generate(),
            created_at: chrono::Utc::now().timestamp(),
            email,
            quote,
        };

        let payload = serde_json::to_string(&order).map_err(|e| {
            RepositoryError::DataCorruption(format!("failed to serialize order: {e}"))
        })?;
        let total = i64::try_from(order.quote.total).unwrap_or(i64::MAX);

        sqlx::query(
            r"
            INSERT INTO orders (order_id, created_at, total, payload_json)
            VALUES (?1, ?2, ?3, ?4)
            ",
        )
        .bind(order.order_id.as_str())
        .bind(order.created_at)
        .bind(total)
        .bind(&payload)
        .execute(self.pool)
        .await?;

        Ok(order)
    }

    /// Get an order by id. Absence is a valid, non-error outcome.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored snapshot does
    /// not decode.
    pub async fn get(&self, order_id: &OrderId) -> Result<Option<Order>, RepositoryError> {
        let row = sqlx::query(
            r"
            SELECT payload_json FROM orders WHERE order_id = ?1
            ",
        )
        .bind(order_id.as_str())
        .fetch_optional(self.pool)
        .await?;

        match row {
            Some(r) => {
                let payload: String = r.try_get("payload_json")?;
                let order = serde_json::from_str(&payload).map_err(|e| {
                    RepositoryError::DataCorruption(format!("invalid order snapshot: {e}"))
                })?;
                Ok(Some(order))
            }
            None => Ok(None),
        }
    }
}
