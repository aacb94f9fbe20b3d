//! Order retrieval route handlers.

use axum::{
    Json,
    extract::{Path, State},
};

use teaweb_core::OrderId;

use crate::db::{Order, OrderRepository};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Get a stored order snapshot by its opaque id.
///
/// A never-issued id is a 404, not a fault.
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Order>> {
    let order = OrderRepository::new(state.pool())
        .get(&OrderId::new(order_id))
        .await?;
    order.map(Json).ok_or(AppError::NotFound)
}
