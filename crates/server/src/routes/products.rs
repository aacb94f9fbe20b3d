//! Catalog route handlers.
//!
//! Read-only views over the immutable catalog; nothing here touches the
//! database.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::catalog::{Product, Region};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Product listing filters.
#[derive(Debug, Deserialize)]
pub struct ProductFilter {
    /// Exact region key to filter by.
    pub region: Option<String>,
    /// Free-text query over name, style, weight, tasting notes, and note.
    pub q: Option<String>,
}

/// List all regions.
pub async fn list_regions(State(state): State<AppState>) -> Json<Vec<Region>> {
    Json(state.catalog().regions().to_vec())
}

/// List products, optionally filtered by region and free-text query.
pub async fn list_products(
    State(state): State<AppState>,
    Query(filter): Query<ProductFilter>,
) -> Json<Vec<Product>> {
    let products = state
        .catalog()
        .filter(filter.region.as_deref(), filter.q.as_deref())
        .into_iter()
        .cloned()
        .collect();
    Json(products)
}

/// Get a single product by id.
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Product>> {
    state
        .catalog()
        .lookup(&product_id)
        .cloned()
        .map(Json)
        .ok_or(AppError::NotFound)
}
