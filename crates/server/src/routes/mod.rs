//! HTTP route handlers for the JSON API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /healthz                     - Liveness check
//! GET  /readyz                      - Readiness check (verifies database)
//!
//! # Catalog (read-only)
//! GET  /api/regions                 - Region list
//! GET  /api/products?region&q       - Filtered product listing
//! GET  /api/products/{product_id}   - Product detail
//!
//! # Newsletter
//! POST /api/newsletter/subscribe    - Upsert a subscription
//!
//! # Checkout
//! POST /api/checkout/quote          - Price a cart without persisting
//! POST /api/checkout                - Price a cart and persist an order
//! GET  /api/orders/{order_id}       - Fetch a stored order snapshot
//! ```

pub mod checkout;
pub mod newsletter;
pub mod orders;
pub mod products;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{
    Json, Router,
    routing::{get, post},
};
use serde::Serialize;

use crate::state::AppState;

/// Create the `/api` routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/regions", get(products::list_regions))
        .route("/products", get(products::list_products))
        .route("/products/{product_id}", get(products::get_product))
        .route("/newsletter/subscribe", post(newsletter::subscribe))
        .route("/checkout/quote", post(checkout::quote))
        .route("/checkout", post(checkout::checkout))
        .route("/orders/{order_id}", get(orders::get_order))
}

/// Build the full application router over the given state.
///
/// Used by `main` (which layers static file serving and tracing on top) and
/// by integration tests driving the router directly.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readiness))
        .nest("/api", api_routes())
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
}

/// Liveness health check endpoint.
///
/// Reports that the server is running. Does not check dependencies.
async fn healthz() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
