//! Checkout route handlers: quoting and order creation.
//!
//! All validation happens before any durable write; a cart that fails
//! validation or references an unknown product never reaches the database.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use teaweb_core::{Email, OrderId, Quantity};

use crate::db::OrderRepository;
use crate::error::{AppError, Result};
use crate::quote::{CartItem, Quote, compute_quote};
use crate::state::AppState;

/// One cart line as submitted by the client.
#[derive(Debug, Deserialize)]
pub struct CheckoutItem {
    pub id: String,
    pub qty: u32,
}

/// Checkout request body, shared by the quote and checkout endpoints.
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub items: Vec<CheckoutItem>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Checkout confirmation: the generated order id plus the priced quote,
/// flattened into one object.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub ok: bool,
    pub order_id: OrderId,
    #[serde(flatten)]
    pub quote: Quote,
}

/// Validate the raw cart into typed [`CartItem`]s.
fn validate_cart(items: &[CheckoutItem]) -> Result<Vec<CartItem>> {
    if items.is_empty() {
        return Err(AppError::Validation(
            "Cart must contain at least one item".to_string(),
        ));
    }
    items
        .iter()
        .map(|item| {
            let qty = Quantity::new(item.qty).map_err(|e| AppError::Validation(e.to_string()))?;
            Ok(CartItem {
                id: item.id.clone(),
                qty,
            })
        })
        .collect()
}

/// Price a cart without persisting anything.
pub async fn quote(
    State(state): State<AppState>,
    Json(req): Json<CheckoutRequest>,
) -> Result<Json<Quote>> {
    let cart = validate_cart(&req.items)?;
    let quote = compute_quote(state.catalog(), &cart)?;
    Ok(Json(quote))
}

/// Price a cart and persist the order.
///
/// Fails fast: email and cart validation and the quote computation all run
/// before the write, so a rejected checkout leaves no partial record.
#[instrument(skip_all, fields(items = req.items.len()))]
pub async fn checkout(
    State(state): State<AppState>,
    Json(req): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>> {
    let email = req
        .email
        .as_deref()
        .map(Email::parse)
        .transpose()
        .map_err(|e| AppError::Validation(format!("Invalid email: {e}")))?;
    let cart = validate_cart(&req.items)?;
    let quote = compute_quote(state.catalog(), &cart)?;

    let order = OrderRepository::new(state.pool()).create(email, quote).await?;
    tracing::info!(order_id = %order.order_id, total = order.quote.total, "Order created");

    Ok(Json(CheckoutResponse {
        ok: true,
        order_id: order.order_id,
        quote: order.quote,
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn raw(id: &str, qty: u32) -> CheckoutItem {
        CheckoutItem {
            id: id.to_string(),
            qty,
        }
    }

    #[test]
    fn test_validate_cart_empty() {
        let err = validate_cart(&[]).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_validate_cart_quantity_out_of_range() {
        assert!(validate_cart(&[raw("fj-rougui", 0)]).is_err());
        assert!(validate_cart(&[raw("fj-rougui", 100)]).is_err());
    }

    #[test]
    fn test_validate_cart_preserves_order() {
        let cart = validate_cart(&[raw("b", 1), raw("a", 2)]).unwrap();
        let ids: Vec<&str> = cart.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_request_email_defaults_to_none() {
        let req: CheckoutRequest =
            serde_json::from_str(r#"{"items":[{"id":"fj-rougui","qty":1}]}"#).unwrap();
        assert!(req.email.is_none());
        assert_eq!(req.items.len(), 1);
    }
}
