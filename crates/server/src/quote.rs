//! Quote engine: turns a cart into a priced, itemized quote.
//!
//! Pure computation over the immutable [`Catalog`]; no side effects, so the
//! same cart always prices the same. The quote a checkout persists is a
//! denormalized snapshot - its line items carry the product name and unit
//! price as they were at quoting time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use teaweb_core::Quantity;

use crate::catalog::Catalog;

/// Currency all quotes are priced in.
pub const CURRENCY: &str = "CNY";

/// Subtotal at or above which shipping is free.
pub const FREE_SHIPPING_THRESHOLD: u64 = 199;

/// Flat shipping fee below the free-shipping threshold.
pub const SHIPPING_FEE: u64 = 12;

/// A validated cart line: product id plus requested quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    /// Product identifier to price.
    pub id: String,
    /// Requested quantity, already range-checked.
    pub qty: Quantity,
}

/// A priced quote line, denormalized from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteLine {
    /// Product identifier.
    pub id: String,
    /// Product display name at quoting time.
    pub name: String,
    /// Requested quantity.
    pub qty: Quantity,
    /// Unit price at quoting time, in whole currency units.
    pub unit_price: u32,
    /// `unit_price * qty`.
    pub line_total: u64,
}

/// A priced, itemized breakdown of a cart at a point in time.
///
/// Invariants: `total == subtotal + shipping`, `subtotal` is the sum of the
/// line totals, and lines appear in cart input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Currency code (always [`CURRENCY`]).
    pub currency: String,
    /// Sum of all line totals.
    pub subtotal: u64,
    /// Shipping fee: 0 at or above the threshold, else [`SHIPPING_FEE`].
    pub shipping: u64,
    /// `subtotal + shipping`.
    pub total: u64,
    /// The threshold in effect when this quote was computed.
    pub free_shipping_threshold: u64,
    /// Priced lines, in cart input order.
    pub items: Vec<QuoteLine>,
}

/// Errors from quote computation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// The cart referenced a product id not in the catalog. The whole
    /// computation aborts; no partial quote is produced.
    #[error("Unknown product id: {0}")]
    UnknownProduct(String),
    /// The cart had no items.
    #[error("Cart must contain at least one item")]
    EmptyCart,
}

/// Compute a quote for a cart.
///
/// Lines are priced in input order with exact integer arithmetic; shipping
/// is free at or above [`FREE_SHIPPING_THRESHOLD`], else [`SHIPPING_FEE`].
///
/// # Errors
///
/// Returns [`QuoteError::UnknownProduct`] naming the first cart id missing
/// from the catalog, or [`QuoteError::EmptyCart`] for an empty cart. The
/// boundary layer rejects empty carts before calling in; the check here
/// keeps the engine total on its own.
pub fn compute_quote(catalog: &Catalog, items: &[CartItem]) -> Result<Quote, QuoteError> {
    if items.is_empty() {
        return Err(QuoteError::EmptyCart);
    }

    let mut subtotal: u64 = 0;
    let mut lines = Vec::with_capacity(items.len());
    for item in items {
        let product = catalog
            .lookup(&item.id)
            .ok_or_else(|| QuoteError::UnknownProduct(item.id.clone()))?;
        let line_total = u64::from(product.price) * u64::from(item.qty.get());
        subtotal += line_total;
        lines.push(QuoteLine {
            id: product.id.clone(),
            name: product.name.clone(),
            qty: item.qty,
            unit_price: product.price,
            line_total,
        });
    }

    let shipping = if subtotal >= FREE_SHIPPING_THRESHOLD {
        0
    } else {
        SHIPPING_FEE
    };

    Ok(Quote {
        currency: CURRENCY.to_string(),
        subtotal,
        shipping,
        total: subtotal + shipping,
        free_shipping_threshold: FREE_SHIPPING_THRESHOLD,
        items: lines,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(id: &str, qty: u32) -> CartItem {
        CartItem {
            id: id.to_string(),
            qty: Quantity::new(qty).unwrap(),
        }
    }

    #[test]
    fn test_single_item_below_threshold() {
        // fj-rougui is priced at 68: 2 * 68 = 136 < 199, so shipping applies
        let catalog = Catalog::builtin();
        let quote = compute_quote(&catalog, &[item("fj-rougui", 2)]).unwrap();

        assert_eq!(quote.subtotal, 136);
        assert_eq!(quote.shipping, 12);
        assert_eq!(quote.total, 148);
        assert_eq!(quote.currency, "CNY");
    }

    #[test]
    fn test_free_shipping_at_threshold() {
        // yn-lincang-shu is priced at 88: 3 * 88 = 264 >= 199
        let catalog = Catalog::builtin();
        let quote = compute_quote(&catalog, &[item("yn-lincang-shu", 3)]).unwrap();

        assert_eq!(quote.subtotal, 264);
        assert_eq!(quote.shipping, 0);
        assert_eq!(quote.total, 264);
    }

    #[test]
    fn test_shipping_boundary_exact() {
        // in-assam at 55 and fj-rougui at 68 can't hit 198/199 exactly, so
        // check the comparison against a synthetic two-product catalog.
        use crate::catalog::Product;

        let p = |id: &str, price: u32| Product {
            id: id.to_string(),
            name: id.to_string(),
            region: "Fujian".to_string(),
            style: String::new(),
            price,
            weight: String::new(),
            tasting: Vec::new(),
            note: String::new(),
        };
        let catalog = Catalog::new(Vec::new(), vec![p("just-under", 198), p("exact", 199)]);

        let under = compute_quote(&catalog, &[item("just-under", 1)]).unwrap();
        assert_eq!(under.shipping, SHIPPING_FEE);
        assert_eq!(under.total, 210);

        let at = compute_quote(&catalog, &[item("exact", 1)]).unwrap();
        assert_eq!(at.shipping, 0);
        assert_eq!(at.total, 199);
    }

    #[test]
    fn test_invariants_hold_for_mixed_cart() {
        let catalog = Catalog::builtin();
        let cart = [item("fj-rougui", 2), item("zj-longjing", 1), item("in-assam", 5)];
        let quote = compute_quote(&catalog, &cart).unwrap();

        for line in &quote.items {
            assert_eq!(
                line.line_total,
                u64::from(line.unit_price) * u64::from(line.qty.get())
            );
        }
        let line_sum: u64 = quote.items.iter().map(|l| l.line_total).sum();
        assert_eq!(quote.subtotal, line_sum);
        assert_eq!(quote.total, quote.subtotal + quote.shipping);
    }

    #[test]
    fn test_lines_preserve_input_order() {
        let catalog = Catalog::builtin();
        let cart = [item("in-assam", 1), item("fj-rougui", 1), item("tw-gaoshan", 1)];
        let quote = compute_quote(&catalog, &cart).unwrap();

        let ids: Vec<&str> = quote.items.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["in-assam", "fj-rougui", "tw-gaoshan"]);
    }

    #[test]
    fn test_unknown_product_aborts_and_names_id() {
        let catalog = Catalog::builtin();
        let cart = [item("fj-rougui", 1), item("nonexistent", 1)];
        let err = compute_quote(&catalog, &cart).unwrap_err();

        assert_eq!(err, QuoteError::UnknownProduct("nonexistent".to_string()));
    }

    #[test]
    fn test_unknown_product_first_position() {
        let catalog = Catalog::builtin();
        let cart = [item("nope", 1), item("fj-rougui", 1)];
        let err = compute_quote(&catalog, &cart).unwrap_err();

        assert_eq!(err, QuoteError::UnknownProduct("nope".to_string()));
    }

    #[test]
    fn test_empty_cart_rejected() {
        let catalog = Catalog::builtin();
        assert_eq!(compute_quote(&catalog, &[]), Err(QuoteError::EmptyCart));
    }

    #[test]
    fn test_repeatable_for_identical_input() {
        let catalog = Catalog::builtin();
        let cart = [item("slk-ceylon", 4)];
        let a = compute_quote(&catalog, &cart).unwrap();
        let b = compute_quote(&catalog, &cart).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_quote_serde_roundtrip() {
        let catalog = Catalog::builtin();
        let quote = compute_quote(&catalog, &[item("fj-baimudan", 1)]).unwrap();

        let json = serde_json::to_string(&quote).unwrap();
        let back: Quote = serde_json::from_str(&json).unwrap();
        assert_eq!(back, quote);
    }
}
