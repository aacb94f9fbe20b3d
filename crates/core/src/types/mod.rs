//! Core type definitions.
//!
//! Newtype wrappers that make invalid states unrepresentable past the
//! request boundary.

mod email;
mod order_id;
mod quantity;

pub use email::{Email, EmailError};
pub use order_id::OrderId;
pub use quantity::{Quantity, QuantityError};
