//! Order line quantity type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityError {
    /// The value is outside the orderable range.
    #[error("quantity must be between {min} and {max}, got {got}")]
    OutOfRange {
        /// Minimum orderable quantity.
        min: u32,
        /// Maximum orderable quantity.
        max: u32,
        /// The rejected value.
        got: u32,
    },
}

/// A per-line order quantity, validated to `1..=99`.
///
/// The range matches what the storefront form allows; anything outside it
/// is a client fault, rejected before a quote is computed. Deserialization
/// goes through the same check, so a stored snapshot cannot smuggle an
/// out-of-range value back in.
///
/// ```
/// use teaweb_core::Quantity;
///
/// assert_eq!(Quantity::new(2).unwrap().get(), 2);
/// assert!(Quantity::new(0).is_err());
/// assert!(Quantity::new(100).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// Minimum orderable quantity per line.
    pub const MIN: u32 = 1;
    /// Maximum orderable quantity per line.
    pub const MAX: u32 = 99;

    /// Create a `Quantity`, validating the orderable range.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::OutOfRange` if `value` is not in `1..=99`.
    pub const fn new(value: u32) -> Result<Self, QuantityError> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(QuantityError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                got: value,
            })
        }
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(qty: Quantity) -> Self {
        qty.0
    }
}
