//! Opaque order identifier.

use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An opaque, high-entropy order identifier.
///
/// Generated once at checkout and used as the public lookup token, so it
/// must be unguessable - 122 bits of UUIDv4 randomness rendered as 32 hex
/// characters. Never reused, never re-issued.
///
/// ```
/// use teaweb_core::OrderId;
///
/// let a = OrderId::generate();
/// let b = OrderId::generate();
/// assert_ne!(a, b);
/// assert_eq!(a.as_str().len(), 32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Generate a fresh order identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Wrap an identifier received from a client or read from storage.
    ///
    /// No shape validation is applied: an id that was never issued simply
    /// fails to match any stored order.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `OrderId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
