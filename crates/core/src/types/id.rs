//! Product identifier newtype.
//!
//! Product IDs are opaque strings. IDs that come from the order backend are
//! 24-character hexadecimal object identifiers; IDs minted locally (demo and
//! bespoke products) are arbitrary strings. Only well-formed object IDs are
//! ever synced to the remote cart.

use serde::{Deserialize, Serialize};

/// Opaque product identifier.
///
/// May or may not be a well-formed backend object identifier; use
/// [`ProductId::is_object_id`] to distinguish syncable products from
/// local-only entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product ID from a string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this ID is a well-formed backend object identifier
    /// (exactly 24 hexadecimal characters).
    #[must_use]
    pub fn is_object_id(&self) -> bool {
        self.0.len() == 24 && self.0.bytes().all(|b| b.is_ascii_hexdigit())
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}
