//! Cart line items and their customization options.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::{Price, ProductId};

/// Image shown for items that were added without one.
pub const PLACEHOLDER_IMAGE: &str = "assets/favicon.svg";

/// Selected customization options for a line item.
///
/// An ordered mapping from option name to selected value. Keys are unique;
/// insertion order is irrelevant for totals but preserved for display.
/// Serializes to a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Customization(Vec<(String, String)>);

impl Customization {
    /// Create an empty customization.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Set an option, replacing any existing value under the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.0.iter_mut().find(|(k, _)| *k == name) {
            entry.1 = value;
        } else {
            self.0.push((name, value));
        }
    }

    /// Whether no options are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of options set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// One-line display form, e.g. `Dial: Onyx · Strap: Leather`.
    #[must_use]
    pub fn display(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Customization {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut custom = Self::new();
        for (k, v) in iter {
            custom.set(k, v);
        }
        custom
    }
}

impl Serialize for Customization {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Customization {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CustomizationVisitor;

        impl<'de> Visitor<'de> for CustomizationVisitor {
            type Value = Customization;

            fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("a map of option names to selected values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut custom = Customization::new();
                while let Some((k, v)) = map.next_entry::<String, String>()? {
                    custom.set(k, v);
                }
                Ok(custom)
            }
        }

        deserializer.deserialize_map(CustomizationVisitor)
    }
}

/// One purchasable selection in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Opaque product identifier; not necessarily a backend object ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price in whole currency units.
    pub price: Price,
    /// Product image URL; a placeholder is shown when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Display quantity. Not reflected in totals or in the sync payload.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Selected customization options.
    #[serde(default, skip_serializing_if = "Customization::is_empty")]
    pub customization: Customization,
}

const fn default_quantity() -> u32 {
    1
}

impl CartItem {
    /// Create a plain item with quantity 1 and no image or customization.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: impl Into<Price>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
            image: None,
            quantity: 1,
            customization: Customization::new(),
        }
    }

    /// The item's image URL, or the placeholder when none was provided.
    #[must_use]
    pub fn image_or_placeholder(&self) -> &str {
        self.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }
}
