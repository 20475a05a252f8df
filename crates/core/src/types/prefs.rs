//! Page personalization preferences.
//!
//! Theme and accent color are persisted alongside the cart in the same
//! key-value store. The cart manager never reads them; they share only the
//! storage interface.

use serde::{Deserialize, Serialize};

/// Light/dark theme preference.
///
/// Only `light` is ever written to storage; an absent key means dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Parse the stored value; anything other than `light` is dark.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    /// The value written to storage, or `None` when the key is removed.
    #[must_use]
    pub const fn stored_value(self) -> Option<&'static str> {
        match self {
            Self::Light => Some("light"),
            Self::Dark => None,
        }
    }
}

/// Accent color preference. Gold is the neutral default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Gold,
    Blue,
    Emerald,
    Rose,
}

impl Accent {
    /// All selectable accents, in picker order.
    pub const ALL: [Self; 4] = [Self::Gold, Self::Blue, Self::Emerald, Self::Rose];

    /// The stored name of this accent.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Blue => "blue",
            Self::Emerald => "emerald",
            Self::Rose => "rose",
        }
    }

    /// Parse a stored accent name; unknown values fall back to gold.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("blue") => Self::Blue,
            Some("emerald") => Self::Emerald,
            Some("rose") => Self::Rose,
            _ => Self::Gold,
        }
    }
}

impl core::fmt::Display for Accent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_theme_means_dark() {
        assert_eq!(Theme::from_stored(None), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("solarized")), Theme::Dark);
    }

    #[test]
    fn dark_theme_stores_nothing() {
        assert_eq!(Theme::Dark.stored_value(), None);
        assert_eq!(Theme::Light.stored_value(), Some("light"));
    }

    #[test]
    fn accent_round_trips_through_stored_name() {
        for accent in Accent::ALL {
            assert_eq!(Accent::from_stored(Some(accent.as_str())), accent);
        }
        assert_eq!(Accent::from_stored(None), Accent::Gold);
        assert_eq!(Accent::from_stored(Some("chartreuse")), Accent::Gold);
    }
}
