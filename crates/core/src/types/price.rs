//! Type-safe price representation.
//!
//! Prices are non-negative whole currency units. The storefront deals in
//! whole-dollar luxury price points, so no fractional arithmetic is needed;
//! display formatting groups thousands the way the page does.

use serde::{Deserialize, Serialize};

/// A non-negative price in whole currency units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Get the underlying amount.
    #[must_use]
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Format for display with a currency symbol and thousands grouping
    /// (e.g., `$12,500`).
    #[must_use]
    pub fn display(&self) -> String {
        format!("${}", group_thousands(self.0))
    }
}

impl core::ops::Add for Price {
    type Output = Self;

    /// Saturates at `u64::MAX` instead of overflowing.
    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl core::iter::Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self(0), core::ops::Add::add)
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.display())
    }
}

fn group_thousands(mut n: u64) -> String {
    if n < 1000 {
        return n.to_string();
    }
    let mut groups = Vec::new();
    while n >= 1000 {
        groups.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    let mut out = n.to_string();
    for group in groups.into_iter().rev() {
        out.push(',');
        out.push_str(&group);
    }
    out
}
