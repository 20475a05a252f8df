//! Custom Askama template filters.

use std::fmt::Display;

/// Formats a price with a currency symbol and thousands grouping,
/// e.g., `$12,500`.
///
/// Usage in templates: `{{ item.price|money }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn money(price: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(price.to_string())
}
