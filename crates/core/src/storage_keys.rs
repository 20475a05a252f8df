//! Fixed keys of the persistent key-value store.
//!
//! The store is a string-to-string map scoped to one storefront profile.
//! Every durable value the client owns lives under one of these keys.

/// Key for the serialized cart (JSON array of `CartItem`).
pub const CART: &str = "sun-cart";

/// Key for the bearer credential.
pub const ACCESS_TOKEN: &str = "accessToken";

/// Legacy key for the bearer credential; read when `ACCESS_TOKEN` is absent.
pub const LEGACY_TOKEN: &str = "token";

/// Key for the identifier of the last completed order.
pub const LAST_ORDER_ID: &str = "last-order-id";

/// Key for the theme preference (`light`; absent means dark).
pub const THEME: &str = "sun-theme";

/// Key for the accent color preference.
pub const ACCENT: &str = "sun-accent";
