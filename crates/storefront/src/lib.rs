//! Sundial Storefront library.
//!
//! Headless client logic of the Sundial storefront:
//!
//! - [`store`] - Persistent key-value storage (the localStorage analog)
//! - [`cart`] - The cart manager: line items, totals, rendering
//! - [`checkout`] - The order-placement sequence and its API client
//! - [`ui`] - Adapter translating UI events into cart operations
//! - [`prefs`] - Theme and accent personalization flags
//!
//! The cart manager owns the item list and the persistence handle; nothing
//! here touches a live page, which keeps every operation testable headless.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod filters;
pub mod prefs;
pub mod store;
pub mod ui;

pub use cart::{CartManager, CartSurface, CartView, Notifier, TracingNotifier};
pub use checkout::{CheckoutFlow, CheckoutForm, CheckoutOutcome, OrderApiClient};
pub use config::{Pages, StorefrontConfig};
pub use error::{CartError, CheckoutError, StoreError};
pub use prefs::Preferences;
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use ui::{AddToCartTrigger, CartController, Navigation, UiEvent};
