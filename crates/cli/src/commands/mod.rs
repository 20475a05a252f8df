//! CLI command implementations.

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod orders;
pub mod prefs;

use sundial_storefront::{CartManager, FileStore, StorefrontConfig};

use crate::console::ConsoleNotifier;

/// Load configuration and rehydrate the cart from the profile store.
pub fn open_cart() -> Result<CartManager<FileStore>, Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let store = FileStore::open(&config.store_path);
    Ok(CartManager::load(store).with_notifier(Box::new(ConsoleNotifier)))
}
