//! Order inspection commands.

use sundial_core::storage_keys;
use sundial_storefront::{FileStore, KeyValueStore, StorefrontConfig};

/// Print the identifier of the last completed order.
#[allow(clippy::print_stdout)]
pub fn last() -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let store = FileStore::open(&config.store_path);
    match store.get(storage_keys::LAST_ORDER_ID) {
        Some(order_id) => println!("{order_id}"),
        None => println!("No completed orders"),
    }
    Ok(())
}
