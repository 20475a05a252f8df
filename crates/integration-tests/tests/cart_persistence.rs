//! Persistence round-trip tests with the file-backed store.
//!
//! Each "session" opens the store fresh, the way a page load rehydrates the
//! cart from localStorage.

use std::fs;
use std::path::PathBuf;

use sundial_core::{CartItem, Price, storage_keys};
use sundial_storefront::{CartManager, FileStore, KeyValueStore};

fn temp_store_path() -> PathBuf {
    std::env::temp_dir().join(format!("sundial-it-{}.json", uuid::Uuid::new_v4()))
}

#[test]
fn cart_survives_reopening_the_store() {
    let path = temp_store_path();

    // first session: fill the cart
    {
        let mut cart = CartManager::load(FileStore::open(&path));
        let mut solaire = CartItem::new("507f1f77bcf86cd799439011", "Chrono Solaire", 12500u64);
        solaire.customization.set("Dial", "Onyx");
        solaire.customization.set("Strap", "Leather");
        cart.add(solaire).expect("add");
        cart.add(CartItem::new("demo-2", "Chrono Lunaire", 900u64))
            .expect("add");
        cart.remove(1).expect("remove");
    }

    // second session: everything is back, minus the removed item
    let cart = CartManager::load(FileStore::open(&path));
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.items()[0].name, "Chrono Solaire");
    assert_eq!(
        cart.items()[0].customization.display(),
        "Dial: Onyx · Strap: Leather"
    );
    assert_eq!(cart.total(), Price::new(12500));

    fs::remove_file(&path).expect("cleanup");
}

#[test]
fn corrupted_cart_key_is_tolerated_on_load() {
    let path = temp_store_path();
    {
        let mut store = FileStore::open(&path);
        store
            .set(storage_keys::CART, "[{\"id\": truncated")
            .expect("set");
        store.set(storage_keys::THEME, "light").expect("set");
    }

    let store = FileStore::open(&path);
    // unrelated keys are untouched by the bad cart snapshot
    assert_eq!(store.get(storage_keys::THEME).as_deref(), Some("light"));
    let cart = CartManager::load(store);
    assert!(cart.is_empty());

    fs::remove_file(&path).expect("cleanup");
}

#[test]
fn clearing_the_cart_removes_only_the_cart_key() {
    let path = temp_store_path();
    {
        let mut store = FileStore::open(&path);
        store.set(storage_keys::ACCESS_TOKEN, "tok").expect("set");
        let mut cart = CartManager::load(store);
        cart.add(CartItem::new("demo-1", "Chrono", 500u64))
            .expect("add");
        cart.clear().expect("clear");
    }

    let store = FileStore::open(&path);
    assert_eq!(store.get(storage_keys::CART), None);
    assert_eq!(store.get(storage_keys::ACCESS_TOKEN).as_deref(), Some("tok"));

    fs::remove_file(&path).expect("cleanup");
}
