//! The cart manager.
//!
//! An explicit context object owning the ordered item list and the
//! persistence handle. Every mutation is mirrored to the store and
//! re-projected onto all registered presentation surfaces. Items keep
//! insertion order; display order equals insertion order.

mod notify;
mod render;

pub use notify::{Notifier, TracingNotifier};
pub use render::{CartItemView, CartSurface, CartView};

use tracing::{debug, info};

use sundial_core::{CartItem, Price, storage_keys};

use crate::error::{CartError, StoreError};
use crate::store::KeyValueStore;

/// Ordered cart of line items, mirrored to persistent storage.
pub struct CartManager<S> {
    items: Vec<CartItem>,
    store: S,
    notifier: Box<dyn Notifier>,
    surfaces: Vec<Box<dyn CartSurface>>,
}

impl<S: KeyValueStore> CartManager<S> {
    /// Rehydrate the cart from the store.
    ///
    /// An absent or malformed snapshot yields an empty cart; initialization
    /// never fails on bad persisted data.
    #[must_use]
    pub fn load(store: S) -> Self {
        let items = store
            .get(storage_keys::CART)
            .and_then(|raw| match serde_json::from_str(&raw) {
                Ok(items) => Some(items),
                Err(err) => {
                    debug!(%err, "malformed cart snapshot, starting empty");
                    None
                }
            })
            .unwrap_or_default();
        Self {
            items,
            store,
            notifier: Box::new(TracingNotifier),
            surfaces: Vec::new(),
        }
    }

    /// Replace the notification sink.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Register a presentation surface. Surfaces are re-rendered after
    /// every mutation; registration order is projection order.
    pub fn add_surface(&mut self, surface: Box<dyn CartSurface>) {
        self.surfaces.push(surface);
    }

    /// The current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Shared access to the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the backing store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// The notification sink.
    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    /// Append `item` to the cart, persist, re-render, and notify.
    ///
    /// Adding the same product twice yields two entries; there is no
    /// deduplication.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if persisting or rendering fails.
    pub fn add(&mut self, item: CartItem) -> Result<(), CartError> {
        let name = item.name.clone();
        self.items.push(item);
        self.persist()?;
        self.render()?;
        info!(%name, count = self.items.len(), "item added to cart");
        self.notifier.notify(&format!("Added {name} to cart"));
        Ok(())
    }

    /// Remove the item at `index`; later items shift down by one.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::IndexOutOfRange`] without mutating anything when
    /// `index >= len()`, and [`CartError`] if persisting or rendering fails.
    pub fn remove(&mut self, index: usize) -> Result<CartItem, CartError> {
        if index >= self.items.len() {
            return Err(CartError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        let removed = self.items.remove(index);
        self.persist()?;
        self.render()?;
        info!(name = %removed.name, index, "item removed from cart");
        Ok(removed)
    }

    /// Sum of unit prices over all items.
    ///
    /// Quantity is display-only and deliberately not reflected here; the
    /// total of N entries is N unit prices regardless of their quantities.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Serialize the item list under the cart key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the store write fails.
    pub fn persist(&mut self) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&self.items)?;
        self.store.set(storage_keys::CART, &raw)
    }

    /// Project the current items onto every registered surface and return
    /// the view. Safe to call repeatedly; nothing accumulates.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Render`] if the itemized list fails to render.
    pub fn render(&mut self) -> Result<CartView, CartError> {
        let view = CartView::project(&self.items, self.total());
        let items_html = view.items_html()?;
        for surface in &mut self.surfaces {
            surface.show_count(view.count);
            surface.show_total(&view.total);
            surface.show_items(&items_html);
        }
        Ok(view)
    }

    /// Empty the cart in memory and in the store, then re-render.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the store removal or re-render fails.
    pub fn clear(&mut self) -> Result<(), CartError> {
        self.items.clear();
        self.store.remove(storage_keys::CART)?;
        self.render()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use sundial_core::ProductId;

    fn item(id: &str, name: &str, price: u64) -> CartItem {
        CartItem::new(id, name, price)
    }

    fn loaded_cart() -> CartManager<MemoryStore> {
        CartManager::load(MemoryStore::new())
    }

    #[test]
    fn total_sums_prices_and_ignores_quantity() {
        let mut cart = loaded_cart();
        let mut chrono = item("a1a1a1a1a1a1a1a1a1a1a1a1", "Chrono", 500);
        chrono.quantity = 3;
        cart.add(chrono).expect("add");
        cart.add(item("demo-2", "Solaire", 1200)).expect("add");

        // quantity 3 still counts once: the total is 500 + 1200
        assert_eq!(cart.total(), Price::new(1700));
    }

    #[test]
    fn add_does_not_deduplicate() {
        let mut cart = loaded_cart();
        cart.add(item("demo-1", "Chrono", 500)).expect("add");
        cart.add(item("demo-1", "Chrono", 500)).expect("add");
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), Price::new(1000));
    }

    #[test]
    fn remove_shifts_later_items_down() {
        let mut cart = loaded_cart();
        cart.add(item("demo-1", "Chrono", 500)).expect("add");
        cart.add(item("demo-2", "Solaire", 1200)).expect("add");
        cart.add(item("demo-3", "Lunaire", 900)).expect("add");

        let removed = cart.remove(1).expect("remove");
        assert_eq!(removed.name, "Solaire");
        assert_eq!(cart.items()[0].name, "Chrono");
        assert_eq!(cart.items()[1].name, "Lunaire");
        assert_eq!(cart.total(), Price::new(1400));
    }

    #[test]
    fn out_of_range_remove_is_a_reported_error_and_mutates_nothing() {
        let mut cart = loaded_cart();
        cart.add(item("demo-1", "Chrono", 500)).expect("add");

        let err = cart.remove(5).expect_err("out of range");
        assert!(matches!(
            err,
            CartError::IndexOutOfRange { index: 5, len: 1 }
        ));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn mutations_round_trip_through_the_store() {
        let mut cart = loaded_cart();
        let mut solaire = item("507f1f77bcf86cd799439011", "Solaire", 12500);
        solaire.customization.set("Dial", "Onyx");
        cart.add(item("demo-1", "Chrono", 500)).expect("add");
        cart.add(solaire).expect("add");
        cart.remove(0).expect("remove");

        // hand the same store to a fresh manager, as a page reload would
        let store = std::mem::take(cart.store_mut());
        let reloaded = CartManager::load(store);
        assert_eq!(reloaded.items(), &cart.items()[..]);
        assert_eq!(reloaded.total(), Price::new(12500));
    }

    #[test]
    fn malformed_snapshot_loads_as_empty_cart() {
        let mut store = MemoryStore::new();
        store.set(storage_keys::CART, "{not json").expect("set");
        let cart = CartManager::load(store);
        assert!(cart.is_empty());
    }

    #[test]
    fn single_chrono_add_then_remove_leaves_empty_state() {
        let mut cart = loaded_cart();
        cart.add(item("a1b2c3d4e5f6a1b2c3d4e5f6", "Chrono", 500))
            .expect("add");
        assert_eq!(cart.total(), Price::new(500));

        cart.remove(0).expect("remove");
        assert!(cart.is_empty());
        let view = cart.render().expect("render");
        assert!(
            view.items_html()
                .expect("render html")
                .contains("Your cart is empty")
        );
    }

    #[test]
    fn clear_empties_memory_and_store() {
        let mut cart = loaded_cart();
        cart.add(item("demo-1", "Chrono", 500)).expect("add");
        cart.clear().expect("clear");
        assert!(cart.is_empty());
        assert_eq!(cart.store().get(storage_keys::CART), None);
    }

    #[test]
    fn surfaces_receive_every_mutation() {
        use std::cell::RefCell;
        use std::rc::Rc;

        #[derive(Default)]
        struct Captured {
            count: usize,
            total: String,
            items_html: String,
            renders: usize,
        }

        struct SharedSurface(Rc<RefCell<Captured>>);

        impl CartSurface for SharedSurface {
            fn show_count(&mut self, count: usize) {
                self.0.borrow_mut().count = count;
            }
            fn show_total(&mut self, total: &str) {
                self.0.borrow_mut().total = total.to_string();
            }
            fn show_items(&mut self, items_html: &str) {
                let mut captured = self.0.borrow_mut();
                captured.items_html = items_html.to_string();
                captured.renders += 1;
            }
        }

        let captured = Rc::new(RefCell::new(Captured::default()));
        let mut cart = loaded_cart();
        cart.add_surface(Box::new(SharedSurface(Rc::clone(&captured))));

        cart.add(item("demo-1", "Chrono", 500)).expect("add");
        assert_eq!(captured.borrow().count, 1);
        assert_eq!(captured.borrow().total, "$500");
        assert!(captured.borrow().items_html.contains("Chrono"));

        cart.remove(0).expect("remove");
        assert_eq!(captured.borrow().count, 0);
        assert!(captured.borrow().items_html.contains("Your cart is empty"));
        assert_eq!(captured.borrow().renders, 2);
    }
}
