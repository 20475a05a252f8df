//! Adapter between UI events and cart operations.
//!
//! The page wires click handlers straight onto a global cart object; here a
//! thin controller translates discrete UI events into calls on the cart
//! manager and the checkout flow, so the core stays testable without a live
//! page. The controller also hosts the umbrella failure handler: every
//! checkout error is logged once and surfaced as one blocking alert.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{error, warn};

use sundial_core::{CartItem, Price, ProductId};

use crate::cart::CartManager;
use crate::checkout::{CheckoutFlow, CheckoutForm, CheckoutOutcome};
use crate::store::KeyValueStore;

/// Attribute names an add-to-cart trigger carries.
pub mod attrs {
    pub const ID: &str = "data-id";
    pub const NAME: &str = "data-name";
    pub const PRICE: &str = "data-price";
    pub const IMAGE: &str = "data-image";
}

/// A malformed add-to-cart trigger.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TriggerError {
    #[error("trigger is missing the {0} attribute")]
    MissingAttribute(&'static str),

    #[error("trigger has a non-numeric price: {0:?}")]
    InvalidPrice(String),
}

/// One add-to-cart trigger, described by its fixed data attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddToCartTrigger {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: Option<String>,
}

impl AddToCartTrigger {
    /// Parse a trigger from its attribute map (`data-id`, `data-name`,
    /// `data-price`, optional `data-image`).
    ///
    /// # Errors
    ///
    /// Returns [`TriggerError`] when a required attribute is missing or the
    /// price does not parse.
    pub fn from_attrs(attributes: &HashMap<String, String>) -> Result<Self, TriggerError> {
        let required = |key: &'static str| {
            attributes
                .get(key)
                .ok_or(TriggerError::MissingAttribute(key))
        };
        let raw_price = required(attrs::PRICE)?;
        let price = raw_price
            .parse::<u64>()
            .map_err(|_| TriggerError::InvalidPrice(raw_price.clone()))?;
        Ok(Self {
            id: ProductId::new(required(attrs::ID)?.clone()),
            name: required(attrs::NAME)?.clone(),
            price: Price::new(price),
            image: attributes.get(attrs::IMAGE).cloned(),
        })
    }

    /// Build the cart item this trigger adds.
    #[must_use]
    pub fn to_item(&self) -> CartItem {
        CartItem {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
            image: self.image.clone(),
            quantity: 1,
            customization: sundial_core::Customization::new(),
        }
    }
}

/// Discrete UI events the controller understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Click on the add-to-cart trigger at `trigger` (binding order).
    AddToCart { trigger: usize },
    /// Click on the removal control embedding the item's current `index`.
    RemoveItem { index: usize },
    /// Checkout form submission.
    SubmitCheckout { form: CheckoutForm },
}

/// Navigation the caller must perform after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Go to the login entry point (credential missing).
    Login { url: String },
    /// Go to the receipt for a completed order.
    Receipt { url: String },
}

/// Controller wiring UI events onto the cart manager and checkout flow.
///
/// Triggers are bound once at construction; triggers appearing later are
/// not bound (a limitation carried over from the page, which only scans for
/// triggers at initialization).
pub struct CartController<S> {
    cart: CartManager<S>,
    flow: CheckoutFlow,
    triggers: Vec<AddToCartTrigger>,
}

impl<S: KeyValueStore> CartController<S> {
    /// Bind the triggers discovered at initialization time.
    pub fn bind(cart: CartManager<S>, flow: CheckoutFlow, triggers: Vec<AddToCartTrigger>) -> Self {
        Self {
            cart,
            flow,
            triggers,
        }
    }

    /// The managed cart.
    pub fn cart(&self) -> &CartManager<S> {
        &self.cart
    }

    /// Mutable access to the managed cart.
    pub fn cart_mut(&mut self) -> &mut CartManager<S> {
        &mut self.cart
    }

    /// The bound triggers, in binding order.
    pub fn triggers(&self) -> &[AddToCartTrigger] {
        &self.triggers
    }

    /// Handle one UI event.
    ///
    /// Failures never propagate past this point: they are logged and
    /// surfaced to the user as a single blocking alert, matching the page's
    /// umbrella handler. The return value is the navigation the caller
    /// should perform, if any.
    pub async fn dispatch(&mut self, event: UiEvent) -> Option<Navigation> {
        match event {
            UiEvent::AddToCart { trigger } => {
                let Some(trigger) = self.triggers.get(trigger).cloned() else {
                    warn!(trigger, "click on unbound add-to-cart trigger");
                    return None;
                };
                if let Err(err) = self.cart.add(trigger.to_item()) {
                    error!(%err, "add to cart failed");
                    self.cart.notifier().alert(&err.to_string());
                }
                None
            }
            UiEvent::RemoveItem { index } => {
                if let Err(err) = self.cart.remove(index) {
                    error!(%err, "remove from cart failed");
                    self.cart.notifier().alert(&err.to_string());
                }
                None
            }
            UiEvent::SubmitCheckout { form } => match self.flow.run(&mut self.cart, &form).await {
                Ok(CheckoutOutcome::Completed { receipt_url, .. }) => {
                    Some(Navigation::Receipt { url: receipt_url })
                }
                Ok(CheckoutOutcome::Unauthenticated { login_url }) => {
                    self.cart
                        .notifier()
                        .alert("Please log in to place your order.");
                    Some(Navigation::Login { url: login_url })
                }
                Err(err) => {
                    error!(%err, "checkout failed");
                    self.cart
                        .notifier()
                        .alert(&format!("Checkout failed: {err}"));
                    None
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Notifier;
    use crate::checkout::OrderApiClient;
    use crate::config::Pages;
    use crate::store::MemoryStore;
    use std::sync::{Arc, Mutex};

    #[derive(Default, Clone)]
    struct RecordingNotifier {
        toasts: Arc<Mutex<Vec<String>>>,
        alerts: Arc<Mutex<Vec<String>>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.toasts.lock().expect("lock").push(message.to_string());
        }
        fn alert(&self, message: &str) {
            self.alerts.lock().expect("lock").push(message.to_string());
        }
    }

    fn trigger_attrs(id: &str, name: &str, price: &str) -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("data-id".to_string(), id.to_string());
        map.insert("data-name".to_string(), name.to_string());
        map.insert("data-price".to_string(), price.to_string());
        map
    }

    fn controller(
        notifier: RecordingNotifier,
        triggers: Vec<AddToCartTrigger>,
    ) -> CartController<MemoryStore> {
        let cart = CartManager::load(MemoryStore::new()).with_notifier(Box::new(notifier));
        let flow = CheckoutFlow::new(
            OrderApiClient::new("http://127.0.0.1:9/api"),
            Pages::default(),
        );
        CartController::bind(cart, flow, triggers)
    }

    #[test]
    fn trigger_parses_the_fixed_attribute_set() {
        let mut attrs = trigger_attrs("demo-1", "Chrono", "500");
        attrs.insert("data-image".to_string(), "assets/chrono.webp".to_string());

        let trigger = AddToCartTrigger::from_attrs(&attrs).expect("parse");
        assert_eq!(trigger.id.as_str(), "demo-1");
        assert_eq!(trigger.name, "Chrono");
        assert_eq!(trigger.price, Price::new(500));
        assert_eq!(trigger.image.as_deref(), Some("assets/chrono.webp"));
    }

    #[test]
    fn trigger_reports_missing_and_invalid_attributes() {
        let mut attrs = trigger_attrs("demo-1", "Chrono", "500");
        attrs.remove("data-name");
        assert_eq!(
            AddToCartTrigger::from_attrs(&attrs),
            Err(TriggerError::MissingAttribute("data-name"))
        );

        let attrs = trigger_attrs("demo-1", "Chrono", "five hundred");
        assert_eq!(
            AddToCartTrigger::from_attrs(&attrs),
            Err(TriggerError::InvalidPrice("five hundred".to_string()))
        );
    }

    #[tokio::test]
    async fn add_event_appends_and_toasts() {
        let notifier = RecordingNotifier::default();
        let trigger =
            AddToCartTrigger::from_attrs(&trigger_attrs("demo-1", "Chrono", "500")).expect("parse");
        let mut controller = controller(notifier.clone(), vec![trigger]);

        let nav = controller.dispatch(UiEvent::AddToCart { trigger: 0 }).await;
        assert_eq!(nav, None);
        assert_eq!(controller.cart().len(), 1);
        assert_eq!(
            notifier.toasts.lock().expect("lock").as_slice(),
            ["Added Chrono to cart"]
        );
    }

    #[tokio::test]
    async fn unbound_trigger_is_ignored() {
        let notifier = RecordingNotifier::default();
        let mut controller = controller(notifier, vec![]);
        let nav = controller.dispatch(UiEvent::AddToCart { trigger: 3 }).await;
        assert_eq!(nav, None);
        assert!(controller.cart().is_empty());
    }

    #[tokio::test]
    async fn out_of_range_remove_surfaces_one_alert() {
        let notifier = RecordingNotifier::default();
        let mut controller = controller(notifier.clone(), vec![]);

        let nav = controller.dispatch(UiEvent::RemoveItem { index: 2 }).await;
        assert_eq!(nav, None);
        let alerts = notifier.alerts.lock().expect("lock");
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].contains("out of range"));
    }

    #[tokio::test]
    async fn failed_checkout_yields_no_navigation_and_one_alert() {
        let notifier = RecordingNotifier::default();
        let mut store = MemoryStore::new();
        store
            .set(sundial_core::storage_keys::ACCESS_TOKEN, "token-abc")
            .expect("set");
        let cart = CartManager::load(store).with_notifier(Box::new(notifier.clone()));
        // nothing listens on port 1, so the flow fails at the first request
        let flow = CheckoutFlow::new(
            OrderApiClient::new("http://127.0.0.1:1/api"),
            Pages::default(),
        );
        let mut controller = CartController::bind(cart, flow, Vec::new());

        let nav = controller
            .dispatch(UiEvent::SubmitCheckout {
                form: CheckoutForm::default(),
            })
            .await;
        assert_eq!(nav, None);
        let alerts = notifier.alerts.lock().expect("lock");
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].starts_with("Checkout failed:"));
    }

    #[tokio::test]
    async fn unauthenticated_checkout_alerts_and_navigates_to_login() {
        let notifier = RecordingNotifier::default();
        let mut controller = controller(notifier.clone(), vec![]);

        let nav = controller
            .dispatch(UiEvent::SubmitCheckout {
                form: CheckoutForm::default(),
            })
            .await;
        assert_eq!(
            nav,
            Some(Navigation::Login {
                url: "login.html?redirect=checkout.html".to_string()
            })
        );
        assert_eq!(
            notifier.alerts.lock().expect("lock").as_slice(),
            ["Please log in to place your order."]
        );
    }
}
