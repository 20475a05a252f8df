//! The order-placement sequence.
//!
//! A linear flow with no branching retries:
//! auth check → clear remote cart → sync items → create order →
//! confirm payment → finalize. Any failing step aborts the whole sequence;
//! remote steps already completed are not compensated, so the remote cart
//! may stay cleared even when order creation fails (a known gap, see
//! DESIGN.md).

mod client;
mod types;

pub use client::OrderApiClient;
pub use types::{
    AddCartItemRequest, ApiEnvelope, CheckoutForm, CreateOrderRequest, OrderData, OrderRef,
    PAYMENT_METHOD, ShippingAddress,
};

use tracing::{debug, info, instrument};

use sundial_core::storage_keys;

use crate::cart::CartManager;
use crate::config::Pages;
use crate::error::CheckoutError;
use crate::store::KeyValueStore;

/// Where the caller should navigate after checkout returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Order placed and paid; the local cart is cleared.
    Completed {
        order_id: String,
        /// Receipt destination, e.g. `receipt.html?id=X`.
        receipt_url: String,
    },
    /// No stored credential; nothing was sent to the server.
    Unauthenticated {
        /// Login entry point carrying the checkout page as redirect target,
        /// e.g. `login.html?redirect=checkout.html`.
        login_url: String,
    },
}

/// The checkout sequence, bound to an API client and the page destinations.
#[derive(Debug, Clone)]
pub struct CheckoutFlow {
    client: OrderApiClient,
    pages: Pages,
}

impl CheckoutFlow {
    /// Bind the flow to an API client and navigation destinations.
    #[must_use]
    pub const fn new(client: OrderApiClient, pages: Pages) -> Self {
        Self { client, pages }
    }

    /// The API client used by the flow.
    #[must_use]
    pub const fn client(&self) -> &OrderApiClient {
        &self.client
    }

    /// Run the whole sequence against `cart`.
    ///
    /// Steps are strictly sequential; the per-item sync loop issues one
    /// request at a time because the server applies cart mutations in
    /// order. Items whose ID is not a well-formed backend object ID are
    /// skipped silently - they are local-only entries.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError`] when any network step fails or the server
    /// rejects the order or payment. A missing credential is not an error;
    /// it yields [`CheckoutOutcome::Unauthenticated`] before any network
    /// call is made.
    #[instrument(skip_all, fields(items = cart.len()))]
    pub async fn run<S: KeyValueStore>(
        &self,
        cart: &mut CartManager<S>,
        form: &CheckoutForm,
    ) -> Result<CheckoutOutcome, CheckoutError> {
        // AuthCheck
        let Some(token) = cart.store().bearer_token() else {
            info!("no stored credential, redirecting to login");
            return Ok(CheckoutOutcome::Unauthenticated {
                login_url: format!(
                    "{}?redirect={}",
                    self.pages.login,
                    urlencoding::encode(&self.pages.checkout)
                ),
            });
        };

        // ClearRemoteCart
        self.client.clear_cart(&token).await?;

        // SyncItems: sequential, quantity pinned to 1 on the wire
        for item in cart.items() {
            if !item.id.is_object_id() {
                debug!(id = %item.id, "skipping local-only item");
                continue;
            }
            self.client
                .add_cart_item(
                    &token,
                    &AddCartItemRequest {
                        product_id: item.id.clone(),
                        quantity: 1,
                        customization: item.customization.clone(),
                    },
                )
                .await?;
        }

        // CreateOrder
        let request = CreateOrderRequest::new(form.shipping_address());
        let order_id = self.client.create_order(&token, &request).await?;

        // ConfirmPayment
        self.client.confirm_payment(&token, &order_id).await?;

        // Finalize
        cart.clear()?;
        cart.store_mut()
            .set(storage_keys::LAST_ORDER_ID, &order_id)?;
        info!(%order_id, "checkout completed");
        Ok(CheckoutOutcome::Completed {
            receipt_url: format!("{}?id={order_id}", self.pages.receipt),
            order_id,
        })
    }
}
