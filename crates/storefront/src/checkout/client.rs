//! HTTP client for the order API.
//!
//! Plain JSON over REST with a bearer credential on every call. No retries
//! and no timeouts: a hung request hangs the checkout flow indefinitely.

use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};

use crate::error::CheckoutError;

use super::types::{AddCartItemRequest, ApiEnvelope, CreateOrderRequest, OrderData};

/// Client for the order API (`{base}/cart`, `{base}/orders`).
#[derive(Debug, Clone)]
pub struct OrderApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl OrderApiClient {
    /// Create a client for the API rooted at `base_url`
    /// (e.g. `http://localhost:3000/api`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// The API root this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `DELETE /cart` - empty the remote cart.
    ///
    /// Only transport failures surface; the response body and status are
    /// not inspected.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Transport`] if the request fails.
    #[instrument(skip_all)]
    pub async fn clear_cart(&self, token: &SecretString) -> Result<(), CheckoutError> {
        self.client
            .delete(format!("{}/cart", self.base_url))
            .bearer_auth(token.expose_secret())
            .send()
            .await?;
        debug!("remote cart cleared");
        Ok(())
    }

    /// `POST /cart/items` - add one item to the remote cart.
    ///
    /// Like [`Self::clear_cart`], only transport failures surface.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Transport`] if the request fails.
    #[instrument(skip_all, fields(product_id = %request.product_id))]
    pub async fn add_cart_item(
        &self,
        token: &SecretString,
        request: &AddCartItemRequest,
    ) -> Result<(), CheckoutError> {
        self.client
            .post(format!("{}/cart/items", self.base_url))
            .bearer_auth(token.expose_secret())
            .json(request)
            .send()
            .await?;
        Ok(())
    }

    /// `POST /orders` - create the order and return its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::OrderRejected`] with the server message (or
    /// a generic fallback) on a non-success envelope,
    /// [`CheckoutError::MalformedResponse`] when a success envelope carries
    /// no order, and [`CheckoutError::Transport`] on request failure.
    #[instrument(skip_all)]
    pub async fn create_order(
        &self,
        token: &SecretString,
        request: &CreateOrderRequest,
    ) -> Result<String, CheckoutError> {
        let envelope: ApiEnvelope<OrderData> = self
            .client
            .post(format!("{}/orders", self.base_url))
            .bearer_auth(token.expose_secret())
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        if !envelope.is_success() {
            return Err(CheckoutError::OrderRejected(
                envelope.message_or("Order creation failed"),
            ));
        }
        let order_id = envelope
            .data
            .map(|data| data.order.id)
            .ok_or_else(|| CheckoutError::MalformedResponse("success envelope without an order".to_string()))?;
        debug!(%order_id, "order created");
        Ok(order_id)
    }

    /// `PATCH /orders/{id}/confirm-payment` - confirm payment for an order.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::PaymentConfirmationFailed`] with the server
    /// message (or a generic fallback) on a non-success envelope, and
    /// [`CheckoutError::Transport`] on request failure.
    #[instrument(skip_all, fields(%order_id))]
    pub async fn confirm_payment(
        &self,
        token: &SecretString,
        order_id: &str,
    ) -> Result<(), CheckoutError> {
        let envelope: ApiEnvelope<serde_json::Value> = self
            .client
            .patch(format!("{}/orders/{order_id}/confirm-payment", self.base_url))
            .bearer_auth(token.expose_secret())
            .send()
            .await?
            .json()
            .await?;

        if !envelope.is_success() {
            return Err(CheckoutError::PaymentConfirmationFailed(
                envelope.message_or("Payment confirmation failed"),
            ));
        }
        debug!("payment confirmed");
        Ok(())
    }
}
