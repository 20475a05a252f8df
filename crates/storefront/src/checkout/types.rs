//! Wire types for the order API and the checkout form.

use serde::{Deserialize, Serialize};

use sundial_core::{Customization, ProductId};

/// The single payment method the order API accepts today.
pub const PAYMENT_METHOD: &str = "credit-card";

/// Body of `POST /cart/items`.
///
/// Quantity is always 1 on the wire regardless of the local item's display
/// quantity; this matches the order API's current contract.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemRequest {
    pub product_id: ProductId,
    pub quantity: u32,
    pub customization: Customization,
}

/// Shipping address fields, all required on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// Body of `POST /orders`. Billing address always equals shipping.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub shipping_address: ShippingAddress,
    pub payment_method: &'static str,
    pub billing_address: ShippingAddress,
}

impl CreateOrderRequest {
    /// Build the order body from a shipping address.
    #[must_use]
    pub fn new(shipping_address: ShippingAddress) -> Self {
        Self {
            billing_address: shipping_address.clone(),
            payment_method: PAYMENT_METHOD,
            shipping_address,
        }
    }
}

/// Checkout form fields as submitted by the user; every field is optional
/// and falls back to its own placeholder default independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}

impl CheckoutForm {
    /// Resolve the form into a complete shipping address, defaulting each
    /// missing field independently.
    #[must_use]
    pub fn shipping_address(&self) -> ShippingAddress {
        fn field(value: &Option<String>, default: &str) -> String {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        }

        ShippingAddress {
            first_name: field(&self.first_name, "Guest"),
            last_name: field(&self.last_name, "Customer"),
            email: field(&self.email, "guest@sundial.com"),
            phone: field(&self.phone, "0000000000"),
            address: field(&self.address, "123 Luxury Lane"),
            city: field(&self.city, "New York"),
            state: field(&self.state, "NY"),
            zip_code: field(&self.zip_code, "10001"),
            country: field(&self.country, "US"),
        }
    }
}

/// Envelope wrapping every order API response body.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Whether the server reported success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// The server-supplied message, or `fallback` when none was given.
    #[must_use]
    pub fn message_or(&self, fallback: &str) -> String {
        self.message.clone().unwrap_or_else(|| fallback.to_string())
    }
}

/// `data` payload of a successful order creation.
#[derive(Debug, Deserialize)]
pub struct OrderData {
    pub order: OrderRef,
}

/// Reference to a created order.
#[derive(Debug, Deserialize)]
pub struct OrderRef {
    #[serde(rename = "_id")]
    pub id: String,
}
