//! Error types for the storefront crates.
//!
//! One enum per concern, following the taxonomy of the checkout flow:
//! transport failures, server rejections with a message, and payment
//! confirmation failures are all distinct variants caught by the adapter
//! layer's umbrella handler. A missing credential is not an error at all;
//! it is a [`crate::checkout::CheckoutOutcome::Unauthenticated`] outcome.

use thiserror::Error;

/// Persistent key-value store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the store contents failed.
    #[error("store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Cart operation failures.
#[derive(Debug, Error)]
pub enum CartError {
    /// `remove` was called with an index past the end of the cart.
    #[error("cart index {index} out of range (cart holds {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Persisting the cart failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Rendering the itemized list failed.
    #[error("render error: {0}")]
    Render(#[from] askama::Error),
}

/// Checkout sequence failures.
///
/// Any step can abort the whole sequence; no step is retried and no
/// completed remote step is compensated, so the remote cart may already be
/// cleared when order creation fails.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// A network call failed or a response body could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Order creation returned a non-success status.
    #[error("{0}")]
    OrderRejected(String),

    /// Payment confirmation returned a non-success status.
    #[error("{0}")]
    PaymentConfirmationFailed(String),

    /// A success envelope was missing the fields it promises.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Finalizing the local cart failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Re-rendering after finalization failed.
    #[error("cart error: {0}")]
    Cart(#[from] CartError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_error_names_index_and_len() {
        let err = CartError::IndexOutOfRange { index: 3, len: 1 };
        assert_eq!(
            err.to_string(),
            "cart index 3 out of range (cart holds 1 items)"
        );
    }

    #[test]
    fn rejection_errors_carry_the_server_message() {
        let err = CheckoutError::OrderRejected("Card declined".to_string());
        assert_eq!(err.to_string(), "Card declined");

        let err = CheckoutError::PaymentConfirmationFailed("Payment confirmation failed".into());
        assert_eq!(err.to_string(), "Payment confirmation failed");
    }
}
