//! User-visible notifications.
//!
//! The page shows a transient toast on add-to-cart and a blocking alert when
//! checkout fails. Headless callers plug in their own sink; the default
//! routes through `tracing`.

use tracing::{info, warn};

/// Sink for user-visible messages.
pub trait Notifier {
    /// Transient notification (the toast that disappears on its own).
    fn notify(&self, message: &str);

    /// Blocking alert the user must acknowledge.
    fn alert(&self, message: &str);
}

/// Notifier that logs through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        info!(message, "notification");
    }

    fn alert(&self, message: &str) {
        warn!(message, "alert");
    }
}
