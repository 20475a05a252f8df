//! The checkout command.
//!
//! Drives the full order-placement sequence through the event controller so
//! failures surface exactly as they do on the page: one logged error and one
//! blocking alert, never a panic. A failed sequence still exits nonzero.

use clap::Args;
use thiserror::Error;

use sundial_storefront::ui::UiEvent;
use sundial_storefront::{
    CartController, CheckoutFlow, CheckoutForm, Navigation, OrderApiClient, StorefrontConfig,
};

use super::open_cart;

/// The order-placement sequence ended in the failure handler.
///
/// The alert already carried the detail; this only makes the process exit
/// nonzero.
#[derive(Debug, Error)]
#[error("checkout did not complete")]
pub struct CheckoutFailed;

/// Arguments for `sundial checkout`. Every address field is optional and
/// falls back to its own placeholder default.
#[derive(Debug, Args)]
pub struct CheckoutArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub zip_code: Option<String>,
    #[arg(long)]
    pub country: Option<String>,
}

impl From<CheckoutArgs> for CheckoutForm {
    fn from(args: CheckoutArgs) -> Self {
        Self {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            phone: args.phone,
            address: args.address,
            city: args.city,
            state: args.state,
            zip_code: args.zip_code,
            country: args.country,
        }
    }
}

/// Run the order-placement sequence for the current cart.
#[allow(clippy::print_stdout)]
pub async fn run(args: CheckoutArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let cart = open_cart()?;
    let flow = CheckoutFlow::new(
        OrderApiClient::new(config.api_base_url),
        config.pages.clone(),
    );
    // no triggers to bind: the CLI has no page to scan
    let mut controller = CartController::bind(cart, flow, Vec::new());

    let navigation = controller
        .dispatch(UiEvent::SubmitCheckout { form: args.into() })
        .await;

    // a submit that yields no navigation was caught by the failure handler
    match navigation {
        Some(Navigation::Receipt { url }) => println!("Order placed. Receipt: {url}"),
        Some(Navigation::Login { url }) => println!("Log in first: {url}"),
        None => return Err(CheckoutFailed.into()),
    }
    Ok(())
}
