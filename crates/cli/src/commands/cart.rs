//! Local cart commands.
//!
//! Every mutation is persisted to the profile store, so the cart survives
//! across invocations the same way it survives page reloads.

use clap::Args;

use sundial_core::{CartItem, Customization, Price, ProductId};

use crate::console::ConsoleSurface;

use super::open_cart;

/// Arguments for `sundial cart add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Product identifier (backend object ID or local handle)
    #[arg(long)]
    pub id: String,

    /// Display name
    #[arg(long)]
    pub name: String,

    /// Unit price in whole currency units
    #[arg(long)]
    pub price: u64,

    /// Product image URL
    #[arg(long)]
    pub image: Option<String>,

    /// Display quantity (not reflected in the total)
    #[arg(long, default_value_t = 1)]
    pub quantity: u32,

    /// Customization option as NAME=VALUE; repeatable
    #[arg(long = "option", value_parser = parse_option)]
    pub options: Vec<(String, String)>,
}

fn parse_option(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got {raw:?}"))
}

/// Add an item to the cart.
pub fn add(args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut cart = open_cart()?;
    cart.add(CartItem {
        id: ProductId::new(args.id),
        name: args.name,
        price: Price::new(args.price),
        image: args.image,
        quantity: args.quantity,
        customization: Customization::from_iter(args.options),
    })?;
    Ok(())
}

/// Remove the item at `index`.
#[allow(clippy::print_stdout)]
pub fn remove(index: usize) -> Result<(), Box<dyn std::error::Error>> {
    let mut cart = open_cart()?;
    let removed = cart.remove(index)?;
    println!("Removed {}", removed.name);
    Ok(())
}

/// Render the cart onto the terminal.
pub fn list() -> Result<(), Box<dyn std::error::Error>> {
    let mut cart = open_cart()?;
    cart.add_surface(Box::new(ConsoleSurface));
    cart.render()?;
    Ok(())
}

/// Print the cart total.
#[allow(clippy::print_stdout)]
pub fn total() -> Result<(), Box<dyn std::error::Error>> {
    let cart = open_cart()?;
    println!("{}", cart.total());
    Ok(())
}

/// Empty the cart.
#[allow(clippy::print_stdout)]
pub fn clear() -> Result<(), Box<dyn std::error::Error>> {
    let mut cart = open_cart()?;
    cart.clear()?;
    println!("Cart cleared");
    Ok(())
}
