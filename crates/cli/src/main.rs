//! Sundial CLI - Cart and checkout driver.
//!
//! # Usage
//!
//! ```bash
//! # Add an item to the local cart
//! sundial cart add --id 507f1f77bcf86cd799439011 --name "Chrono Solaire" \
//!     --price 12500 --option "Dial=Onyx"
//!
//! # Inspect the cart
//! sundial cart list
//! sundial cart total
//!
//! # Remove the second line item
//! sundial cart remove 1
//!
//! # Store a credential, then place the order
//! sundial auth login --token "$SUNDIAL_TOKEN"
//! sundial checkout --first-name Sabine --city Lyon
//!
//! # Personalization
//! sundial prefs theme light
//! sundial prefs accent emerald
//!
//! # Last completed order
//! sundial orders last
//! ```
//!
//! # Commands
//!
//! - `cart` - Manage the local cart (add, remove, list, total, clear)
//! - `checkout` - Run the order-placement sequence
//! - `prefs` - Show or set theme and accent preferences
//! - `orders` - Inspect the last completed order
//! - `auth` - Store or remove the bearer credential

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;
mod console;

use commands::checkout::CheckoutArgs;

#[derive(Parser)]
#[command(name = "sundial")]
#[command(author, version, about = "Sundial storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the local cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Run the order-placement sequence for the current cart
    Checkout(CheckoutArgs),
    /// Show or set personalization preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
    /// Inspect past orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
    /// Manage the stored bearer credential
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Store a bearer credential
    Login {
        /// The bearer credential to store
        #[arg(long)]
        token: String,
    },
    /// Remove the stored credential
    Logout,
    /// Report whether a credential is stored
    Status,
}

#[derive(Subcommand)]
enum CartAction {
    /// Add an item to the cart
    Add(commands::cart::AddArgs),
    /// Remove the item at the given index
    Remove {
        /// Zero-based position of the item to remove
        index: usize,
    },
    /// Render the cart contents
    List,
    /// Print the cart total
    Total,
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum PrefsAction {
    /// Show or set the theme (`light` or `dark`)
    Theme {
        /// New theme; omit to show the current one
        value: Option<String>,
    },
    /// Show or set the accent color (`gold`, `blue`, `emerald`, `rose`)
    Accent {
        /// New accent; omit to show the current one
        value: Option<String>,
    },
}

#[derive(Subcommand)]
enum OrdersAction {
    /// Print the identifier of the last completed order
    Last,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Add(args) => commands::cart::add(args)?,
            CartAction::Remove { index } => commands::cart::remove(index)?,
            CartAction::List => commands::cart::list()?,
            CartAction::Total => commands::cart::total()?,
            CartAction::Clear => commands::cart::clear()?,
        },
        Commands::Checkout(args) => commands::checkout::run(args).await?,
        Commands::Prefs { action } => match action {
            PrefsAction::Theme { value } => commands::prefs::theme(value.as_deref())?,
            PrefsAction::Accent { value } => commands::prefs::accent(value.as_deref())?,
        },
        Commands::Orders { action } => match action {
            OrdersAction::Last => commands::orders::last()?,
        },
        Commands::Auth { action } => match action {
            AuthAction::Login { token } => commands::auth::login(&token)?,
            AuthAction::Logout => commands::auth::logout()?,
            AuthAction::Status => commands::auth::status()?,
        },
    }
    Ok(())
}
