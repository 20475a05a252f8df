//! Bearer credential commands.
//!
//! The checkout sequence reads the credential from the profile store; these
//! commands are the headless counterpart of the login page writing it.

use secrecy::ExposeSecret;

use sundial_core::storage_keys;
use sundial_storefront::{FileStore, KeyValueStore, StorefrontConfig};

fn open_store() -> Result<FileStore, Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    Ok(FileStore::open(&config.store_path))
}

/// Store the bearer credential under the current key.
pub fn login(token: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store()?;
    store.set(storage_keys::ACCESS_TOKEN, token)?;
    tracing::info!("credential stored");
    Ok(())
}

/// Remove the credential from both the current and the legacy key.
pub fn logout() -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store()?;
    store.remove(storage_keys::ACCESS_TOKEN)?;
    store.remove(storage_keys::LEGACY_TOKEN)?;
    tracing::info!("credential removed");
    Ok(())
}

/// Report whether a credential is stored (never prints the credential).
#[allow(clippy::print_stdout)]
pub fn status() -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store()?;
    match store.bearer_token() {
        Some(token) => {
            let chars = token.expose_secret().chars().count();
            println!("Logged in (credential of {chars} characters)");
        }
        None => println!("Not logged in"),
    }
    Ok(())
}
