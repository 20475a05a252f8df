//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `SUNDIAL_API_BASE_URL` - Order API root (default: `http://localhost:3000/api`)
//! - `SUNDIAL_STORE_PATH` - Key-value store file (default: `sundial-store.json`)
//! - `SUNDIAL_LOGIN_URL` - Login entry point (default: `login.html`)
//! - `SUNDIAL_CHECKOUT_URL` - Checkout page (default: `checkout.html`)
//! - `SUNDIAL_RECEIPT_URL` - Receipt destination (default: `receipt.html`)

use std::env;
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
const DEFAULT_STORE_PATH: &str = "sundial-store.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Navigation destinations the checkout flow hands back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pages {
    /// Login entry point; receives the checkout page as redirect target.
    pub login: String,
    /// Checkout page, used as the post-login redirect target.
    pub checkout: String,
    /// Receipt destination, parameterized by order ID.
    pub receipt: String,
}

impl Default for Pages {
    fn default() -> Self {
        Self {
            login: "login.html".to_string(),
            checkout: "checkout.html".to_string(),
            receipt: "receipt.html".to_string(),
        }
    }
}

/// Storefront client configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Order API root, without trailing slash.
    pub api_base_url: String,
    /// Path of the persistent key-value store file.
    pub store_path: PathBuf,
    /// Navigation destinations.
    pub pages: Pages,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `SUNDIAL_API_BASE_URL` is set but is not a
    /// valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let mut api_base_url =
            env::var("SUNDIAL_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        Url::parse(&api_base_url).map_err(|err| {
            ConfigError::InvalidEnvVar("SUNDIAL_API_BASE_URL".to_string(), err.to_string())
        })?;
        while api_base_url.ends_with('/') {
            api_base_url.pop();
        }

        let store_path = env::var("SUNDIAL_STORE_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_STORE_PATH), PathBuf::from);

        let pages = Pages {
            login: env::var("SUNDIAL_LOGIN_URL").unwrap_or_else(|_| "login.html".to_string()),
            checkout: env::var("SUNDIAL_CHECKOUT_URL")
                .unwrap_or_else(|_| "checkout.html".to_string()),
            receipt: env::var("SUNDIAL_RECEIPT_URL")
                .unwrap_or_else(|_| "receipt.html".to_string()),
        };

        Ok(Self {
            api_base_url,
            store_path,
            pages,
        })
    }
}
