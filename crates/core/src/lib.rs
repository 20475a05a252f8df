//! Sundial Core - Shared types library.
//!
//! This crate provides common types used across all Sundial components:
//! - `storefront` - Cart manager, checkout flow, and preferences
//! - `cli` - Command-line driver for the cart and checkout
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no
//! persistence. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Cart items, product IDs, prices, customization, preferences
//! - [`storage_keys`] - Fixed keys of the persistent key-value store

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod storage_keys;
pub mod types;

pub use types::*;
