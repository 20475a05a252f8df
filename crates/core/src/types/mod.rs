//! Core types for Sundial.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod item;
pub mod prefs;
pub mod price;

pub use id::ProductId;
pub use item::{CartItem, Customization};
pub use prefs::{Accent, Theme};
pub use price::Price;
