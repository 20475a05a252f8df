//! Theme and accent personalization flags.
//!
//! These share nothing with the cart except the storage interface: the page
//! component that owns theming reads and writes two flags in the same
//! key-value store. Dark is the default and is represented by an absent
//! theme key; gold is the neutral accent.

use sundial_core::{Accent, Theme, storage_keys};

use crate::error::StoreError;
use crate::store::KeyValueStore;

/// Personalization preferences backed by the key-value store.
#[derive(Debug)]
pub struct Preferences<S> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    /// Wrap a store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored theme; absent or unknown values mean dark.
    pub fn theme(&self) -> Theme {
        Theme::from_stored(self.store.get(storage_keys::THEME).as_deref())
    }

    /// Persist the theme. Light writes `light`; dark removes the key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store write fails.
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), StoreError> {
        match theme.stored_value() {
            Some(value) => self.store.set(storage_keys::THEME, value),
            None => self.store.remove(storage_keys::THEME),
        }
    }

    /// The stored accent; absent or unknown values mean gold.
    pub fn accent(&self) -> Accent {
        Accent::from_stored(self.store.get(storage_keys::ACCENT).as_deref())
    }

    /// Persist the accent by name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store write fails.
    pub fn set_accent(&mut self, accent: Accent) -> Result<(), StoreError> {
        self.store.set(storage_keys::ACCENT, accent.as_str())
    }
}
