//! Persistent key-value storage.
//!
//! The web storefront keeps everything in origin-scoped localStorage; the
//! headless client mirrors that with a string-to-string map persisted as one
//! JSON object per profile. [`FileStore`] is the durable implementation,
//! [`MemoryStore`] backs tests and ephemeral runs.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use secrecy::SecretString;
use tracing::debug;

use sundial_core::storage_keys;

use crate::error::StoreError;

/// String key-value storage scoped to one storefront profile.
pub trait KeyValueStore {
    /// Read the value under `key`, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write cannot be made durable.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value under `key`. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the removal cannot be made durable.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;

    /// The bearer credential, read from the current key and then the
    /// legacy key. First present wins.
    fn bearer_token(&self) -> Option<SecretString> {
        self.get(storage_keys::ACCESS_TOKEN)
            .or_else(|| self.get(storage_keys::LEGACY_TOKEN))
            .map(SecretString::from)
    }
}

/// Key-value store persisted as a single JSON object on disk.
///
/// The whole map is rewritten on every mutation; values are small (the cart
/// snapshot and a handful of flags). A missing or malformed file opens as an
/// empty store rather than failing.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, creating an empty one if the file is
    /// missing or cannot be parsed.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                debug!(path = %path.display(), %err, "malformed store file, starting empty");
                HashMap::new()
            }),
            Err(err) => {
                debug!(path = %path.display(), %err, "store file not readable, starting empty");
                HashMap::new()
            }
        };
        Self { path, entries }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store_path() -> PathBuf {
        std::env::temp_dir().join(format!("sundial-store-{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn file_store_round_trips_values() {
        let path = temp_store_path();
        {
            let mut store = FileStore::open(&path);
            store.set("sun-cart", "[]").expect("set");
            store.set("sun-theme", "light").expect("set");
        }
        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("sun-cart").as_deref(), Some("[]"));
        assert_eq!(reopened.get("sun-theme").as_deref(), Some("light"));
        fs::remove_file(&path).expect("cleanup");
    }

    #[test]
    fn malformed_file_opens_empty() {
        let path = temp_store_path();
        fs::write(&path, "{not json").expect("write garbage");
        let store = FileStore::open(&path);
        assert_eq!(store.get("sun-cart"), None);
        fs::remove_file(&path).expect("cleanup");
    }

    #[test]
    fn missing_file_opens_empty() {
        let store = FileStore::open(temp_store_path());
        assert_eq!(store.get("sun-cart"), None);
    }

    #[test]
    fn remove_deletes_the_key() {
        let mut store = MemoryStore::new();
        store.set("last-order-id", "X").expect("set");
        store.remove("last-order-id").expect("remove");
        assert_eq!(store.get("last-order-id"), None);
        // removing again is a no-op
        store.remove("last-order-id").expect("remove absent");
    }

    #[test]
    fn bearer_token_prefers_current_key() {
        use secrecy::ExposeSecret;

        let mut store = MemoryStore::new();
        assert!(store.bearer_token().is_none());

        store.set("token", "legacy-secret").expect("set");
        let token = store.bearer_token().expect("legacy token");
        assert_eq!(token.expose_secret(), "legacy-secret");

        store.set("accessToken", "current-secret").expect("set");
        let token = store.bearer_token().expect("current token");
        assert_eq!(token.expose_secret(), "current-secret");
    }
}
