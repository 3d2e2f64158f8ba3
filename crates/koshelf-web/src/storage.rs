//! Key-value preference storage.

use koshelf_common::Result;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// Well-known preference keys.
pub mod keys {
    /// Whether the recap timeline is shown newest first.
    pub const RECAP_SORT_NEWEST: &str = "recap_sort_newest";
}

/// String store in the shape of `localStorage`.
pub trait KeyValueStore: Send + Sync {
    /// Raw value for `key`.
    fn get_raw(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    fn set_raw(&self, key: &str, value: &str) -> Result<()>;

    /// Drop `key` if present.
    fn remove(&self, key: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_raw(&self, key: &str) -> Option<String> {
        (**self).get_raw(key)
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_raw(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get_raw(&self, key: &str) -> Option<String> {
        (**self).get_raw(key)
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_raw(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// JSON helpers over any [`KeyValueStore`].
pub trait KeyValueStoreExt: KeyValueStore {
    /// Decode the value under `key`, or return `default` when it is missing
    /// or unreadable.
    fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let Some(raw) = self.get_raw(key) else {
            return default;
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Ignoring unreadable stored value");
                default
            }
        }
    }

    /// Encode `value` as JSON under `key`.
    fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.set_raw(key, &raw)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }
}
