use bytes::Bytes;
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory key to blob mapping shared by every request handler.
///
/// The whole map sits behind a single `RwLock`. Mutations take the write guard,
/// lookups and enumeration take the read guard. Guards are only ever held for the
/// duration of the map access itself and never across an `.await`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Bytes>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all keys present at a single point in time.
    ///
    /// Order is unspecified and may differ between calls.
    pub fn list_keys(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    /// Returns the stored value, or `None` when the key is absent.
    pub fn read(&self, key: &str) -> Option<Bytes> {
        self.entries.read().get(key).cloned()
    }

    /// Inserts or fully replaces the value stored under `key`.
    pub fn write(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        let key = key.into();
        let value = value.into();
        let previous = self.entries.write().insert(key.clone(), value);
        if previous.is_some() {
            tracing::debug!("Replaced value for key '{}'", key);
        }
    }

    /// Removes `key`. Returns `false` if it was not present.
    pub fn delete(&self, key: &str) -> bool {
        self.entries.write().remove(key).is_some()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Sum of the lengths of all stored values.
    pub fn total_bytes(&self) -> usize {
        self.entries.read().values().map(Bytes::len).sum()
    }
}
