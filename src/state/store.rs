//! Key/value storage the pool record is persisted in.

use std::collections::BTreeMap;

use super::{StateKey, StateValue};

/// The ledger's global key/value store, scoped to one pool.
pub trait KeyValueStore {
    /// Reads a value.
    fn get(&self, key: StateKey) -> Option<&StateValue>;

    /// Writes a value, replacing any previous one.
    fn put(&mut self, key: StateKey, value: StateValue);

    /// Removes a value, returning it if it was present.
    fn remove(&mut self, key: StateKey) -> Option<StateValue>;

    /// Returns `true` if the key holds a value.
    fn contains(&self, key: StateKey) -> bool {
        self.get(key).is_some()
    }
}

/// In-memory store, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<StateKey, StateValue>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no key is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: StateKey) -> Option<&StateValue> {
        self.entries.get(&key)
    }

    fn put(&mut self, key: StateKey, value: StateValue) {
        self.entries.insert(key, value);
    }

    fn remove(&mut self, key: StateKey) -> Option<StateValue> {
        self.entries.remove(&key)
    }
}
