//! Primary table: unique key → stored value.
//!
//! A thin concurrency wrapper over `FxHashMap`. One `RwLock` guards the
//! whole table; reads take the shared lock, writes the exclusive lock.
//! No method holds the lock across a call into foreign code.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Map from primary-key string to stored value, unique by construction.
///
/// Inserting under an existing key overwrites the stored value: last write
/// wins. Removing an absent key is a no-op, not an error.
///
/// # Thread Safety
///
/// All operations are safe to call concurrently. Each acquires this
/// table's lock and no other.
pub struct PrimaryTable<V> {
    entries: RwLock<FxHashMap<String, V>>,
}

impl<V: Clone> PrimaryTable<V> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(FxHashMap::default()),
        }
    }

    /// Create a table pre-sized for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(FxHashMap::with_capacity_and_hasher(
                capacity,
                Default::default(),
            )),
        }
    }

    /// Store a value under `key`, overwriting any previous value.
    pub fn insert(&self, key: impl Into<String>, value: V) {
        self.entries.write().insert(key.into(), value);
    }

    /// Remove the entry for `key`, returning the stored value if present.
    pub fn remove(&self, key: &str) -> Option<V> {
        self.entries.write().remove(key)
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<V> {
        self.entries.read().get(key).cloned()
    }

    /// Whether an entry exists for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Snapshot of all keys, in no particular order.
    pub fn keys(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl<V: Clone> Default for PrimaryTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> std::fmt::Debug for PrimaryTable<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrimaryTable")
            .field("len", &self.entries.read().len())
            .finish()
    }
}
