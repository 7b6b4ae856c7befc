//! Generic in-memory store: one hash map behind one reader-writer lock.
//!
//! **Point reads** (`get`, `keys`, `len`): shared lock, concurrent with each other
//! **Point writes** (`set`, `delete`): exclusive lock, serialized
//! **Bulk ops** (`transfer_to`, `copy_to`): both stores locked for the whole call,
//! source first, destination second

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use hashbrown::HashMap;
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::config::Config;
use crate::error::{StoreError, StoreResult};
use crate::stats::{StatsSnapshot, StoreStats};

/// Thread-safe key-value store.
///
/// All methods take `&self`; share a store between threads with `Arc<Store<K, V>>`.
///
/// Bulk operations lock the source before the destination. Two threads running
/// `a.transfer_to(&b)` and `b.transfer_to(&a)` at the same time can deadlock,
/// so callers must never start opposing bulk operations concurrently.
pub struct Store<K, V> {
    /// Working set, guarded by the store lock
    data: RwLock<HashMap<K, V>>,
    /// Bulk activity originating from this store
    stats: StoreStats,
    config: Config,
}

impl<K, V> Store<K, V>
where
    K: Eq + Hash,
{
    /// Create an empty store with the default configuration.
    pub fn new() -> Self {
        Self::from_parts(HashMap::new(), Config::default())
    }

    /// Create an empty store from a validated configuration.
    ///
    /// Reserves `initial_capacity` entries up front.
    pub fn with_config(config: Config) -> StoreResult<Self> {
        config.validate()?;

        let mut data = HashMap::new();
        data.try_reserve(config.initial_capacity)
            .map_err(|e| StoreError::CapacityReservation {
                requested: config.initial_capacity,
                reason: format!("{:?}", e),
            })?;

        debug!(store = %config.name, capacity = config.initial_capacity, "created store");
        Ok(Self::from_parts(data, config))
    }

    fn from_parts(data: HashMap<K, V>, config: Config) -> Self {
        Self {
            data: RwLock::new(data),
            stats: StoreStats::new(),
            config,
        }
    }

    /// Insert or overwrite the value for `key`.
    pub fn set(&self, key: K, value: V) {
        let mut data = self.data.write();
        data.insert(key, value);
    }

    /// Get a clone of the value stored under `key`.
    ///
    /// `None` means the key is absent; a lookup never fails.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        let data = self.data.read();
        data.get(key).cloned()
    }

    /// Remove `key`. Returns true if an entry was removed; absent keys are a no-op.
    pub fn delete<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut data = self.data.write();
        data.remove(key).is_some()
    }

    /// Snapshot of every key currently present, in unspecified order.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        let data = self.data.read();
        data.keys().cloned().collect()
    }

    /// Check if key exists.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let data = self.data.read();
        data.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        let data = self.data.read();
        data.len()
    }

    /// Returns true if the store has no entries.
    pub fn is_empty(&self) -> bool {
        let data = self.data.read();
        data.is_empty()
    }

    /// Move every entry into `dest`, leaving this store empty.
    ///
    /// Keys already present in `dest` are overwritten. The source is held under
    /// its exclusive lock for the whole call because it is emptied at the end,
    /// so readers of the source block until the transfer completes rather than
    /// seeing a half-drained map. Transferring a store into itself is a no-op.
    pub fn transfer_to(&self, dest: &Store<K, V>) {
        if std::ptr::eq(self, dest) {
            trace!(store = %self.config.name, "transfer to self skipped");
            return;
        }

        let moved = {
            let mut src = self.data.write();
            let mut dst = dest.data.write();

            let taken = std::mem::take(&mut *src);
            let moved = taken.len();
            dst.reserve(moved);
            dst.extend(taken);
            moved
        };

        self.stats.record_transfer(moved as u64);
        debug!(
            store = %self.config.name,
            dest = %dest.config.name,
            entries = moved,
            "transferred entries"
        );
    }

    /// Copy every entry into `dest`, leaving this store unchanged.
    ///
    /// Holds the source's shared lock and the destination's exclusive lock for
    /// the whole call. Copying a store into itself is a no-op.
    pub fn copy_to(&self, dest: &Store<K, V>)
    where
        K: Clone,
        V: Clone,
    {
        if std::ptr::eq(self, dest) {
            trace!(store = %self.config.name, "copy to self skipped");
            return;
        }

        let copied = {
            let src = self.data.read();
            let mut dst = dest.data.write();

            dst.reserve(src.len());
            dst.extend(src.iter().map(|(k, v)| (k.clone(), v.clone())));
            src.len()
        };

        self.stats.record_copy(copied as u64);
        debug!(
            store = %self.config.name,
            dest = %dest.config.name,
            entries = copied,
            "copied entries"
        );
    }

    /// Bulk counters for operations where this store was the source.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Store configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl<K, V> Default for Store<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self { Self::new() }
}

impl<K, V> fmt::Debug for Store<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("name", &self.config.name)
            .field("len", &self.data.read().len())
            .field("stats", &self.stats.snapshot())
            .finish()
    }
}
