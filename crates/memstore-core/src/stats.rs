//! Bulk operation counters.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counts bulk activity originating from one store.
///
/// Updated with relaxed ordering after the bulk operation has finished, so
/// a snapshot may briefly lag the map contents.
#[derive(Debug, Default)]
pub struct StoreStats {
    /// Completed `transfer_to` calls with this store as source
    transfers: AtomicU64,
    /// Completed `copy_to` calls with this store as source
    copies: AtomicU64,
    /// Entries moved out by transfers
    entries_transferred: AtomicU64,
    /// Entries duplicated out by copies
    entries_copied: AtomicU64,
}

/// Point-in-time view of [`StoreStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub transfers: u64,
    pub copies: u64,
    pub entries_transferred: u64,
    pub entries_copied: u64,
}

impl StoreStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_transfer(&self, entries: u64) {
        self.transfers.fetch_add(1, Ordering::Relaxed);
        self.entries_transferred.fetch_add(entries, Ordering::Relaxed);
    }

    pub(crate) fn record_copy(&self, entries: u64) {
        self.copies.fetch_add(1, Ordering::Relaxed);
        self.entries_copied.fetch_add(entries, Ordering::Relaxed);
    }

    /// Read all counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            transfers: self.transfers.load(Ordering::Relaxed),
            copies: self.copies.load(Ordering::Relaxed),
            entries_transferred: self.entries_transferred.load(Ordering::Relaxed),
            entries_copied: self.entries_copied.load(Ordering::Relaxed),
        }
    }
}
