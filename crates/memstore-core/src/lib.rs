//! memstore Core: Generic Thread-Safe In-Memory Store
//!
//! A key-value store where every instance owns one hash map behind one
//! reader-writer lock, plus bulk operations that move or copy the whole
//! contents of one store into another.
//!
//! # Architecture
//!
//! - **Read path**: shared lock, concurrent readers (`get`, `keys`, `len`)
//! - **Write path**: exclusive lock (`set`, `delete`)
//! - **Bulk path**: source lock then destination lock, both held for the
//!   whole operation (`transfer_to`, `copy_to`)
//!
//! # Lock ordering
//!
//! Bulk operations always lock source before destination. Callers must not
//! run `a.transfer_to(&b)` concurrently with `b.transfer_to(&a)` (or the
//! `copy_to` equivalents); the store does not detect that cycle.
//!
//! ```
//! use memstore_core::Store;
//!
//! let src: Store<String, u32> = Store::new();
//! let dst: Store<String, u32> = Store::new();
//! src.set("a".into(), 1);
//!
//! src.transfer_to(&dst);
//! assert_eq!(dst.get("a"), Some(1));
//! assert!(src.is_empty());
//! ```

pub mod config;
pub mod error;
pub mod stats;
pub mod store;

// Re-export key types for convenience
pub use config::Config;
pub use error::{StoreError, StoreResult};
pub use stats::{StatsSnapshot, StoreStats};
pub use store::Store;
