//! Configuration for memstore instances
//!
//! Provides capacity tier presets and builder-style setters for custom
//! configurations.

use crate::error::{StoreError, StoreResult};

/// Upper bound on the up-front capacity hint (entries)
pub const MAX_INITIAL_CAPACITY: usize = 1 << 30;

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Label attached to log events emitted by the store
    pub name: String,
    /// Number of entries to reserve when the store is built
    pub initial_capacity: usize,
}

impl Config {
    /// Small tier: no up-front reservation
    pub fn small() -> Self {
        Self {
            name: "memstore".into(),
            initial_capacity: 0,
        }
    }

    /// Large tier: reserve room for 64K entries
    pub fn large() -> Self {
        Self {
            name: "memstore".into(),
            initial_capacity: 64 * 1024,
        }
    }

    /// Set the store name used in log fields.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the number of entries reserved at construction.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Validate all configuration parameters
    pub fn validate(&self) -> StoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(StoreError::InvalidConfig {
                field: "name",
                reason: "must not be empty".into(),
            });
        }
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(StoreError::InvalidConfig {
                field: "initial_capacity",
                reason: format!("must be <= {}", MAX_INITIAL_CAPACITY),
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self { Self::small() }
}
