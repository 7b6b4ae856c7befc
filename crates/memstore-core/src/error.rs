//! Error types for memstore construction
//!
//! Point and bulk operations on a store never fail. The only fallible
//! surface is building a store from a [`Config`](crate::Config), which is
//! validated and may reserve memory up front.

use std::error::Error;
use std::fmt;

/// memstore error types with detailed context
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A configuration field holds an unusable value
    InvalidConfig {
        /// Name of the offending field
        field: &'static str,
        /// Human-readable description
        reason: String,
    },

    /// Reserving the initial capacity of the map failed
    CapacityReservation {
        /// Number of entries requested
        requested: usize,
        /// Description of the allocator failure
        reason: String,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::InvalidConfig { field, reason } => {
                write!(f, "Invalid config field `{}`: {}", field, reason)
            }

            StoreError::CapacityReservation { requested, reason } => {
                write!(f, "Failed to reserve capacity for {} entries: {}", requested, reason)
            }
        }
    }
}

impl Error for StoreError {}

/// Result type alias for memstore operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::InvalidConfig {
            field: "name",
            reason: "must not be empty".into(),
        };

        let display = format!("{}", err);
        assert!(display.contains("`name`"));
        assert!(display.contains("must not be empty"));
    }

    #[test]
    fn test_reservation_display() {
        let err = StoreError::CapacityReservation {
            requested: 4096,
            reason: "CapacityOverflow".into(),
        };

        let display = err.to_string();
        assert!(display.contains("4096"));
        assert!(display.contains("CapacityOverflow"));
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: Error + Send + Sync + 'static>() {}
        assert_error::<StoreError>();
    }
}
