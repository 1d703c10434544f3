//! Error types returned by `ChainedHashMap`

use thiserror::Error;

/// Failures surfaced by map construction and insertion.
///
/// A missing key is never an error: lookups return `None` and removal of an
/// absent key is a no-op.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MapError {
    /// A new key could not be admitted because holding it under the load
    /// factor would take more buckets than the configured maximum.
    #[error("exceeding maximum capacity of {capacity} buckets")]
    CapacityExceeded {
        /// Maximum bucket count of the map
        capacity: usize,
    },
    /// The load factor threshold must lie in `(0, 1]`.
    #[error("load factor threshold {0} is outside (0, 1]")]
    InvalidLoadFactor(f64),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MapError>;
