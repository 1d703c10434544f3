//! # Chained Hash Map
//!
//! A Rust implementation of a separate-chaining hash table.
//!
//! `ChainedHashMap` keeps one chain of entries per bucket. The bucket count is
//! always a power of two, so a key's bucket is found by masking its hash code,
//! after a supplemental spreading step folds the high bits into the low ones.
//! When admitting a new key would push the ratio of entries to buckets above the
//! load factor threshold, the table doubles and every entry is redistributed.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chainmap::{ChainedHashMap, MapViews};
//!
//! // Create a new hash map
//! let mut map = ChainedHashMap::new();
//!
//! // Insert values
//! map.insert("apple".to_string(), 1)?;
//! map.insert("banana".to_string(), 2)?;
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Update values
//! assert_eq!(map.insert("apple".to_string(), 10)?, Some(1));
//! assert_eq!(map.get("apple"), Some(&10));
//!
//! // Remove values
//! map.remove("apple");
//! assert_eq!(map.get("apple"), None);
//!
//! // Take a snapshot of the keys
//! assert!(map.key_set().contains("banana"));
//! # Ok::<(), chainmap::MapError>(())
//! ```
//!
//! ## Bounded Growth
//!
//! Every map carries its own [`MapConfig`]. Admitting a new key past the
//! configured maximum capacity is reported as [`MapError::CapacityExceeded`]:
//!
//! ```rust
//! use chainmap::{ChainedHashMap, MapConfig, MapError};
//!
//! let config = MapConfig::default().with_maximum_capacity(4).with_load_factor(0.5);
//! let mut map = ChainedHashMap::with_config(config)?;
//!
//! map.insert(1, "one")?;
//! map.insert(2, "two")?;
//! assert_eq!(map.insert(3, "three"), Err(MapError::CapacityExceeded { capacity: 4 }));
//! # Ok::<(), chainmap::MapError>(())
//! ```

/// Module implementing the separate-chaining hash map
mod chained_map;
/// Construction parameters and capacity constants
pub mod config;
/// Error types
mod error;
/// Hash spreading and bucket addressing
pub mod hashing;
/// Chain occupancy statistics
mod stats;
/// Snapshot views and construction helpers
mod utils;

pub use chained_map::{ChainedHashMap, DefaultHashBuilder, Iter};
pub use config::MapConfig;
pub use error::{MapError, Result};
pub use stats::ChainStats;
pub use utils::{MapViews, try_from_iter};
