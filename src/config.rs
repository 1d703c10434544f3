//! Construction parameters for `ChainedHashMap`

use crate::error::{MapError, Result};

/// Bucket count used by `ChainedHashMap::new`
pub const DEFAULT_INITIAL_CAPACITY: usize = 4;

/// Smallest bucket count a map will ever have
pub const MINIMUM_CAPACITY: usize = 4;

/// Largest bucket count a map may grow to
pub const MAXIMUM_CAPACITY: usize = 1 << 30;

/// Ratio of entries to buckets above which the map grows
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Sizing and growth parameters of a single map.
///
/// Every map owns its own copy; nothing here is shared between instances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    /// Requested bucket count, rounded up to a power of two
    pub initial_capacity: usize,
    /// Load factor threshold in `(0, 1]`
    pub load_factor: f64,
    /// Upper bound on the bucket count, rounded up to a power of two
    pub maximum_capacity: usize,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
            maximum_capacity: MAXIMUM_CAPACITY,
        }
    }
}

impl MapConfig {
    /// Sets the requested initial bucket count
    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the load factor threshold
    #[must_use]
    pub fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Sets the bucket count the map may never grow past
    #[must_use]
    pub fn with_maximum_capacity(mut self, capacity: usize) -> Self {
        self.maximum_capacity = capacity;
        self
    }

    /// Checks the load factor, then clamps the capacities.
    pub(crate) fn normalized(self) -> Result<Self> {
        if !(self.load_factor > 0.0 && self.load_factor <= 1.0) {
            return Err(MapError::InvalidLoadFactor(self.load_factor));
        }
        Ok(self.clamped())
    }

    /// Rounds both capacities up to powers of two within
    /// `[MINIMUM_CAPACITY, MAXIMUM_CAPACITY]`, with the initial capacity never
    /// above the maximum. The load factor is left as is.
    pub(crate) fn clamped(self) -> Self {
        let maximum_capacity = round_capacity(self.maximum_capacity, MAXIMUM_CAPACITY);
        let initial_capacity = round_capacity(self.initial_capacity, maximum_capacity);

        Self { initial_capacity, load_factor: self.load_factor, maximum_capacity }
    }
}

/// Rounds `requested` up to the next power of two, clamped to `[MINIMUM_CAPACITY, ceiling]`.
fn round_capacity(requested: usize, ceiling: usize) -> usize {
    if requested >= ceiling {
        return ceiling;
    }
    requested.max(MINIMUM_CAPACITY).next_power_of_two()
}
