//! Snapshot views and construction helpers for `ChainedHashMap`

use crate::{ChainedHashMap, error::Result};
use std::{
    collections::HashSet,
    hash::{BuildHasher, Hash},
};

/// Extension trait producing de-duplicated, unordered snapshots of a map.
///
/// Each view is built by a single scan over the buckets and owns its elements,
/// so later changes to the map do not show up in a view already taken.
pub trait MapViews<K, V> {
    /// Returns the keys of the map as a set
    fn key_set(&self) -> HashSet<K>;

    /// Returns the distinct values of the map as a set
    fn values(&self) -> HashSet<V>
    where
        V: Hash + Eq;

    /// Returns the key-value pairs of the map as a set
    fn entry_set(&self) -> HashSet<(K, V)>
    where
        V: Hash + Eq;
}

impl<K, V, S> MapViews<K, V> for ChainedHashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    fn key_set(&self) -> HashSet<K> {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    fn values(&self) -> HashSet<V>
    where
        V: Hash + Eq,
    {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    fn entry_set(&self) -> HashSet<(K, V)>
    where
        V: Hash + Eq,
    {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

/// Creates a `ChainedHashMap` from an iterator of key-value pairs
///
/// # Errors
///
/// Returns [`crate::MapError::CapacityExceeded`] if the pairs do not fit.
pub fn try_from_iter<K, V, I>(iter: I) -> Result<ChainedHashMap<K, V>>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, V)>,
{
    let mut map = ChainedHashMap::new();
    map.try_extend(iter)?;
    Ok(map)
}
