use std::{
    borrow::Borrow,
    fmt,
    hash::{BuildHasher, BuildHasherDefault, DefaultHasher, Hash},
    iter::FusedIterator,
    mem, slice,
};

use log::{debug, trace, warn};

use crate::{
    config::MapConfig,
    error::{MapError, Result},
    hashing,
    stats::ChainStats,
};

/// Hasher builder used when none is supplied: deterministic `DefaultHasher`s
pub type DefaultHashBuilder = BuildHasherDefault<DefaultHasher>;

/// A key-value pair stored in a chain
#[derive(Debug, Clone)]
struct Entry<K, V> {
    /// The key in the key-value pair
    key: K,
    /// The value associated with the key
    value: V,
}

/// Entries sharing one bucket index, allocated on the first insertion into that bucket
type Chain<K, V> = Option<Vec<Entry<K, V>>>;

/// A hash map resolving collisions by separate chaining.
///
/// The bucket count is always a power of two, so a bucket is addressed by
/// masking the spread hash code (see [`hashing::spread`]). When admitting a new
/// key would push the ratio of entries to buckets above the load factor
/// threshold, the bucket count doubles and every entry is redistributed.
///
/// Note: This implementation is not thread-safe; wrap it in a lock for shared access.
#[derive(Clone)]
pub struct ChainedHashMap<K, V, S = DefaultHashBuilder> {
    /// One optional chain per bucket
    buckets: Vec<Chain<K, V>>,
    /// Current number of entries across all chains
    size: usize,
    /// Ratio of entries to buckets the map keeps itself under
    load_factor_threshold: f64,
    /// Bucket count the map may not grow past
    maximum_capacity: usize,
    /// Builds the hasher for each key
    build_hasher: S,
}

impl<K, V> ChainedHashMap<K, V, DefaultHashBuilder> {
    /// Creates an empty map with the default capacity and load factor threshold
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty map with room for `capacity` buckets, rounded up to a power of two
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let config = MapConfig::default().with_initial_capacity(capacity).clamped();
        Self::from_config(config, DefaultHashBuilder::default())
    }

    /// Creates an empty map from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidLoadFactor`] if the load factor is outside `(0, 1]`.
    pub fn with_config(config: MapConfig) -> Result<Self> {
        Self::with_config_and_hasher(config, DefaultHashBuilder::default())
    }
}

impl<K, V, S> ChainedHashMap<K, V, S> {
    /// Creates an empty map with the default configuration hashing keys with `build_hasher`
    #[must_use]
    pub fn with_hasher(build_hasher: S) -> Self {
        Self::from_config(MapConfig::default().clamped(), build_hasher)
    }

    /// Creates an empty map from an explicit configuration and hasher builder.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidLoadFactor`] if the load factor is outside `(0, 1]`.
    pub fn with_config_and_hasher(config: MapConfig, build_hasher: S) -> Result<Self> {
        Ok(Self::from_config(config.normalized()?, build_hasher))
    }

    /// Builds the map from an already normalised configuration
    fn from_config(config: MapConfig, build_hasher: S) -> Self {
        Self {
            buckets: empty_buckets(config.initial_capacity),
            size: 0,
            load_factor_threshold: config.load_factor,
            maximum_capacity: config.maximum_capacity,
            build_hasher,
        }
    }

    /// Returns the number of entries in the map
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets, always a power of two
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the bucket count this map may not grow past
    #[must_use]
    pub fn maximum_capacity(&self) -> usize {
        self.maximum_capacity
    }

    /// Returns the configured load factor threshold
    #[must_use]
    pub fn load_factor_threshold(&self) -> f64 {
        self.load_factor_threshold
    }

    /// Returns the current ratio of entries to buckets
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Removes every entry. The bucket count is kept.
    pub fn clear(&mut self) {
        for chain in self.buckets.iter_mut().flatten() {
            chain.clear();
        }
        trace!("Cleared {} entries, keeping {} buckets", self.size, self.buckets.len());
        self.size = 0;
    }

    /// Returns an iterator over the key-value pairs in bucket order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { buckets: self.buckets.iter(), chain: slice::Iter::default(), remaining: self.size }
    }

    /// Returns the length of every bucket's chain, in bucket order
    #[must_use]
    pub fn chain_lengths(&self) -> Vec<usize> {
        self.buckets.iter().map(|chain| chain.as_ref().map_or(0, Vec::len)).collect()
    }

    /// Returns occupancy statistics of the buckets
    #[must_use]
    pub fn chain_stats(&self) -> ChainStats {
        ChainStats::from_chain_lengths(&self.chain_lengths())
    }

    /// Returns true if any entry holds a value equal to `value`. Scans every chain.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.iter().any(|(_, v)| v == value)
    }
}

impl<K, V, S> ChainedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Computes the bucket index of a key under the current capacity
    fn bucket_index<Q: Hash + ?Sized>(&self, key: &Q) -> usize {
        hashing::bucket_index(hashing::raw_hash(&self.build_hasher, key), self.buckets.len())
    }

    /// Inserts a key-value pair.
    ///
    /// Returns the previous value if the key was already present, in which case
    /// the value is replaced in place and the map never grows. Otherwise the map
    /// grows first if admitting one more entry would exceed the load factor
    /// threshold.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::CapacityExceeded`] if the key is new and the map is
    /// already at its maximum capacity with no room under the threshold. No
    /// entry is added in that case.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>> {
        if let Some(slot) = self.get_mut(&key) {
            return Ok(Some(mem::replace(slot, value)));
        }

        self.reserve_one()?;
        self.insert_new(key, value);
        Ok(None)
    }

    /// Inserts a key-value pair, returning the previous value, or the inserted
    /// value itself if the key was new.
    ///
    /// # Errors
    ///
    /// Same as [`ChainedHashMap::insert`].
    pub fn put(&mut self, key: K, value: V) -> Result<V>
    where
        V: Clone,
    {
        if let Some(slot) = self.get_mut(&key) {
            return Ok(mem::replace(slot, value));
        }

        self.reserve_one()?;
        let inserted = value.clone();
        self.insert_new(key, value);
        Ok(inserted)
    }

    /// Inserts every pair of `iter`, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::CapacityExceeded`] from the first insertion that fails.
    /// Pairs inserted before it stay in the map.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in iter {
            self.insert(key, value)?;
        }
        Ok(())
    }

    /// Grows the table, in a single rehash, to the smallest power of two that
    /// holds one more entry under the load factor threshold. Nothing is
    /// allocated if that bucket count would exceed the maximum.
    fn reserve_one(&mut self) -> Result<()> {
        let entries = self.size.saturating_add(1);
        let mut target = self.buckets.len();

        while !self.fits(entries, target) {
            if target >= self.maximum_capacity {
                warn!(
                    "Cannot admit entry {}: more than the maximum of {} buckets needed",
                    self.size, self.maximum_capacity
                );
                return Err(MapError::CapacityExceeded { capacity: self.maximum_capacity });
            }
            target = target.saturating_mul(2);
        }

        if target != self.buckets.len() {
            self.rehash(target);
        }
        Ok(())
    }

    /// Returns true if `entries` entries in `capacity` buckets stay within the load factor threshold
    #[allow(clippy::cast_precision_loss)]
    fn fits(&self, entries: usize, capacity: usize) -> bool {
        entries as f64 <= capacity as f64 * self.load_factor_threshold
    }

    /// Replaces the buckets with `new_capacity` empty ones and reinserts every entry
    fn rehash(&mut self, new_capacity: usize) {
        debug!(
            "Rehashing {} entries from {} to {} buckets",
            self.size,
            self.buckets.len(),
            new_capacity
        );

        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        self.size = 0;

        for entry in old_buckets.into_iter().flatten().flatten() {
            self.insert_new(entry.key, entry.value);
        }
    }

    /// Appends an entry for a key known to be absent, without any growth check
    fn insert_new(&mut self, key: K, value: V) {
        let index = self.bucket_index(&key);
        if let Some(chain) = self.buckets.get_mut(index) {
            chain.get_or_insert_with(Vec::new).push(Entry { key, value });
            self.size = self.size.saturating_add(1);
        }
    }

    /// Retrieves the value stored for `key`
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets
            .get(index)?
            .as_ref()?
            .iter()
            .find(|entry| entry.key.borrow() == key)
            .map(|entry| &entry.value)
    }

    /// Gets a mutable reference to the value stored for `key`
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets
            .get_mut(index)?
            .as_mut()?
            .iter_mut()
            .find(|entry| entry.key.borrow() == key)
            .map(|entry| &mut entry.value)
    }

    /// Returns true if `key` is mapped, whatever value it is mapped to
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes `key` and returns its value. Absent keys are a no-op returning `None`.
    /// The bucket count never shrinks.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let chain = self.buckets.get_mut(index)?.as_mut()?;
        let position = chain.iter().position(|entry| entry.key.borrow() == key)?;
        let entry = chain.swap_remove(position);

        self.size = self.size.saturating_sub(1);
        Some(entry.value)
    }
}

/// Allocates `capacity` buckets with no chains
fn empty_buckets<K, V>(capacity: usize) -> Vec<Chain<K, V>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, || None);
    buckets
}

impl<K, V> Default for ChainedHashMap<K, V, DefaultHashBuilder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> fmt::Debug for ChainedHashMap<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Renders the map as `{key=value, key=value}` in bucket order.
impl<K, V, S> fmt::Display for ChainedHashMap<K, V, S>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (position, (key, value)) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        f.write_str("}")
    }
}

impl<'a, K, V, S> IntoIterator for &'a ChainedHashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the key-value pairs of a `ChainedHashMap`
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// Buckets not yet visited
    buckets: slice::Iter<'a, Chain<K, V>>,
    /// Remainder of the chain being walked
    chain: slice::Iter<'a, Entry<K, V>>,
    /// Entries left to yield
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.next() {
                self.remaining = self.remaining.saturating_sub(1);
                return Some((&entry.key, &entry.value));
            }
            self.chain = self.buckets.next()?.as_deref().unwrap_or_default().iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::{cell::Cell, hash::Hasher, rc::Rc};

    use super::*;
    use crate::config::{DEFAULT_INITIAL_CAPACITY, DEFAULT_LOAD_FACTOR, MAXIMUM_CAPACITY};

    /// Sends every key to the same bucket
    #[derive(Default)]
    struct ZeroHasher;

    impl Hasher for ZeroHasher {
        fn finish(&self) -> u64 {
            0
        }

        fn write(&mut self, _bytes: &[u8]) {}
    }

    type Colliding = BuildHasherDefault<ZeroHasher>;

    /// Counts how often it is cloned
    struct CountedClone(Rc<Cell<usize>>);

    impl Clone for CountedClone {
        fn clone(&self) -> Self {
            self.0.set(self.0.get() + 1);
            Self(Rc::clone(&self.0))
        }
    }

    #[test]
    fn test_new_defaults() {
        let map: ChainedHashMap<String, i32> = ChainedHashMap::new();

        assert_eq!(map.capacity(), DEFAULT_INITIAL_CAPACITY);
        assert_eq!(map.maximum_capacity(), MAXIMUM_CAPACITY);
        assert!((map.load_factor_threshold() - DEFAULT_LOAD_FACTOR).abs() < f64::EPSILON);
        assert!(map.is_empty());
    }

    #[test]
    fn test_insert_and_get() {
        let mut map = ChainedHashMap::new();
        assert_eq!(map.insert("key1".to_string(), 1), Ok(None));
        assert_eq!(map.insert("key2".to_string(), 2), Ok(None));
        assert_eq!(map.insert("key3".to_string(), 3), Ok(None));

        assert_eq!(map.get("key1"), Some(&1));
        assert_eq!(map.get("key2"), Some(&2));
        assert_eq!(map.get("key3"), Some(&3));
        assert_eq!(map.get("key4"), None);
    }

    #[test]
    fn test_update() {
        let mut map = ChainedHashMap::new();
        assert_eq!(map.insert("key1".to_string(), 1), Ok(None));
        assert_eq!(map.insert("key1".to_string(), 10), Ok(Some(1)));
        assert_eq!(map.get("key1"), Some(&10));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_put_returns_previous_or_inserted() {
        let mut map = ChainedHashMap::new();
        assert_eq!(map.put("Smith", 30), Ok(30));
        assert_eq!(map.put("Smith", 65), Ok(30));
        assert_eq!(map.get("Smith"), Some(&65));
    }

    #[test]
    fn test_update_never_grows() {
        let mut map = ChainedHashMap::new();
        for i in 0..3 {
            assert_eq!(map.insert(i, i), Ok(None));
        }
        assert_eq!(map.capacity(), 4);

        // Three entries in four buckets sits exactly on the threshold
        assert_eq!(map.insert(2, 20), Ok(Some(2)));
        assert_eq!(map.capacity(), 4);

        assert_eq!(map.insert(3, 3), Ok(None));
        assert_eq!(map.capacity(), 8);
    }

    #[test]
    fn test_remove() {
        let mut map = ChainedHashMap::new();
        map.insert("key1".to_string(), 1).ok();
        map.insert("key2".to_string(), 2).ok();

        assert_eq!(map.remove("key1"), Some(1));
        assert_eq!(map.get("key1"), None);
        assert_eq!(map.get("key2"), Some(&2));
        assert_eq!(map.remove("key1"), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_resize() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut map = ChainedHashMap::new();
        let mut capacities = vec![map.capacity()];

        for i in 0..9 {
            assert_eq!(map.insert(format!("key{i}"), i), Ok(None));
            if capacities.last() != Some(&map.capacity()) {
                capacities.push(map.capacity());
            }
            for j in 0..=i {
                assert_eq!(map.get(&format!("key{j}")), Some(&j));
            }
        }

        assert_eq!(capacities, vec![4, 8, 16]);
        assert_eq!(map.len(), 9);
    }

    #[test]
    fn test_capacity_exceeded() {
        let config = MapConfig::default().with_maximum_capacity(8);
        let mut map = ChainedHashMap::with_config(config).unwrap();

        for i in 0..6 {
            assert_eq!(map.insert(i, i), Ok(None));
        }
        assert_eq!(map.capacity(), 8);

        assert_eq!(map.insert(6, 6), Err(MapError::CapacityExceeded { capacity: 8 }));
        assert_eq!(map.len(), 6);
        assert_eq!(map.get(&6), None);

        // Updates still succeed at the limit
        assert_eq!(map.insert(5, 50), Ok(Some(5)));

        // Freeing a slot admits a new key again
        assert_eq!(map.remove(&0), Some(0));
        assert_eq!(map.insert(6, 6), Ok(None));
    }

    #[test]
    fn test_unreachable_growth_fails_without_allocating() {
        let config = MapConfig::default().with_maximum_capacity(1 << 20).with_load_factor(1e-9);
        let mut map = ChainedHashMap::with_config(config).unwrap();
        let before = map.capacity();

        assert_eq!(map.insert(1, 1), Err(MapError::CapacityExceeded { capacity: 1 << 20 }));
        assert_eq!(map.capacity(), before);
        assert!(map.is_empty());
        assert_eq!(map.get(&1), None);
    }

    #[test]
    fn test_growth_jumps_in_one_rehash() {
        let config = MapConfig::default().with_load_factor(0.01);
        let mut map = ChainedHashMap::with_config(config).unwrap();

        // One entry at 1% needs 100 buckets, so the smallest fitting power of two is 128
        map.insert("a", 1).unwrap();
        assert_eq!(map.capacity(), 128);
        assert_eq!(map.get("a"), Some(&1));
    }

    #[test]
    fn test_put_clones_only_new_values() {
        let clones = Rc::new(Cell::new(0));
        let mut map = ChainedHashMap::new();

        map.put("a", CountedClone(Rc::clone(&clones))).unwrap();
        assert_eq!(clones.get(), 1);

        map.put("a", CountedClone(Rc::clone(&clones))).unwrap();
        assert_eq!(clones.get(), 1);
    }

    #[test]
    fn test_small_load_factor_keeps_invariant() {
        let config = MapConfig::default().with_load_factor(0.1);
        let mut map = ChainedHashMap::with_config(config).unwrap();

        for i in 0..50 {
            map.insert(i, i).unwrap();
            assert!(map.load_factor() <= 0.1);
            assert!(map.capacity().is_power_of_two());
        }
    }

    #[test]
    fn test_contains_key() {
        let mut map = ChainedHashMap::new();
        map.insert("present", 1).unwrap();
        map.insert("removed", 2).unwrap();
        map.remove("removed");

        assert!(map.contains_key("present"));
        assert!(!map.contains_key("removed"));
        assert!(!map.contains_key("never"));
    }

    #[test]
    fn test_contains_key_with_absent_like_value() {
        let mut map: ChainedHashMap<&str, Option<i32>> = ChainedHashMap::new();
        map.insert("nothing", None).unwrap();

        assert!(map.contains_key("nothing"));
        assert_eq!(map.get("nothing"), Some(&None));
    }

    #[test]
    fn test_contains_value() {
        let mut map = ChainedHashMap::new();
        map.insert("Smith", 30).unwrap();
        map.insert("Anderson", 31).unwrap();

        assert!(map.contains_value(&31));
        assert!(!map.contains_value(&32));
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut map = ChainedHashMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);

        map.insert("key1".to_string(), 1).unwrap();
        assert!(!map.is_empty());
        assert_eq!(map.len(), 1);

        map.insert("key2".to_string(), 2).unwrap();
        assert_eq!(map.len(), 2);

        map.remove("key1");
        assert_eq!(map.len(), 1);

        map.remove("key2");
        assert!(map.is_empty());
    }

    #[test]
    fn test_iter() {
        let mut map = ChainedHashMap::new();
        map.insert("key1".to_string(), 1).unwrap();
        map.insert("key2".to_string(), 2).unwrap();
        map.insert("key3".to_string(), 3).unwrap();

        let iter = map.iter();
        assert_eq!(iter.len(), 3);

        let mut count = 0;
        let mut sum = 0;
        for (_, &value) in &map {
            count += 1;
            sum += value;
        }

        assert_eq!(count, 3);
        assert_eq!(sum, 6);
    }

    #[test]
    fn test_get_mut() {
        let mut map = ChainedHashMap::new();
        map.insert("key1".to_string(), 1).unwrap();

        if let Some(value) = map.get_mut("key1") {
            *value += 10;
        }

        assert_eq!(map.get("key1"), Some(&11));
    }

    #[test]
    fn test_clear() {
        let mut map = ChainedHashMap::with_capacity(32);
        map.insert("key1".to_string(), 1).unwrap();
        map.insert("key2".to_string(), 2).unwrap();
        let capacity = map.capacity();

        map.clear();

        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert_eq!(map.capacity(), capacity);
        assert!(!map.contains_key("key1"));
        assert_eq!(map.get("key2"), None);
        assert_eq!(map.iter().count(), 0);
    }

    #[test]
    fn test_collisions_share_a_chain() {
        let mut map: ChainedHashMap<u32, u32, Colliding> =
            ChainedHashMap::with_hasher(Colliding::default());
        for i in 0..3 {
            map.insert(i, i * 10).unwrap();
        }

        assert_eq!(map.chain_lengths(), vec![3, 0, 0, 0]);

        assert_eq!(map.remove(&1), Some(10));
        assert_eq!(map.get(&0), Some(&0));
        assert_eq!(map.get(&2), Some(&20));
        assert_eq!(map.get(&1), None);

        let stats = map.chain_stats();
        assert_eq!(stats.occupied_buckets, 1);
        assert_eq!(stats.longest_chain, 2);
    }

    #[test]
    fn test_entries_relocated_on_rehash() {
        let mut map = ChainedHashMap::new();
        map.try_extend((0..100).map(|i| (i, i * 2))).unwrap();

        assert_eq!(map.len(), 100);
        assert_eq!(map.chain_lengths().iter().sum::<usize>(), 100);
        for i in 0..100 {
            assert_eq!(map.get(&i), Some(&(i * 2)));
        }
    }

    #[test]
    fn test_display() {
        let mut map = ChainedHashMap::new();
        assert_eq!(map.to_string(), "{}");

        map.insert("Smith", 30).unwrap();
        assert_eq!(map.to_string(), "{Smith=30}");

        map.insert("Lewis", 29).unwrap();
        let rendered = map.to_string();
        assert!(rendered == "{Smith=30, Lewis=29}" || rendered == "{Lewis=29, Smith=30}");
    }

    #[test]
    fn test_debug() {
        let mut map = ChainedHashMap::new();
        map.insert(1, "one").unwrap();
        assert_eq!(format!("{map:?}"), r#"{1: "one"}"#);
    }

    #[test]
    fn test_invalid_load_factor() {
        let config = MapConfig::default().with_load_factor(2.0);
        let result = ChainedHashMap::<u8, u8>::with_config(config);
        assert!(matches!(result, Err(MapError::InvalidLoadFactor(_))));
    }
}
