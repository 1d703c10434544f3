//! Bucket addressing: supplemental hash spreading and power-of-two masking

use std::hash::{BuildHasher, Hash};

/// Mixes the high bits of a raw hash code into the low bits used for indexing.
///
/// Masking alone only looks at the lowest `log2(capacity)` bits, so hash codes
/// that differ only in their upper bits would all land in the same bucket.
#[must_use]
pub const fn spread(h: u32) -> u32 {
    let h = h ^ (h >> 20) ^ (h >> 12);
    h ^ (h >> 7) ^ (h >> 4)
}

/// Folds a 64-bit hasher output into the 32-bit raw hash code fed to [`spread`].
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn fold_hash(h: u64) -> u32 {
    (h ^ (h >> 32)) as u32
}

/// Bucket index of a raw hash code for a power-of-two `capacity`.
#[must_use]
pub const fn bucket_index(raw: u32, capacity: usize) -> usize {
    debug_assert!(capacity.is_power_of_two());
    (spread(raw) as usize) & capacity.saturating_sub(1)
}

/// Raw 32-bit hash code of `key` under `build_hasher`.
pub(crate) fn raw_hash<Q, S>(build_hasher: &S, key: &Q) -> u32
where
    Q: Hash + ?Sized,
    S: BuildHasher,
{
    fold_hash(build_hasher.hash_one(key))
}
