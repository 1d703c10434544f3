//! Chain occupancy statistics for analysing bucket distribution

use std::fmt;

/// Snapshot of how entries are spread across the buckets of a map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainStats {
    /// Number of buckets (the map's capacity)
    pub buckets: usize,
    /// Number of live entries
    pub entries: usize,
    /// Buckets holding at least one entry
    pub occupied_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// Average length of the non-empty chains
    pub mean_chain_length: f64,
    /// Entries per bucket
    pub load_factor: f64,
}

impl ChainStats {
    /// Builds the statistics from the length of every bucket's chain.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_chain_lengths(lengths: &[usize]) -> Self {
        let buckets = lengths.len();
        let entries = lengths.iter().sum::<usize>();
        let occupied_buckets = lengths.iter().filter(|&&len| len > 0).count();
        let longest_chain = lengths.iter().copied().max().unwrap_or(0);

        let mean_chain_length =
            if occupied_buckets == 0 { 0.0 } else { entries as f64 / occupied_buckets as f64 };
        let load_factor = if buckets == 0 { 0.0 } else { entries as f64 / buckets as f64 };

        Self { buckets, entries, occupied_buckets, longest_chain, mean_chain_length, load_factor }
    }
}

impl fmt::Display for ChainStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} entries in {}/{} buckets (load {:.2}), mean chain {:.2}, longest {}",
            self.entries,
            self.occupied_buckets,
            self.buckets,
            self.load_factor,
            self.mean_chain_length,
            self.longest_chain
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_chain_lengths() {
        let stats = ChainStats::from_chain_lengths(&[0, 3, 1, 0]);

        assert_eq!(stats.buckets, 4);
        assert_eq!(stats.entries, 4);
        assert_eq!(stats.occupied_buckets, 2);
        assert_eq!(stats.longest_chain, 3);
        assert!((stats.mean_chain_length - 2.0).abs() < f64::EPSILON);
        assert!((stats.load_factor - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty() {
        let stats = ChainStats::from_chain_lengths(&[0; 8]);

        assert_eq!(stats.occupied_buckets, 0);
        assert_eq!(stats.longest_chain, 0);
        assert!(stats.mean_chain_length.abs() < f64::EPSILON);
        assert_eq!(
            stats.to_string(),
            "0 entries in 0/8 buckets (load 0.00), mean chain 0.00, longest 0"
        );
    }
}
