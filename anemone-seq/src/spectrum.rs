//! K-mer spectrum: the histogram of occurrence counts.
//!
//! A spectrum maps each occurrence-count value to the number of distinct
//! k-mers having that count. It is a read-only snapshot derived from a
//! [`KmerCounter`] in one pass and is never mutated afterward.

use std::collections::BTreeMap;

use crate::counter::KmerCounter;

/// Histogram of `occurrence count -> number of distinct k-mers`.
#[derive(Debug, Clone)]
pub struct KmerSpectrum {
    histogram: BTreeMap<u64, usize>,
}

impl KmerSpectrum {
    /// Build the spectrum from a counter snapshot.
    pub fn from_counter(counter: &KmerCounter) -> Self {
        let mut histogram = BTreeMap::new();
        for (_, &count) in counter.kmers() {
            *histogram.entry(count).or_insert(0) += 1;
        }
        Self { histogram }
    }

    /// The count value backed by the largest number of distinct k-mers,
    /// with that number. Ties resolve to the smallest count value, so the
    /// result is deterministic. Returns `None` for an empty spectrum.
    pub fn peak(&self) -> Option<(u64, usize)> {
        let mut best: Option<(u64, usize)> = None;
        // Ascending count order; a later entry only wins with strictly more k-mers
        for (&count, &n) in &self.histogram {
            if best.map_or(true, |(_, best_n)| n > best_n) {
                best = Some((count, n));
            }
        }
        best
    }

    /// Number of distinct k-mers with exactly this occurrence count.
    pub fn frequency_of(&self, count: u64) -> usize {
        self.histogram.get(&count).copied().unwrap_or(0)
    }

    /// Iterate over `(count, number of k-mers)` in ascending count order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, usize)> + '_ {
        self.histogram.iter().map(|(&count, &n)| (count, n))
    }

    /// Number of distinct count values.
    pub fn len(&self) -> usize {
        self.histogram.len()
    }

    /// Whether the spectrum is empty.
    pub fn is_empty(&self) -> bool {
        self.histogram.is_empty()
    }
}
