//! K-mer counting over DNA sequences.
//!
//! [`KmerCounter`] slides a fixed-width window across a sequence and
//! accumulates occurrence counts keyed by packed [`Kmer`] values, optionally
//! canonicalized by strand. Windows containing the ambiguous base N are
//! skipped entirely (neither counted nor canonicalized). A counter can be
//! reused across sequences and merged with other counters of the same shape,
//! which is the intended parallelization strategy for batch workloads: one
//! counter per worker, merged afterward.

use std::collections::HashMap;

use anemone_core::{AnemoneError, Result, Summarizable};

use crate::kmer::{Kmer, MAX_K};

/// Accumulated k-mer occurrence counts for a fixed `k`.
#[derive(Debug, Clone)]
pub struct KmerCounter {
    k: usize,
    canonical: bool,
    counts: HashMap<Kmer, u64>,
    total: u64,
}

/// Count the k-mers of a single sequence.
///
/// Convenience entry point: builds a counter and runs [`KmerCounter::count`]
/// once. A sequence shorter than `k` yields an empty counter, not an error.
///
/// # Errors
///
/// Returns an error if `k == 0` or `k > 32`.
pub fn count_kmers(seq: &[u8], k: usize, canonical: bool) -> Result<KmerCounter> {
    let mut counter = KmerCounter::new(k, canonical)?;
    counter.count(seq);
    Ok(counter)
}

impl KmerCounter {
    /// Create an empty counter.
    ///
    /// In canonical mode each window is keyed by the lexicographically
    /// smaller of itself and its reverse complement, making counts
    /// strand-agnostic.
    ///
    /// # Errors
    ///
    /// Returns an error if `k == 0` or `k > 32` (the packed-key width).
    pub fn new(k: usize, canonical: bool) -> Result<Self> {
        if k == 0 {
            return Err(AnemoneError::InvalidInput(
                "k-mer size must be at least 1".into(),
            ));
        }
        if k > MAX_K {
            return Err(AnemoneError::InvalidInput(format!(
                "k-mer size {} exceeds the maximum of {}",
                k, MAX_K
            )));
        }
        Ok(Self {
            k,
            canonical,
            counts: HashMap::new(),
            total: 0,
        })
    }

    /// Count every width-`k` window of `seq` into this counter.
    ///
    /// Windows containing a non-ACGT byte are skipped. A sequence shorter
    /// than `k` contributes nothing; this is a no-op, never an error.
    pub fn count(&mut self, seq: &[u8]) {
        if seq.len() < self.k {
            return;
        }
        for window in seq.windows(self.k) {
            let kmer = match Kmer::from_window(window) {
                Some(kmer) => kmer,
                // Window crosses an ambiguous base
                None => continue,
            };
            let key = if self.canonical { kmer.canonical() } else { kmer };
            *self.counts.entry(key).or_insert(0) += 1;
            self.total += 1;
        }
    }

    /// Add another counter's counts into this one.
    ///
    /// # Errors
    ///
    /// Returns [`AnemoneError::IncompatibleOperands`] if the counters differ
    /// in `k` or in canonicalization mode.
    pub fn merge(&mut self, other: &KmerCounter) -> Result<()> {
        if self.k != other.k {
            return Err(AnemoneError::IncompatibleOperands(format!(
                "cannot merge counters with k={} and k={}",
                self.k, other.k
            )));
        }
        if self.canonical != other.canonical {
            return Err(AnemoneError::IncompatibleOperands(
                "cannot merge canonical and non-canonical counters".into(),
            ));
        }
        for (&kmer, &count) in &other.counts {
            *self.counts.entry(kmer).or_insert(0) += count;
        }
        self.total += other.total;
        Ok(())
    }

    /// Reset all counts and the running total.
    pub fn clear(&mut self) {
        self.counts.clear();
        self.total = 0;
    }

    /// K-mer width this counter was built with.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Whether windows are canonicalized by strand.
    pub fn is_canonical(&self) -> bool {
        self.canonical
    }

    /// Occurrence count for a window, 0 if absent.
    ///
    /// The window is packed and, in canonical mode, canonicalized before
    /// lookup. Windows of the wrong width or containing non-ACGT bytes
    /// return 0; this never errors.
    pub fn get_count(&self, window: &[u8]) -> u64 {
        if window.len() != self.k {
            return 0;
        }
        let kmer = match Kmer::from_window(window) {
            Some(kmer) => kmer,
            None => return 0,
        };
        let key = if self.canonical { kmer.canonical() } else { kmer };
        self.counts.get(&key).copied().unwrap_or(0)
    }

    /// Whether the key is present in this counter.
    pub fn contains(&self, kmer: &Kmer) -> bool {
        self.counts.contains_key(kmer)
    }

    /// Number of distinct keys.
    pub fn unique_count(&self) -> usize {
        self.counts.len()
    }

    /// Total number of counted windows.
    pub fn total_count(&self) -> u64 {
        self.total
    }

    /// Ratio of distinct keys to counted windows, in [0.0, 1.0].
    ///
    /// Returns 0.0 when nothing has been counted.
    pub fn diversity(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.counts.len() as f64 / self.total as f64
    }

    /// Shannon entropy in bits of the empirical k-mer frequency distribution.
    ///
    /// H = -sum(p_i * log2(p_i)) with p_i = count_i / total. Returns 0.0
    /// when nothing has been counted.
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let total = self.total as f64;
        let mut h = 0.0;
        for &count in self.counts.values() {
            let p = count as f64 / total;
            h -= p * p.log2();
        }
        h
    }

    /// Up to `n` entries with the highest counts.
    ///
    /// Sorted by count descending; ties are broken by ascending lexical
    /// order of the key, so the result is deterministic.
    pub fn most_frequent(&self, n: usize) -> Vec<(Kmer, u64)> {
        let mut entries: Vec<(Kmer, u64)> =
            self.counts.iter().map(|(&kmer, &count)| (kmer, count)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries.truncate(n);
        entries
    }

    /// Up to `n` entries with the lowest counts.
    ///
    /// Sorted by count ascending; ties are broken by ascending lexical
    /// order of the key.
    pub fn least_frequent(&self, n: usize) -> Vec<(Kmer, u64)> {
        let mut entries: Vec<(Kmer, u64)> =
            self.counts.iter().map(|(&kmer, &count)| (kmer, count)).collect();
        entries.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));
        entries.truncate(n);
        entries
    }

    /// All keys whose count equals `target` exactly, in lexical order.
    pub fn with_count(&self, target: u64) -> Vec<Kmer> {
        let mut keys: Vec<Kmer> = self
            .counts
            .iter()
            .filter(|&(_, &count)| count == target)
            .map(|(&kmer, _)| kmer)
            .collect();
        keys.sort();
        keys
    }

    /// Iterate over `(key, count)` pairs in arbitrary order.
    pub fn kmers(&self) -> impl Iterator<Item = (&Kmer, &u64)> {
        self.counts.iter()
    }
}

impl Summarizable for KmerCounter {
    fn summary(&self) -> String {
        format!(
            "{}-mer counter{}: {} distinct / {} total",
            self.k,
            if self.canonical { " (canonical)" } else { "" },
            self.counts.len(),
            self.total
        )
    }
}
