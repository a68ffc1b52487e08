//! Set-similarity metrics between k-mer counters.
//!
//! All functions here are total and pure: counters whose shapes do not match
//! (different `k` or canonicalization) yield the documented neutral value
//! rather than an error, so they compose freely in scoring pipelines.

use crate::counter::KmerCounter;
use crate::kmer::Kmer;

/// Jaccard similarity `|A n B| / |A u B|` over the two counters' key sets.
///
/// Occurrence counts are ignored; only key presence matters. Counters with
/// different `k` or canonicalization are incomparable and yield `0.0` (the
/// documented neutral fallback, not an error). Two empty counters also yield
/// `0.0` (empty union).
pub fn jaccard_similarity(a: &KmerCounter, b: &KmerCounter) -> f64 {
    if a.k() != b.k() || a.is_canonical() != b.is_canonical() {
        return 0.0;
    }
    let intersection = a.kmers().filter(|(kmer, _)| b.contains(kmer)).count();
    let union = a.unique_count() + b.unique_count() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Jaccard distance `1 - jaccard_similarity`, in `[0.0, 1.0]`.
pub fn jaccard_distance(a: &KmerCounter, b: &KmerCounter) -> f64 {
    1.0 - jaccard_similarity(a, b)
}

/// The keys present in both counters, in ascending lexical order.
///
/// Incomparable counters share nothing and yield an empty list.
pub fn shared_kmers(a: &KmerCounter, b: &KmerCounter) -> Vec<Kmer> {
    if a.k() != b.k() || a.is_canonical() != b.is_canonical() {
        return Vec::new();
    }
    let mut shared: Vec<Kmer> = a
        .kmers()
        .filter(|(kmer, _)| b.contains(kmer))
        .map(|(&kmer, _)| kmer)
        .collect();
    shared.sort();
    shared
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::{count_kmers, KmerCounter};

    #[test]
    fn identical_counters_are_fully_similar() {
        let counter = count_kmers(b"ATGATGCCC", 3, false).unwrap();
        assert!((jaccard_similarity(&counter, &counter) - 1.0).abs() < 1e-10);
        assert!(jaccard_distance(&counter, &counter).abs() < 1e-10);
    }

    #[test]
    fn disjoint_counters_share_nothing() {
        // Non-canonical: AAA and TTT stay distinct keys
        let a = count_kmers(b"AAAAAA", 3, false).unwrap();
        let b = count_kmers(b"TTTTTT", 3, false).unwrap();
        assert_eq!(jaccard_similarity(&a, &b), 0.0);
        assert_eq!(jaccard_distance(&a, &b), 1.0);
        assert!(shared_kmers(&a, &b).is_empty());
    }

    #[test]
    fn canonical_folding_makes_opposite_strands_similar() {
        // Canonicalized, TTT is keyed as AAA
        let a = count_kmers(b"AAAAAA", 3, true).unwrap();
        let b = count_kmers(b"TTTTTT", 3, true).unwrap();
        assert!((jaccard_similarity(&a, &b) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn partial_overlap() {
        // a keys: ATG, TGC; b keys: ATG, TGA -> intersection 1, union 3
        let a = count_kmers(b"ATGC", 3, false).unwrap();
        let b = count_kmers(b"ATGA", 3, false).unwrap();
        assert!((jaccard_similarity(&a, &b) - 1.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn mismatched_k_is_neutral() {
        let a = count_kmers(b"ATGATG", 3, false).unwrap();
        let b = count_kmers(b"ATGATG", 4, false).unwrap();
        assert_eq!(jaccard_similarity(&a, &b), 0.0);
        assert_eq!(jaccard_distance(&a, &b), 1.0);
        assert!(shared_kmers(&a, &b).is_empty());
    }

    #[test]
    fn mismatched_canonicalization_is_neutral() {
        let a = count_kmers(b"ATGATG", 3, false).unwrap();
        let b = count_kmers(b"ATGATG", 3, true).unwrap();
        assert_eq!(jaccard_similarity(&a, &b), 0.0);
    }

    #[test]
    fn empty_counters_yield_zero() {
        let a = KmerCounter::new(3, false).unwrap();
        let b = KmerCounter::new(3, false).unwrap();
        assert_eq!(jaccard_similarity(&a, &b), 0.0);
    }

    #[test]
    fn shared_kmers_in_lexical_order() {
        let a = count_kmers(b"ATGCAT", 3, false).unwrap();
        let b = count_kmers(b"ATGCATGC", 3, false).unwrap();
        let shared = shared_kmers(&a, &b);
        let names: Vec<String> = shared.iter().map(|kmer| kmer.to_string()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(names.contains(&"ATG".to_string()));
    }
}
