//! Validated DNA sequences and k-mer analysis for the anemone ecosystem.
//!
//! Provides the sequence layer the alignment engine consumes, plus the k-mer
//! analysis engine: counting with optional strand canonicalization, spectrum
//! histograms, and set-similarity metrics.
//!
//! - **Sequences** — [`DnaSequence`] over `{A, C, G, T, N}`, validated at
//!   construction, with complement/reverse-complement and GC content
//! - **K-mer keys** — [`Kmer`], a 2-bit packed fixed-size key (no per-window
//!   heap allocation in the counting loop)
//! - **Counting** — [`KmerCounter`] via [`count_kmers`], with merge/clear,
//!   entropy, diversity, and deterministic frequency rankings
//! - **Spectrum** — [`KmerSpectrum`] occurrence-count histograms
//! - **Similarity** — [`jaccard_similarity`], [`jaccard_distance`],
//!   [`shared_kmers`]
//!
//! # Example
//!
//! ```
//! use anemone_seq::{count_kmers, DnaSequence};
//!
//! let seq = DnaSequence::new(b"atgatgatg").unwrap();
//! assert_eq!(seq.as_ref(), b"ATGATGATG");
//!
//! let counter = count_kmers(&seq, 3, false).unwrap();
//! assert_eq!(counter.get_count(b"ATG"), 3);
//! assert_eq!(counter.get_count(b"TGA"), 2);
//! ```

pub mod alphabet;
pub mod counter;
pub mod kmer;
pub mod seq;
pub mod similarity;
pub mod spectrum;

pub use alphabet::{Alphabet, DnaAlphabet};
pub use counter::{count_kmers, KmerCounter};
pub use kmer::{Kmer, MAX_K};
pub use seq::{DnaSequence, ValidatedSeq};
pub use similarity::{jaccard_distance, jaccard_similarity, shared_kmers};
pub use spectrum::KmerSpectrum;
