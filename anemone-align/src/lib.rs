//! Exact pairwise sequence alignment for the anemone ecosystem.
//!
//! Provides local (Smith-Waterman) and global (Needleman-Wunsch) dynamic
//! programming alignment with deterministic traceback, compact CIGAR
//! encoding, derived alignment statistics, and unit-cost edit distance.
//!
//! # Quick start
//!
//! ```
//! use anemone_align::{align, AlignmentMode, ScoringMatrix};
//!
//! let scoring = ScoringMatrix::dna_default();
//! let result = align(b"ACGT", b"ACGT", &scoring, AlignmentMode::Global).unwrap();
//! assert_eq!(result.score, 8);
//! assert_eq!(result.cigar_string(), "4=");
//! ```
//!
//! When only the numeric score is needed, [`alignment_score`] runs the same
//! recurrence in `O(n)` space without materializing a traceback matrix.

pub mod distance;
pub mod matrix;
pub mod scoring;
pub mod traceback;
pub mod types;

pub use distance::edit_distance;
pub use matrix::{score_only, Direction, DpMatrix};
pub use scoring::ScoringMatrix;
pub use traceback::traceback;
pub use types::{AlignmentMode, AlignmentResult, CigarOp, GAP};

use anemone_core::Result;

/// Align two sequences and reconstruct the full alignment.
///
/// Fills the dense score/direction matrix and runs traceback. Dispatches on
/// [`AlignmentMode::Local`] (Smith-Waterman) or [`AlignmentMode::Global`]
/// (Needleman-Wunsch).
///
/// # Errors
///
/// Returns an error if either sequence is empty.
pub fn align(
    query: &[u8],
    target: &[u8],
    scoring: &ScoringMatrix,
    mode: AlignmentMode,
) -> Result<AlignmentResult> {
    let matrix = DpMatrix::fill(query, target, scoring, mode)?;
    Ok(traceback::traceback(&matrix, query, target))
}

/// Compute just the alignment score in `O(n)` space.
///
/// The space-reduced companion to [`align`] for score-only queries; see
/// [`score_only`].
///
/// # Errors
///
/// Returns an error if either sequence is empty.
pub fn alignment_score(
    query: &[u8],
    target: &[u8],
    scoring: &ScoringMatrix,
    mode: AlignmentMode,
) -> Result<i32> {
    matrix::score_only(query, target, scoring, mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scoring() -> ScoringMatrix {
        ScoringMatrix::dna_default()
    }

    #[test]
    fn self_alignment_is_perfect_identity() {
        for seq in [&b"ACGT"[..], b"A", b"GATTACAGATTACA", b"CCCCGGGG"] {
            let result = align(seq, seq, &scoring(), AlignmentMode::Local).unwrap();
            assert!((result.identity() - 1.0).abs() < f64::EPSILON);
            assert_eq!(result.mismatches(), 0);
            assert_eq!(result.gaps(), 0);
        }
    }

    #[test]
    fn local_score_is_never_negative() {
        let score = alignment_score(b"AAAA", b"TTTT", &scoring(), AlignmentMode::Local).unwrap();
        assert_eq!(score, 0);
        let result = align(b"AAAA", b"TTTT", &scoring(), AlignmentMode::Local).unwrap();
        assert!(result.score >= 0);
    }

    #[test]
    fn global_identical_has_no_gaps() {
        let result = align(b"ACGTACGT", b"ACGTACGT", &scoring(), AlignmentMode::Global).unwrap();
        assert_eq!(result.gaps(), 0);
        assert_eq!(result.score, 16);
    }

    #[test]
    fn score_paths_agree() {
        let q = b"AGTACGCATTACG";
        let t = b"TATGCAAGGCA";
        for mode in [AlignmentMode::Global, AlignmentMode::Local] {
            let full = align(q, t, &scoring(), mode).unwrap();
            let reduced = alignment_score(q, t, &scoring(), mode).unwrap();
            assert_eq!(full.score, reduced);
        }
    }

    #[test]
    fn end_to_end_local_scenario() {
        let query = b"AGTACGCA";
        let target = b"TATGC";
        let result = align(query, target, &scoring(), AlignmentMode::Local).unwrap();
        assert!(result.score > 0);
        assert_eq!(result.aligned_query.len(), result.aligned_target.len());
        assert_eq!(result.length(), result.aligned_query.len());
        assert!(result.query_coverage(query.len()) > 0.0);
        assert!(result.target_coverage(target.len()) > 0.0);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(align(b"", b"ACGT", &scoring(), AlignmentMode::Global).is_err());
        assert!(alignment_score(b"ACGT", b"", &scoring(), AlignmentMode::Local).is_err());
    }

    #[test]
    fn edit_distance_properties() {
        assert_eq!(edit_distance(b"GATTACA", b"GATTACA"), 0);
        assert_eq!(edit_distance(b"ACGT", b"ACT"), 1);
        assert_eq!(edit_distance(b"", b"ACGT"), 4);
    }
}
