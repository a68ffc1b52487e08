//! Scoring model for pairwise DNA alignment.
//!
//! A [`ScoringMatrix`] is a pure value: four integers fixed at construction
//! and shared read-only by every alignment call. The ambiguous base N is
//! scored as neutral (0) against anything — it is never rewarded as a match
//! nor punished as a mismatch.

use anemone_core::{AnemoneError, Result};

/// Match/mismatch scoring with affine gap penalties.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoringMatrix {
    pub match_score: i32,
    pub mismatch_score: i32,
    pub gap_open: i32,
    pub gap_extend: i32,
}

impl ScoringMatrix {
    /// Create a new scoring matrix.
    ///
    /// A constant-gap model is expressed by setting `gap_extend` equal to
    /// `gap_open`.
    ///
    /// # Errors
    ///
    /// Returns an error if `match_score` is not positive, or if
    /// `mismatch_score`, `gap_open`, or `gap_extend` is positive.
    pub fn new(
        match_score: i32,
        mismatch_score: i32,
        gap_open: i32,
        gap_extend: i32,
    ) -> Result<Self> {
        if match_score <= 0 {
            return Err(AnemoneError::InvalidInput(
                "match_score must be positive".into(),
            ));
        }
        if mismatch_score > 0 {
            return Err(AnemoneError::InvalidInput(
                "mismatch_score must be zero or negative".into(),
            ));
        }
        if gap_open > 0 {
            return Err(AnemoneError::InvalidInput(
                "gap_open must be zero or negative".into(),
            ));
        }
        if gap_extend > 0 {
            return Err(AnemoneError::InvalidInput(
                "gap_extend must be zero or negative".into(),
            ));
        }
        Ok(Self {
            match_score,
            mismatch_score,
            gap_open,
            gap_extend,
        })
    }

    /// Default scoring for DNA alignment: +2 match, -1 mismatch, -5 gap open, -2 gap extend.
    pub fn dna_default() -> Self {
        Self {
            match_score: 2,
            mismatch_score: -1,
            gap_open: -5,
            gap_extend: -2,
        }
    }

    /// Score a pair of bases. Case-insensitive.
    ///
    /// Returns 0 if either base is the ambiguous symbol N; the match score
    /// if the bases are equal; the mismatch penalty otherwise.
    pub fn score_pair(&self, a: u8, b: u8) -> i32 {
        let a = a.to_ascii_uppercase();
        let b = b.to_ascii_uppercase();
        if a == b'N' || b == b'N' {
            0
        } else if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    /// Penalty for a gap of `len` consecutive columns.
    ///
    /// `gap_open + (len - 1) * gap_extend` for `len >= 1`, and 0 for
    /// `len == 0`.
    pub fn gap_penalty(&self, len: usize) -> i32 {
        if len == 0 {
            return 0;
        }
        self.gap_open + (len as i32 - 1) * self.gap_extend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dna_default_values() {
        let m = ScoringMatrix::dna_default();
        assert_eq!(m.match_score, 2);
        assert_eq!(m.mismatch_score, -1);
        assert_eq!(m.gap_open, -5);
        assert_eq!(m.gap_extend, -2);
    }

    #[test]
    fn score_pair_case_insensitive() {
        let m = ScoringMatrix::dna_default();
        assert_eq!(m.score_pair(b'A', b'A'), 2);
        assert_eq!(m.score_pair(b'a', b'A'), 2);
        assert_eq!(m.score_pair(b'A', b'T'), -1);
    }

    #[test]
    fn n_is_neutral() {
        let m = ScoringMatrix::dna_default();
        assert_eq!(m.score_pair(b'N', b'A'), 0);
        assert_eq!(m.score_pair(b'A', b'N'), 0);
        // Even N against N is neutral, not a match
        assert_eq!(m.score_pair(b'N', b'N'), 0);
    }

    #[test]
    fn gap_penalty_affine() {
        let m = ScoringMatrix::dna_default();
        assert_eq!(m.gap_penalty(0), 0);
        assert_eq!(m.gap_penalty(1), -5);
        assert_eq!(m.gap_penalty(2), -7);
        assert_eq!(m.gap_penalty(4), -11);
    }

    #[test]
    fn constant_gap_model() {
        let m = ScoringMatrix::new(1, -1, -2, -2).unwrap();
        assert_eq!(m.gap_penalty(1), -2);
        assert_eq!(m.gap_penalty(3), -6);
    }

    #[test]
    fn validation() {
        assert!(ScoringMatrix::new(0, -1, -5, -2).is_err());
        assert!(ScoringMatrix::new(2, 1, -5, -2).is_err());
        assert!(ScoringMatrix::new(2, -1, 1, -2).is_err());
        assert!(ScoringMatrix::new(2, -1, -5, 1).is_err());
        assert!(ScoringMatrix::new(2, -1, -5, -2).is_ok());
        // Zero penalties are allowed (non-positive)
        assert!(ScoringMatrix::new(2, 0, 0, 0).is_ok());
    }
}
