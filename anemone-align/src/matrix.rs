//! Dynamic-programming matrix fill for pairwise alignment.
//!
//! Two operations share the recurrence:
//!
//! - [`DpMatrix::fill`] materializes the full score and direction grids and
//!   is the input to traceback.
//! - [`score_only`] keeps two live rows (`O(n)` space) and returns just the
//!   numeric score; it cannot produce a traceback by construction.
//!
//! Tie-breaking is fixed: Diagonal over Up over Left over None. This
//! determines which of several equally-optimal alignments traceback
//! reconstructs, so it is part of the contract, not an implementation
//! detail.

use crate::scoring::ScoringMatrix;
use crate::types::AlignmentMode;
use anemone_core::{AnemoneError, Result};

/// Direction of the best-scoring predecessor of a DP cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// No predecessor (matrix origin, or a local-mode reset to zero).
    None,
    /// From `(i-1, j-1)`: a match or mismatch column.
    Diagonal,
    /// From `(i-1, j)`: a gap in the target, consuming the query.
    Up,
    /// From `(i, j-1)`: a gap in the query, consuming the target.
    Left,
}

/// A filled `(m+1) x (n+1)` score/direction grid for one alignment call.
///
/// Owned by a single invocation: filled once, consumed by traceback,
/// then discarded.
#[derive(Debug)]
pub struct DpMatrix {
    cols: usize,
    scores: Vec<i32>,
    directions: Vec<Direction>,
    mode: AlignmentMode,
    start: (usize, usize),
}

impl DpMatrix {
    /// Fill the matrix for `query` (rows) against `target` (columns).
    ///
    /// Global mode initializes the first row and column with affine gap
    /// penalties; local mode initializes them to zero and clamps every cell
    /// at zero while tracking the highest-scoring cell (first occurrence
    /// wins ties) as the traceback start.
    ///
    /// # Errors
    ///
    /// Returns an error if either sequence is empty.
    pub fn fill(
        query: &[u8],
        target: &[u8],
        scoring: &ScoringMatrix,
        mode: AlignmentMode,
    ) -> Result<DpMatrix> {
        let m = query.len();
        let n = target.len();

        if m == 0 || n == 0 {
            return Err(AnemoneError::InvalidInput(
                "sequences must not be empty".into(),
            ));
        }

        let rows = m + 1;
        let cols = n + 1;

        let mut scores = vec![0i32; rows * cols];
        let mut directions = vec![Direction::None; rows * cols];

        let idx = |i: usize, j: usize| -> usize { i * cols + j };

        if mode == AlignmentMode::Global {
            for i in 1..rows {
                scores[idx(i, 0)] = scoring.gap_penalty(i);
                directions[idx(i, 0)] = Direction::Up;
            }
            for j in 1..cols {
                scores[idx(0, j)] = scoring.gap_penalty(j);
                directions[idx(0, j)] = Direction::Left;
            }
        }

        let gap = scoring.gap_penalty(1);

        let mut max_score = 0i32;
        let mut max_cell = (0usize, 0usize);

        for i in 1..rows {
            for j in 1..cols {
                let diag =
                    scores[idx(i - 1, j - 1)] + scoring.score_pair(query[i - 1], target[j - 1]);
                let up = scores[idx(i - 1, j)] + gap;
                let left = scores[idx(i, j - 1)] + gap;

                let mut best = diag.max(up).max(left);
                if mode == AlignmentMode::Local && best < 0 {
                    best = 0;
                }

                // Fixed tie-break: Diagonal over Up over Left over None
                let dir = if diag == best {
                    Direction::Diagonal
                } else if up == best {
                    Direction::Up
                } else if left == best {
                    Direction::Left
                } else {
                    Direction::None
                };

                scores[idx(i, j)] = best;
                directions[idx(i, j)] = dir;

                if mode == AlignmentMode::Local && best > max_score {
                    max_score = best;
                    max_cell = (i, j);
                }
            }
        }

        let start = match mode {
            AlignmentMode::Local => max_cell,
            AlignmentMode::Global => (m, n),
        };

        Ok(DpMatrix {
            cols,
            scores,
            directions,
            mode,
            start,
        })
    }

    /// Score at a cell.
    pub fn score_at(&self, i: usize, j: usize) -> i32 {
        self.scores[i * self.cols + j]
    }

    /// Direction stored at a cell.
    pub fn direction_at(&self, i: usize, j: usize) -> Direction {
        self.directions[i * self.cols + j]
    }

    /// The mode this matrix was filled for.
    pub fn mode(&self) -> AlignmentMode {
        self.mode
    }

    /// The cell traceback starts from: `(m, n)` for global, the tracked
    /// maximum for local.
    pub fn traceback_start(&self) -> (usize, usize) {
        self.start
    }

    /// The alignment score: the value at the traceback start cell.
    pub fn score(&self) -> i32 {
        self.score_at(self.start.0, self.start.1)
    }
}

/// Compute just the alignment score using two live rows.
///
/// The space-reduced variant for score-only queries: same recurrence as
/// [`DpMatrix::fill`], but no direction grid is kept, so no traceback is
/// possible. Local mode returns the running maximum (always >= 0).
///
/// # Errors
///
/// Returns an error if either sequence is empty.
pub fn score_only(
    query: &[u8],
    target: &[u8],
    scoring: &ScoringMatrix,
    mode: AlignmentMode,
) -> Result<i32> {
    let m = query.len();
    let n = target.len();

    if m == 0 || n == 0 {
        return Err(AnemoneError::InvalidInput(
            "sequences must not be empty".into(),
        ));
    }

    let mut prev = vec![0i32; n + 1];
    let mut curr = vec![0i32; n + 1];

    if mode == AlignmentMode::Global {
        for (j, cell) in prev.iter_mut().enumerate() {
            *cell = scoring.gap_penalty(j);
        }
    }

    let gap = scoring.gap_penalty(1);
    let mut max_score = 0i32;

    for i in 1..=m {
        curr[0] = match mode {
            AlignmentMode::Global => scoring.gap_penalty(i),
            AlignmentMode::Local => 0,
        };
        for j in 1..=n {
            let diag = prev[j - 1] + scoring.score_pair(query[i - 1], target[j - 1]);
            let up = prev[j] + gap;
            let left = curr[j - 1] + gap;

            let mut best = diag.max(up).max(left);
            if mode == AlignmentMode::Local {
                if best < 0 {
                    best = 0;
                }
                if best > max_score {
                    max_score = best;
                }
            }
            curr[j] = best;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    // After the final swap, `prev` holds the last filled row
    Ok(match mode {
        AlignmentMode::Local => max_score,
        AlignmentMode::Global => prev[n],
    })
}
