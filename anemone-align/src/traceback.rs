//! Traceback and CIGAR encoding over a filled DP matrix.
//!
//! Walks the stored direction grid from the mode-specific start cell,
//! emitting one aligned column per step, then reverses the collected columns
//! into left-to-right aligned strings. Adjacent columns of the same edit
//! operation are run-length merged into CIGAR tokens.

use crate::matrix::{Direction, DpMatrix};
use crate::types::{AlignmentMode, AlignmentResult, CigarOp, GAP};

/// Reconstruct the alignment encoded in a filled matrix.
///
/// Global mode walks from `(m, n)` back to the origin; local mode walks from
/// the tracked maximum until it reaches a zero-score cell or a cell with no
/// predecessor. A local fill with no positive-scoring region yields the
/// empty alignment with score 0.
pub fn traceback(matrix: &DpMatrix, query: &[u8], target: &[u8]) -> AlignmentResult {
    let (start_i, start_j) = matrix.traceback_start();

    let mut aligned_query = Vec::new();
    let mut aligned_target = Vec::new();
    let mut cigar_ops: Vec<CigarOp> = Vec::new();

    let mut i = start_i;
    let mut j = start_j;

    loop {
        match matrix.mode() {
            AlignmentMode::Local => {
                if matrix.score_at(i, j) == 0 {
                    break;
                }
            }
            AlignmentMode::Global => {
                if i == 0 && j == 0 {
                    break;
                }
            }
        }

        match matrix.direction_at(i, j) {
            Direction::Diagonal => {
                let q = query[i - 1];
                let t = target[j - 1];
                aligned_query.push(q);
                aligned_target.push(t);
                let op = if q.eq_ignore_ascii_case(&t) {
                    CigarOp::Match(1)
                } else {
                    CigarOp::Mismatch(1)
                };
                push_cigar(&mut cigar_ops, op);
                i -= 1;
                j -= 1;
            }
            Direction::Up => {
                aligned_query.push(query[i - 1]);
                aligned_target.push(GAP);
                push_cigar(&mut cigar_ops, CigarOp::Deletion(1));
                i -= 1;
            }
            Direction::Left => {
                aligned_query.push(GAP);
                aligned_target.push(target[j - 1]);
                push_cigar(&mut cigar_ops, CigarOp::Insertion(1));
                j -= 1;
            }
            Direction::None => break,
        }
    }

    // Collected right-to-left; flip into reading order
    aligned_query.reverse();
    aligned_target.reverse();
    cigar_ops.reverse();

    AlignmentResult {
        score: matrix.score(),
        aligned_query,
        aligned_target,
        query_start: i,
        query_end: start_i,
        target_start: j,
        target_end: start_j,
        cigar: cigar_ops,
    }
}

/// Merge a new 1-length CIGAR op with the last op if they are the same variant.
fn push_cigar(ops: &mut Vec<CigarOp>, op: CigarOp) {
    if let Some(last) = ops.last_mut() {
        match (last, &op) {
            (CigarOp::Match(ref mut n), CigarOp::Match(1)) => {
                *n += 1;
                return;
            }
            (CigarOp::Mismatch(ref mut n), CigarOp::Mismatch(1)) => {
                *n += 1;
                return;
            }
            (CigarOp::Insertion(ref mut n), CigarOp::Insertion(1)) => {
                *n += 1;
                return;
            }
            (CigarOp::Deletion(ref mut n), CigarOp::Deletion(1)) => {
                *n += 1;
                return;
            }
            _ => {}
        }
    }
    ops.push(op);
}
