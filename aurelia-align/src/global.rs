//! Global pairwise alignment with a substitution-weight matrix and
//! per-nucleotide gap penalties.
//!
//! Classic two-matrix dynamic programming: a score matrix holds the best
//! cumulative score for every prefix pair, a trace matrix records which
//! predecessor produced each cell, and a backtrace from the bottom-right
//! corner reconstructs the aligned pair. Aligning a prefix entirely
//! against gaps costs the cumulative sum of that prefix's own per-symbol
//! gap penalties, not a flat per-position cost.

use aurelia_core::{AureliaError, Result};

use crate::nucleotide::Nucleotide;
use crate::scoring::{GapPenalties, WeightMatrix};
use crate::types::{Direction, GlobalAlignment, GAP};

/// Compute the optimal global alignment of `a` against `b`.
///
/// Deterministic for fixed inputs; ties between predecessors are broken
/// with strict Up > Diagonal > Left priority.
///
/// # Errors
///
/// Returns [`AureliaError::Internal`] if the trace matrix directs the
/// backtrace out of bounds. This cannot happen for matrices built here;
/// it indicates a bug, not a user-input problem.
pub fn global_align(
    a: &[Nucleotide],
    b: &[Nucleotide],
    weights: &WeightMatrix,
    gaps: &GapPenalties,
) -> Result<GlobalAlignment> {
    let rows = a.len() + 1;
    let cols = b.len() + 1;
    let idx = |i: usize, j: usize| -> usize { i * cols + j };

    let mut score = vec![0.0_f64; rows * cols];
    let mut trace = vec![Direction::Diagonal; rows * cols];

    // Base cases: a prefix aligned entirely against gaps accumulates its
    // own per-symbol gap penalties.
    for i in 1..rows {
        score[idx(i, 0)] = score[idx(i - 1, 0)] + gaps.penalty(a[i - 1]);
        trace[idx(i, 0)] = Direction::Up;
    }
    for j in 1..cols {
        score[idx(0, j)] = score[idx(0, j - 1)] + gaps.penalty(b[j - 1]);
        trace[idx(0, j)] = Direction::Left;
    }

    // Fill
    for i in 1..rows {
        for j in 1..cols {
            let up = score[idx(i - 1, j)] + gaps.penalty(a[i - 1]);
            let diagonal = score[idx(i - 1, j - 1)] + weights.weight(a[i - 1], b[j - 1]);
            let left = score[idx(i, j - 1)] + gaps.penalty(b[j - 1]);

            let (dir, best) = choose(up, diagonal, left);
            trace[idx(i, j)] = dir;
            score[idx(i, j)] = best;
        }
    }

    let optimal = score[idx(a.len(), b.len())];
    log::debug!("filled {rows}x{cols} matrix, corner score {optimal}");

    // Backtrace from the bottom-right corner, accumulating into growable
    // buffers and reversing once.
    let mut aligned_a: Vec<char> = Vec::with_capacity(a.len() + b.len());
    let mut aligned_b: Vec<char> = Vec::with_capacity(a.len() + b.len());
    let mut i = a.len();
    let mut j = b.len();

    while i + j != 0 {
        match trace[idx(i, j)] {
            Direction::Up if i > 0 => {
                aligned_a.push(a[i - 1].to_char());
                aligned_b.push(GAP);
                i -= 1;
            }
            Direction::Diagonal if i > 0 && j > 0 => {
                aligned_a.push(a[i - 1].to_char());
                aligned_b.push(b[j - 1].to_char());
                i -= 1;
                j -= 1;
            }
            Direction::Left if j > 0 => {
                aligned_a.push(GAP);
                aligned_b.push(b[j - 1].to_char());
                j -= 1;
            }
            dir => {
                return Err(AureliaError::Internal(format!(
                    "trace matrix points {dir} out of bounds at ({i}, {j})"
                )));
            }
        }
    }

    aligned_a.reverse();
    aligned_b.reverse();

    Ok(GlobalAlignment {
        score: optimal,
        aligned_a: aligned_a.into_iter().collect(),
        aligned_b: aligned_b.into_iter().collect(),
    })
}

/// Pick the winning predecessor. On exact ties Up beats Diagonal beats Left.
fn choose(up: f64, diagonal: f64, left: f64) -> (Direction, f64) {
    if up >= diagonal && up >= left {
        (Direction::Up, up)
    } else if diagonal >= up && diagonal >= left {
        (Direction::Diagonal, diagonal)
    } else {
        (Direction::Left, left)
    }
}
