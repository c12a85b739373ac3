//! Substitution weights and per-nucleotide gap penalties.
//!
//! A [`WeightMatrix`] scores every (A-symbol, B-symbol) pair; it is
//! typically symmetric but nothing here assumes so — the row is always
//! the symbol from sequence A and the column the symbol from sequence B.
//! [`GapPenalties`] charges a per-symbol cost whenever that symbol is
//! aligned against a gap.

use aurelia_core::{AureliaError, Result};

use crate::nucleotide::{Nucleotide, ALPHABET_SIZE};

/// A 4x4 substitution-weight table indexed by `(Nucleotide, Nucleotide)`.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    /// Flattened row-major table; row = symbol from A, column = symbol from B.
    weights: [f64; ALPHABET_SIZE * ALPHABET_SIZE],
}

impl WeightMatrix {
    /// Build a weight matrix from parsed rows.
    ///
    /// # Errors
    ///
    /// Returns an error unless the table is exactly 4x4 (one row and one
    /// column per nucleotide in A, C, G, T order).
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        if rows.len() != ALPHABET_SIZE || rows.iter().any(|r| r.len() != ALPHABET_SIZE) {
            return Err(AureliaError::InvalidInput(format!(
                "weight matrix must be {ALPHABET_SIZE}x{ALPHABET_SIZE}, one row per nucleotide"
            )));
        }
        let mut weights = [0.0; ALPHABET_SIZE * ALPHABET_SIZE];
        for (i, row) in rows.iter().enumerate() {
            weights[i * ALPHABET_SIZE..(i + 1) * ALPHABET_SIZE].copy_from_slice(row);
        }
        Ok(Self { weights })
    }

    /// Uniform matrix: `match_weight` on the diagonal, `mismatch_weight` elsewhere.
    pub fn uniform(match_weight: f64, mismatch_weight: f64) -> Self {
        let mut weights = [mismatch_weight; ALPHABET_SIZE * ALPHABET_SIZE];
        for i in 0..ALPHABET_SIZE {
            weights[i * ALPHABET_SIZE + i] = match_weight;
        }
        Self { weights }
    }

    /// Substitution weight for aligning `a` (from sequence A) against `b`
    /// (from sequence B).
    pub fn weight(&self, a: Nucleotide, b: Nucleotide) -> f64 {
        self.weights[a.index() * ALPHABET_SIZE + b.index()]
    }
}

/// Per-nucleotide gap penalties in canonical A, C, G, T order.
#[derive(Debug, Clone, PartialEq)]
pub struct GapPenalties {
    penalties: [f64; ALPHABET_SIZE],
}

impl GapPenalties {
    /// Penalties in A, C, G, T order.
    pub fn new(penalties: [f64; ALPHABET_SIZE]) -> Self {
        Self { penalties }
    }

    /// The same penalty for every nucleotide.
    pub fn uniform(penalty: f64) -> Self {
        Self {
            penalties: [penalty; ALPHABET_SIZE],
        }
    }

    /// Cost of aligning `n` against a gap.
    pub fn penalty(&self, n: Nucleotide) -> f64 {
        self.penalties[n.index()]
    }
}
