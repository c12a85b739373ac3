//! Core types for global alignment results.

use core::fmt;

/// Gap marker used in aligned output.
pub const GAP: char = '-';

/// Which predecessor produced a DP cell's optimal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// From the cell above — consumes a symbol of A against a gap in B.
    Up,
    /// From the diagonal — consumes a symbol of both sequences.
    Diagonal,
    /// From the cell to the left — consumes a symbol of B against a gap in A.
    Left,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "up",
            Direction::Diagonal => "diagonal",
            Direction::Left => "left",
        };
        write!(f, "{s}")
    }
}

/// The result of one global alignment run.
///
/// The two aligned strings have equal length and are drawn from the
/// alphabet extended with the gap marker `-`.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalAlignment {
    /// Optimal cumulative score at the bottom-right DP corner.
    pub score: f64,
    /// Sequence A with gap markers inserted.
    pub aligned_a: String,
    /// Sequence B with gap markers inserted.
    pub aligned_b: String,
}

impl GlobalAlignment {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.aligned_a.len()
    }

    /// Whether the alignment has no columns (both inputs were empty).
    pub fn is_empty(&self) -> bool {
        self.aligned_a.is_empty()
    }

    /// Number of columns where both sequences carry the same nucleotide.
    pub fn matches(&self) -> usize {
        self.aligned_a
            .chars()
            .zip(self.aligned_b.chars())
            .filter(|&(a, b)| a == b && a != GAP)
            .count()
    }

    /// Total number of gap columns across both sequences.
    pub fn gaps(&self) -> usize {
        self.aligned_a
            .chars()
            .chain(self.aligned_b.chars())
            .filter(|&c| c == GAP)
            .count()
    }

    /// Fraction of columns that are exact matches, in `[0.0, 1.0]`.
    ///
    /// Returns 0.0 for an empty alignment.
    pub fn identity(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.matches() as f64 / self.len() as f64
    }

    /// Aligned A with gap markers removed — reproduces the input sequence.
    pub fn degapped_a(&self) -> String {
        self.aligned_a.chars().filter(|&c| c != GAP).collect()
    }

    /// Aligned B with gap markers removed — reproduces the input sequence.
    pub fn degapped_b(&self) -> String {
        self.aligned_b.chars().filter(|&c| c != GAP).collect()
    }
}
