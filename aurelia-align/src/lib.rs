//! Global DNA sequence alignment for the Aurelia toolkit.
//!
//! Provides pairwise global alignment over the four-letter nucleotide
//! alphabet, parameterized by a 4x4 substitution-weight matrix and
//! per-nucleotide gap penalties.
//!
//! # Quick start
//!
//! ```
//! use aurelia_align::{global_align, GapPenalties, Nucleotide, WeightMatrix};
//!
//! let a = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];
//! let b = [Nucleotide::A, Nucleotide::G, Nucleotide::T];
//! let weights = WeightMatrix::uniform(2.0, -1.0);
//! let gaps = GapPenalties::uniform(-2.0);
//!
//! let alignment = global_align(&a, &b, &weights, &gaps).unwrap();
//! assert_eq!(alignment.score, 4.0);
//! assert_eq!(alignment.aligned_a, "ACGT");
//! assert_eq!(alignment.aligned_b, "A-GT");
//! ```

pub mod global;
pub mod nucleotide;
pub mod scoring;
pub mod types;

pub use global::global_align;
pub use nucleotide::{Nucleotide, ALPHABET, ALPHABET_SIZE};
pub use scoring::{GapPenalties, WeightMatrix};
pub use types::{Direction, GlobalAlignment, GAP};
