//! The four-letter DNA alphabet.

use core::fmt;

/// Number of symbols in the alphabet.
pub const ALPHABET_SIZE: usize = 4;

/// A DNA nucleotide.
///
/// The discriminant is the symbol's fixed index into weight-matrix rows
/// and columns and into the gap-penalty vector (A=0, C=1, G=2, T=3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nucleotide {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

/// All nucleotides in canonical index order.
pub const ALPHABET: [Nucleotide; ALPHABET_SIZE] = [
    Nucleotide::A,
    Nucleotide::C,
    Nucleotide::G,
    Nucleotide::T,
];

impl Nucleotide {
    /// 0-based index used for weight-matrix and gap-penalty lookups.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Map a character to a nucleotide. Case-insensitive.
    ///
    /// Returns `None` for characters outside the alphabet; callers decide
    /// how unknown symbols are handled.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Nucleotide::A),
            'C' => Some(Nucleotide::C),
            'G' => Some(Nucleotide::G),
            'T' => Some(Nucleotide::T),
            _ => None,
        }
    }

    /// Upper-case character form.
    pub fn to_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
        }
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_canonical() {
        assert_eq!(Nucleotide::A.index(), 0);
        assert_eq!(Nucleotide::C.index(), 1);
        assert_eq!(Nucleotide::G.index(), 2);
        assert_eq!(Nucleotide::T.index(), 3);
    }

    #[test]
    fn from_char_case_insensitive() {
        assert_eq!(Nucleotide::from_char('a'), Some(Nucleotide::A));
        assert_eq!(Nucleotide::from_char('T'), Some(Nucleotide::T));
    }

    #[test]
    fn from_char_rejects_unknown_symbols() {
        assert_eq!(Nucleotide::from_char('N'), None);
        assert_eq!(Nucleotide::from_char('X'), None);
        assert_eq!(Nucleotide::from_char('-'), None);
    }

    #[test]
    fn char_round_trip() {
        for n in ALPHABET {
            assert_eq!(Nucleotide::from_char(n.to_char()), Some(n));
        }
    }
}
