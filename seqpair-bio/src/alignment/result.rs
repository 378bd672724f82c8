use serde::Serialize;
use std::fmt;

/// Symbol inserted opposite a residue that has no partner.
pub const GAP: u8 = b'-';

/// A pair of equal-length, gap-padded sequences and the score of the path
/// that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alignment {
    pub score: i32,
    #[serde(serialize_with = "as_text")]
    pub aligned_a: Vec<u8>,
    #[serde(serialize_with = "as_text")]
    pub aligned_b: Vec<u8>,
}

/// A substitution between the two aligned sequences
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Delta {
    /// Offset in the ungapped sequence A
    pub position: usize,
    pub a: u8,
    pub b: u8,
}

impl Alignment {
    pub fn new(score: i32, aligned_a: Vec<u8>, aligned_b: Vec<u8>) -> Self {
        debug_assert_eq!(aligned_a.len(), aligned_b.len());
        Self {
            score,
            aligned_a,
            aligned_b,
        }
    }

    pub fn empty() -> Self {
        Self::new(0, Vec::new(), Vec::new())
    }

    /// Number of alignment columns
    pub fn len(&self) -> usize {
        self.aligned_a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_a.is_empty()
    }

    pub fn aligned_a_str(&self) -> String {
        String::from_utf8_lossy(&self.aligned_a).into_owned()
    }

    pub fn aligned_b_str(&self) -> String {
        String::from_utf8_lossy(&self.aligned_b).into_owned()
    }

    /// '|' for match, 'X' for mismatch, ' ' for gap
    pub fn midline(&self) -> Vec<u8> {
        self.columns()
            .map(|(a, b)| {
                if a == GAP || b == GAP {
                    b' '
                } else if a == b {
                    b'|'
                } else {
                    b'X'
                }
            })
            .collect()
    }

    /// Fraction of columns holding identical residues (0.0 for an empty alignment).
    pub fn identity(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let matches = self.columns().filter(|&(a, b)| a == b && a != GAP).count();
        matches as f64 / self.len() as f64
    }

    pub fn gaps(&self) -> usize {
        self.columns().filter(|&(a, b)| a == GAP || b == GAP).count()
    }

    pub fn deltas(&self) -> Vec<Delta> {
        let mut deltas = Vec::new();
        let mut position = 0;

        for (a, b) in self.columns() {
            if a != GAP {
                if b != GAP && a != b {
                    deltas.push(Delta { position, a, b });
                }
                position += 1;
            }
        }

        deltas
    }

    fn columns(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.aligned_a
            .iter()
            .copied()
            .zip(self.aligned_b.iter().copied())
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.aligned_a_str())?;
        writeln!(f, "{}", String::from_utf8_lossy(&self.midline()))?;
        write!(f, "{}", self.aligned_b_str())
    }
}

pub(crate) fn as_text<S: serde::Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(bytes))
}
