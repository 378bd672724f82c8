//! Substitution matrices and their whitespace-delimited text format.
//!
//! The format is the one NCBI ships its BLOSUM/PAM tables in:
//!
//! ```text
//! # comment lines come first
//!    A  R  N  *
//! A  4 -1 -2 -4
//! R -1  5  0 -4
//! N -2  0  6 -4
//! * -4 -4 -4  1
//! ```
//!
//! The header lists one single-character label per column. Every following
//! line is a row label and one integer per column, in header order. Scores are
//! stored under the key `column + row`.

use seqpair_core::{SeqpairError, SeqpairResult};
use std::collections::HashMap;
use std::path::Path;

/// Symbol that matches any residue in either position of a pair key.
pub const WILDCARD: u8 = b'*';

const BLOSUM45_SOURCE: &str = include_str!("../../matrices/BLOSUM45");
const BLOSUM62_SOURCE: &str = include_str!("../../matrices/BLOSUM62");

/// Names accepted by [`SubstitutionMatrix::builtin`].
pub const BUILTIN_MATRICES: &[&str] = &["BLOSUM45", "BLOSUM62"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionMatrix {
    columns: Vec<u8>,
    scores: HashMap<[u8; 2], i32>,
}

impl SubstitutionMatrix {
    /// Build a matrix directly from pair scores keyed by `[first, second]`.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = ([u8; 2], i32)>,
    {
        let scores: HashMap<[u8; 2], i32> = pairs.into_iter().collect();
        let mut columns: Vec<u8> = scores.keys().map(|key| key[0]).collect();
        columns.sort_unstable();
        columns.dedup();
        Self { columns, scores }
    }

    /// Parse the text format. Any bad score token aborts the whole load.
    pub fn parse(source: &str) -> SeqpairResult<Self> {
        let mut lines = source
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line))
            .filter(|(_, line)| !line.trim().is_empty());

        let (header_line, header) = lines
            .by_ref()
            .find(|(_, line)| !line.trim_start().starts_with('#'))
            .ok_or_else(|| {
                SeqpairError::malformed_matrix(
                    source.lines().count().max(1),
                    None,
                    "missing column header",
                )
            })?;

        let labels: Vec<char> = header.chars().filter(|c| !c.is_whitespace()).collect();
        if labels.iter().any(|c| !c.is_ascii()) {
            return Err(SeqpairError::malformed_matrix(
                header_line,
                None,
                "column labels must be ASCII symbols",
            ));
        }
        let columns: Vec<u8> = labels.into_iter().map(|c| c as u8).collect();

        let mut scores = HashMap::with_capacity(columns.len() * columns.len());

        for (line_no, line) in lines {
            let line = line.trim_start();
            let mut chars = line.chars();
            let row = match chars.next() {
                Some(label) if label.is_ascii() => label,
                Some(label) => {
                    return Err(SeqpairError::malformed_matrix(
                        line_no,
                        Some(label),
                        "row label must be an ASCII symbol",
                    ))
                }
                None => continue,
            };

            // split_whitespace never yields the empty tokens repeated
            // delimiters would otherwise produce
            let values = chars
                .as_str()
                .split_whitespace()
                .map(|token| {
                    token.parse::<i32>().map_err(|_| {
                        SeqpairError::malformed_matrix(
                            line_no,
                            Some(row),
                            format!("invalid score '{}'", token),
                        )
                    })
                })
                .collect::<SeqpairResult<Vec<i32>>>()?;

            if values.len() != columns.len() {
                return Err(SeqpairError::malformed_matrix(
                    line_no,
                    Some(row),
                    format!(
                        "expected {} scores, found {}",
                        columns.len(),
                        values.len()
                    ),
                ));
            }

            for (&column, value) in columns.iter().zip(values) {
                scores.insert([column, row as u8], value);
            }
        }

        tracing::debug!(
            columns = columns.len(),
            entries = scores.len(),
            "parsed substitution matrix"
        );

        Ok(Self { columns, scores })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> SeqpairResult<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading substitution matrix");
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// One of the embedded tables listed in [`BUILTIN_MATRICES`].
    pub fn builtin(name: &str) -> SeqpairResult<Self> {
        match name.to_ascii_uppercase().as_str() {
            "BLOSUM45" => Self::parse(BLOSUM45_SOURCE),
            "BLOSUM62" => Self::parse(BLOSUM62_SOURCE),
            _ => Err(SeqpairError::Configuration(format!(
                "Unknown built-in matrix '{}' (available: {})",
                name,
                BUILTIN_MATRICES.join(", ")
            ))),
        }
    }

    /// A built-in name, or else a path to a matrix file.
    pub fn resolve(name_or_path: &str) -> SeqpairResult<Self> {
        if BUILTIN_MATRICES
            .iter()
            .any(|builtin| builtin.eq_ignore_ascii_case(name_or_path))
        {
            Self::builtin(name_or_path)
        } else {
            Self::load(name_or_path)
        }
    }

    /// Exact entry for the pair, without wildcard resolution.
    pub fn get(&self, a: u8, b: u8) -> Option<i32> {
        self.scores.get(&[a, b]).copied()
    }

    /// Resolve a pair score, trying `ab`, then `*b`, then `a*`, then `**`.
    pub fn lookup(&self, a: u8, b: u8) -> Option<i32> {
        self.get(a, b)
            .or_else(|| self.get(WILDCARD, b))
            .or_else(|| self.get(a, WILDCARD))
            .or_else(|| self.get(WILDCARD, WILDCARD))
    }

    pub fn columns(&self) -> &[u8] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
