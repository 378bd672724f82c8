//! Test fixtures and data generators

use anyhow::Context;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use tempfile::NamedTempFile;

pub const DNA_ALPHABET: &[u8] = b"ACGT";
pub const PROTEIN_ALPHABET: &[u8] = b"ARNDCQEGHILKMFPSTWYV";

/// A three-symbol matrix with a wildcard row and column.
pub const SMALL_MATRIX: &str = "\
# toy matrix
   A  C  *
A  4 -2 -1
C -2  5 -1
* -1 -1  1
";

/// Random sequence over `alphabet`, deterministic for a given `seed`.
pub fn generate_sequence(length: usize, alphabet: &[u8], seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

/// Copy of `sequence` with roughly `rate` of its positions substituted by a
/// different symbol of `alphabet`.
pub fn mutate(sequence: &[u8], alphabet: &[u8], rate: f64, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    sequence
        .iter()
        .map(|&symbol| {
            if alphabet.len() < 2 || !rng.gen_bool(rate.clamp(0.0, 1.0)) {
                return symbol;
            }
            let mut replacement = alphabet[rng.gen_range(0..alphabet.len())];
            while replacement == symbol {
                replacement = alphabet[rng.gen_range(0..alphabet.len())];
            }
            replacement
        })
        .collect()
}

/// A DNA reference and a mutated copy of it.
pub fn generate_similar_pair(length: usize, similarity: f64) -> (Vec<u8>, Vec<u8>) {
    let reference = generate_sequence(length, DNA_ALPHABET, 42);
    let variant = mutate(&reference, DNA_ALPHABET, 1.0 - similarity, 43);
    (reference, variant)
}

/// Write matrix text to a temporary file that lives as long as the handle.
pub fn write_matrix_file(contents: &str) -> anyhow::Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("creating matrix file")?;
    file.write_all(contents.as_bytes())
        .context("writing matrix file")?;
    file.flush()?;
    Ok(file)
}
