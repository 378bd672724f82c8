//! Test utilities for the seqpair workspace
//!
//! Shared fixtures, sequence generators and alignment assertions used by the
//! integration tests and benchmarks of the other crates.

pub mod assertions;
pub mod fixtures;

// Re-export commonly used items
pub use assertions::{assert_alignment_shape, assert_local_alignment_shape};
pub use fixtures::{
    generate_sequence, generate_similar_pair, mutate, write_matrix_file, PROTEIN_ALPHABET,
    DNA_ALPHABET, SMALL_MATRIX,
};

// Re-export test dependencies for convenience
pub use anyhow::{Context, Result};
pub use tempfile;

/// Initialize test logging (call once per test module)
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
