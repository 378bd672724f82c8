//! Pairwise sequence alignment and seed-and-extend search for seqpair

pub mod alignment;
pub mod seed;

// Re-export commonly used types
pub use alignment::{
    align_global, align_local, Alignment, ConstantScoring, LocalAligner, MatrixScoring,
    NeedlemanWunsch, Scoring, ScoringMode, SmithWaterman, SubstitutionMatrix,
};
pub use seed::{find_seeds, seed_and_extend, seed_and_extend_with, Extension, Seed};
