pub mod matrix;
pub mod nw_aligner;
pub mod result;
pub mod scoring;
pub mod sw_aligner;
pub mod traceback;

pub use matrix::{SubstitutionMatrix, BUILTIN_MATRICES, WILDCARD};
pub use nw_aligner::{align_global, align_global_with, NeedlemanWunsch};
pub use result::{Alignment, Delta, GAP};
pub use scoring::{ConstantScoring, MatrixScoring, Scoring, ScoringModel};
pub use sw_aligner::{align_local, align_local_with, LocalAligner, ScoringMode, SmithWaterman};
