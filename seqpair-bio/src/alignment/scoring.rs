/// Scoring models for pairwise alignment
use crate::alignment::matrix::SubstitutionMatrix;
use serde::Serialize;
use std::sync::Arc;

/// Resolves the score of aligning two symbols and the cost of a gap.
///
/// Implementations are immutable once built so they can be shared by the
/// concurrent extension tasks of the seed-and-extend engine.
pub trait Scoring: Send + Sync {
    fn score(&self, a: u8, b: u8) -> i32;
    /// Score added for every gap symbol (normally negative).
    fn gap(&self) -> i32;
}

/// Fixed match/mismatch/gap constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConstantScoring {
    pub match_score: i32,
    pub mismatch_score: i32,
    pub gap: i32,
}

impl ConstantScoring {
    pub const GLOBAL_DEFAULT: ConstantScoring = ConstantScoring::new(1, -1, -1);
    pub const LOCAL_DEFAULT: ConstantScoring = ConstantScoring::new(2, -1, -2);

    pub const fn new(match_score: i32, mismatch_score: i32, gap: i32) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap,
        }
    }
}

impl Default for ConstantScoring {
    fn default() -> Self {
        Self::GLOBAL_DEFAULT
    }
}

impl Scoring for ConstantScoring {
    fn score(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    fn gap(&self) -> i32 {
        self.gap
    }
}

/// Substitution-matrix lookup with wildcard fallback
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixScoring {
    matrix: Arc<SubstitutionMatrix>,
    mismatch_fallback: i32,
    gap: i32,
}

impl MatrixScoring {
    pub fn new(matrix: impl Into<Arc<SubstitutionMatrix>>, mismatch_fallback: i32, gap: i32) -> Self {
        Self {
            matrix: matrix.into(),
            mismatch_fallback,
            gap,
        }
    }

    pub fn matrix(&self) -> &SubstitutionMatrix {
        &self.matrix
    }

    /// Score used when neither the pair nor any wildcard entry is present.
    pub fn mismatch_fallback(&self) -> i32 {
        self.mismatch_fallback
    }
}

impl Scoring for MatrixScoring {
    fn score(&self, a: u8, b: u8) -> i32 {
        self.matrix.lookup(a, b).unwrap_or(self.mismatch_fallback)
    }

    fn gap(&self) -> i32 {
        self.gap
    }
}

/// Either scoring variant, chosen at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoringModel {
    Constant(ConstantScoring),
    Matrix(MatrixScoring),
}

impl Default for ScoringModel {
    fn default() -> Self {
        ScoringModel::Constant(ConstantScoring::default())
    }
}

impl From<ConstantScoring> for ScoringModel {
    fn from(scoring: ConstantScoring) -> Self {
        ScoringModel::Constant(scoring)
    }
}

impl From<MatrixScoring> for ScoringModel {
    fn from(scoring: MatrixScoring) -> Self {
        ScoringModel::Matrix(scoring)
    }
}

impl Scoring for ScoringModel {
    fn score(&self, a: u8, b: u8) -> i32 {
        match self {
            ScoringModel::Constant(scoring) => scoring.score(a, b),
            ScoringModel::Matrix(scoring) => scoring.score(a, b),
        }
    }

    fn gap(&self) -> i32 {
        match self {
            ScoringModel::Constant(scoring) => scoring.gap(),
            ScoringModel::Matrix(scoring) => scoring.gap(),
        }
    }
}

impl<S: Scoring + ?Sized> Scoring for &S {
    fn score(&self, a: u8, b: u8) -> i32 {
        (**self).score(a, b)
    }

    fn gap(&self) -> i32 {
        (**self).gap()
    }
}
