//! Smith-Waterman local alignment.
//!
//! Same grid and recurrence as Needleman-Wunsch, but every cell is floored at
//! zero, the borders start at zero, and traceback starts from the best cell
//! and stops as soon as it reaches a zero cell or a border.

use crate::alignment::matrix::SubstitutionMatrix;
use crate::alignment::result::Alignment;
use crate::alignment::scoring::{ConstantScoring, MatrixScoring, Scoring, ScoringModel};
use crate::alignment::traceback::{choose_move, DpMatrix, PathBuilder};
use seqpair_core::{SeqpairError, SeqpairResult};
use std::path::Path;
use std::sync::Arc;

pub struct SmithWaterman<S: Scoring> {
    scoring: S,
}

impl Default for SmithWaterman<ConstantScoring> {
    fn default() -> Self {
        Self::new(ConstantScoring::LOCAL_DEFAULT)
    }
}

impl<S: Scoring> SmithWaterman<S> {
    pub fn new(scoring: S) -> Self {
        Self { scoring }
    }

    pub fn align(&self, seq_a: &[u8], seq_b: &[u8]) -> Alignment {
        let rows = seq_a.len() + 1;
        let cols = seq_b.len() + 1;
        let gap = self.scoring.gap();

        // Borders stay at zero: empty prefixes are free
        let mut score_matrix = DpMatrix::new(rows, cols);

        let mut best_score = 0;
        let mut best_cell = (0, 0);

        for i in 1..rows {
            for j in 1..cols {
                let diagonal_score =
                    score_matrix.get(i - 1, j - 1) + self.scoring.score(seq_a[i - 1], seq_b[j - 1]);
                let left_score = score_matrix.get(i, j - 1) + gap;
                let up_score = score_matrix.get(i - 1, j) + gap;

                let cell = 0.max(diagonal_score).max(up_score).max(left_score);
                score_matrix.set(i, j, cell);

                // Strictly greater: the first cell in row-major order keeps a tie
                if cell > best_score {
                    best_score = cell;
                    best_cell = (i, j);
                }
            }
        }

        let (mut i, mut j) = best_cell;
        let mut path = PathBuilder::new(seq_a, seq_b);

        while i > 0 && j > 0 && score_matrix.get(i, j) > 0 {
            let step = choose_move(&score_matrix, &self.scoring, seq_a, seq_b, i, j);
            (i, j) = path.push(step, i, j);
        }

        let (aligned_a, aligned_b) = path.finish();
        tracing::trace!(best_score, columns = aligned_a.len(), "local alignment");

        Alignment::new(best_score, aligned_a, aligned_b)
    }
}

/// How a [`LocalAligner`] scores symbol pairs for one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringMode {
    #[default]
    Constant,
    Matrix,
}

/// Reusable, immutable local-alignment configuration.
///
/// Holds the match/mismatch/gap constants (default 2/-1/-2) and optionally a
/// substitution matrix. When a matrix is bound, its lookups fall back to the
/// mismatch constant and gaps still use the gap constant.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalAligner {
    constants: ConstantScoring,
    matrix: Option<Arc<SubstitutionMatrix>>,
}

impl Default for LocalAligner {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalAligner {
    pub fn new() -> Self {
        Self {
            constants: ConstantScoring::LOCAL_DEFAULT,
            matrix: None,
        }
    }

    pub fn with_constants(mut self, constants: ConstantScoring) -> Self {
        self.constants = constants;
        self
    }

    pub fn with_match_score(mut self, match_score: i32) -> Self {
        self.constants.match_score = match_score;
        self
    }

    pub fn with_mismatch_score(mut self, mismatch_score: i32) -> Self {
        self.constants.mismatch_score = mismatch_score;
        self
    }

    pub fn with_gap(mut self, gap: i32) -> Self {
        self.constants.gap = gap;
        self
    }

    pub fn with_scoring_matrix(mut self, matrix: impl Into<Arc<SubstitutionMatrix>>) -> Self {
        self.matrix = Some(matrix.into());
        self
    }

    /// Load a matrix file and bind it. Parse failures are returned, never
    /// replaced by an empty matrix.
    pub fn load_scoring_matrix<P: AsRef<Path>>(self, path: P) -> SeqpairResult<Self> {
        let matrix = SubstitutionMatrix::load(path)?;
        Ok(self.with_scoring_matrix(matrix))
    }

    pub fn match_score(&self) -> i32 {
        self.constants.match_score
    }

    pub fn mismatch_score(&self) -> i32 {
        self.constants.mismatch_score
    }

    pub fn gap(&self) -> i32 {
        self.constants.gap
    }

    pub fn constants(&self) -> ConstantScoring {
        self.constants
    }

    pub fn scoring_matrix(&self) -> Option<&SubstitutionMatrix> {
        self.matrix.as_deref()
    }

    /// Matrix mode when a matrix is bound, constant mode otherwise.
    pub fn default_mode(&self) -> ScoringMode {
        if self.matrix.is_some() {
            ScoringMode::Matrix
        } else {
            ScoringMode::Constant
        }
    }

    pub fn scoring_model(&self, mode: ScoringMode) -> SeqpairResult<ScoringModel> {
        match mode {
            ScoringMode::Constant => Ok(ScoringModel::Constant(self.constants)),
            ScoringMode::Matrix => {
                let matrix = self.matrix.clone().ok_or_else(|| {
                    SeqpairError::Configuration(
                        "matrix scoring requested but no scoring matrix is bound".to_string(),
                    )
                })?;
                Ok(ScoringModel::Matrix(MatrixScoring::new(
                    matrix,
                    self.constants.mismatch_score,
                    self.constants.gap,
                )))
            }
        }
    }

    pub fn align(&self, seq_a: &[u8], seq_b: &[u8]) -> SeqpairResult<Alignment> {
        self.align_with_mode(seq_a, seq_b, self.default_mode())
    }

    pub fn align_with_mode(
        &self,
        seq_a: &[u8],
        seq_b: &[u8],
        mode: ScoringMode,
    ) -> SeqpairResult<Alignment> {
        let scoring = self.scoring_model(mode)?;
        Ok(SmithWaterman::new(scoring).align(seq_a, seq_b))
    }
}

/// Local alignment with the default constants (match +2, mismatch -1, gap -2).
pub fn align_local(seq_a: &[u8], seq_b: &[u8]) -> Alignment {
    SmithWaterman::default().align(seq_a, seq_b)
}

/// Local alignment with a caller-supplied scoring model.
pub fn align_local_with<S: Scoring>(seq_a: &[u8], seq_b: &[u8], scoring: &S) -> Alignment {
    SmithWaterman::new(scoring).align(seq_a, seq_b)
}
