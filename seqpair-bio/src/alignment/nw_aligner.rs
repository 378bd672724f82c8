/// Needleman-Wunsch global alignment algorithm
use crate::alignment::result::Alignment;
use crate::alignment::scoring::{ConstantScoring, Scoring};
use crate::alignment::traceback::{choose_move, DpMatrix, PathBuilder};

pub struct NeedlemanWunsch<S: Scoring> {
    scoring: S,
}

impl Default for NeedlemanWunsch<ConstantScoring> {
    fn default() -> Self {
        Self::new(ConstantScoring::GLOBAL_DEFAULT)
    }
}

impl<S: Scoring> NeedlemanWunsch<S> {
    pub fn new(scoring: S) -> Self {
        Self { scoring }
    }

    pub fn scoring(&self) -> &S {
        &self.scoring
    }

    /// Align the whole of `seq_a` against the whole of `seq_b`.
    ///
    /// Among equally scoring paths the traceback prefers a diagonal step, then
    /// a gap in B, then a gap in A. An empty input yields the other sequence
    /// opposite a run of gaps.
    pub fn align(&self, seq_a: &[u8], seq_b: &[u8]) -> Alignment {
        let rows = seq_a.len() + 1;
        let cols = seq_b.len() + 1;

        tracing::trace!(len_a = seq_a.len(), len_b = seq_b.len(), "global alignment");

        let mut score_matrix = DpMatrix::new(rows, cols);
        self.initialize_matrix(&mut score_matrix, rows, cols);
        self.fill_matrix(&mut score_matrix, seq_a, seq_b);

        let (aligned_a, aligned_b) = self.traceback(&score_matrix, seq_a, seq_b);

        Alignment::new(
            score_matrix.get(rows - 1, cols - 1),
            aligned_a,
            aligned_b,
        )
    }

    fn initialize_matrix(&self, score_matrix: &mut DpMatrix, rows: usize, cols: usize) {
        let gap = self.scoring.gap();

        // Empty prefixes score as runs of gaps
        for i in 1..rows {
            score_matrix.set(i, 0, i as i32 * gap);
        }
        for j in 1..cols {
            score_matrix.set(0, j, j as i32 * gap);
        }
    }

    fn fill_matrix(&self, score_matrix: &mut DpMatrix, seq_a: &[u8], seq_b: &[u8]) {
        let gap = self.scoring.gap();

        for i in 1..=seq_a.len() {
            for j in 1..=seq_b.len() {
                let diagonal_score =
                    score_matrix.get(i - 1, j - 1) + self.scoring.score(seq_a[i - 1], seq_b[j - 1]);
                let left_score = score_matrix.get(i, j - 1) + gap;
                let up_score = score_matrix.get(i - 1, j) + gap;

                score_matrix.set(i, j, diagonal_score.max(left_score).max(up_score));
            }
        }
    }

    fn traceback(&self, score_matrix: &DpMatrix, seq_a: &[u8], seq_b: &[u8]) -> (Vec<u8>, Vec<u8>) {
        let mut path = PathBuilder::new(seq_a, seq_b);
        let mut i = seq_a.len();
        let mut j = seq_b.len();

        while i > 0 || j > 0 {
            let step = choose_move(score_matrix, &self.scoring, seq_a, seq_b, i, j);
            (i, j) = path.push(step, i, j);
        }

        path.finish()
    }
}

/// Global alignment with the default constants (match +1, mismatch -1, gap -1).
pub fn align_global(seq_a: &[u8], seq_b: &[u8]) -> Alignment {
    NeedlemanWunsch::default().align(seq_a, seq_b)
}

/// Global alignment with a caller-supplied scoring model.
pub fn align_global_with<S: Scoring>(seq_a: &[u8], seq_b: &[u8], scoring: &S) -> Alignment {
    NeedlemanWunsch::new(scoring).align(seq_a, seq_b)
}
