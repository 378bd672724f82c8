//! Dense dynamic-programming grid and the traceback shared by the global and
//! local engines.

use crate::alignment::result::GAP;
use crate::alignment::scoring::Scoring;

/// An `(m + 1) x (n + 1)` score grid. Row and column 0 stand for the empty
/// prefix of A and B respectively.
pub struct DpMatrix {
    data: Vec<i32>,
    cols: usize,
}

impl DpMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0; rows * cols],
            cols,
        }
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> i32 {
        self.data[i * self.cols + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: i32) {
        self.data[i * self.cols + j] = value;
    }
}

/// One step of a traceback path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Consume one symbol from each sequence.
    Diagonal,
    /// Consume a symbol of A against a gap in B.
    Up,
    /// Consume a symbol of B against a gap in A.
    Left,
}

/// Order in which moves are tested during traceback. When several moves
/// reproduce a cell's score, the first one listed wins; this decides which of
/// several optimal alignments is reported.
pub const TRACEBACK_PRIORITY: [Move; 3] = [Move::Diagonal, Move::Up, Move::Left];

/// Pick the move that explains `matrix[i][j]`, testing [`TRACEBACK_PRIORITY`]
/// in order. `Left` is the fallback when nothing earlier matches.
pub fn choose_move<S: Scoring>(
    matrix: &DpMatrix,
    scoring: &S,
    a: &[u8],
    b: &[u8],
    i: usize,
    j: usize,
) -> Move {
    let current = matrix.get(i, j);

    TRACEBACK_PRIORITY
        .iter()
        .copied()
        .find(|step| match step {
            Move::Diagonal => {
                i > 0 && j > 0 && current == matrix.get(i - 1, j - 1) + scoring.score(a[i - 1], b[j - 1])
            }
            Move::Up => i > 0 && current == matrix.get(i - 1, j) + scoring.gap(),
            Move::Left => true,
        })
        .unwrap_or(Move::Left)
}

/// Collects columns back to front while walking a traceback path.
pub(crate) struct PathBuilder<'a> {
    a: &'a [u8],
    b: &'a [u8],
    aligned_a: Vec<u8>,
    aligned_b: Vec<u8>,
}

impl<'a> PathBuilder<'a> {
    pub fn new(a: &'a [u8], b: &'a [u8]) -> Self {
        let capacity = a.len() + b.len();
        Self {
            a,
            b,
            aligned_a: Vec::with_capacity(capacity),
            aligned_b: Vec::with_capacity(capacity),
        }
    }

    /// Emit the column for `step` taken from cell `(i, j)` and return the
    /// predecessor cell.
    pub fn push(&mut self, step: Move, i: usize, j: usize) -> (usize, usize) {
        match step {
            Move::Diagonal => {
                self.aligned_a.push(self.a[i - 1]);
                self.aligned_b.push(self.b[j - 1]);
                (i - 1, j - 1)
            }
            Move::Up => {
                self.aligned_a.push(self.a[i - 1]);
                self.aligned_b.push(GAP);
                (i - 1, j)
            }
            Move::Left => {
                self.aligned_a.push(GAP);
                self.aligned_b.push(self.b[j - 1]);
                (i, j - 1)
            }
        }
    }

    /// Columns in forward order.
    pub fn finish(mut self) -> (Vec<u8>, Vec<u8>) {
        self.aligned_a.reverse();
        self.aligned_b.reverse();
        (self.aligned_a, self.aligned_b)
    }
}
