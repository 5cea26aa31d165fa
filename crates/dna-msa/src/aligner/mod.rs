//! Needleman-Wunsch algorithm for global pairwise alignment.

use distances::Number;

mod cost_matrix;
pub mod ops;

pub use cost_matrix::CostMatrix;
use ops::{Direction, Edit, EditScript};

use crate::alphabet::GAP;

/// A table of edit distances between prefixes of two sequences.
///
/// Rows are indexed by prefixes of the source sequence and columns by prefixes
/// of the target sequence.
pub type NwTable<T> = Vec<Vec<(T, Direction)>>;

/// A Needleman-Wunsch aligner.
///
/// This works with any sequence of bytes: 4-bit nucleotide codes inside the
/// engine, or ASCII for the string helpers.
#[derive(Clone, Debug, Default)]
pub struct Aligner<T: Number> {
    /// The cost matrix for the alignment.
    matrix: CostMatrix<T>,
}

impl<T: Number> Aligner<T> {
    /// Create a new Needleman-Wunsch aligner that minimizes the cost.
    #[must_use]
    pub fn new(matrix: &CostMatrix<T>) -> Self {
        Self {
            matrix: matrix.clone(),
        }
    }

    /// Get the cost matrix.
    #[must_use]
    pub const fn matrix(&self) -> &CostMatrix<T> {
        &self.matrix
    }

    /// Compute the minimized edit distance from a DP table.
    pub fn distance(&self, dp_table: &NwTable<T>) -> T {
        dp_table.last().and_then(|row| row.last()).map_or(T::ZERO, |&(d, _)| d)
    }

    /// Compute the dynamic programming table for the Needleman-Wunsch algorithm.
    ///
    /// The value at position `(i, j)` is the minimum cost of turning the first
    /// `i` symbols of `a` into the first `j` symbols of `b`. Moving down
    /// deletes a symbol of `a` and moving right inserts a symbol of `b`.
    ///
    /// Ties are broken in favor of the diagonal, then the deletion, then the
    /// insertion.
    ///
    /// # Arguments
    ///
    /// * `a` - The source sequence.
    /// * `b` - The target sequence.
    ///
    /// # Returns
    ///
    /// The `(len(a) + 1) x (len(b) + 1)` DP table.
    pub fn dp_table<A: AsRef<[u8]>, B: AsRef<[u8]>>(&self, a: &A, b: &B) -> NwTable<T> {
        let (a, b) = (a.as_ref(), b.as_ref());

        let mut table = vec![vec![(T::ZERO, Direction::Diagonal); b.len() + 1]; a.len() + 1];

        // The first row only inserts symbols of `b`.
        for j in 1..table[0].len() {
            let cost = table[0][j - 1].0 + self.matrix.ins_cost();
            table[0][j] = (cost, Direction::Left);
        }

        // The first column only deletes symbols of `a`.
        for i in 1..table.len() {
            let cost = table[i - 1][0].0 + self.matrix.del_cost();
            table[i][0] = (cost, Direction::Up);
        }

        // On iteration (i, j), we fill in the cell at (i + 1, j + 1).
        for (i, &ac) in a.iter().enumerate() {
            for (j, &bc) in b.iter().enumerate() {
                let diag_cost = table[i][j].0 + self.matrix.sub_cost(ac, bc);
                let up_cost = table[i][j + 1].0 + self.matrix.del_cost();
                let left_cost = table[i + 1][j].0 + self.matrix.ins_cost();

                table[i + 1][j + 1] = if diag_cost <= up_cost && diag_cost <= left_cost {
                    (diag_cost, Direction::Diagonal)
                } else if up_cost <= left_cost {
                    (up_cost, Direction::Up)
                } else {
                    (left_cost, Direction::Left)
                };
            }
        }

        table
    }

    /// Backtrace the edit script that turns `a` into `b`.
    ///
    /// # Arguments
    ///
    /// * `a` - The source sequence.
    /// * `b` - The target sequence.
    /// * `table` - The DP table computed by `dp_table(a, b)`.
    ///
    /// # Returns
    ///
    /// The edits in forward order.
    pub fn edit_script<A: AsRef<[u8]>, B: AsRef<[u8]>>(&self, a: &A, b: &B, table: &NwTable<T>) -> EditScript {
        let (a, b) = (a.as_ref(), b.as_ref());
        let [mut i, mut j] = [a.len(), b.len()];
        let mut edits = Vec::with_capacity(a.len() + b.len());

        while i > 0 || j > 0 {
            match table[i][j].1 {
                Direction::Diagonal => {
                    edits.push(if a[i - 1] == b[j - 1] { Edit::Match } else { Edit::Sub });
                    i -= 1;
                    j -= 1;
                }
                Direction::Up => {
                    edits.push(Edit::Del);
                    i -= 1;
                }
                Direction::Left => {
                    edits.push(Edit::Ins);
                    j -= 1;
                }
            }
        }

        edits.reverse();
        EditScript::from(edits)
    }

    /// Align two sequences and return the distance along with the edit script
    /// that turns `a` into `b`.
    pub fn align<A: AsRef<[u8]>, B: AsRef<[u8]>>(&self, a: &A, b: &B) -> (T, EditScript) {
        let table = self.dp_table(a, b);
        (self.distance(&table), self.edit_script(a, b, &table))
    }

    /// Compute only the distance between two sequences.
    ///
    /// This keeps two rows of the DP table instead of the whole table. The
    /// result is the same as `distance(&dp_table(a, b))`.
    pub fn score<A: AsRef<[u8]>, B: AsRef<[u8]>>(&self, a: &A, b: &B) -> T {
        let (a, b) = (a.as_ref(), b.as_ref());

        let mut prev = Vec::with_capacity(b.len() + 1);
        prev.push(T::ZERO);
        for j in 0..b.len() {
            prev.push(prev[j] + self.matrix.ins_cost());
        }
        let mut curr = vec![T::ZERO; b.len() + 1];

        for &ac in a {
            curr[0] = prev[0] + self.matrix.del_cost();
            for (j, &bc) in b.iter().enumerate() {
                let diag_cost = prev[j] + self.matrix.sub_cost(ac, bc);
                let up_cost = prev[j + 1] + self.matrix.del_cost();
                let left_cost = curr[j] + self.matrix.ins_cost();
                let min_cost = if diag_cost <= up_cost { diag_cost } else { up_cost };
                curr[j + 1] = if min_cost <= left_cost { min_cost } else { left_cost };
            }
            core::mem::swap(&mut prev, &mut curr);
        }

        prev[b.len()]
    }

    /// Align two ASCII strings and return the distance along with both strings
    /// padded with gaps.
    pub fn align_str<A: AsRef<str>, B: AsRef<str>>(&self, a: &A, b: &B) -> (T, [String; 2]) {
        let (a, b) = (a.as_ref().as_bytes(), b.as_ref().as_bytes());
        let (distance, script) = self.align(&a, &b);

        let [mut a_aligned, mut b_aligned] = [Vec::with_capacity(script.len()), Vec::with_capacity(script.len())];
        let [mut i, mut j] = [0, 0];

        for edit in script {
            match edit {
                Edit::Match | Edit::Sub => {
                    a_aligned.push(a[i]);
                    b_aligned.push(b[j]);
                    i += 1;
                    j += 1;
                }
                Edit::Del => {
                    a_aligned.push(a[i]);
                    b_aligned.push(GAP);
                    i += 1;
                }
                Edit::Ins => {
                    a_aligned.push(GAP);
                    b_aligned.push(b[j]);
                    j += 1;
                }
            }
        }

        let to_string = |bytes: Vec<u8>| {
            String::from_utf8(bytes).unwrap_or_else(|e| unreachable!("We only added gaps to valid strings: {e}"))
        };
        (distance, [to_string(a_aligned), to_string(b_aligned)])
    }
}
