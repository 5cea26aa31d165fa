//! Accessors and quality measures for a finished alignment.

use rayon::prelude::*;

use crate::{alphabet::GAP, Msa};

impl Msa {
    /// The number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// The number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the alignment has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The aligned rows as ASCII bytes, in input order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// The `i`-th aligned row, if there is one.
    #[must_use]
    pub fn row(&self, i: usize) -> Option<&[u8]> {
        self.rows.get(i).map(Vec::as_slice)
    }

    /// The aligned rows as strings, in input order.
    #[must_use]
    pub fn strings(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| String::from_utf8_lossy(row).into_owned())
            .collect()
    }

    /// The `i`-th row with its gaps removed.
    ///
    /// # Panics
    ///
    /// - If `i` is not less than the number of rows.
    #[must_use]
    pub fn strip_gaps(&self, i: usize) -> String {
        self.rows[i]
            .iter()
            .filter(|&&c| c != GAP)
            .map(|&c| char::from(c))
            .collect()
    }

    /// The mean fraction of gaps per row.
    #[must_use]
    pub fn percent_gaps(&self) -> f32 {
        if self.is_empty() || self.width() == 0 {
            return 0.0;
        }
        let num_gaps = self
            .rows
            .iter()
            .map(|row| row.iter().filter(|&&c| c == GAP).count())
            .sum::<usize>();
        num_gaps as f32 / (self.len() * self.width()) as f32
    }

    /// Scores every pairwise alignment in the MSA and sums the scores.
    ///
    /// Within a pair, a column where both rows have a gap is ignored, a column
    /// where one row has a gap costs `gap_penalty` and a column with two
    /// different bases costs `mismatch_penalty`.
    #[must_use]
    pub fn sum_of_pairs(&self, gap_penalty: usize, mismatch_penalty: usize) -> usize {
        self.apply_pairwise(|s1, s2| sp_inner(s1, s2, gap_penalty, mismatch_penalty))
            .sum()
    }

    /// Parallel version of [`Msa::sum_of_pairs`](Self::sum_of_pairs).
    #[must_use]
    pub fn par_sum_of_pairs(&self, gap_penalty: usize, mismatch_penalty: usize) -> usize {
        self.par_apply_pairwise(|s1, s2| sp_inner(s1, s2, gap_penalty, mismatch_penalty))
            .sum()
    }

    /// Calculates the mean and maximum `p-distance`s of all pairwise
    /// alignments in the MSA.
    ///
    /// Both are zero when there are fewer than two rows.
    #[must_use]
    pub fn p_distance_stats(&self) -> (f32, f32) {
        stats(self.apply_pairwise(pd_inner).collect())
    }

    /// Parallel version of [`Msa::p_distance_stats`](Self::p_distance_stats).
    #[must_use]
    pub fn par_p_distance_stats(&self) -> (f32, f32) {
        stats(self.par_apply_pairwise(pd_inner).collect())
    }

    /// Applies a pairwise scorer to all pairs of rows.
    fn apply_pairwise<'a, F, G>(&'a self, scorer: F) -> impl Iterator<Item = G> + 'a
    where
        F: (Fn(&[u8], &[u8]) -> G) + 'a,
    {
        self.rows
            .iter()
            .enumerate()
            .flat_map(move |(i, s1)| self.rows.iter().skip(i + 1).map(move |s2| (s1, s2)))
            .map(move |(s1, s2)| scorer(s1.as_slice(), s2.as_slice()))
    }

    /// Parallel version of [`Msa::apply_pairwise`](Self::apply_pairwise).
    fn par_apply_pairwise<'a, F, G>(&'a self, scorer: F) -> impl ParallelIterator<Item = G> + 'a
    where
        F: (Fn(&[u8], &[u8]) -> G) + Send + Sync + 'a,
        G: Send,
    {
        self.rows
            .par_iter()
            .enumerate()
            .flat_map(move |(i, s1)| self.rows.par_iter().skip(i + 1).map(move |s2| (s1, s2)))
            .map(move |(s1, s2)| scorer(s1.as_slice(), s2.as_slice()))
    }
}

/// The mean and maximum of some pairwise measures.
fn stats(values: Vec<f32>) -> (f32, f32) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len();
    let (sum, max) = values
        .into_iter()
        .fold((0.0, 0.0), |(sum, max), v| (sum + v, f32::max(max, v)));
    (sum / n as f32, max)
}

/// Removes gap-only columns from two aligned rows.
fn remove_gap_only_cols(s1: &[u8], s2: &[u8]) -> (Vec<u8>, Vec<u8>) {
    s1.iter()
        .zip(s2.iter())
        .filter(|(&a, &b)| !(a == GAP && b == GAP))
        .unzip()
}

/// Scores a single pairwise alignment, applying a penalty for gaps and
/// mismatches.
fn sp_inner(s1: &[u8], s2: &[u8], gap_penalty: usize, mismatch_penalty: usize) -> usize {
    let (s1, s2) = remove_gap_only_cols(s1, s2);
    s1.iter().zip(s2.iter()).fold(0, |score, (&a, &b)| {
        if a == GAP || b == GAP {
            score + gap_penalty
        } else if a != b {
            score + mismatch_penalty
        } else {
            score
        }
    })
}

/// Calculates the p-distance of a pair of rows.
fn pd_inner(s1: &[u8], s2: &[u8]) -> f32 {
    let (s1, s2) = remove_gap_only_cols(s1, s2);
    if s1.is_empty() {
        return 0.0;
    }
    let num_mismatches = s1
        .iter()
        .zip(s2.iter())
        .filter(|(&a, &b)| a != GAP && b != GAP && a != b)
        .count();
    num_mismatches as f32 / s1.len() as f32
}
