//! The order in which sequences are merged into the profile.

use distances::Number;
use rayon::prelude::*;

use crate::Aligner;

/// The policy used to order sequences for progressive alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GuideOrder {
    /// Seed with the first sequence and merge the rest in input order.
    #[default]
    InputOrder,
    /// Seed with the sequence closest to all others and merge the rest by
    /// increasing distance to it.
    CenterStar,
}

/// A merge order over the input sequences.
///
/// The order is always a permutation of `0..n`. Its first element is the seed
/// of the profile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Guide {
    /// The indices of the sequences in the order they are merged.
    order: Vec<usize>,
}

impl Guide {
    /// Builds the merge order for the given sequences.
    ///
    /// # Arguments
    ///
    /// * `sequences` - The sequences to align.
    /// * `policy` - How to order the sequences.
    /// * `aligner` - Used for distances under the center-star policy.
    pub fn new<T: Number, S: AsRef<[u8]> + Sync>(sequences: &[S], policy: GuideOrder, aligner: &Aligner<T>) -> Self {
        match policy {
            GuideOrder::InputOrder => Self::input_order(sequences.len()),
            GuideOrder::CenterStar => Self::center_star(sequences, aligner),
        }
    }

    /// The progressive order `0, 1, ..., n - 1`.
    #[must_use]
    pub fn input_order(n: usize) -> Self {
        Self { order: (0..n).collect() }
    }

    /// The center-star order.
    ///
    /// The center is the sequence with the smallest sum of distances to all
    /// others, the earliest such sequence on ties. The remaining sequences
    /// follow by increasing distance to the center, in input order on ties.
    pub fn center_star<T: Number, S: AsRef<[u8]> + Sync>(sequences: &[S], aligner: &Aligner<T>) -> Self {
        if sequences.len() < 3 {
            return Self::input_order(sequences.len());
        }

        let distances = par_distance_matrix(sequences, aligner);
        let sums = distances.iter().map(|row| row.iter().copied().sum::<T>());
        let center = sums
            .enumerate()
            .fold(None, |best: Option<(usize, T)>, (i, s)| match best {
                Some((_, b)) if b <= s => best,
                _ => Some((i, s)),
            })
            .map_or(0, |(i, _)| i);

        let mut rest = (0..sequences.len()).filter(|&i| i != center).collect::<Vec<_>>();
        rest.sort_by(|&x, &y| {
            distances[center][x]
                .partial_cmp(&distances[center][y])
                .unwrap_or(core::cmp::Ordering::Equal)
        });

        let mut order = Vec::with_capacity(sequences.len());
        order.push(center);
        order.extend(rest);

        ftlog::debug!("Center-star guide with center {center} over {} sequences", sequences.len());

        Self { order }
    }

    /// The merge order.
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// The index of the seed sequence, if there is any sequence at all.
    #[must_use]
    pub fn seed(&self) -> Option<usize> {
        self.order.first().copied()
    }

    /// The number of sequences in the order.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the order is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Computes the all-pairs distance matrix.
///
/// The matrix is symmetric with zeros on the diagonal.
pub fn distance_matrix<T: Number, S: AsRef<[u8]>>(sequences: &[S], aligner: &Aligner<T>) -> Vec<Vec<T>> {
    let n = sequences.len();
    let mut matrix = vec![vec![T::ZERO; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = aligner.score(&sequences[i], &sequences[j]);
            matrix[i][j] = d;
            matrix[j][i] = d;
        }
    }
    matrix
}

/// Parallel version of [`distance_matrix`].
pub fn par_distance_matrix<T: Number, S: AsRef<[u8]> + Sync>(sequences: &[S], aligner: &Aligner<T>) -> Vec<Vec<T>> {
    let n = sequences.len();
    let upper = (0..n)
        .into_par_iter()
        .map(|i| {
            ((i + 1)..n)
                .map(|j| aligner.score(&sequences[i], &sequences[j]))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let mut matrix = vec![vec![T::ZERO; n]; n];
    for (i, row) in upper.into_iter().enumerate() {
        for (k, d) in row.into_iter().enumerate() {
            let j = i + 1 + k;
            matrix[i][j] = d;
            matrix[j][i] = d;
        }
    }
    matrix
}
