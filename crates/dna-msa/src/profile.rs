//! The growing multiple alignment that sequences are merged into.

use distances::Number;

use crate::{aligner::ops::Edit, alphabet::Nucleotide, Aligner, MsaError};

/// The row of the profile that a new sequence is aligned against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Representative {
    /// The seed row, gaps included.
    #[default]
    FirstRow,
    /// The most frequent symbol in each column, gaps included. Ties go to the
    /// symbol with the smallest code.
    Consensus,
}

/// A multiple alignment under construction, stored column-major.
///
/// Each column holds one 4-bit code per row, and every column has the same
/// height. Row `k` belongs to the `k`-th merged sequence, whose index in the
/// input is `members()[k]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    /// The columns of the alignment.
    columns: Vec<Vec<u8>>,
    /// The input index of the sequence in each row.
    members: Vec<usize>,
}

impl Profile {
    /// Creates an empty profile.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: Vec::new(),
            members: Vec::new(),
        }
    }

    /// The number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether no sequence has been merged yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// The input index of the sequence in each row, in merge order.
    #[must_use]
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// The columns of the alignment.
    #[must_use]
    pub fn columns(&self) -> &[Vec<u8>] {
        &self.columns
    }

    /// The codes of the `k`-th row, gaps included.
    ///
    /// # Panics
    ///
    /// - If `k` is not less than the number of rows.
    #[must_use]
    pub fn row(&self, k: usize) -> Vec<u8> {
        assert!(k < self.len(), "Row {k} out of bounds for a profile with {} rows", self.len());
        self.columns.iter().map(|col| col[k]).collect()
    }

    /// The representative row used to align a new sequence.
    #[must_use]
    pub fn representative(&self, rep: Representative) -> Vec<u8> {
        match rep {
            Representative::FirstRow => {
                if self.is_empty() {
                    Vec::new()
                } else {
                    self.row(0)
                }
            }
            Representative::Consensus => self.columns.iter().map(|col| consensus(col)).collect(),
        }
    }

    /// Merges a sequence into the profile.
    ///
    /// The sequence is aligned against the representative row. Where the
    /// sequence has a base that the representative does not, a new gap column
    /// is added to every existing row. Where the representative has a column
    /// that the sequence does not, the new row gets a gap.
    ///
    /// # Arguments
    ///
    /// * `index` - The input index of the sequence.
    /// * `seq` - The 4-bit codes of the sequence, without gaps.
    /// * `aligner` - The pairwise aligner.
    /// * `rep` - Which representative to align against.
    ///
    /// # Returns
    ///
    /// The distance between the sequence and the representative.
    ///
    /// # Errors
    ///
    /// - If `seq` holds a gap or a code that is not a symbol. The profile is
    ///   left unchanged.
    pub fn merge<T: Number>(
        &mut self,
        index: usize,
        seq: &[u8],
        aligner: &Aligner<T>,
        rep: Representative,
    ) -> Result<T, MsaError> {
        if let Some(&code) = seq
            .iter()
            .find(|&&c| Nucleotide::from_code(c).map_or(true, Nucleotide::is_gap))
        {
            return Err(MsaError::Decode { code });
        }

        if self.is_empty() {
            self.columns = seq.iter().map(|&c| vec![c]).collect();
            self.members.push(index);
            ftlog::trace!("Seeded profile with sequence {index} of length {}", seq.len());
            return Ok(T::ZERO);
        }

        let gap = Nucleotide::Gap.code();
        let height = self.len();
        let target = self.representative(rep);
        let (distance, script) = aligner.align(&seq, &target);

        let mut old_columns = core::mem::take(&mut self.columns).into_iter();
        let mut symbols = seq.iter().copied();
        let mut columns = Vec::with_capacity(script.len());

        for edit in script {
            let col = match edit {
                Edit::Match | Edit::Sub => {
                    let mut col = next_or_bug(&mut old_columns);
                    col.push(next_or_bug(&mut symbols));
                    col
                }
                Edit::Ins => {
                    let mut col = next_or_bug(&mut old_columns);
                    col.push(gap);
                    col
                }
                Edit::Del => {
                    let mut col = vec![gap; height];
                    col.push(next_or_bug(&mut symbols));
                    col
                }
            };
            columns.push(col);
        }

        assert!(
            old_columns.next().is_none() && symbols.next().is_none(),
            "The edit script did not consume the whole profile and sequence"
        );

        self.columns = columns;
        self.members.push(index);

        assert!(
            self.columns.iter().all(|col| col.len() == self.members.len()),
            "Rows have different widths after merging sequence {index}"
        );

        ftlog::trace!(
            "Merged sequence {index} at distance {distance}, profile now has {} rows and {} columns",
            self.len(),
            self.width()
        );

        Ok(distance)
    }
}

/// The next item of an iterator that the edit script guarantees is there.
fn next_or_bug<I: Iterator>(iter: &mut I) -> I::Item {
    iter.next()
        .unwrap_or_else(|| unreachable!("The edit script ran past the end of its input"))
}

/// The most frequent code in a column, the smallest code on ties.
fn consensus(col: &[u8]) -> u8 {
    let mut counts = [0_usize; crate::alphabet::NUM_SYMBOLS];
    for &c in col {
        counts[<usize as From<u8>>::from(c)] += 1;
    }
    Nucleotide::ALL
        .iter()
        .zip(counts)
        .fold((Nucleotide::Gap.code(), 0), |(best, best_count), (n, count)| {
            if count > best_count {
                (n.code(), count)
            } else {
                (best, best_count)
            }
        })
        .0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::encode;

    fn profile_of(sequences: &[&str], rep: Representative) -> Profile {
        let aligner = Aligner::<usize>::default();
        let mut profile = Profile::new();
        for (i, s) in sequences.iter().enumerate() {
            let codes = encode(i, s).unwrap_or_else(|e| unreachable!("{e}"));
            profile
                .merge(i, &codes, &aligner, rep)
                .unwrap_or_else(|e| unreachable!("{e}"));
        }
        profile
    }

    #[test]
    fn seed_has_no_gaps() {
        let profile = profile_of(&["ACGT"], Representative::FirstRow);
        assert_eq!(profile.len(), 1);
        assert_eq!(profile.width(), 4);
        assert_eq!(profile.row(0), vec![0, 1, 2, 3]);
    }

    #[test]
    fn deletion_adds_gap_column() {
        // The new sequence has a base the seed lacks.
        let profile = profile_of(&["AGT", "ACGT"], Representative::FirstRow);
        assert_eq!(profile.width(), 4);
        assert_eq!(profile.row(0), vec![0, 5, 2, 3]);
        assert_eq!(profile.row(1), vec![0, 1, 2, 3]);
    }

    #[test]
    fn insertion_gaps_new_row() {
        let profile = profile_of(&["ACGT", "AGT"], Representative::FirstRow);
        assert_eq!(profile.width(), 4);
        assert_eq!(profile.row(0), vec![0, 1, 2, 3]);
        assert_eq!(profile.row(1), vec![0, 5, 2, 3]);
    }

    #[test]
    fn empty_sequences() {
        let profile = profile_of(&["", "AC", ""], Representative::FirstRow);
        assert_eq!(profile.len(), 3);
        assert_eq!(profile.width(), 2);
        assert_eq!(profile.row(0), vec![5, 5]);
        assert_eq!(profile.row(1), vec![0, 1]);
        assert_eq!(profile.row(2), vec![5, 5]);
    }

    #[test]
    fn consensus_ties_go_to_smaller_code() {
        assert_eq!(consensus(&[3, 0, 3, 0]), 0);
        assert_eq!(consensus(&[5, 5, 2]), 5);
        assert_eq!(consensus(&[4]), 4);

        let profile = profile_of(&["ACGT", "ACCT", "TCCT"], Representative::Consensus);
        assert_eq!(profile.representative(Representative::Consensus), vec![0, 1, 1, 3]);
        assert_eq!(profile.representative(Representative::FirstRow), vec![0, 1, 2, 3]);
    }

    #[test]
    fn rejects_codes_that_are_not_bases() {
        let aligner = Aligner::<usize>::default();
        let mut profile = profile_of(&["ACGT"], Representative::Consensus);
        let before = profile.clone();

        // ASCII instead of 4-bit codes.
        let result = profile.merge(1, b"AGT", &aligner, Representative::Consensus);
        assert_eq!(result, Err(MsaError::Decode { code: b'A' }));
        assert_eq!(profile, before);

        // A gap is a symbol but never part of a raw sequence.
        let gap = Nucleotide::Gap.code();
        let result = profile.merge(1, &[0, gap, 3], &aligner, Representative::FirstRow);
        assert_eq!(result, Err(MsaError::Decode { code: gap }));
        assert_eq!(profile, before);

        // Nor can an empty profile be seeded with one.
        let mut empty = Profile::new();
        let result = empty.merge(0, &[6], &aligner, Representative::FirstRow);
        assert_eq!(result, Err(MsaError::Decode { code: 6 }));
        assert!(empty.is_empty());
    }
}
