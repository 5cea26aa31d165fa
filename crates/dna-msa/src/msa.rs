//! Progressive alignment of many sequences and the resulting rows.

use distances::Number;

use crate::{
    alphabet::{encode, Nucleotide},
    Aligner, CostMatrix, Guide, GuideOrder, MsaError, Profile, Representative,
};

/// The settings for a progressive alignment.
#[derive(Clone, Debug, Default)]
pub struct MsaConfig<T: Number> {
    /// The pairwise aligner.
    aligner: Aligner<T>,
    /// The merge order policy.
    guide: GuideOrder,
    /// The representative each sequence is aligned against.
    representative: Representative,
}

impl<T: Number> MsaConfig<T> {
    /// Use the given costs for pairwise alignment.
    #[must_use]
    pub fn with_cost_matrix(mut self, matrix: &CostMatrix<T>) -> Self {
        self.aligner = Aligner::new(matrix);
        self
    }

    /// Use the given merge order policy.
    #[must_use]
    pub fn with_guide(mut self, guide: GuideOrder) -> Self {
        self.guide = guide;
        self
    }

    /// Use the given profile representative.
    #[must_use]
    pub fn with_representative(mut self, representative: Representative) -> Self {
        self.representative = representative;
        self
    }

    /// The pairwise aligner.
    #[must_use]
    pub const fn aligner(&self) -> &Aligner<T> {
        &self.aligner
    }

    /// The merge order policy.
    #[must_use]
    pub const fn guide(&self) -> GuideOrder {
        self.guide
    }

    /// The profile representative.
    #[must_use]
    pub const fn representative(&self) -> Representative {
        self.representative
    }
}

/// A finished multiple sequence alignment.
///
/// Rows are printable ASCII over `ACGTN-`, all of the same width, in the same
/// order as the input sequences.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Msa {
    /// The aligned rows.
    pub(crate) rows: Vec<Vec<u8>>,
}

/// Aligns the given sequences.
///
/// Every sequence is checked against the alphabet before any alignment work
/// starts. The sequences are then merged one at a time into a profile, in the
/// order given by the guide, and the profile is turned back into rows in input
/// order.
///
/// # Arguments
///
/// * `sequences` - The raw sequences, over `ACGTN`.
/// * `config` - The alignment settings.
///
/// # Returns
///
/// The alignment. It is empty when there are no sequences.
///
/// # Errors
///
/// - If any sequence has a symbol outside of `ACGTN`.
pub fn align<T: Number, S: AsRef<[u8]>>(sequences: &[S], config: &MsaConfig<T>) -> Result<Msa, MsaError> {
    let encoded = sequences
        .iter()
        .enumerate()
        .map(|(i, s)| encode(i, s))
        .collect::<Result<Vec<_>, _>>()?;

    if encoded.is_empty() {
        ftlog::debug!("No sequences to align");
        return Ok(Msa::default());
    }

    let guide = Guide::new(&encoded, config.guide, &config.aligner);
    ftlog::debug!("Aligning {} sequences in order {:?}", encoded.len(), guide.order());

    let mut profile = Profile::new();
    for &i in guide.order() {
        profile.merge(i, &encoded[i], &config.aligner, config.representative)?;
    }

    let msa = Msa::from_profile(&profile, &encoded)?;
    ftlog::info!("Aligned {} sequences into {} columns", msa.len(), msa.width());

    Ok(msa)
}

impl Msa {
    /// Turns a finished profile back into rows in input order.
    ///
    /// Each row is walked left to right. A gap stays a gap and every other
    /// column must be the next unread symbol of the row's sequence.
    ///
    /// # Arguments
    ///
    /// * `profile` - The finished profile.
    /// * `sequences` - The 4-bit codes of the input sequences, in input order.
    ///
    /// # Errors
    ///
    /// - If the profile holds a code that is not a symbol.
    ///
    /// # Panics
    ///
    /// - If the profile does not hold exactly one row per sequence.
    /// - If a row does not reproduce its sequence once gaps are removed.
    pub fn from_profile<S: AsRef<[u8]>>(profile: &Profile, sequences: &[S]) -> Result<Self, MsaError> {
        assert_eq!(
            profile.len(),
            sequences.len(),
            "The profile must have one row per sequence"
        );

        let mut rows = vec![Vec::new(); sequences.len()];
        for (k, &index) in profile.members().iter().enumerate() {
            let seq = sequences[index].as_ref();
            let mut cursor = 0;
            let mut row = Vec::with_capacity(profile.width());

            for code in profile.row(k) {
                let symbol = Nucleotide::from_code(code)?;
                if !symbol.is_gap() {
                    assert!(
                        seq.get(cursor) == Some(&code),
                        "Row of sequence {index} does not match it at position {cursor}"
                    );
                    cursor += 1;
                }
                row.push(symbol.to_ascii());
            }

            assert_eq!(cursor, seq.len(), "Row of sequence {index} is missing symbols");
            rows[index] = row;
        }

        Ok(Self { rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstruction_is_idempotent() {
        let sequences = ["ACGT", "AGT", "CGTT"]
            .iter()
            .enumerate()
            .map(|(i, s)| encode(i, s))
            .collect::<Result<Vec<_>, _>>()
            .unwrap_or_else(|e| unreachable!("{e}"));

        let aligner = Aligner::<usize>::default();
        let mut profile = Profile::new();
        for (i, seq) in sequences.iter().enumerate() {
            profile
                .merge(i, seq, &aligner, Representative::FirstRow)
                .unwrap_or_else(|e| unreachable!("{e}"));
        }

        let first = Msa::from_profile(&profile, &sequences);
        let second = Msa::from_profile(&profile, &sequences);
        assert!(first.is_ok());
        assert_eq!(first, second);
    }

    #[test]
    fn rows_follow_input_order() {
        let config = MsaConfig::<usize>::default().with_guide(GuideOrder::CenterStar);
        let msa = align(&["TTTTTT", "AAAAAA", "AAAAAT", "AAAATT"], &config);
        let msa = msa.unwrap_or_else(|e| unreachable!("{e}"));
        assert_eq!(msa.strip_gaps(0), "TTTTTT");
        assert_eq!(msa.strip_gaps(3), "AAAATT");
    }
}
