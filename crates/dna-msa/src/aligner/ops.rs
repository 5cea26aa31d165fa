//! Alignment operations for the Needleman-Wunsch algorithm.

use distances::Number;

use super::CostMatrix;

/// The direction of the edit operation in the DP table.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Direction {
    /// Diagonal (Up and Left) for a match or substitution.
    Diagonal,
    /// Up for a deletion from the source sequence.
    Up,
    /// Left for an insertion from the target sequence.
    Left,
}

/// One operation of an edit script that turns a source sequence into a target.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Edit {
    /// Both sequences have the same base here.
    Match,
    /// The source base is replaced by a different target base.
    Sub,
    /// A target base with no counterpart in the source.
    Ins,
    /// A source base with no counterpart in the target.
    Del,
}

/// The edits, in forward order, that turn one sequence into another.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditScript(Vec<Edit>);

impl EditScript {
    /// The number of operations, i.e. the number of alignment columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the script has no operations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the operations.
    pub fn iter(&self) -> core::slice::Iter<'_, Edit> {
        self.0.iter()
    }

    /// Counts the operations of the given kind.
    #[must_use]
    pub fn count(&self, kind: Edit) -> usize {
        self.0.iter().filter(|&&e| e == kind).count()
    }

    /// The number of matches.
    #[must_use]
    pub fn num_matches(&self) -> usize {
        self.count(Edit::Match)
    }

    /// The number of substitutions.
    #[must_use]
    pub fn num_subs(&self) -> usize {
        self.count(Edit::Sub)
    }

    /// The number of insertions.
    #[must_use]
    pub fn num_ins(&self) -> usize {
        self.count(Edit::Ins)
    }

    /// The number of deletions.
    #[must_use]
    pub fn num_dels(&self) -> usize {
        self.count(Edit::Del)
    }

    /// The length of the source sequence this script consumes.
    #[must_use]
    pub fn source_len(&self) -> usize {
        self.0.len() - self.num_ins()
    }

    /// The length of the target sequence this script produces.
    #[must_use]
    pub fn target_len(&self) -> usize {
        self.0.len() - self.num_dels()
    }

    /// The total cost of the script under the given costs.
    pub fn cost<T: Number>(&self, matrix: &CostMatrix<T>) -> T {
        self.0
            .iter()
            .map(|e| match e {
                Edit::Match => T::ZERO,
                Edit::Sub => matrix.mismatch_cost(),
                Edit::Ins => matrix.ins_cost(),
                Edit::Del => matrix.del_cost(),
            })
            .sum()
    }
}

impl From<Vec<Edit>> for EditScript {
    fn from(edits: Vec<Edit>) -> Self {
        Self(edits)
    }
}

impl AsRef<[Edit]> for EditScript {
    fn as_ref(&self) -> &[Edit] {
        &self.0
    }
}

impl IntoIterator for EditScript {
    type Item = Edit;
    type IntoIter = std::vec::IntoIter<Edit>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<Edit> for EditScript {
    fn from_iter<I: IntoIterator<Item = Edit>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
