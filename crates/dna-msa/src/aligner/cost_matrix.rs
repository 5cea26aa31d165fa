//! Costs for the Needleman-Wunsch aligner.

use distances::Number;

/// The costs of the edit operations used by the aligner.
///
/// A match always costs zero. The default is the unit-cost model, under which
/// the alignment distance is the Levenshtein edit distance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostMatrix<T: Number> {
    /// The cost of substituting one base for a different one.
    mismatch: T,
    /// The cost of inserting a base from the target sequence.
    ins: T,
    /// The cost of deleting a base from the source sequence.
    del: T,
}

impl<T: Number> Default for CostMatrix<T> {
    fn default() -> Self {
        Self::new(T::ONE, T::ONE, T::ONE)
    }
}

impl<T: Number> CostMatrix<T> {
    /// Create a new cost matrix.
    ///
    /// # Arguments
    ///
    /// * `mismatch`: The cost of a substitution.
    /// * `ins`: The cost of an insertion.
    /// * `del`: The cost of a deletion.
    #[must_use]
    pub const fn new(mismatch: T, ins: T, del: T) -> Self {
        Self { mismatch, ins, del }
    }

    /// Set the cost of substituting one base for a different one.
    #[must_use]
    pub fn with_mismatch_cost(mut self, cost: T) -> Self {
        self.mismatch = cost;
        self
    }

    /// Set the cost of an insertion.
    #[must_use]
    pub fn with_ins_cost(mut self, cost: T) -> Self {
        self.ins = cost;
        self
    }

    /// Set the cost of a deletion.
    #[must_use]
    pub fn with_del_cost(mut self, cost: T) -> Self {
        self.del = cost;
        self
    }

    /// Get the cost of aligning `a` against `b`.
    ///
    /// This is zero when the two symbols are equal.
    pub fn sub_cost(&self, a: u8, b: u8) -> T {
        if a == b {
            T::ZERO
        } else {
            self.mismatch
        }
    }

    /// Get the cost of a substitution.
    pub const fn mismatch_cost(&self) -> T {
        self.mismatch
    }

    /// Get the cost of an insertion.
    pub const fn ins_cost(&self) -> T {
        self.ins
    }

    /// Get the cost of a deletion.
    pub const fn del_cost(&self) -> T {
        self.del
    }
}
