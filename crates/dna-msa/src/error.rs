//! Errors surfaced by the alignment engine.

/// The errors that can be returned while aligning sequences.
///
/// Empty input is not an error: aligning zero sequences gives an empty `Msa`.
/// Broken internal invariants (rows of different widths after a merge, a row
/// that does not reproduce its sequence) are bugs and panic instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MsaError {
    /// A raw sequence contains a symbol outside of `{A, C, G, T, N}`.
    #[error("sequence {seq_index} has invalid symbol {:?} at position {position}", printable(.byte))]
    Alphabet {
        /// The index of the offending sequence in the input.
        seq_index: usize,
        /// The position of the offending symbol in that sequence.
        position: usize,
        /// The offending byte.
        byte: u8,
    },
    /// A code that is not a symbol, or a gap inside a sequence being merged.
    #[error("invalid nucleotide code {code}")]
    Decode {
        /// The offending code.
        code: u8,
    },
}

/// Renders a raw byte for an error message.
#[allow(clippy::trivially_copy_pass_by_ref)]
fn printable(byte: &u8) -> char {
    char::from(*byte)
}
