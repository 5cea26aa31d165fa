//! The nucleotide alphabet and the codec between its 4-bit codes and ASCII.

use crate::MsaError;

/// The number of symbols in the alphabet, including the gap.
pub const NUM_SYMBOLS: usize = 6;

/// The ASCII gap character used in aligned rows.
pub const GAP: u8 = b'-';

/// A symbol in an aligned row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Nucleotide {
    /// Adenine.
    A = 0,
    /// Cytosine.
    C = 1,
    /// Guanine.
    G = 2,
    /// Thymine.
    T = 3,
    /// Any base.
    N = 4,
    /// No base at this position.
    Gap = 5,
}

impl Nucleotide {
    /// All symbols, in code order.
    pub const ALL: [Self; NUM_SYMBOLS] = [Self::A, Self::C, Self::G, Self::T, Self::N, Self::Gap];

    /// The 4-bit code of the symbol.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// The printable ASCII character for the symbol.
    #[must_use]
    pub const fn to_ascii(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::C => b'C',
            Self::G => b'G',
            Self::T => b'T',
            Self::N => b'N',
            Self::Gap => GAP,
        }
    }

    /// Whether this is the gap symbol.
    #[must_use]
    pub const fn is_gap(self) -> bool {
        matches!(self, Self::Gap)
    }

    /// Reads a base from a raw (ungapped) sequence.
    ///
    /// Only the uppercase characters `A`, `C`, `G`, `T` and `N` are bases. The
    /// gap character is not accepted here because raw sequences have no gaps.
    #[must_use]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'A' => Some(Self::A),
            b'C' => Some(Self::C),
            b'G' => Some(Self::G),
            b'T' => Some(Self::T),
            b'N' => Some(Self::N),
            _ => None,
        }
    }

    /// Reads a symbol from its 4-bit code.
    ///
    /// # Errors
    ///
    /// - If `code` is not the code of any symbol.
    pub fn from_code(code: u8) -> Result<Self, MsaError> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(MsaError::Decode { code })
    }
}

impl TryFrom<u8> for Nucleotide {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_ascii(byte).ok_or(byte)
    }
}

impl core::fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", char::from(self.to_ascii()))
    }
}

/// Encodes a raw sequence into 4-bit codes.
///
/// # Arguments
///
/// * `seq_index` - The index of the sequence in the input, used for errors.
/// * `seq` - The raw sequence.
///
/// # Errors
///
/// - If the sequence contains anything other than `A`, `C`, `G`, `T` or `N`.
pub fn encode<S: AsRef<[u8]>>(seq_index: usize, seq: &S) -> Result<Vec<u8>, MsaError> {
    seq.as_ref()
        .iter()
        .enumerate()
        .map(|(position, &byte)| {
            Nucleotide::from_ascii(byte)
                .map(Nucleotide::code)
                .ok_or(MsaError::Alphabet {
                    seq_index,
                    position,
                    byte,
                })
        })
        .collect()
}

/// Decodes 4-bit codes into printable ASCII, gaps included.
///
/// # Errors
///
/// - If any code is not the code of a symbol.
pub fn decode<S: AsRef<[u8]>>(codes: &S) -> Result<Vec<u8>, MsaError> {
    codes
        .as_ref()
        .iter()
        .map(|&code| Nucleotide::from_code(code).map(Nucleotide::to_ascii))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for symbol in Nucleotide::ALL {
            assert_eq!(Nucleotide::from_code(symbol.code()), Ok(symbol));
        }
        assert_eq!(Nucleotide::from_code(6), Err(MsaError::Decode { code: 6 }));
    }

    #[test]
    fn encode_rejects_stray_symbols() {
        assert_eq!(encode(0, &"ACGTN"), Ok(vec![0, 1, 2, 3, 4]));
        assert_eq!(
            encode(3, &"ACgT"),
            Err(MsaError::Alphabet {
                seq_index: 3,
                position: 2,
                byte: b'g'
            })
        );
        assert!(encode(0, &"AC-T").is_err());
        assert_eq!(encode(0, &""), Ok(Vec::new()));
    }

    #[test]
    fn decode_keeps_gaps() {
        let codes: [u8; 4] = [0, 5, 2, 3];
        assert_eq!(decode(&codes), Ok(b"A-GT".to_vec()));
        assert_eq!(decode(&[0_u8, 9]), Err(MsaError::Decode { code: 9 }));
        assert_eq!(Nucleotide::Gap.to_string(), "-");
        assert_eq!(Nucleotide::try_from(b'G'), Ok(Nucleotide::G));
        assert_eq!(Nucleotide::try_from(GAP), Err(GAP));
    }
}
