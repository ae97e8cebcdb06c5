use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Destination buffer too small for the computed result.
    Capacity { needed: usize, available: usize },
    /// A scanned byte is not part of the alphabet.
    InvalidSymbol(u8),
    /// Pad symbols in the wrong place, or too many of them.
    InvalidPadding,
    /// Encoded length with remainder 1 modulo 4; 6 bits cannot
    /// reconstitute a byte.
    InvalidLength(usize),
    /// Alphabet table with duplicate or non-printable symbols.
    InvalidAlphabet,
    /// Hash record does not start with `$` or is truncated.
    MalformedRecord,
    /// Version character above the supported revision.
    UnsupportedVersion(char),
    /// Minor revision character other than `a`.
    BadMinorVersion(char),
    /// Cost field not two decimal digits, or outside the supported range.
    BadCost,
    /// Salt field does not decode to exactly 16 bytes.
    BadSalt,
    /// Keying material is empty; the key schedule cannot cycle it.
    EmptyPassword,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Capacity { needed, available } => {
                write!(f, "output buffer too small: need {needed}, have {available}")
            }
            Error::InvalidSymbol(b) => write!(f, "byte {b:#04x} is not in the alphabet"),
            Error::InvalidPadding => write!(f, "malformed padding"),
            Error::InvalidLength(n) => write!(f, "encoded length {n} has remainder 1"),
            Error::InvalidAlphabet => {
                write!(f, "alphabet symbols must be distinct printable ASCII")
            }
            Error::MalformedRecord => write!(f, "malformed hash record"),
            Error::UnsupportedVersion(c) => write!(f, "unsupported hash version '{c}'"),
            Error::BadMinorVersion(c) => write!(f, "unsupported minor revision '{c}'"),
            Error::BadCost => write!(f, "cost must be two decimal digits between 04 and 31"),
            Error::BadSalt => write!(f, "salt field must be 22 symbols"),
            Error::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for Error {}
