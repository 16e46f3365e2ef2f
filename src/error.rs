//! Bitseq-specific errors
//!
//! There are a few input errors and some related to [crate::nist].
use thiserror::Error;

/// An error that Bitseq could end up producing.
///
/// There are a few families of errors in Bitseq:
/// - related to reading the _length_ of the sequence
/// - related to parsing a sequence of bits
/// - related to assessing a sequence
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BitseqError {
    /// `{0}` is the token that could not be parsed.
    #[error("could not parse `{0}` as an integer")]
    InvalidLength(String),
    #[error("length should be non-negative, found {0}")]
    NegativeLength(i64),
    #[error("length should be at most {max}, found {found}")]
    LengthTooLarge { max: usize, found: i64 },
    #[error("no length found on input")]
    MissingLength,
    #[error("expected '0' or '1' at index {index}, found {found:?}")]
    InvalidBit { index: usize, found: char },
    #[error("sequence is empty")]
    EmptySequence,
    #[error("sequence is too short: expected at least {expected} bits, found {found}")]
    SequenceTooShort { expected: usize, found: usize },
    /// `{0}` is the message of the underlying I/O error.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for BitseqError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
