//! read the length of the sequence from an interactive prompt
use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::BitseqError;

pub const PROMPT: &str = "Enter number of bits for sequence: ";
/// the largest length accepted, one bit takes one byte in a [`crate::Sequence`]
pub const MAX_LENGTH: usize = 1 << 30;

/// parse a single token as the length of a sequence
///
/// negative lengths are rejected with [`BitseqError::NegativeLength`] and
/// lengths above [`MAX_LENGTH`] with [`BitseqError::LengthTooLarge`].
pub fn parse_length(token: &str) -> Result<usize, BitseqError> {
    let value: i64 = token
        .parse()
        .map_err(|_| BitseqError::InvalidLength(token.to_string()))?;

    let length = usize::try_from(value).map_err(|_| BitseqError::NegativeLength(value))?;
    if length > MAX_LENGTH {
        return Err(BitseqError::LengthTooLarge {
            max: MAX_LENGTH,
            found: value,
        });
    }

    Ok(length)
}

/// prompt for a length on `output` and read it from `input`
///
/// blank lines are skipped and only the first token of the first non-blank
/// line is considered.
pub fn read_length<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<usize, BitseqError> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(BitseqError::MissingLength);
        }

        if let Some(token) = line.split_whitespace().next() {
            debug!("read length token `{}`", token);
            return parse_length(token);
        }
    }
}
