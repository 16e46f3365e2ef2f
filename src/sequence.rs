//! draw and represent sequences of binary digits
use std::str::FromStr;

use rand::{Rng, RngCore};
use tracing::debug;

use crate::error::BitseqError;

/// a single binary digit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    /// the character used to render the bit, either `'0'` or `'1'`
    pub fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }

    pub fn is_one(self) -> bool {
        self == Bit::One
    }
}

impl From<bool> for Bit {
    fn from(b: bool) -> Self {
        if b {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl TryFrom<char> for Bit {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0' => Ok(Bit::Zero),
            '1' => Ok(Bit::One),
            _ => Err(c),
        }
    }
}

/// an ordered sequence of bits
///
/// a [`Sequence`] is rendered as a contiguous string of `'0'` and `'1'`, with
/// no delimiter between the bits, and can be parsed back from such a string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sequence {
    bits: Vec<Bit>,
}

impl Sequence {
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[Bit] {
        &self.bits
    }

    pub fn iter(&self) -> impl Iterator<Item = Bit> + '_ {
        self.bits.iter().copied()
    }

    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|b| b.is_one()).count()
    }
}

impl From<Vec<Bit>> for Sequence {
    fn from(bits: Vec<Bit>) -> Self {
        Self { bits }
    }
}

impl FromIterator<Bit> for Sequence {
    fn from_iter<I: IntoIterator<Item = Bit>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", bit.as_char())?;
        }

        Ok(())
    }
}

impl FromStr for Sequence {
    type Err = BitseqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(index, c)| {
                Bit::try_from(c).map_err(|found| BitseqError::InvalidBit { index, found })
            })
            .collect()
    }
}

/// draw a sequence of `length` bits
///
/// each bit is drawn independently and is `0` or `1` with probability $1/2$.
///
/// the bits are allocated up front, lengths read from a user are bounded by
/// [`crate::input::MAX_LENGTH`].
pub fn generate(length: usize, rng: &mut impl RngCore) -> Sequence {
    debug!("drawing {} bits", length);
    let mut bits = Vec::with_capacity(length);
    for _ in 0..length {
        bits.push(Bit::from(rng.gen::<bool>()));
    }

    Sequence { bits }
}
