//! Bitseq: pseudo-random binary sequences
//!
//! - [`sequence`] draws uniform bits from any [`rand::RngCore`]
//! - [`input`] reads the requested length from an interactive prompt
//! - [`nist`] computes the p-values of a few statistical tests on a sequence
//!
//! # Example
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let sequence = bitseq::sequence::generate(128, &mut rng);
//!
//! assert_eq!(sequence.len(), 128);
//! assert!(sequence.to_string().chars().all(|c| c == '0' || c == '1'));
//! ```
pub mod error;
pub mod input;
pub mod nist;
pub mod sequence;

pub use error::BitseqError;
pub use sequence::{Bit, Sequence};
