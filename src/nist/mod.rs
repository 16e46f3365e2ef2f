//! statistical tests of randomness on binary sequences
//!
//! the tests follow the NIST SP 800-22 test suite: each one computes a
//! statistic on a [`Sequence`] and turns it into a p-value, i.e. the
//! probability that a perfectly random source would produce a statistic at
//! least as extreme.
//!
//! a sequence is considered random by a test when its p-value is greater
//! than or equal to the chosen significance level, e.g. $0.01$.
use statrs::function::{erf::erfc, gamma::gamma_ur};
use tracing::{debug, info, warn};

use crate::{
    error::BitseqError,
    sequence::{Bit, Sequence},
};

/// the size of the blocks in [`longest_run_of_ones`]
pub const BLOCK_SIZE: usize = 8;
/// the minimum number of bits [`longest_run_of_ones`] accepts with blocks of size [`BLOCK_SIZE`]
pub const MIN_LONGEST_RUN_LENGTH: usize = 128;
/// the theoretical probabilities of the longest run of ones in a block of
/// [`BLOCK_SIZE`] bits to be $\leq 1$, $2$, $3$ and $\geq 4$
pub const LONGEST_RUN_PROBABILITIES: [f64; 4] = [0.2148, 0.3672, 0.2305, 0.1875];

fn ensure_not_empty(sequence: &Sequence) -> Result<(), BitseqError> {
    if sequence.is_empty() {
        return Err(BitseqError::EmptySequence);
    }

    Ok(())
}

/// the frequency (monobit) test
///
/// checks that the proportion of ones in the whole sequence is close to $1/2$.
pub fn frequency(sequence: &Sequence) -> Result<f64, BitseqError> {
    ensure_not_empty(sequence)?;

    let n = sequence.len() as f64;
    let sum: i64 = sequence
        .iter()
        .map(|b| if b.is_one() { 1 } else { -1 })
        .sum();
    let s_obs = (sum as f64).abs() / n.sqrt();
    debug!("frequency: S_n = {}, s_obs = {}", sum, s_obs);

    Ok(erfc(s_obs / 2f64.sqrt()))
}

/// the runs test
///
/// checks that the number of uninterrupted runs of identical bits is as
/// expected, i.e. that the sequence oscillates between zeros and ones neither
/// too fast nor too slowly.
///
/// the statistic $V_n$ is the number of runs, i.e. one more than the number
/// of transitions between consecutive bits, not the transitions alone.
///
/// if the sequence already fails the frequency prerequisite, the p-value is
/// $0$.
pub fn runs(sequence: &Sequence) -> Result<f64, BitseqError> {
    ensure_not_empty(sequence)?;

    let n = sequence.len() as f64;
    let pi = sequence.count_ones() as f64 / n;
    let tau = 2.0 / n.sqrt();
    if (pi - 0.5).abs() >= tau {
        debug!("runs: frequency prerequisite failed, pi = {}, tau = {}", pi, tau);
        return Ok(0.0);
    }

    let transitions = sequence
        .bits()
        .windows(2)
        .filter(|w| w[0] != w[1])
        .count();
    let v_obs = (transitions + 1) as f64;
    debug!("runs: V_n = {}", v_obs);

    let p = pi * (1.0 - pi);
    Ok(erfc((v_obs - 2.0 * n * p).abs() / (2.0 * (2.0 * n).sqrt() * p)))
}

/// the length of the longest run of ones in `block`
fn longest_run(block: &[Bit]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for bit in block {
        if bit.is_one() {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }

    longest
}

/// the longest run of ones in a block test
///
/// splits the sequence into blocks of [`BLOCK_SIZE`] bits, any trailing
/// partial block being ignored, and compares the distribution of the longest
/// run of ones in each block with [`LONGEST_RUN_PROBABILITIES`].
pub fn longest_run_of_ones(sequence: &Sequence) -> Result<f64, BitseqError> {
    ensure_not_empty(sequence)?;
    if sequence.len() < MIN_LONGEST_RUN_LENGTH {
        return Err(BitseqError::SequenceTooShort {
            expected: MIN_LONGEST_RUN_LENGTH,
            found: sequence.len(),
        });
    }

    let mut frequencies = [0usize; 4];
    let blocks = sequence.bits().chunks_exact(BLOCK_SIZE);
    let nb_blocks = blocks.len() as f64;
    for block in blocks {
        let class = longest_run(block).clamp(1, 4) - 1;
        frequencies[class] += 1;
    }
    debug!("longest run: frequencies = {:?}", frequencies);

    let chi_square: f64 = frequencies
        .iter()
        .zip(LONGEST_RUN_PROBABILITIES.iter())
        .map(|(&v, &pi)| {
            let expected = nb_blocks * pi;
            (v as f64 - expected).powi(2) / expected
        })
        .sum();
    debug!("longest run: chi2 = {}", chi_square);

    if chi_square <= 0.0 {
        return Ok(1.0);
    }
    Ok(gamma_ur(3.0 / 2.0, chi_square / 2.0))
}

/// the outcome of all the tests on a single sequence
///
/// each test is run on its own, so a test that cannot be applied, e.g.
/// [`longest_run_of_ones`] on a short sequence, does not hide the p-values of
/// the others.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub frequency: Result<f64, BitseqError>,
    pub runs: Result<f64, BitseqError>,
    pub longest_run: Result<f64, BitseqError>,
}

impl Report {
    fn results(&self) -> [(&'static str, &Result<f64, BitseqError>); 3] {
        [
            ("frequency", &self.frequency),
            ("runs", &self.runs),
            ("longest_run", &self.longest_run),
        ]
    }

    /// whether all the tests could be run and pass at significance level `alpha`
    pub fn passes(&self, alpha: f64) -> bool {
        self.results()
            .iter()
            .all(|(_, res)| matches!(res, Ok(p) if *p >= alpha))
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, (name, res)) in self.results().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match res {
                Ok(p) => write!(f, "{}={:.6}", name, p)?,
                Err(_) => write!(f, "{}=n/a", name)?,
            }
        }

        Ok(())
    }
}

/// run all the tests on a sequence
///
/// a test that fails is logged and recorded in the [`Report`], the remaining
/// tests still run.
pub fn assess(sequence: &Sequence) -> Report {
    info!("assessing a sequence of {} bits", sequence.len());
    let report = Report {
        frequency: frequency(sequence),
        runs: runs(sequence),
        longest_run: longest_run_of_ones(sequence),
    };

    for (name, res) in report.results() {
        if let Err(e) = res {
            warn!("{} test could not be run: {}", name, e);
        }
    }

    report
}
