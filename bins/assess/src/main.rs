use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use bitseq::{
    nist::{self, Report},
    Sequence,
};

fn parse_alpha(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(alpha) if (0.0..=1.0).contains(&alpha) => Ok(alpha),
        Ok(alpha) => Err(format!("significance level should be in [0, 1], found {}", alpha)),
        Err(e) => Err(format!("could not parse significance level: {}", e)),
    }
}

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// a JSON object mapping names to sequences of '0' and '1'
    sequences: PathBuf,

    /// the significance level the p-values are compared with
    #[arg(long, default_value_t = 0.01, value_parser = parse_alpha)]
    alpha: f64,
}

/// parse a JSON object mapping names to sequences of bits
///
/// surrounding whitespace around each sequence is ignored.
fn parse_sequences(content: &str) -> Result<BTreeMap<String, Sequence>> {
    let raw: BTreeMap<String, String> =
        serde_json::from_str(content).context("expected a JSON object of strings")?;

    raw.into_iter()
        .map(|(name, bits)| {
            let sequence: Sequence = bits
                .trim()
                .parse()
                .with_context(|| format!("invalid sequence `{}`", name))?;
            Ok::<_, anyhow::Error>((name, sequence))
        })
        .collect()
}

fn read_sequences(path: &Path) -> Result<BTreeMap<String, Sequence>> {
    info!("reading sequences from `{:?}`", path);
    let content =
        std::fs::read_to_string(path).with_context(|| format!("could not read {:?}", path))?;

    parse_sequences(&content).with_context(|| format!("could not parse {:?}", path))
}

fn log_report(name: &str, report: &Report) {
    let results = [
        ("frequency bitwise", &report.frequency),
        ("same consecutive bits", &report.runs),
        ("longest sequence in block", &report.longest_run),
    ];
    for (test, res) in results {
        match res {
            Ok(p) => info!("{} test result for {}: {}", test, name, p),
            Err(e) => warn!("{} test failed for {}: {}", test, name, e),
        }
    }
}

fn format_line(name: &str, report: &Report, alpha: f64) -> String {
    format!("{}: {} pass={}", name, report, report.passes(alpha))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("cannot init logger: {}", e))?;

    let cli = Cli::parse();

    let sequences = read_sequences(&cli.sequences)?;
    if sequences.is_empty() {
        warn!("no sequence found in `{:?}`", cli.sequences);
    }

    for (name, sequence) in &sequences {
        let report = nist::assess(sequence);
        log_report(name, &report);
        println!("{}", format_line(name, &report, cli.alpha));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use bitseq::nist;

    use super::{format_line, parse_alpha, parse_sequences};

    const NIST_LONGEST_RUN_EXAMPLE: &str = "11001100000101010110110001001100111000000000001001001101010100010001001111010110100000001101011111001100111001101101100010110010";

    fn alpha_template(input: &str, expected: Option<f64>) {
        let test_case = format!("TEST | alpha: {:?}", input);

        match (parse_alpha(input), expected) {
            (Ok(alpha), Some(e)) => assert_eq!(alpha, e, "{test_case}"),
            (Err(_), None) => {}
            (res, _) => panic!("unexpected result {:?}\n{test_case}", res),
        }
    }

    #[test]
    fn alpha() {
        alpha_template("0.01", Some(0.01));
        alpha_template("0", Some(0.0));
        alpha_template("1", Some(1.0));
        alpha_template("1.5", None);
        alpha_template("-0.1", None);
        alpha_template("abc", None);
    }

    #[test]
    fn sequences() {
        let sequences = parse_sequences(r#"{"cpp": " 0110 \n", "java": "1"}"#).unwrap();

        assert_eq!(sequences.len(), 2);
        assert_eq!(sequences["cpp"].to_string(), "0110");
        assert_eq!(sequences["java"].to_string(), "1");
        assert!(parse_sequences("{}").unwrap().is_empty());
    }

    #[test]
    fn invalid_sequences() {
        let err = parse_sequences(r#"{"cpp": "01x0"}"#).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("invalid sequence `cpp`"), "{}", message);
        assert!(
            message.contains("expected '0' or '1' at index 2, found 'x'"),
            "{}",
            message
        );

        assert!(parse_sequences(r#"{"cpp": 101}"#).is_err());
        assert!(parse_sequences(r#"["0101"]"#).is_err());
        assert!(parse_sequences("not json").is_err());
    }

    #[test]
    fn mixed_lengths() {
        let content = format!(
            r#"{{"a_short": "0110100110", "b_nist": "{}"}}"#,
            NIST_LONGEST_RUN_EXAMPLE
        );
        let sequences = parse_sequences(&content).unwrap();

        let lines: Vec<String> = sequences
            .iter()
            .map(|(name, sequence)| format_line(name, &nist::assess(sequence), 0.01))
            .collect();

        assert_eq!(lines.len(), 2);
        assert!(
            lines[0].starts_with("a_short: frequency=")
                && lines[0].ends_with(" longest_run=n/a pass=false"),
            "{}",
            lines[0]
        );
        assert_eq!(
            lines[1],
            "b_nist: frequency=0.215925 runs=0.620729 longest_run=0.180598 pass=true"
        );
    }
}
