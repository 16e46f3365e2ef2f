use std::io::{self, Write};

use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use bitseq::{input::read_length, sequence::generate};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("cannot init logger: {}", e))?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let length = read_length(&mut stdin.lock(), &mut stdout)?;

    let mut rng = StdRng::from_entropy();
    let sequence = generate(length, &mut rng);
    info!("generated a sequence of {} bits", sequence.len());

    writeln!(stdout, "{}", sequence)?;

    Ok(())
}
