use std::io::{self, BufWriter, Write};

use anyhow::Context;
use clap::Parser;

use primes::logging::init_tracing;
use primes::{run, ScanConfig};

/// Lists every prime below 1000 using trial division.
#[derive(Debug, Parser)]
#[command(name = "primes", version)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    init_tracing();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = run(&mut out, &ScanConfig::default()).context("Prime scan failed")?;
    out.flush().context("Failed to flush standard output")?;

    tracing::debug!(?summary, "Exiting");
    Ok(())
}
