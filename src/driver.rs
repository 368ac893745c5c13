//! Scan loop: tests every candidate in range and writes the listing.
//!
//! Output layout for the default scan:
//!
//! ```text
//! 2, 3, 5, ... 997, 
//! Found 168 primes
//! Done.
//! ```

use std::io::{self, Write};

use thiserror::Error;
use tracing::{info, trace};

use crate::config::{ConfigError, ScanConfig};
use crate::primality::is_prime;

/// Errors that can occur while running a scan.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Invalid scan configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to write scan output: {0}")]
    Output(#[from] io::Error),
}

/// What a completed scan found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanSummary {
    /// Number of primes written.
    pub count: u64,
    /// Number of candidates tested.
    pub examined: u64,
    pub first: Option<i64>,
    pub last: Option<i64>,
}

impl ScanSummary {
    fn record(&mut self, prime: i64) {
        self.count += 1;
        self.first.get_or_insert(prime);
        self.last = Some(prime);
    }
}

/// Runs a scan over `config.start..config.bound`, writing to `out`.
///
/// The configuration is validated before anything is written. The sink is
/// not flushed; callers holding a buffered writer flush it themselves.
pub fn run<W: Write>(out: &mut W, config: &ScanConfig) -> Result<ScanSummary, DriverError> {
    config.validate()?;
    info!(start = config.start, bound = config.bound, "Scan started");

    let mut summary = ScanSummary::default();
    let mut candidate = config.start;
    while candidate < config.bound {
        summary.examined += 1;
        if is_prime(candidate) {
            summary.record(candidate);
            trace!(candidate, "prime");
            write!(out, "{}{}", candidate, config.separator)?;
        }
        candidate += 1;
    }

    writeln!(out)?;
    writeln!(out, "Found {} primes", summary.count)?;
    writeln!(out, "Done.")?;

    info!(
        count = summary.count,
        examined = summary.examined,
        "Scan complete"
    );
    Ok(summary)
}
