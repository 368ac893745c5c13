//! Trial-division prime listing.
//!
//! ```text
//! main → Driver → is_prime (per candidate) → Driver → stdout
//! ```

pub mod config;
pub mod driver;
pub mod logging;
pub mod primality;

pub use config::{ConfigError, ScanConfig};
pub use driver::{run, DriverError, ScanSummary};
pub use primality::is_prime;
