use thiserror::Error;

use crate::config::types::ScanConfig;

/// Errors raised by an unusable scan configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Empty scan range: start {start} is not below bound {bound}")]
    EmptyRange { start: i64, bound: i64 },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl ScanConfig {
    /// Validates the configuration.
    ///
    /// Checks:
    /// - `start` is strictly below `bound`
    /// - the separator is not empty, so adjacent primes stay distinguishable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start >= self.bound {
            return Err(ConfigError::EmptyRange {
                start: self.start,
                bound: self.bound,
            });
        }

        if self.separator.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Separator must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
