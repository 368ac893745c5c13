mod types;
mod validate;

pub use types::ScanConfig;
pub use validate::ConfigError;
