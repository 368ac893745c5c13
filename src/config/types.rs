/// Parameters of a single scan.
///
/// The binary only ever runs `ScanConfig::default()`; the bound is fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// First candidate tested.
    pub start: i64,
    /// Exclusive upper bound on candidates.
    pub bound: i64,
    /// Text written after every prime.
    pub separator: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            start: 1,
            bound: 1000,
            separator: ", ".to_string(),
        }
    }
}
