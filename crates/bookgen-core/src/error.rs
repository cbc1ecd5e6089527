//! Error types for generation operations.

/// Error type for generation operations.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum GenerateError {
    /// Page numbers are 1-based
    #[error("Invalid page number: {0} (pages are 1-based)")]
    InvalidPage(u64),

    /// Target averages must be finite and non-negative
    #[error("Invalid average: {0} (must be finite and >= 0)")]
    InvalidAverage(f64),
}
