//! Error types for Wayfarer.

use thiserror::Error;

/// Main error type for Wayfarer operations.
#[derive(Debug, Error)]
pub enum WayfarerError {
    /// A caller supplied a malformed argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A search value fell outside the supplied range.
    #[error("Out of range: {0}")]
    OutOfRange(String),
}

/// Result type alias for Wayfarer operations.
pub type Result<T> = std::result::Result<T, WayfarerError>;
