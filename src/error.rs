//! Error types for the model confidence library.

use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// Probability outside the (0, 1] domain of the bound
    #[error("invalid probability {0}: must be in (0, 1]")]
    InvalidProbability(f64),

    /// Confidence parameter outside (0, 1]
    #[error("invalid confidence delta {0}: must be in (0, 1]")]
    InvalidConfidence(f64),

    /// Sample count of zero
    #[error("sample count must be positive")]
    ZeroSamples,
}

/// Result type alias for the library.
pub type Result<T> = std::result::Result<T, Error>;
