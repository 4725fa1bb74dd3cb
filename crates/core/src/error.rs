//! Error types shared across the SGS crypto crates.

use thiserror::Error;

/// Result type alias for crypto operations.
pub type Result<T> = std::result::Result<T, CryptoError>;

/// Errors that can occur during crypto operations.
///
/// Verification operations keep two outcomes strictly apart: input that
/// could not be processed at all is an `Err` of this type, while input
/// that was well-formed but did not match is an `Ok(false)` result.
/// Callers must not collapse the two — a malformed-input error is not an
/// "access denied".
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Malformed or missing input. Never retried internally.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The secure random source failed. Propagated rather than retried,
    /// since retrying a failing entropy source risks predictable output.
    #[error("random source failure: {0}")]
    RandomSource(String),

    /// An underlying hash or HMAC primitive failed unexpectedly.
    /// Treated as fatal, never masked.
    #[error("computation failure: {0}")]
    Computation(String),
}

impl CryptoError {
    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// True if this error reports malformed or missing input.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
