//! Password and token hashing for the SGS trust boundary.
//!
//! This crate provides:
//! - bcrypt password hashes with a fresh random salt per call
//! - SHA-256 token digests with constant-time verification
//! - Cryptographically strong random token generation
//!
//! All operations are stateless and safe to call concurrently. Password
//! hashing deliberately costs `2^BCRYPT_COST` work; async callers should
//! offload it (e.g. `spawn_blocking`) rather than await it inline.
//!
//! # Example
//!
//! ```rust,no_run
//! use sgs_hashing::Hasher;
//!
//! let hasher = Hasher::default();
//!
//! let hash = hasher.hash_password("hunter2").expect("hashing failed");
//! assert!(hasher.compare_password("hunter2", &hash).expect("malformed hash"));
//!
//! let token = hasher.generate_token().expect("entropy source failed");
//! let digest = hasher.hash_token(&token);
//! assert!(hasher.compare_token(&token, &digest));
//! ```

#![warn(missing_docs)]

mod password;
mod token;

pub use password::BCRYPT_COST;
pub use token::DEFAULT_TOKEN_BYTES;

use sgs_core::{CryptoConfig, Result};
use tracing::debug;

/// Produces and verifies salted password hashes and token digests, and
/// generates cryptographically strong random tokens.
#[derive(Debug, Clone, Default)]
pub struct Hasher {
    config: CryptoConfig,
}

impl Hasher {
    /// Create a hasher with the given configuration.
    pub fn new(config: CryptoConfig) -> Self {
        Self { config }
    }

    /// The configuration this hasher was built with.
    pub fn config(&self) -> &CryptoConfig {
        &self.config
    }

    /// Generate a random token of [`DEFAULT_TOKEN_BYTES`] bytes,
    /// hex-encoded (256 characters).
    pub fn generate_token(&self) -> Result<String> {
        self.generate_token_with_size(DEFAULT_TOKEN_BYTES)
    }

    /// Generate a random token of `size_bytes` bytes, hex-encoded to
    /// `2 * size_bytes` characters.
    ///
    /// # Errors
    /// `InvalidArgument` if `size_bytes` is zero; `RandomSource` if the
    /// entropy source fails (propagated, never retried).
    pub fn generate_token_with_size(&self, size_bytes: usize) -> Result<String> {
        let token = token::generate(size_bytes)?;
        debug!(size_bytes, "generated token");
        Ok(token)
    }

    /// Compute the SHA-256 digest of a token as 64 lowercase hex
    /// characters. Deterministic and side-effect free.
    pub fn hash_token(&self, token: &str) -> String {
        token::digest(token)
    }

    /// Recompute the candidate's digest and compare it to `digest` in
    /// constant time. Returns `false` for any well-formed non-matching
    /// candidate, never an error.
    pub fn compare_token(&self, candidate: &str, digest: &str) -> bool {
        token::matches(candidate, digest)
    }

    /// Hash a password with bcrypt under a fresh random salt.
    ///
    /// The output is the self-describing 60-character
    /// `$2a$<cost>$<salt+hash>` form; two calls on the same password
    /// produce different hashes. Equality on hashes is meaningless — use
    /// [`Hasher::compare_password`].
    ///
    /// # Errors
    /// `RandomSource` if salt generation fails; `Computation` if the KDF
    /// itself fails.
    pub fn hash_password(&self, password: &str) -> Result<String> {
        let hash = password::hash(password)?;
        debug!("hashed password");
        Ok(hash)
    }

    /// Re-derive the candidate's hash using the salt and cost embedded in
    /// `hash` and compare the tags in constant time.
    ///
    /// A non-matching candidate yields `Ok(false)`; only an unparseable
    /// stored hash is an error (`InvalidArgument`).
    pub fn compare_password(&self, candidate: &str, hash: &str) -> Result<bool> {
        password::verify(candidate, hash)
    }
}
