//! Password hashing with bcrypt.
//!
//! Tokens get a fast SHA-256 digest because they are high-entropy and not
//! guessable; user-chosen passwords are not, so they go through an
//! adaptive KDF with a fresh random salt per call.

use bcrypt::Version;
use rand::RngCore;
use rand::rngs::OsRng;
use sgs_core::{CryptoError, Result};
use tracing::trace;

/// Work factor for new password hashes. Each verification costs
/// 2^BCRYPT_COST key-setup rounds; raising it slows brute force and
/// legitimate logins alike.
pub const BCRYPT_COST: u32 = 12;

const SALT_LEN: usize = 16;

pub(crate) fn hash(password: &str) -> Result<String> {
    hash_with_cost(password, BCRYPT_COST)
}

/// The salt is drawn here rather than inside the bcrypt crate so an
/// entropy failure surfaces as `RandomSource`, not as an opaque KDF error.
pub(crate) fn hash_with_cost(password: &str, cost: u32) -> Result<String> {
    let mut salt = [0u8; SALT_LEN];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| CryptoError::RandomSource(e.to_string()))?;

    let parts = bcrypt::hash_with_salt(password, cost, salt)
        .map_err(|e| CryptoError::Computation(e.to_string()))?;

    trace!(cost, "derived password hash");
    Ok(parts.format_for_version(Version::TwoA))
}

/// Re-derives the hash using the salt and cost embedded in `hash`.
/// A stored hash that cannot be parsed is an `InvalidArgument`, distinct
/// from a well-formed candidate that simply does not match.
pub(crate) fn verify(candidate: &str, hash: &str) -> Result<bool> {
    bcrypt::verify(candidate, hash)
        .map_err(|e| CryptoError::invalid_argument(format!("malformed password hash: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Cost 6 keeps KDF-heavy tests fast; the public API always uses
    // BCRYPT_COST.
    const TEST_COST: u32 = 6;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hash = hash_with_cost("correct horse", TEST_COST).unwrap();
        assert!(verify("correct horse", &hash).unwrap());
        assert!(!verify("wrong horse", &hash).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_an_error_not_a_mismatch() {
        let err = verify("anything", "not-a-bcrypt-hash").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_fresh_salt_per_call() {
        let a = hash_with_cost("same password", TEST_COST).unwrap();
        let b = hash_with_cost("same password", TEST_COST).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.len(), b.len());
    }
}
