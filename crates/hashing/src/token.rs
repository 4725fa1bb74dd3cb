//! Random token generation and SHA-256 token digests.

use rand::RngCore;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};
use sgs_core::{CryptoError, Result, secure_compare};

/// Number of random bytes drawn for a token when no size is given.
/// The hex encoding doubles this, so the default token is 256 characters.
pub const DEFAULT_TOKEN_BYTES: usize = 128;

pub(crate) fn generate(size_bytes: usize) -> Result<String> {
    if size_bytes == 0 {
        return Err(CryptoError::invalid_argument(
            "token size must be at least one byte",
        ));
    }

    let mut buffer = vec![0u8; size_bytes];
    OsRng
        .try_fill_bytes(&mut buffer)
        .map_err(|e| CryptoError::RandomSource(e.to_string()))?;

    Ok(hex::encode(buffer))
}

pub(crate) fn digest(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

pub(crate) fn matches(candidate: &str, digest_hex: &str) -> bool {
    secure_compare(digest(candidate).as_bytes(), digest_hex.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_rejects_zero_size() {
        let err = generate(0).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_generate_hex_length_is_double_the_byte_count() {
        let token = generate(16).unwrap();
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_digest_is_deterministic_sha256_hex() {
        let a = digest("some-token");
        let b = digest("some-token");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| matches!(c, 'a'..='f' | '0'..='9')));
    }

    #[test]
    fn test_matches_round_trip() {
        let token = generate(32).unwrap();
        let d = digest(&token);
        assert!(matches(&token, &d));
        assert!(!matches("something-else", &d));
    }
}
