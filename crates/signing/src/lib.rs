//! HMAC request signing and validation for the SGS trust boundary.
//!
//! This crate provides:
//! - Canonical serialization of (method, uri, body) request tuples
//! - HMAC-SHA256 signatures over the canonical form, base64-encoded
//! - Constant-time signature validation
//!
//! All operations are stateless and safe to call concurrently.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use sgs_signing::Signer;
//!
//! let signer = Signer::default();
//! let body = json!({"amount": 100});
//!
//! let signature = signer
//!     .sign_request(b"shared-key", "POST", "/v1/charges", &body)
//!     .expect("well-formed request");
//! assert!(signer
//!     .validate_request(&signature, b"shared-key", "POST", "/v1/charges", &body)
//!     .expect("well-formed request"));
//! ```

#![warn(missing_docs)]

mod canonical;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, Mac};
use serde_json::Value;
use sgs_core::{CryptoConfig, CryptoError, Result, secure_compare};
use sha2::Sha256;
use tracing::debug;

type HmacSha256 = Hmac<Sha256>;

/// Signs request tuples with HMAC-SHA256 and validates signatures in
/// constant time.
#[derive(Debug, Clone, Default)]
pub struct Signer {
    config: CryptoConfig,
}

impl Signer {
    /// Create a signer with the given configuration.
    pub fn new(config: CryptoConfig) -> Self {
        Self { config }
    }

    /// The configuration this signer was built with.
    pub fn config(&self) -> &CryptoConfig {
        &self.config
    }

    /// Canonicalize a request tuple into the byte string that gets
    /// signed. The body is validated but excluded from the output; see
    /// the crate docs for the forgery history behind that choice.
    ///
    /// # Errors
    /// `InvalidArgument` for an empty method, an empty URI, or a body
    /// that is not a JSON object (`null` included).
    pub fn serialize_request(&self, method: &str, uri: &str, body: &Value) -> Result<String> {
        canonical::serialize(method, uri, body)
    }

    /// Sign a request tuple: HMAC-SHA256 over the canonical form under
    /// `private_key`, base64-encoded (44 characters).
    ///
    /// # Errors
    /// Serialization errors propagate unchanged; a failure of the HMAC
    /// primitive itself is a `Computation` error.
    pub fn sign_request(
        &self,
        private_key: &[u8],
        method: &str,
        uri: &str,
        body: &Value,
    ) -> Result<String> {
        let canonical = canonical::serialize(method, uri, body)?;

        let mut mac = HmacSha256::new_from_slice(private_key)
            .map_err(|e| CryptoError::Computation(e.to_string()))?;
        mac.update(canonical.as_bytes());

        Ok(BASE64.encode(mac.finalize().into_bytes()))
    }

    /// Recompute the signature for the given fields and compare it to
    /// `signature` in constant time.
    ///
    /// A non-matching signature yields `Ok(false)`, never an error; only
    /// a request tuple that cannot be serialized is an error.
    pub fn validate_request(
        &self,
        signature: &str,
        private_key: &[u8],
        method: &str,
        uri: &str,
        body: &Value,
    ) -> Result<bool> {
        let expected = self.sign_request(private_key, method, uri, body)?;
        let matched = secure_compare(signature.as_bytes(), expected.as_bytes());
        debug!(matched, "validated request signature");
        Ok(matched)
    }
}
