//! Canonical serialization of request tuples prior to signing.

use serde_json::Value;
use sgs_core::{CryptoError, Result};

/// The canonical form is `method + uri`. Body keys and values are
/// deliberately excluded from the signed content: an earlier scheme that
/// concatenated sorted body pairs let attacker-controlled body structure
/// produce colliding serializations (the class of forgery disclosed
/// against several webhook providers). The body must still be present and
/// be a JSON object, but it is not cryptographically bound — callers that
/// need body integrity should put a body digest in the URI.
pub(crate) fn serialize(method: &str, uri: &str, body: &Value) -> Result<String> {
    if method.is_empty() {
        return Err(CryptoError::invalid_argument("missing HTTP method"));
    }

    if uri.is_empty() {
        return Err(CryptoError::invalid_argument("missing HTTP URI"));
    }

    if !body.is_object() {
        return Err(CryptoError::invalid_argument(
            "HTTP body must be a JSON object",
        ));
    }

    Ok(format!("{method}{uri}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_method_and_uri_only() {
        let canonical = serialize("POST", "/v1/users", &json!({"name": "amy"})).unwrap();
        assert_eq!(canonical, "POST/v1/users");
    }

    #[test]
    fn test_body_shape_does_not_change_canonical_form() {
        let a = serialize("GET", "/x", &json!({})).unwrap();
        let b = serialize("GET", "/x", &json!({"a": 1, "b": [2, 3]})).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_method_rejected() {
        let err = serialize("", "/x", &json!({})).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_empty_uri_rejected() {
        let err = serialize("GET", "", &json!({})).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_non_object_bodies_rejected() {
        for body in [json!(null), json!("text"), json!(42), json!([1, 2])] {
            let err = serialize("GET", "/x", &body).unwrap_err();
            assert!(err.is_invalid_argument());
        }
    }
}
