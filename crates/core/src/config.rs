//! Reserved configuration for the crypto components.

use serde::{Deserialize, Serialize};

/// Configuration accepted by both the hasher and the signer.
///
/// The option set is currently empty. The struct exists so future tuning
/// knobs (work factor, digest algorithm, default token size) can be added
/// without changing the constructor contracts of either component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CryptoConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_serde() {
        let config = CryptoConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, "{}");

        let parsed: CryptoConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_unknown_options_rejected() {
        let result = serde_json::from_str::<CryptoConfig>(r#"{"cost": 10}"#);
        assert!(result.is_err());
    }
}
