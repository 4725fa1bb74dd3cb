//! Constant-time operations for security.

use subtle::{Choice, ConstantTimeEq};

/// Compare two byte slices in constant time.
///
/// Inspects a fixed number of byte positions derived from the longer
/// input, so execution time does not depend on where the first mismatch
/// occurs. A length difference is folded into the accumulated result
/// instead of returning early, so timing does not reveal whether the
/// lengths matched either.
///
/// # Arguments
/// * `a` - First byte slice
/// * `b` - Second byte slice
///
/// # Returns
/// true if slices are equal, false otherwise
pub fn secure_compare(a: &[u8], b: &[u8]) -> bool {
    let positions = a.len().max(b.len());
    let mut diff = Choice::from(u8::from(a.len() != b.len()));
    for i in 0..positions {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        diff |= !x.ct_eq(&y);
    }
    bool::from(!diff)
}
