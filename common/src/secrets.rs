//! Secret generation utilities for HMAC keys.
//!
//! This module provides functions for generating cryptographically
//! secure random secrets suitable for use as shared HMAC keys.

use rand::RngExt as _;

/// Generates random key material suitable for use as a shared HMAC key.
///
/// Returns 32 alphanumeric bytes, ready to wrap into a
/// [`secrecy::SecretSlice`].
#[must_use]
pub fn generate_secret() -> Vec<u8> {
    // Simple random secret generation: 32 characters
    let mut rng = rand::rng();
    (0..32)
        .map(|_| rng.sample(rand::distr::Alphanumeric))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_secret() {
        let secret = generate_secret();
        assert_eq!(secret.len(), 32);
        assert!(secret.iter().all(u8::is_ascii_alphanumeric));
    }
}
