//! Header verification state machine.
//!
//! Transport-agnostic: callers provide the raw header value, the clock
//! reading, and a callback producing the value to authenticate. The HTTP
//! middleware in the `httpsign` crate maps the outcome onto a response.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use secrecy::SecretSlice;

use crate::codec::parse_header;
use crate::error::VerifyError;
use crate::signing::{calc_signature, signature_matches};

/// Validates a signature header value against the shared secret.
///
/// Steps, in order: parse the header, check freshness, obtain the value
/// to authenticate from `value`, recompute the MAC and compare in
/// constant time. The `value` callback runs only once the freshness
/// check has passed.
///
/// The freshness check is strict (`now > epoch + allowance` rejects), so
/// `now == epoch + allowance` still passes. Only staleness is checked; a
/// timestamp arbitrarily far in the future is accepted.
///
/// # Errors
///
/// [`VerifyError::MalformedHeader`], [`VerifyError::StaleTimestamp`] or
/// [`VerifyError::SignatureMismatch`], matching the first failing step.
pub fn validate_header(
    header: &str,
    key: &SecretSlice<u8>,
    allowance: i64,
    now: i64,
    value: impl FnOnce() -> String,
) -> Result<(), VerifyError> {
    let (signature, epoch) = parse_header(header)?;

    if now > epoch.saturating_add(allowance) {
        return Err(VerifyError::StaleTimestamp {
            timestamp: epoch,
            now,
            allowance,
        });
    }

    let value = value();
    if !signature_matches(key, &value, epoch, &signature) {
        return Err(VerifyError::SignatureMismatch {
            header_signature: STANDARD.encode(&signature),
            calculated: STANDARD.encode(calc_signature(key, &value, epoch)),
            raw: header.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode_header;

    const ALLOWANCE: i64 = 6;

    fn key() -> SecretSlice<u8> {
        b"test secret".to_vec().into()
    }

    fn signed_header(value: &str, epoch: i64) -> String {
        encode_header(&calc_signature(&key(), value, epoch), epoch)
    }

    #[test]
    fn test_valid_header_passes() {
        let header = signed_header("hello", 1000);
        let result = validate_header(&header, &key(), ALLOWANCE, 1000, || "hello".to_string());
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_allowance_boundary_is_inclusive() {
        let header = signed_header("hello", 1000);
        // now == epoch + allowance passes, one second later rejects.
        let at_boundary =
            validate_header(&header, &key(), ALLOWANCE, 1000 + ALLOWANCE, || {
                "hello".to_string()
            });
        assert_eq!(at_boundary, Ok(()));

        let past_boundary =
            validate_header(&header, &key(), ALLOWANCE, 1000 + ALLOWANCE + 1, || {
                "hello".to_string()
            });
        assert_eq!(
            past_boundary,
            Err(VerifyError::StaleTimestamp {
                timestamp: 1000,
                now: 1000 + ALLOWANCE + 1,
                allowance: ALLOWANCE,
            })
        );
    }

    #[test]
    fn test_future_timestamp_accepted() {
        // No upper bound on the timestamp: far-future signatures never go
        // stale. Matches existing deployments.
        let header = signed_header("hello", i64::MAX);
        let result = validate_header(&header, &key(), ALLOWANCE, 1000, || "hello".to_string());
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_zero_allowance() {
        let header = signed_header("hello", 1000);
        assert_eq!(
            validate_header(&header, &key(), 0, 1000, || "hello".to_string()),
            Ok(())
        );
        assert!(matches!(
            validate_header(&header, &key(), 0, 1001, || "hello".to_string()),
            Err(VerifyError::StaleTimestamp { .. })
        ));
    }

    #[test]
    fn test_value_callback_deferred_past_freshness_check() {
        let header = signed_header("hello", 1000);
        let mut invoked = false;
        let result = validate_header(&header, &key(), ALLOWANCE, 2000, || {
            invoked = true;
            "hello".to_string()
        });
        assert!(matches!(result, Err(VerifyError::StaleTimestamp { .. })));
        assert!(!invoked, "value callback must not run for stale headers");
    }

    #[test]
    fn test_wrong_value_is_a_mismatch() {
        let header = signed_header("hello", 1000);
        let result = validate_header(&header, &key(), ALLOWANCE, 1000, || "other".to_string());
        match result {
            Err(VerifyError::SignatureMismatch {
                header_signature,
                calculated,
                raw,
            }) => {
                assert_eq!(raw, header);
                assert_ne!(header_signature, calculated);
            }
            other => panic!("expected a signature mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let header = signed_header("hello", 1000);
        let tampered = if header.starts_with('A') {
            header.replacen('A', "B", 1)
        } else {
            let mut tampered = header.clone();
            tampered.replace_range(0..1, "A");
            tampered
        };
        assert_ne!(tampered, header);
        let result = validate_header(&tampered, &key(), ALLOWANCE, 1000, || "hello".to_string());
        assert!(matches!(
            result,
            Err(VerifyError::SignatureMismatch { .. } | VerifyError::MalformedHeader { .. })
        ));
    }

    #[test]
    fn test_malformed_header_short_circuits() {
        let result = validate_header("", &key(), ALLOWANCE, 1000, || {
            panic!("value callback must not run for malformed headers")
        });
        assert_eq!(
            result,
            Err(VerifyError::MalformedHeader { raw: String::new() })
        );
    }
}
