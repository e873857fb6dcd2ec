//! HMAC-SHA256 signing over the canonical message.
//!
//! The canonical message is derived deterministically from the signed
//! value and the epoch timestamp; both sides must agree on the value
//! out-of-band.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret as _, SecretSlice};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::codec::encode_header;

/// Builds the canonical message: the UTF-8 bytes of `value` immediately
/// followed by the decimal digits of `epoch`, with **no separator**
/// (`"abc"` at epoch `1000` yields `"abc1000"`).
///
/// The missing separator is a quirk kept for wire compatibility with
/// existing deployments; it means `("ab", 12)` and `("ab1", 2)` produce
/// the same message. Do not change it.
#[must_use]
pub fn canonical_message(value: &str, epoch: i64) -> Vec<u8> {
    format!("{value}{epoch}").into_bytes()
}

fn create_hmac(message: &[u8], key: &SecretSlice<u8>) -> Hmac<Sha256> {
    let mut mac = Hmac::<Sha256>::new_from_slice(key.expose_secret())
        .expect("HMAC can take a key of any size");
    mac.update(message);
    mac
}

/// Computes the raw 32-byte HMAC-SHA256 signature of `value` at `epoch`.
#[must_use]
pub fn calc_signature(key: &SecretSlice<u8>, value: &str, epoch: i64) -> Vec<u8> {
    create_hmac(&canonical_message(value, epoch), key)
        .finalize()
        .into_bytes()
        .to_vec()
}

/// Checks `candidate` against the recomputed signature in constant time.
#[must_use]
pub fn signature_matches(
    key: &SecretSlice<u8>,
    value: &str,
    epoch: i64,
    candidate: &[u8],
) -> bool {
    create_hmac(&canonical_message(value, epoch), key)
        .verify_slice(candidate)
        .is_ok()
}

/// Gets the current Unix timestamp in seconds.
#[expect(
    clippy::missing_panics_doc,
    reason = "Expectation should never be false"
)]
#[must_use]
pub fn unix_time_seconds() -> i64 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs();
    i64::try_from(secs).expect("epoch seconds fit into i64")
}

/// Signs `value` at the current wall-clock time and returns the complete
/// header value (`base64(signature);epoch`).
#[must_use]
pub fn generate_header_value(key: &SecretSlice<u8>, value: &str) -> String {
    let epoch = unix_time_seconds();
    encode_header(&calc_signature(key, value, epoch), epoch)
}
