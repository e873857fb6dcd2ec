//! Wire codec for the signature header value.
//!
//! The header value is the only entity that crosses the network:
//! `base64_standard(signature) + ";" + decimal(timestamp)`. It is opaque
//! to intermediaries and must round-trip exactly through
//! [`encode_header`] and [`parse_header`].

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::error::VerifyError;

/// Encodes raw signature bytes and an epoch timestamp into a header value.
#[must_use]
pub fn encode_header(signature: &[u8], epoch: i64) -> String {
    format!("{};{}", STANDARD.encode(signature), epoch)
}

/// Splits a header value into raw signature bytes and the epoch timestamp.
///
/// A header value is valid only if it splits on `;` into exactly two
/// fields, the first valid standard base64 and the second a base-10
/// 64-bit integer. No other validation happens here; in particular the
/// decoded signature is not length-checked, comparison against the
/// recomputed MAC is the verifier's job.
///
/// # Errors
///
/// [`VerifyError::MalformedHeader`] for any format violation.
pub fn parse_header(header: &str) -> Result<(Vec<u8>, i64), VerifyError> {
    let malformed = || VerifyError::MalformedHeader {
        raw: header.to_string(),
    };

    let parts: Vec<&str> = header.split(';').collect();
    let (signature, epoch) = match parts.as_slice() {
        [signature, epoch] => (*signature, *epoch),
        _ => return Err(malformed()),
    };

    let signature = STANDARD.decode(signature).map_err(|_| malformed())?;
    let epoch = epoch.parse::<i64>().map_err(|_| malformed())?;
    Ok((signature, epoch))
}
