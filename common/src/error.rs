//! Error taxonomy for header verification.
//!
//! All three causes collapse into the same externally visible outcome at
//! the HTTP layer (a 400 with an opaque body), so clients cannot probe
//! which check failed. The `Display` strings are the diagnostic messages
//! handed to the configured log hook.

use thiserror::Error;

/// Why an inbound signature header was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// Header missing, wrong field count, invalid base64, or a
    /// non-numeric timestamp.
    #[error("Unable to parse header '{raw}'")]
    MalformedHeader {
        /// The raw header value as received.
        raw: String,
    },

    /// The signing timestamp is older than the allowance permits.
    #[error("Stale timestamp {timestamp} (now={now}, allowance={allowance})")]
    StaleTimestamp {
        /// Epoch seconds carried in the header.
        timestamp: i64,
        /// Epoch seconds at verification time.
        now: i64,
        /// Configured allowance in seconds.
        allowance: i64,
    },

    /// The recomputed MAC differs from the one carried in the header.
    #[error("Signature mismatch {header_signature} (calculated={calculated}, header={raw})")]
    SignatureMismatch {
        /// Base64 of the signature carried in the header.
        header_signature: String,
        /// Base64 of the signature recomputed from the extracted value.
        calculated: String,
        /// The raw header value as received.
        raw: String,
    },
}
