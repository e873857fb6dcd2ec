//! Signing context configuration shared by the signer and verifier stages.

use axum::{
    body::Body,
    http::{HeaderName, Request},
};
use secrecy::SecretSlice;
use std::sync::Arc;

/// Callback returning the canonical string to authenticate for a request,
/// e.g. the content of a request-id header.
///
/// Both parties must agree out-of-band on what this string is; the signer
/// and the verifier have to compute it identically. The callback can read
/// anything borrowable from the request (headers, URI, extensions), not
/// the body.
pub type GetValue = Arc<dyn Fn(&Request<Body>) -> String + Send + Sync>;

/// Optional diagnostics hook, invoked with a human-readable message on
/// every rejection path. Must not panic.
pub type LogHook = Arc<dyn Fn(&Request<Body>, &str) + Send + Sync>;

/// Default name of the header carrying the signature.
pub const DEFAULT_HEADER_NAME: HeaderName = HeaderName::from_static("x-signature");

/// Default staleness allowance in seconds.
pub const DEFAULT_ALLOWANCE_SECONDS: i64 = 6;

/// Shared signing configuration for both middleware stages.
///
/// Built once at application startup, then shared read-only (behind the
/// [`Arc`] in [`LayerState`]) across all concurrent request invocations.
/// Immutable after construction, so no locking is needed.
pub struct SigningContext {
    key: SecretSlice<u8>,
    header_name: HeaderName,
    allowance_seconds: i64,
    verification_disabled: bool,
    log_hook: Option<LogHook>,
}

impl SigningContext {
    /// Creates a context configured with the given key and the package
    /// defaults (header `x-signature`, 6 seconds allowance, verification
    /// enabled, no log hook).
    #[must_use]
    pub fn new(key: SecretSlice<u8>) -> Self {
        Self {
            key,
            header_name: DEFAULT_HEADER_NAME,
            allowance_seconds: DEFAULT_ALLOWANCE_SECONDS,
            verification_disabled: false,
            log_hook: None,
        }
    }

    /// Sets the name of the header carrying the signature.
    #[must_use]
    pub fn with_header_name(mut self, header_name: HeaderName) -> Self {
        self.header_name = header_name;
        self
    }

    /// Sets the maximum permitted staleness, in seconds. Must be
    /// non-negative.
    #[must_use]
    pub fn with_allowance_seconds(mut self, allowance_seconds: i64) -> Self {
        self.allowance_seconds = allowance_seconds;
        self
    }

    /// Disables (or re-enables) verification. Supports testing by letting
    /// [`crate::verify`] forward every request unchecked.
    #[must_use]
    pub fn with_verification_disabled(mut self, verification_disabled: bool) -> Self {
        self.verification_disabled = verification_disabled;
        self
    }

    /// Installs a hook that receives a diagnostic message for every
    /// rejected request.
    #[must_use]
    pub fn with_log_hook(mut self, log_hook: LogHook) -> Self {
        self.log_hook = Some(log_hook);
        self
    }

    /// The configured header name.
    #[must_use]
    pub fn header_name(&self) -> &HeaderName {
        &self.header_name
    }

    pub(crate) fn key(&self) -> &SecretSlice<u8> {
        &self.key
    }

    pub(crate) fn allowance_seconds(&self) -> i64 {
        self.allowance_seconds
    }

    pub(crate) fn verification_disabled(&self) -> bool {
        self.verification_disabled
    }

    pub(crate) fn log(&self, req: &Request<Body>, message: &str) {
        if let Some(hook) = &self.log_hook {
            hook(req, message);
        }
    }
}

/// State handed to [`axum::middleware::from_fn_with_state`] for both the
/// signing and the verifying stage.
#[derive(Clone)]
pub struct LayerState {
    /// The shared signing configuration.
    pub context: Arc<SigningContext>,
    /// The value-extraction callback agreed upon by both parties.
    pub get_value: GetValue,
}
