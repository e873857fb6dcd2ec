//! HMAC-signed request headers as axum middleware.
//!
//! Two cooperating stages prove that a request originated from a holder
//! of a shared secret, within a bounded time window:
//!
//! - [`sign_to_proxy`] signs outgoing/forwarded requests by appending a
//!   `base64(hmac_sha256);epoch` header.
//! - [`verify`] checks the header on inbound requests: freshness within
//!   the configured allowance, then a constant-time HMAC comparison.
//!   Failures produce a `400` without revealing which check failed.
//!
//! Both sides must agree on the header name, the shared key, and the
//! [`GetValue`] callback deriving the string to authenticate.
//!
//! ```
//! use std::sync::Arc;
//! use axum::{Router, body::Body, http::Request, middleware, routing::get};
//! use httpsign::{GetValue, LayerState, SigningContext, verify};
//!
//! let context = Arc::new(SigningContext::new(b"shared secret".to_vec().into()));
//! let get_value: GetValue = Arc::new(|req: &Request<Body>| {
//!     req.headers()
//!         .get("x-request-id")
//!         .and_then(|id| id.to_str().ok())
//!         .unwrap_or_default()
//!         .to_string()
//! });
//!
//! let app: Router = Router::new()
//!     .route("/", get(|| async { "ok" }))
//!     .route_layer(middleware::from_fn_with_state(
//!         LayerState { context, get_value },
//!         verify,
//!     ));
//! ```

mod config;
mod sign;
mod verify;

pub use config::{
    DEFAULT_ALLOWANCE_SECONDS, DEFAULT_HEADER_NAME, GetValue, LayerState, LogHook, SigningContext,
};
pub use httpsign_common::{VerifyError, generate_secret};
pub use sign::sign_to_proxy;
pub use verify::verify;
