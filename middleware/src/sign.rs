//! Signing stage: header generation and the sign-and-forward middleware.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};

use crate::config::{LayerState, SigningContext};

impl SigningContext {
    /// Signs `value` at the current wall-clock time and returns the
    /// complete header value (`base64(signature);epoch`).
    #[must_use]
    pub fn generate_header_value(&self, value: &str) -> String {
        httpsign_common::generate_header_value(self.key(), value)
    }
}

/// Middleware for trusted relays that assert provenance to a downstream
/// verifier: signs the request, then forwards it.
///
/// Appends a signature header named by the context. The append is
/// additive, pre-existing header entries of the same name are kept. This
/// stage never rejects; it unconditionally invokes the next stage.
pub async fn sign_to_proxy(
    State(LayerState { context, get_value }): State<LayerState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let value = get_value(&req);
    let header = context.generate_header_value(&value);
    let header = HeaderValue::from_str(&header)
        .expect("base64 and decimal digits are valid in a header value");
    req.headers_mut().append(context.header_name().clone(), header);
    next.run(req).await
}
