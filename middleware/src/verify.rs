//! Verification stage: request-interception middleware enforcing the
//! signature and freshness policy.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse as _, Response},
};
use httpsign_common::{unix_time_seconds, validate_header};
use tracing::warn;

use crate::config::LayerState;

/// Middleware that verifies the signature header of an inbound request.
///
/// On success the request is forwarded unmodified to the next stage. On
/// any failure (malformed header, stale timestamp, signature mismatch)
/// the response is a `400` with body `"<header_name> invalid"`; which
/// check failed is deliberately not exposed to the client. The configured
/// log hook receives the distinguishing diagnostic instead.
///
/// With verification disabled on the context, every request is forwarded
/// without any checks.
pub async fn verify(
    State(LayerState { context, get_value }): State<LayerState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if context.verification_disabled() {
        return next.run(req).await;
    }

    // An absent header (or one with a non-UTF-8 value) verifies like the
    // empty string, which fails parsing.
    let header = req
        .headers()
        .get(context.header_name())
        .and_then(|header| header.to_str().ok())
        .unwrap_or("");

    let outcome = validate_header(
        header,
        context.key(),
        context.allowance_seconds(),
        unix_time_seconds(),
        || get_value(&req),
    );

    match outcome {
        Ok(()) => next.run(req).await,
        Err(err) => {
            let message = err.to_string();
            warn!(header_name = %context.header_name(), "{message}");
            context.log(&req, &message);
            (
                StatusCode::BAD_REQUEST,
                format!("{} invalid", context.header_name()),
            )
                .into_response()
        }
    }
}
