//! Shared-secret HMAC primitives for signed request headers.
//!
//! This crate provides:
//! - The wire codec for `base64(signature);epoch` header values
//! - Timestamped HMAC-SHA256 signing and validation
//! - Random secret generation
//!
//! The HTTP-facing middleware lives in the `httpsign` crate; everything in
//! here is transport-agnostic.

mod codec;
mod error;
mod secrets;
mod signing;
mod validation;

pub use codec::*;
pub use error::*;
pub use secrets::*;
pub use signing::*;
pub use validation::*;
