//! Utility functions and helper modules.
//!
//! This module contains the HMAC digest primitives used by the
//! authenticator along with small HTTP request helpers.

pub mod hmac;
pub mod http;

pub use http::*;
