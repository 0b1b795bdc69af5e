//! Custom middleware for cross-cutting concerns.
//!
//! `auth` carries the HMAC credential extraction and enforcement;
//! `security` adds response security headers.

pub mod auth;
pub mod security;

pub use auth::*;
pub use security::*;
