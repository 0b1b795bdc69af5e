//! Configuration structures and loading utilities.
//!
//! This module contains all configuration structures used by the
//! application, including environment variable loading and default values.

pub mod directory;
pub mod hmac;
pub mod metrics;
pub mod security;

pub use directory::*;
pub use hmac::*;
pub use metrics::*;
pub use security::*;
