//! Business logic and service layer modules.
//!
//! This module contains the core of the application: the HMAC
//! authenticator, the user directory boundary, the order listing stub,
//! and metrics collection.

pub mod authenticator;
pub mod directory;
pub mod metrics;
pub mod orders;

pub use authenticator::*;
pub use directory::*;
pub use metrics::*;
pub use orders::*;
