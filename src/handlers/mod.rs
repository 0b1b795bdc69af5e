//! HTTP request handlers for API endpoints.
//!
//! This module contains all the HTTP request handlers that process
//! incoming requests and generate responses.

pub mod health;
pub mod index;
pub mod metrics;
pub mod openapi;
pub mod orders;
pub mod version;

pub use health::*;
pub use index::*;
pub use metrics::*;
pub use openapi::*;
pub use orders::*;
pub use version::*;
