//! Data models for the merchant API.
//!
//! This module contains the boundary data structures used throughout the
//! application: authentication value objects, request/response models, and
//! audit event types.

pub mod api;
pub mod audit;
pub mod auth;

pub use api::*;
pub use audit::*;
pub use auth::*;
