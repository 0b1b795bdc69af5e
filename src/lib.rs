//! Merchant API - a merchant-platform backend with HMAC request authentication
//!
//! The security-critical core of this service is the stateless HMAC
//! request-authentication mechanism: every API caller signs each request
//! with a per-account shared secret, and the server re-derives the
//! signature to authenticate the caller without the secret ever crossing
//! the wire.
//!
//! ## Architecture
//!
//! The codebase is organized into focused modules:
//! - `models/` - Boundary data types (credential, principal, responses)
//! - `handlers/` - HTTP request handlers for each endpoint
//! - `middleware/` - Credential extraction, enforcement, security headers
//! - `services/` - The HMAC authenticator, user directory, and metrics
//! - `utils/` - HMAC digest primitives and HTTP helpers
//! - `config/` - Configuration structures and environment loading
//!
//! ## Quick Start
//!
//! ```no_run
//! use merchant_api::create_base_app;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let app = create_base_app();
//!     // Configure and run the server
//!     Ok(())
//! }
//! ```

// Core modules
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types and functions for convenience
pub use config::{DirectoryConfig, HmacConfig, MetricsConfig, SecurityHeadersConfig};
pub use handlers::{
    create_app, create_base_app, create_openapi_spec, get_metrics, health, index, list_orders,
    version,
};
pub use middleware::{
    AUTH_SCHEME, HmacAuth, REQUEST_DATE_HEADER, SecurityHeaders, canonical_content,
    require_principal,
};
pub use models::{
    AuthAuditEvent, AuthEventOutcome, AuthEventType, AuthFailure, Credential, CredentialError,
    HealthResponse, OrderPageResponse, OrderSummary, PageQuery, Principal, SecretKey,
    VersionResponse,
};
pub use services::{
    Account, AppMetrics, HmacAuthenticator, InMemoryDirectory, OrderStore, UserDirectory,
};
pub use utils::hmac as hmac_utils;
pub use utils::{extract_client_ip, extract_user_agent};
