//! HMAC authentication configuration.

use std::env;

/// Configuration for HMAC request authentication
#[derive(Clone)]
pub struct HmacConfig {
    /// When false, rejections are forwarded instead of answered with 401;
    /// correctly signed requests still authenticate and carry a principal.
    /// Intended for local development only.
    pub require_signature: bool,
    /// Maximum allowed skew, in seconds, between the request date header
    /// and server time.
    pub timestamp_tolerance_seconds: u64,
}

impl Default for HmacConfig {
    fn default() -> Self {
        Self {
            require_signature: true,
            timestamp_tolerance_seconds: 300, // 5 minutes
        }
    }
}

impl HmacConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let require_signature = env::var("HMAC_REQUIRE_SIGNATURE")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(true);

        let timestamp_tolerance_seconds = env::var("HMAC_TIMESTAMP_TOLERANCE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(300);

        Self {
            require_signature,
            timestamp_tolerance_seconds,
        }
    }
}
