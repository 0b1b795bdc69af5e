//! Authentication boundary types.
//!
//! These are the value objects handed between the HTTP layer, the
//! authenticator, and the user directory: the parsed request credential,
//! the per-account secret, the authenticated principal, and the failure
//! taxonomy.

use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// A per-account shared secret.
///
/// The wrapped value is only reachable through [`SecretKey::reveal`];
/// `Debug` and `Display` render a fixed mask so the secret can never end up
/// in logs or error messages.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the raw secret for use as HMAC key material
    pub fn reveal(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}

/// Error raised when a credential is constructed with an empty field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("credential field `{0}` must be present and non-empty")]
pub struct CredentialError(pub &'static str);

/// The parsed, request-scoped credential handed across from the HTTP layer.
///
/// Pure data holder: construction validates that every field is non-empty,
/// and the type exposes nothing beyond accessors. The API key identifies
/// the caller, `signed_content` is the canonical request text the caller
/// claims to have signed, and `claimed_digest` is the hex-encoded signature
/// they assert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    api_key: String,
    algorithm: String,
    signed_content: String,
    claimed_digest: String,
}

impl Credential {
    pub fn new(
        api_key: impl Into<String>,
        algorithm: impl Into<String>,
        signed_content: impl Into<String>,
        claimed_digest: impl Into<String>,
    ) -> Result<Self, CredentialError> {
        let credential = Self {
            api_key: api_key.into(),
            algorithm: algorithm.into(),
            signed_content: signed_content.into(),
            claimed_digest: claimed_digest.into(),
        };
        if credential.api_key.is_empty() {
            return Err(CredentialError("api_key"));
        }
        if credential.algorithm.is_empty() {
            return Err(CredentialError("algorithm"));
        }
        if credential.signed_content.is_empty() {
            return Err(CredentialError("signed_content"));
        }
        if credential.claimed_digest.is_empty() {
            return Err(CredentialError("claimed_digest"));
        }
        Ok(credential)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn signed_content(&self) -> &str {
        &self.signed_content
    }

    pub fn claimed_digest(&self) -> &str {
        &self.claimed_digest
    }
}

/// The authenticated identity yielded on success.
///
/// Carries account identity only; the secret never leaves the
/// authenticator boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub account_id: Uuid,
    pub api_key: String,
    pub display_name: Option<String>,
}

/// Outcome taxonomy for a failed authentication attempt.
///
/// Unknown API key, digest mismatch, and internal verification faults all
/// collapse into [`AuthFailure::Unauthenticated`] so that callers cannot
/// probe which accounts exist. Only the secret-independent algorithm check
/// gets its own variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthFailure {
    #[error("authentication failed")]
    Unauthenticated,
    #[error("unsupported signature algorithm")]
    UnsupportedAlgorithm,
}
