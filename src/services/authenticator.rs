//! HMAC request authenticator.
//!
//! Verifies that a parsed [`Credential`] was signed with the secret key of
//! the account its API key names. Unknown API keys and digest mismatches
//! deliberately share one failure kind and one code path, so a caller
//! probing the API cannot tell which accounts exist.

use crate::models::auth::{AuthFailure, Credential, Principal};
use crate::services::directory::UserDirectory;
use crate::utils::hmac::{self, HmacAlgorithm};
use std::sync::Arc;

/// Stateless authenticator over a read-only user directory.
///
/// The directory dependency is fixed at construction; the authenticator
/// holds no mutable state and is safe to clone across request handlers.
#[derive(Clone)]
pub struct HmacAuthenticator {
    directory: Arc<dyn UserDirectory>,
}

impl HmacAuthenticator {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    /// Authenticate one request credential.
    ///
    /// The algorithm allow-list check runs first and never touches secret
    /// material. After that, every failure — unknown key, digest mismatch,
    /// malformed digest encoding, or an internal fault in the digest
    /// engine — collapses to [`AuthFailure::Unauthenticated`].
    pub fn authenticate(&self, credential: &Credential) -> Result<Principal, AuthFailure> {
        let algorithm: HmacAlgorithm = credential
            .algorithm()
            .parse()
            .map_err(|_| AuthFailure::UnsupportedAlgorithm)?;

        let account = self
            .directory
            .find_by_api_key(credential.api_key())
            .ok_or(AuthFailure::Unauthenticated)?;

        let verified = hmac::verify_digest(
            algorithm,
            account.secret_key.reveal().as_bytes(),
            credential.signed_content().as_bytes(),
            credential.claimed_digest(),
        );

        if verified {
            Ok(account.principal())
        } else {
            Err(AuthFailure::Unauthenticated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::directory::{Account, InMemoryDirectory};
    use std::sync::atomic::{AtomicUsize, Ordering};

    const CONTENT: &str = "GET /orders\nDate: 2024-01-01";

    fn authenticator() -> HmacAuthenticator {
        let directory = InMemoryDirectory::new()
            .with_account(Account::new("abc123", "1234-5678").with_display_name("Alice"));
        HmacAuthenticator::new(Arc::new(directory))
    }

    fn signed_credential(secret: &str) -> Credential {
        let digest =
            hmac::compute_digest(HmacAlgorithm::Sha256, secret.as_bytes(), CONTENT.as_bytes())
                .unwrap();
        Credential::new("abc123", "hmac-sha256", CONTENT, digest).unwrap()
    }

    #[test]
    fn correctly_signed_credential_authenticates() {
        let principal = authenticator()
            .authenticate(&signed_credential("1234-5678"))
            .unwrap();
        assert_eq!(principal.api_key, "abc123");
        assert_eq!(principal.display_name.as_deref(), Some("Alice"));
    }

    #[test]
    fn wrong_secret_is_unauthenticated() {
        let result = authenticator().authenticate(&signed_credential("wrong-secret"));
        assert_eq!(result, Err(AuthFailure::Unauthenticated));
    }

    #[test]
    fn unknown_api_key_matches_digest_mismatch_exactly() {
        let auth = authenticator();

        let digest = hmac::compute_digest(
            HmacAlgorithm::Sha256,
            b"1234-5678",
            CONTENT.as_bytes(),
        )
        .unwrap();
        let unknown_key =
            Credential::new("nobody", "hmac-sha256", CONTENT, digest).unwrap();

        let unknown_result = auth.authenticate(&unknown_key);
        let mismatch_result = auth.authenticate(&signed_credential("wrong-secret"));

        // Same kind, same shape: the two rejections are indistinguishable
        assert_eq!(unknown_result, mismatch_result);
        assert_eq!(unknown_result, Err(AuthFailure::Unauthenticated));
    }

    #[test]
    fn unsupported_algorithm_never_reaches_the_directory() {
        struct CountingDirectory(AtomicUsize);
        impl UserDirectory for CountingDirectory {
            fn find_by_api_key(&self, _api_key: &str) -> Option<Account> {
                self.0.fetch_add(1, Ordering::SeqCst);
                None
            }
        }

        let directory = Arc::new(CountingDirectory(AtomicUsize::new(0)));
        let auth = HmacAuthenticator::new(directory.clone());

        let credential = Credential::new("abc123", "hmac-md5", CONTENT, "deadbeef").unwrap();
        assert_eq!(
            auth.authenticate(&credential),
            Err(AuthFailure::UnsupportedAlgorithm)
        );
        assert_eq!(directory.0.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn byte_flipped_content_is_unauthenticated() {
        let digest = hmac::compute_digest(
            HmacAlgorithm::Sha256,
            b"1234-5678",
            b"GET /orders\nDate: 2024-01-02",
        )
        .unwrap();
        let credential = Credential::new("abc123", "hmac-sha256", CONTENT, digest).unwrap();
        assert_eq!(
            authenticator().authenticate(&credential),
            Err(AuthFailure::Unauthenticated)
        );
    }

    #[test]
    fn malformed_digest_is_unauthenticated_not_a_fault() {
        let credential =
            Credential::new("abc123", "hmac-sha256", CONTENT, "zz-not-hex").unwrap();
        assert_eq!(
            authenticator().authenticate(&credential),
            Err(AuthFailure::Unauthenticated)
        );
    }

    #[test]
    fn repeated_attempts_yield_identical_results() {
        let auth = authenticator();
        let good = signed_credential("1234-5678");
        let bad = signed_credential("wrong-secret");

        for _ in 0..5 {
            assert_eq!(auth.authenticate(&good).unwrap().api_key, "abc123");
            assert_eq!(auth.authenticate(&bad), Err(AuthFailure::Unauthenticated));
        }
    }

    #[test]
    fn jca_style_algorithm_alias_is_accepted() {
        let digest = hmac::compute_digest(
            HmacAlgorithm::Sha512,
            b"1234-5678",
            CONTENT.as_bytes(),
        )
        .unwrap();
        let credential = Credential::new("abc123", "HmacSHA512", CONTENT, digest).unwrap();
        assert!(authenticator().authenticate(&credential).is_ok());
    }
}
