//! HMAC digest computation and constant-time verification.
//!
//! The algorithm allow-list lives here: callers name the algorithm in their
//! credential, and anything outside this set is rejected before any secret
//! key material is used.

use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// The fixed set of HMAC algorithms callers may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HmacAlgorithm {
    Sha256,
    Sha384,
    Sha512,
}

impl HmacAlgorithm {
    /// Canonical name used on the wire
    pub fn wire_name(&self) -> &'static str {
        match self {
            HmacAlgorithm::Sha256 => "hmac-sha256",
            HmacAlgorithm::Sha384 => "hmac-sha384",
            HmacAlgorithm::Sha512 => "hmac-sha512",
        }
    }
}

impl fmt::Display for HmacAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Error returned when a caller names an algorithm outside the allow-list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported HMAC algorithm: {0}")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for HmacAlgorithm {
    type Err = UnknownAlgorithm;

    /// Parse an algorithm name case-insensitively. Both the canonical
    /// `hmac-sha256` spelling and the JCA-style `HmacSHA256` alias are
    /// accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hmac-sha256" | "hmacsha256" => Ok(HmacAlgorithm::Sha256),
            "hmac-sha384" | "hmacsha384" => Ok(HmacAlgorithm::Sha384),
            "hmac-sha512" | "hmacsha512" => Ok(HmacAlgorithm::Sha512),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Compute the hex-encoded HMAC digest of `content` under `secret`
pub fn compute_digest(
    algorithm: HmacAlgorithm,
    secret: &[u8],
    content: &[u8],
) -> Result<String, String> {
    let bytes = match algorithm {
        HmacAlgorithm::Sha256 => {
            let mut mac = HmacSha256::new_from_slice(secret)
                .map_err(|e| format!("Invalid secret key: {e}"))?;
            mac.update(content);
            mac.finalize().into_bytes().to_vec()
        }
        HmacAlgorithm::Sha384 => {
            let mut mac = HmacSha384::new_from_slice(secret)
                .map_err(|e| format!("Invalid secret key: {e}"))?;
            mac.update(content);
            mac.finalize().into_bytes().to_vec()
        }
        HmacAlgorithm::Sha512 => {
            let mut mac = HmacSha512::new_from_slice(secret)
                .map_err(|e| format!("Invalid secret key: {e}"))?;
            mac.update(content);
            mac.finalize().into_bytes().to_vec()
        }
    };
    Ok(hex::encode(bytes))
}

/// Verify a hex-encoded claimed digest against the recomputed HMAC of
/// `content` under `secret`.
///
/// The comparison goes through `Mac::verify_slice`, which compares in
/// constant time. Malformed hex, a bad key, or any other internal fault
/// simply yields `false`; the caller cannot tell those apart from a plain
/// mismatch.
pub fn verify_digest(
    algorithm: HmacAlgorithm,
    secret: &[u8],
    content: &[u8],
    claimed_digest: &str,
) -> bool {
    let Ok(claimed) = hex::decode(claimed_digest) else {
        return false;
    };
    match algorithm {
        HmacAlgorithm::Sha256 => {
            let Ok(mut mac) = HmacSha256::new_from_slice(secret) else {
                return false;
            };
            mac.update(content);
            mac.verify_slice(&claimed).is_ok()
        }
        HmacAlgorithm::Sha384 => {
            let Ok(mut mac) = HmacSha384::new_from_slice(secret) else {
                return false;
            };
            mac.update(content);
            mac.verify_slice(&claimed).is_ok()
        }
        HmacAlgorithm::Sha512 => {
            let Ok(mut mac) = HmacSha512::new_from_slice(secret) else {
                return false;
            };
            mac.update(content);
            mac.verify_slice(&claimed).is_ok()
        }
    }
}
