//! Seeded account directory configuration.

use std::env;
use tracing::warn;

/// Configuration for the in-memory account directory.
///
/// Accounts are provisioned out-of-band; this configuration only seeds the
/// lookup table the authenticator reads from.
#[derive(Clone, Default)]
pub struct DirectoryConfig {
    /// `(api_key, secret_key)` pairs
    pub accounts: Vec<(String, String)>,
}

impl DirectoryConfig {
    /// Load seeded accounts from the `MERCHANT_ACCOUNTS` environment
    /// variable, formatted as `api_key:secret_key` pairs separated by
    /// commas.
    pub fn from_env() -> Self {
        let raw = env::var("MERCHANT_ACCOUNTS").unwrap_or_default();
        Self {
            accounts: parse_accounts(&raw),
        }
    }
}

/// Parse `api_key:secret_key` pairs separated by commas. Only the first
/// colon splits, so secrets may themselves contain colons. Malformed
/// entries are skipped with a warning.
fn parse_accounts(raw: &str) -> Vec<(String, String)> {
    raw.split(',')
        .filter(|entry| !entry.trim().is_empty())
        .filter_map(|entry| {
            let mut parts = entry.trim().splitn(2, ':');
            match (parts.next(), parts.next()) {
                (Some(api_key), Some(secret)) if !api_key.is_empty() && !secret.is_empty() => {
                    Some((api_key.to_string(), secret.to_string()))
                }
                _ => {
                    warn!("Skipping malformed MERCHANT_ACCOUNTS entry");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_account_pairs() {
        let accounts = parse_accounts("abc123:1234-5678, store2:s3cr3t:with:colons");
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0], ("abc123".into(), "1234-5678".into()));
        assert_eq!(accounts[1], ("store2".into(), "s3cr3t:with:colons".into()));
    }

    #[test]
    fn skips_malformed_entries() {
        let accounts = parse_accounts("no-secret,, :missing-key,ok:fine");
        assert_eq!(accounts, vec![("ok".to_string(), "fine".to_string())]);
    }

    #[test]
    fn empty_input_yields_no_accounts() {
        assert!(parse_accounts("").is_empty());
    }
}
