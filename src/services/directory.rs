//! User directory: API key to account resolution.
//!
//! The authenticator depends on this boundary through the [`UserDirectory`]
//! trait. The shipped adapter is an in-memory table seeded from
//! configuration; a persistent implementation would slot in behind the same
//! trait.

use crate::config::DirectoryConfig;
use crate::models::auth::{Principal, SecretKey};
use std::collections::HashMap;
use uuid::Uuid;

/// Account record owned by the user directory.
///
/// The secret key is read-only from the authenticator's perspective and is
/// rotated out-of-band.
#[derive(Debug, Clone)]
pub struct Account {
    pub account_id: Uuid,
    pub api_key: String,
    pub display_name: Option<String>,
    pub secret_key: SecretKey,
}

impl Account {
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            account_id: Uuid::new_v4(),
            api_key: api_key.into(),
            display_name: None,
            secret_key: SecretKey::new(secret_key),
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// The identity handed to the routing layer on success; drops the secret
    pub fn principal(&self) -> Principal {
        Principal {
            account_id: self.account_id,
            api_key: self.api_key.clone(),
            display_name: self.display_name.clone(),
        }
    }
}

/// Read-only lookup boundary the authenticator consumes
pub trait UserDirectory: Send + Sync {
    fn find_by_api_key(&self, api_key: &str) -> Option<Account>;
}

/// In-memory directory seeded at startup
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    accounts: HashMap<String, Account>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &DirectoryConfig) -> Self {
        let mut directory = Self::new();
        for (api_key, secret_key) in &config.accounts {
            directory = directory.with_account(Account::new(api_key, secret_key));
        }
        directory
    }

    pub fn with_account(mut self, account: Account) -> Self {
        self.accounts.insert(account.api_key.clone(), account);
        self
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl UserDirectory for InMemoryDirectory {
    fn find_by_api_key(&self, api_key: &str) -> Option<Account> {
        self.accounts.get(api_key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_seeded_account() {
        let directory =
            InMemoryDirectory::new().with_account(Account::new("abc123", "1234-5678"));

        let account = directory.find_by_api_key("abc123").unwrap();
        assert_eq!(account.api_key, "abc123");
        assert_eq!(account.secret_key.reveal(), "1234-5678");
        assert!(directory.find_by_api_key("missing").is_none());
    }

    #[test]
    fn from_config_seeds_every_pair() {
        let config = DirectoryConfig {
            accounts: vec![
                ("abc123".to_string(), "1234-5678".to_string()),
                ("store2".to_string(), "other".to_string()),
            ],
        };
        let directory = InMemoryDirectory::from_config(&config);
        assert_eq!(directory.len(), 2);
        assert!(directory.find_by_api_key("store2").is_some());
    }

    #[test]
    fn account_debug_masks_secret() {
        let account = Account::new("abc123", "1234-5678");
        let rendered = format!("{account:?}");
        assert!(!rendered.contains("1234-5678"));
        assert!(rendered.contains("****"));
    }

    #[test]
    fn principal_carries_identity_without_secret() {
        let account = Account::new("abc123", "1234-5678").with_display_name("Alice");
        let principal = account.principal();
        assert_eq!(principal.account_id, account.account_id);
        assert_eq!(principal.api_key, "abc123");
        assert_eq!(principal.display_name.as_deref(), Some("Alice"));
    }
}
