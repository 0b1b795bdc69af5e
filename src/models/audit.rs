//! Structured audit events for authentication outcomes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Kinds of authentication events recorded for audit purposes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthEventType {
    HmacAccepted,
    HmacRejected,
    UnsupportedAlgorithm,
    StaleRequest,
    MalformedHeader,
}

/// Outcome of an authentication event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthEventOutcome {
    Success,
    Failure,
}

/// Structured audit log entry for one authentication attempt.
///
/// Carries the caller-visible identifiers only; secret keys and digests
/// are never part of the event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthAuditEvent {
    pub event_type: AuthEventType,
    pub outcome: AuthEventOutcome,
    pub timestamp: DateTime<Utc>,
    pub ip_address: String,
    pub method: String,
    pub endpoint: String,
    pub api_key: Option<String>,
    pub user_agent: Option<String>,
}

impl AuthAuditEvent {
    pub fn new(
        event_type: AuthEventType,
        outcome: AuthEventOutcome,
        ip_address: String,
        method: String,
        endpoint: String,
    ) -> Self {
        Self {
            event_type,
            outcome,
            timestamp: Utc::now(),
            ip_address,
            method,
            endpoint,
            api_key: None,
            user_agent: None,
        }
    }

    /// Attach the caller's API key (an identifier, not a secret)
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn with_user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Emit the event through structured logging
    pub fn log(&self) {
        info!(
            target: "auth_audit",
            event_type = ?self.event_type,
            outcome = ?self.outcome,
            timestamp = %self.timestamp,
            ip_address = %self.ip_address,
            method = %self.method,
            endpoint = %self.endpoint,
            api_key = ?self.api_key,
            user_agent = ?self.user_agent,
            "Authentication audit event"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_attaches_optional_fields() {
        let event = AuthAuditEvent::new(
            AuthEventType::HmacRejected,
            AuthEventOutcome::Failure,
            "10.0.0.1".to_string(),
            "GET".to_string(),
            "/api/orders".to_string(),
        )
        .with_api_key(Some("abc123".to_string()))
        .with_user_agent(Some("curl/8.0".to_string()));

        assert_eq!(event.api_key.as_deref(), Some("abc123"));
        assert_eq!(event.user_agent.as_deref(), Some("curl/8.0"));
    }

    #[test]
    fn serializes_with_snake_case_tags() {
        let event = AuthAuditEvent::new(
            AuthEventType::HmacAccepted,
            AuthEventOutcome::Success,
            "10.0.0.1".to_string(),
            "GET".to_string(),
            "/api/orders".to_string(),
        );
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event_type"], "hmac_accepted");
        assert_eq!(json["outcome"], "success");
    }
}
