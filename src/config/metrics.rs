//! Metrics exposition configuration.

use std::env;

/// Toggle for the Prometheus exposition endpoint.
///
/// Authentication outcome counters are always recorded in-process; this
/// only controls whether `/api/metrics` serves them.
#[derive(Clone)]
pub struct MetricsConfig {
    pub enabled: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl MetricsConfig {
    /// Load the toggle from `METRICS_ENABLED`, defaulting to enabled
    pub fn from_env() -> Self {
        let enabled = env::var("METRICS_ENABLED")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .unwrap_or(true);

        Self { enabled }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_enabled() {
        assert!(MetricsConfig::default().enabled);
    }
}
