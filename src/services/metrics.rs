//! Metrics collection and Prometheus integration service.

use crate::handlers::version::{BUILD_TIMESTAMP, GIT_SHA};
use prometheus::{CounterVec, Gauge, Opts, Registry, TextEncoder};
use std::time::Instant;

/// Application metrics collector for Prometheus integration
#[derive(Clone)]
pub struct AppMetrics {
    pub registry: Registry,
    pub auth_attempts_total: CounterVec,
    pub app_uptime_seconds: Gauge,
    pub app_info: CounterVec,
    pub start_time: Instant,
}

impl AppMetrics {
    /// Create a new metrics collector with default Prometheus metrics
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        // Authentication attempts by outcome
        let auth_attempts_total = CounterVec::new(
            Opts::new(
                "auth_attempts_total",
                "Total number of HMAC authentication attempts",
            ),
            &["outcome"],
        )?;

        let app_uptime_seconds = Gauge::new("app_uptime_seconds", "Application uptime in seconds")?;

        let app_info = CounterVec::new(
            Opts::new("app_info", "Application information"),
            &["version", "commit", "build_time"],
        )?;

        registry.register(Box::new(auth_attempts_total.clone()))?;
        registry.register(Box::new(app_uptime_seconds.clone()))?;
        registry.register(Box::new(app_info.clone()))?;

        app_info
            .with_label_values(&[env!("CARGO_PKG_VERSION"), GIT_SHA, BUILD_TIMESTAMP])
            .inc();

        Ok(Self {
            registry,
            auth_attempts_total,
            app_uptime_seconds,
            app_info,
            start_time: Instant::now(),
        })
    }

    /// Record one authentication attempt.
    ///
    /// `outcome` is a coarse label (`accepted`, `rejected`,
    /// `unsupported_algorithm`); no caller identifiers end up in metric
    /// labels.
    pub fn record_auth_attempt(&self, outcome: &str) {
        self.auth_attempts_total
            .with_label_values(&[outcome])
            .inc();
    }

    /// Update the application uptime gauge
    pub fn update_uptime(&self) {
        let uptime = self.start_time.elapsed().as_secs_f64();
        self.app_uptime_seconds.set(uptime);
    }

    /// Render metrics in Prometheus text format
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        encoder.encode_to_string(&metric_families)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_auth_outcomes() {
        let metrics = AppMetrics::new().unwrap();
        metrics.record_auth_attempt("accepted");
        metrics.record_auth_attempt("rejected");
        metrics.record_auth_attempt("rejected");

        let rendered = metrics.render().unwrap();
        assert!(rendered.contains("auth_attempts_total"));
        assert!(rendered.contains("outcome=\"rejected\""));
    }
}
