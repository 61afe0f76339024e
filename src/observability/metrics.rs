//! Metrics collection and exposition.
//!
//! # Metrics
//! - `site_locale_decisions_total` (counter): middleware outcomes by locale
//! - `site_contact_submissions_total` (counter): relay outcomes
//! - `site_contact_relay_duration_seconds` (histogram): webhook latency
//!
//! Recording is a no-op until [`init_metrics`] installs the exporter.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter with its own HTTP listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one locale middleware decision.
pub fn record_locale_decision(outcome: &'static str, locale: Option<&str>) {
    metrics::counter!(
        "site_locale_decisions_total",
        "outcome" => outcome,
        "locale" => locale.unwrap_or("none").to_string()
    )
    .increment(1);
}

/// Record a contact relay attempt.
pub fn record_contact_submission(success: bool, start: Instant) {
    let outcome = if success { "success" } else { "failure" };
    metrics::counter!("site_contact_submissions_total", "outcome" => outcome).increment(1);
    metrics::histogram!("site_contact_relay_duration_seconds")
        .record(start.elapsed().as_secs_f64());
}
