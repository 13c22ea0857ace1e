//! Metrics collection and exposition.
//!
//! # Metrics
//! - `omnibox_decisions_total` (counter): decisions by outcome
//! - `omnibox_registered_engines` (gauge): engines in the registry
//! - `omnibox_tlds` (gauge): configured alternative-namespace TLDs

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Start the Prometheus exporter on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Count one interception decision.
pub fn record_decision(outcome: &'static str) {
    metrics::counter!("omnibox_decisions_total", "outcome" => outcome).increment(1);
}

/// Record the size of the compiled configuration.
pub fn record_startup(engines: usize, tlds: usize) {
    metrics::gauge!("omnibox_registered_engines").set(engines as f64);
    metrics::gauge!("omnibox_tlds").set(tlds as f64);
}
