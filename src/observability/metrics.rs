//! Metrics collection and exposition.
//!
//! # Metrics
//! - `portal_routing_decisions_total` (counter): middleware decisions by action
//! - `portal_pages_total` (counter): page responses by kind and status
//!
//! # Design Decisions
//! - Recording is a no-op until an exporter is installed
//! - Labels are static strings; no per-path cardinality

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus exporter with an HTTP scrape endpoint on `addr`.
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_routing_decision(action: &'static str) {
    metrics::counter!("portal_routing_decisions_total", "action" => action).increment(1);
}

pub fn record_page(kind: &'static str, status: u16) {
    metrics::counter!(
        "portal_pages_total",
        "kind" => kind,
        "status" => status.to_string()
    )
    .increment(1);
}
