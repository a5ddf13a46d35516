//! Prometheus metrics recording and background collection.

use barsha_core::index::Index;
use metrics::{counter, gauge, histogram};
use std::time::Duration;

/// Records HTTP request metrics.
pub fn record_request(method: &str, path: &str, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];
    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());
}

/// Records an answered question, labelled by outcome.
pub fn record_ask(fallback: bool) {
    let outcome = if fallback { "fallback" } else { "answered" };
    counter!("barsha_asks_total", "outcome" => outcome).increment(1);
}

/// Records a completed URL ingestion.
pub fn record_ingest() {
    counter!("barsha_ingests_total").increment(1);
}

/// Updates index-level Prometheus gauges from a snapshot.
pub fn update_index_metrics(index: &Index) {
    gauge!("barsha_chunks_total").set(index.chunk_count() as f64);
    gauge!("barsha_terms_total").set(index.term_count() as f64);
}
