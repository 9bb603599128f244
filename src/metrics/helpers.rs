//! Metrics helper struct for convenient metric recording

use prometheus::{Encoder, TextEncoder};

use super::{GREETINGS_ERRORS_TOTAL, GREETINGS_GENERATED_TOTAL};

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording greeting metrics
pub struct GreetingMetrics;

impl GreetingMetrics {
    /// Record a single greeting
    pub fn record_single() {
        GREETINGS_GENERATED_TOTAL.with_label_values(&["single"]).inc();
    }

    /// Record the greetings of a batch
    pub fn record_batch(count: u64) {
        GREETINGS_GENERATED_TOTAL
            .with_label_values(&["batch"])
            .inc_by(count);
    }

    /// Record a rejected request
    pub fn record_error(kind: &str) {
        GREETINGS_ERRORS_TOTAL.with_label_values(&[kind]).inc();
    }
}
