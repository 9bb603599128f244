//! Prometheus metrics for the greeting service.
//!
//! - Greetings generated, by mode (single or batch)
//! - Rejected requests, by error kind

mod helpers;

pub use helpers::{encode_metrics, GreetingMetrics};

use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, IntCounterVec};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "greetings";

lazy_static! {
    /// Total greetings rendered, by request mode
    pub static ref GREETINGS_GENERATED_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_generated_total", METRIC_PREFIX),
        "Total greetings generated",
        &["mode"]
    ).unwrap();

    /// Total rejected requests, by error kind
    pub static ref GREETINGS_ERRORS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_errors_total", METRIC_PREFIX),
        "Total greeting requests rejected",
        &["kind"]
    ).unwrap();
}
