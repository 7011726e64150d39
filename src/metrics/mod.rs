// Request stats: Prometheus recorder and push reporter
// Author: kelexine (https://github.com/kelexine)

mod registry;
pub mod reporter;

pub use registry::{
    gather_metrics,
    REQUESTS_TOTAL,
    FAILURES_TOTAL,
    RESPONSE_BYTES,
    INVOCATION_DURATION,
};

use crate::error::Stage;

/// Helper to record a request answered with a function result
pub fn record_request(function: &str, status_code: u16, body_bytes: usize) {
    REQUESTS_TOTAL
        .with_label_values(&[function, &status_code.to_string()])
        .inc();

    RESPONSE_BYTES
        .with_label_values(&[function])
        .inc_by(body_bytes as f64);
}

/// Helper to record backend invocation latency
pub fn record_invocation(function: &str, duration_secs: f64) {
    INVOCATION_DURATION
        .with_label_values(&[function])
        .observe(duration_secs);
}

/// Helper to record a failed request
pub fn record_failure(stage: Stage, kind: &str) {
    FAILURES_TOTAL.with_label_values(&[stage.as_str(), kind]).inc();
}
