// Prometheus metrics registry and collectors
// Author: kelexine (https://github.com/kelexine)

use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec_with_registry, register_histogram_vec_with_registry, CounterVec,
    HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // ============================================================================
    // REQUEST METRICS
    // ============================================================================

    /// Requests answered with a function result
    pub static ref REQUESTS_TOTAL: CounterVec = register_counter_vec_with_registry!(
        Opts::new("gateway_requests_total", "Total requests proxied to a function"),
        &["function", "status_code"],
        REGISTRY
    ).expect("gateway_requests_total registers once");

    /// Requests that ended in a failure state
    pub static ref FAILURES_TOTAL: CounterVec = register_counter_vec_with_registry!(
        Opts::new("gateway_failures_total", "Total failed requests"),
        &["stage", "kind"], // stage: parse, invoke, write
        REGISTRY
    ).expect("gateway_failures_total registers once");

    /// Response body bytes returned to clients
    pub static ref RESPONSE_BYTES: CounterVec = register_counter_vec_with_registry!(
        Opts::new("gateway_response_bytes_total", "Total response body bytes"),
        &["function"],
        REGISTRY
    ).expect("gateway_response_bytes_total registers once");

    // ============================================================================
    // INVOCATION METRICS
    // ============================================================================

    /// Backend invocation duration, decoding included
    pub static ref INVOCATION_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        HistogramOpts::new("gateway_invocation_duration_seconds", "Function invocation duration")
            .buckets(vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["function"],
        REGISTRY
    ).expect("gateway_invocation_duration_seconds registers once");
}

/// Gather all metrics in the Prometheus text format
pub fn gather_metrics() -> prometheus::Result<String> {
    TextEncoder::new().encode_to_string(&REGISTRY.gather())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_registration() {
        REQUESTS_TOTAL.with_label_values(&["registry-test", "200"]).inc();
        INVOCATION_DURATION.with_label_values(&["registry-test"]).observe(0.2);

        let metrics = gather_metrics().unwrap();
        assert!(metrics.contains("gateway_requests_total"));
        assert!(metrics.contains("gateway_invocation_duration_seconds"));
    }
}
