//! Metrics collection for search-service.
//!
//! Request metrics come from the shared middleware; this module owns the
//! Prometheus recorder and the provider call counter.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder once per process and return its handle.
///
/// Concurrent callers block on the same initialisation and share its handle.
/// A detached handle is only used when some other code already owns the
/// global recorder slot.
pub fn init_metrics() -> PrometheusHandle {
    METRICS_HANDLE
        .get_or_init(|| match service_core::middleware::metrics::install_recorder() {
            Ok(handle) => handle,
            Err(e) => {
                tracing::warn!("{}. Metrics will not be exported.", e);
                PrometheusBuilder::new().build_recorder().handle()
            }
        })
        .clone()
}

/// Record one provider call by outcome (`success`, `provider_error`, `internal_error`).
pub fn record_provider_call(outcome: &'static str) {
    metrics::counter!("search_provider_calls_total", "outcome" => outcome).increment(1);
}
