//! Prometheus metrics infrastructure

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use super::config::MetricsConfig;

/// Prometheus metrics handle for serving metrics endpoint
#[derive(Clone)]
pub struct PrometheusMetrics {
    handle: Arc<PrometheusHandle>,
}

impl PrometheusMetrics {
    /// Get the metrics as a string for the /metrics endpoint
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// Initialize Prometheus metrics
pub fn init_metrics(config: &MetricsConfig) -> Option<PrometheusMetrics> {
    if !config.enabled {
        tracing::info!("Prometheus metrics disabled");
        return None;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            gauge!("circle_hub_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);

            tracing::info!(path = %config.path, "Prometheus metrics initialized");

            Some(PrometheusMetrics {
                handle: Arc::new(handle),
            })
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to initialize Prometheus metrics");
            None
        }
    }
}

/// Create the metrics router serving at `path`
pub fn create_metrics_router<S>(metrics: PrometheusMetrics, path: &str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(path, get(metrics_handler))
        .with_state(metrics)
}

async fn metrics_handler(State(metrics): State<PrometheusMetrics>) -> impl IntoResponse {
    metrics.render()
}

/// Record an HTTP request metric. `path` should be the matched route
/// template so that ids do not end up in labels.
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());

    if status >= 500 {
        counter!("http_server_errors_total", &labels).increment(1);
    }
}

/// How a use case ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseCaseOutcome {
    Ok,
    Rejected,
    Error,
}

impl UseCaseOutcome {
    /// Outcome of a use case that reports rejections as `Ok(false)`
    pub fn from_result<E>(result: &Result<bool, E>) -> Self {
        match result {
            Ok(true) => Self::Ok,
            Ok(false) => Self::Rejected,
            Err(_) => Self::Error,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Rejected => "rejected",
            Self::Error => "error",
        }
    }
}

/// Count one execution of `use_case`
pub fn record_use_case(use_case: &'static str, outcome: UseCaseOutcome) {
    counter!(
        "circle_hub_use_cases_total",
        "use_case" => use_case,
        "outcome" => outcome.as_str()
    )
    .increment(1);
}
