use axum::{routing::get, Router};
use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::report::{ArticleReport, ACCESS_BLOCKED};

pub const ANALYZED_TOTAL: &str = "articles_analyzed_total";
pub const CLICKBAIT_TOTAL: &str = "articles_clickbait_total";
pub const BLOCKED_TOTAL: &str = "articles_access_blocked_total";

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the global Prometheus recorder. Call once, from the binary.
    pub fn init() -> anyhow::Result<Self> {
        let handle = PrometheusBuilder::new().install_recorder()?;
        Ok(Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router<S>(&self) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

/// Count one report. No-op when no recorder is installed (tests).
pub fn record_report(report: &ArticleReport) {
    if report.content_type == ACCESS_BLOCKED {
        counter!(BLOCKED_TOTAL).increment(1);
        return;
    }
    counter!(ANALYZED_TOTAL, "content_type" => report.content_type.clone()).increment(1);
    if report.is_clickbait {
        counter!(CLICKBAIT_TOTAL).increment(1);
    }
}
