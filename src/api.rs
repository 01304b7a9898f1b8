use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::analyze;
use crate::config::ServiceConfig;
use crate::metrics::record_report;
use crate::report::ArticleReport;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/analyze", post(analyze_one))
        .route("/batch", post(analyze_batch));

    if state.config.debug_routes {
        router = router.merge(analyze::debug::router::<AppState>());
    }

    router.layer(CorsLayer::very_permissive()).with_state(state)
}

/// Request body for `/analyze` and items of `/batch`.
///
/// `summary` is untyped on purpose: anything but a JSON string means "no summary".
#[derive(Debug, Deserialize)]
pub struct AnalyzeReq {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub summary: Option<Value>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("text is required")]
    MissingText,
    #[error("text exceeds {limit} characters")]
    TextTooLong { limit: usize },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingText => StatusCode::BAD_REQUEST,
            ApiError::TextTooLong { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

fn report_for(req: AnalyzeReq, cfg: &ServiceConfig) -> Result<ArticleReport, ApiError> {
    let text = req
        .text
        .filter(|t| !t.trim().is_empty())
        .ok_or(ApiError::MissingText)?;
    if text.chars().count() > cfg.max_text_chars {
        return Err(ApiError::TextTooLong {
            limit: cfg.max_text_chars,
        });
    }

    let summary = req.summary.as_ref().and_then(Value::as_str);
    let report = ArticleReport::build(req.url, &text, summary);
    record_report(&report);
    Ok(report)
}

/// Emitted once per report, single or batched. Raw text is never logged.
fn log_report(report: &ArticleReport, cfg: &ServiceConfig) {
    if !cfg.dev_log {
        return;
    }
    info!(
        target: "api",
        content_type = %report.content_type,
        quality = report.quality_score,
        length = report.content_length,
        "article analyzed"
    );
}

async fn analyze_one(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeReq>,
) -> Result<Json<ArticleReport>, ApiError> {
    let report = report_for(body, &state.config)?;
    log_report(&report, &state.config);
    Ok(Json(report))
}

async fn analyze_batch(
    State(state): State<AppState>,
    Json(items): Json<Vec<AnalyzeReq>>,
) -> Result<Json<Vec<ArticleReport>>, ApiError> {
    let reports = items
        .into_iter()
        .map(|it| report_for(it, &state.config))
        .collect::<Result<Vec<_>, _>>()?;
    for r in &reports {
        log_report(r, &state.config);
    }
    Ok(Json(reports))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(text: Option<&str>, summary: Option<Value>) -> AnalyzeReq {
        AnalyzeReq {
            text: text.map(str::to_string),
            summary,
            url: None,
        }
    }

    #[test]
    fn blank_text_is_rejected() {
        let cfg = ServiceConfig::default();
        assert!(matches!(
            report_for(req(None, None), &cfg),
            Err(ApiError::MissingText)
        ));
        assert!(matches!(
            report_for(req(Some("  "), None), &cfg),
            Err(ApiError::MissingText)
        ));
    }

    #[test]
    fn oversized_text_is_rejected() {
        let cfg = ServiceConfig {
            max_text_chars: 10,
            ..Default::default()
        };
        assert!(matches!(
            report_for(req(Some("Title\nmore than ten chars"), None), &cfg),
            Err(ApiError::TextTooLong { limit: 10 })
        ));
    }

    #[derive(Clone, Default)]
    struct Capture(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    async fn logged_batch_lines(dev_log: bool) -> usize {
        let sink = Capture::default();
        let writer = sink.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let state = AppState::new(ServiceConfig {
            dev_log,
            ..Default::default()
        });
        let text = "Weather update\nRain is expected across the region later this week, forecasters said.";
        let items = vec![req(Some(text), None), req(Some(text), None)];
        let Json(reports) = analyze_batch(State(state), Json(items)).await.unwrap();
        assert_eq!(reports.len(), 2);

        let out = String::from_utf8(sink.0.lock().unwrap().clone()).unwrap();
        out.matches("article analyzed").count()
    }

    #[tokio::test]
    async fn batch_logs_each_report_under_dev_log() {
        assert_eq!(logged_batch_lines(true).await, 2);
        assert_eq!(logged_batch_lines(false).await, 0);
    }

    #[test]
    fn non_string_summary_is_ignored() {
        let cfg = ServiceConfig::default();
        let text = "Weather update\nRain is expected across the region later this week, forecasters said.";
        let with_number = report_for(req(Some(text), Some(json!(42))), &cfg).unwrap();
        let without = report_for(req(Some(text), None), &cfg).unwrap();
        assert_eq!(with_number, without);
    }
}
