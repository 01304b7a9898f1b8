// tests/metrics.rs
//
// Report counters land in a local Prometheus recorder and show up on /metrics.

use axum::body::{self, Body};
use axum::http::Request;
use http::StatusCode;
use metrics_exporter_prometheus::PrometheusBuilder;
use tower::ServiceExt;

use article_quality_analyzer::metrics::{
    record_report, Metrics, ANALYZED_TOTAL, BLOCKED_TOTAL, CLICKBAIT_TOTAL,
};
use article_quality_analyzer::ArticleReport;

fn reports() -> Vec<ArticleReport> {
    let plain = format!(
        "Transit budget passes\n{}",
        "The council met and voted on the plan. ".repeat(12)
    );
    vec![
        ArticleReport::build(None, &plain, None),
        ArticleReport::build(None, "Shocking secret trick\nUnbelievable.", None),
        ArticleReport::build(
            Some("https://example.com/a".into()),
            "[Unable to access content: 403 Forbidden]",
            None,
        ),
    ]
}

#[tokio::test]
async fn report_counters_are_exposed() {
    let recorder = PrometheusBuilder::new().build_recorder();
    let exporter = Metrics {
        handle: recorder.handle(),
    };

    let reports = reports();
    assert!(!reports[0].is_clickbait);
    assert!(reports[1].is_clickbait);
    assert_eq!(reports[2].content_type, "access-blocked");

    metrics::with_local_recorder(&recorder, || {
        for r in &reports {
            record_report(r);
        }
    });

    let app = exporter.router::<()>();
    let resp = app
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body::to_bytes(resp.into_body(), 1_048_576).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();

    for needle in [
        format!(r#"{ANALYZED_TOTAL}{{content_type="{}"}} 1"#, reports[0].content_type),
        format!(r#"{ANALYZED_TOTAL}{{content_type="{}"}} 1"#, reports[1].content_type),
        format!("{CLICKBAIT_TOTAL} 1"),
        format!("{BLOCKED_TOTAL} 1"),
    ] {
        assert!(text.contains(&needle), "missing `{needle}` in:\n{text}");
    }
    assert!(
        !text.contains(r#"content_type="access-blocked""#),
        "blocked reports must not count as analyzed"
    );
}
