//! Debug endpoints: inspect the rule chain and preview a per-signal breakdown.
//! Mounted by the API only when `debug_routes` is enabled in the service config.

use axum::{routing::get, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use super::{
    classify, depth::DepthStats, rules::RULES, Article, ContentType, QualityMetrics, Signals,
};

#[derive(Debug, Serialize)]
pub struct RulesOut {
    pub count: usize,
    pub names: Vec<&'static str>,
    pub labels: Vec<ContentType>,
}

#[derive(Debug, Deserialize)]
pub struct BreakdownReq {
    pub text: String,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BreakdownOut {
    pub clickbait_raw: u32,
    pub metrics: QualityMetrics,
    pub content_type: ContentType,
    pub avg_sentence_len: f64,
    pub word_count: usize,
    pub unique_word_ratio: f64,
    pub complex_word_ratio: f64,
    pub heading_count: usize,
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/debug/rules", get(get_rules))
        .route("/debug/breakdown", post(post_breakdown))
}

async fn get_rules() -> Json<RulesOut> {
    Json(RulesOut {
        count: RULES.len(),
        names: RULES.iter().map(|r| r.name).collect(),
        labels: RULES.iter().map(|r| r.then).collect(),
    })
}

async fn post_breakdown(Json(body): Json<BreakdownReq>) -> Json<BreakdownOut> {
    Json(breakdown(&body.text, body.summary.as_deref()))
}

pub fn breakdown(text: &str, summary: Option<&str>) -> BreakdownOut {
    let article = Article::new(text, summary);
    let signals = Signals::detect(&article);
    let metrics = signals.metrics();
    let stats = DepthStats::collect(text);
    BreakdownOut {
        clickbait_raw: signals.clickbait.value(),
        content_type: classify(&metrics),
        metrics,
        avg_sentence_len: stats.avg_sentence_len,
        word_count: stats.word_count,
        unique_word_ratio: stats.unique_word_ratio,
        complex_word_ratio: stats.complex_word_ratio,
        heading_count: stats.heading_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::evaluate;

    #[test]
    fn breakdown_agrees_with_evaluate() {
        let text = "Shocking news\nA secret trick nobody saw coming.";
        let b = breakdown(text, None);
        let r = evaluate(text, None);
        assert_eq!(b.metrics, r.metrics);
        assert_eq!(b.content_type, r.content_type);
        assert_eq!(b.clickbait_raw >= 3, r.is_clickbait);
    }
}
