// src/analyze/mod.rs
//! Analysis pipeline entry: runs the five signal detectors, fuses their
//! sub-scores into the composite quality score, then classifies the content
//! and picks a reading recommendation.
//!
//! Everything here is pure and synchronous. Detectors share no state, so the
//! order they run in does not affect the result.

pub mod affiliate;
pub mod clickbait;
pub mod debug;
pub mod depth;
pub mod journalism;
pub mod product_list;
pub mod rules;
pub mod scoring;
pub mod text;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decision::{recommend_action, RecommendedAction};

// Re-export convenient types.
pub use crate::analyze::affiliate::AffiliateDetector;
pub use crate::analyze::clickbait::{detect_clickbait, ClickbaitScore};
pub use crate::analyze::depth::{DepthAnalyzer, DepthStats};
pub use crate::analyze::journalism::JournalismDetector;
pub use crate::analyze::product_list::ProductListDetector;
pub use crate::analyze::rules::{classify, ContentType};
pub use crate::analyze::scoring::{quality_score, ScoreInputs};
pub use crate::analyze::text::Article;

/// Bounded sub-score plus the detector's own verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalScore {
    /// 0..=10
    pub score: u8,
    pub flag: bool,
}

impl SignalScore {
    /// Clamp `score` into 0..=10 and derive the flag from `threshold`.
    pub fn new(score: u8, threshold: u8) -> Self {
        let score = score.min(10);
        Self {
            score,
            flag: score >= threshold,
        }
    }

    /// Round a fractional component sum onto the 0..=10 scale.
    pub fn from_raw(raw: f64, threshold: u8) -> Self {
        Self::new(text::to_signal_scale(raw), threshold)
    }
}

/// A stateless detector producing one 0..=10 signal.
pub trait SignalDetector {
    fn name(&self) -> &'static str;
    fn detect(&self, article: &Article<'_>) -> SignalScore;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityMetrics {
    pub is_product_list: SignalScore,
    pub has_journalistic_value: SignalScore,
    pub is_affiliate_heavy: SignalScore,
    pub content_depth: SignalScore,
    /// 0..=100
    pub quality_score: u8,
}

/// Sole output of [`evaluate`]; rebuilt from scratch on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub is_clickbait: bool,
    pub content_type: ContentType,
    pub metrics: QualityMetrics,
    pub recommended_action: RecommendedAction,
}

/// Every signal computed for one article, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signals {
    pub clickbait: ClickbaitScore,
    pub product_list: SignalScore,
    pub journalism: SignalScore,
    pub affiliate: SignalScore,
    pub depth: SignalScore,
}

impl Signals {
    pub fn detect(article: &Article<'_>) -> Self {
        Self {
            clickbait: detect_clickbait(article),
            product_list: ProductListDetector.detect(article),
            journalism: JournalismDetector.detect(article),
            affiliate: AffiliateDetector.detect(article),
            depth: DepthAnalyzer.detect(article),
        }
    }

    pub fn score_inputs(&self) -> ScoreInputs {
        ScoreInputs {
            journalism: self.journalism.score,
            depth: self.depth.score,
            product_list: self.product_list.score,
            affiliate: self.affiliate.score,
            clickbait: self.clickbait,
        }
    }

    pub fn metrics(&self) -> QualityMetrics {
        QualityMetrics {
            is_product_list: self.product_list,
            has_journalistic_value: self.journalism,
            is_affiliate_heavy: self.affiliate,
            content_depth: self.depth,
            quality_score: quality_score(&self.score_inputs()),
        }
    }
}

/// Main entry: `(article text, optional summary) -> AnalysisResult`.
///
/// Never fails; empty or degenerate text still yields a well-formed result.
/// A blank summary is treated as absent.
pub fn evaluate(article_text: &str, summary: Option<&str>) -> AnalysisResult {
    let article = Article::new(article_text, summary);
    let signals = Signals::detect(&article);
    let metrics = signals.metrics();
    let content_type = classify(&metrics);
    let recommended_action = recommend_action(metrics.quality_score);

    // Never log raw text. Only hashed id + scores.
    debug!(
        target: "analyze",
        id = %anon_hash(article_text),
        clickbait = signals.clickbait.value(),
        product_list = metrics.is_product_list.score,
        journalism = metrics.has_journalistic_value.score,
        affiliate = metrics.is_affiliate_heavy.score,
        depth = metrics.content_depth.score,
        quality = metrics.quality_score,
        content_type = %content_type,
    );

    AnalysisResult {
        is_clickbait: signals.clickbait.is_clickbait(),
        content_type,
        metrics,
        recommended_action,
    }
}

/// Short, stable, anonymized id for a text (first 6 bytes of SHA-256, hex).
pub(crate) fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::Action;
    use serde_json::json;

    #[test]
    fn empty_input_is_well_formed() {
        let r = evaluate("", None);
        assert!(!r.is_clickbait);
        assert_eq!(r.metrics.content_depth.score, 0);
        assert_eq!(r.metrics.quality_score, 50);
        // 50 is not below 40, so the chain falls through to the default label.
        assert_eq!(r.content_type, ContentType::GeneralContent);
        assert_eq!(r.recommended_action.action, Action::Skim);
    }

    #[test]
    fn blank_summary_equals_no_summary() {
        let text = "Title line\nSome body text that is long enough to avoid the ratio rule entirely.";
        assert_eq!(evaluate(text, Some("  \n ")), evaluate(text, None));
    }

    #[test]
    fn signal_score_clamps_and_flags() {
        assert_eq!(SignalScore::new(12, 5), SignalScore { score: 10, flag: true });
        assert_eq!(SignalScore::new(4, 5), SignalScore { score: 4, flag: false });
        assert_eq!(SignalScore::from_raw(4.5, 5), SignalScore { score: 5, flag: true });
    }

    #[test]
    fn serialized_field_names() {
        let v = serde_json::to_value(evaluate("Hello\nworld", None)).unwrap();
        assert!(v["isClickbait"].is_boolean());
        assert!(v["contentType"].is_string());
        assert!(v["metrics"]["qualityScore"].is_u64());
        for key in ["isProductList", "hasJournalisticValue", "isAffiliateHeavy", "contentDepth"] {
            assert!(v["metrics"][key]["score"].is_u64(), "missing {key}");
            assert!(v["metrics"][key]["flag"].is_boolean(), "missing {key}");
        }
        assert!(v["recommendedAction"]["action"].is_string());
        assert_ne!(v["recommendedAction"]["icon"], json!(null));
    }

    #[test]
    fn anon_hash_is_short_and_stable() {
        let a = anon_hash("some text");
        assert_eq!(a.len(), 12);
        assert_eq!(a, anon_hash("some text"));
        assert_ne!(a, anon_hash("other text"));
    }
}
