//! Clickbait raw score.
//!
//! Unlike the other detectors this one is not normalized to 0..=10: the raw
//! count is used as a gate (`>= CLICKBAIT_GATE`) and as a heavy penalty in
//! the composite score.

use serde::Serialize;

use super::text::{safe_ratio, Article};

/// Sensational phrases; substring match on the case-folded title and text.
pub const CLICKBAIT_PHRASES: &[&str] = &[
    "you won't believe",
    "shocking",
    "mind-blowing",
    "this will blow your mind",
    "jaw-dropping",
    "secret",
    "trick",
    "hack",
    "they don't want you to know",
    "doctors hate",
    "one weird trick",
    "this simple",
    "just discovered",
    "unbelievable",
    "incredible",
    "amazing",
    "surprising",
    "never seen before",
    "you need to see",
    "changed forever",
];

/// Summary phrases saying the article does not live up to its title.
pub const UNDELIVERED_PROMISE_PHRASES: &[&str] = &[
    "doesn't deliver",
    "fails to deliver",
    "misleading",
    "exaggerated",
    "overpromised",
    "underwhelming",
    "disappointing",
    "clickbait",
];

const TITLE_HIT: u32 = 3;
const BODY_HIT: u32 = 1;
const SUMMARY_HIT: u32 = 2;
const SHORT_BODY_HIT: u32 = 2;
/// Text/title length ratio below which the body counts as thin.
const MIN_CONTENT_TITLE_RATIO: f64 = 10.0;
/// Raw score at which an article is called clickbait.
pub const CLICKBAIT_GATE: u32 = 3;

/// Unbounded weighted hit count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ClickbaitScore(pub u32);

impl ClickbaitScore {
    pub fn value(self) -> u32 {
        self.0
    }

    pub fn is_clickbait(self) -> bool {
        self.0 >= CLICKBAIT_GATE
    }
}

pub fn detect_clickbait(article: &Article<'_>) -> ClickbaitScore {
    let mut score = 0u32;

    for phrase in CLICKBAIT_PHRASES {
        if article.title_lower.contains(phrase) {
            score += TITLE_HIT;
        }
    }

    // Counted independently of the title pass: a title phrase scores both.
    for phrase in CLICKBAIT_PHRASES {
        if article.lower.contains(phrase) {
            score += BODY_HIT;
        }
    }

    if let Some(summary) = article.summary {
        let summary = summary.to_lowercase();
        for phrase in UNDELIVERED_PROMISE_PHRASES {
            if summary.contains(phrase) {
                score += SUMMARY_HIT;
            }
        }
    }

    let title_len = article.title_lower.chars().count();
    if title_len > 0 {
        let ratio = safe_ratio(article.char_len() as f64, title_len as f64);
        if ratio < MIN_CONTENT_TITLE_RATIO {
            score += SHORT_BODY_HIT;
        }
    }

    ClickbaitScore(score)
}
