//! Journalistic-value detector: sourcing, quotes, dates, attribution, balance.

use once_cell::sync::Lazy;
use regex::Regex;

use super::text::{count_matches, count_words, word_matchers, Article};
use super::{SignalDetector, SignalScore};

pub const JOURNALISM_TERMS: &[&str] = &[
    "according to",
    "research",
    "study",
    "report",
    "analysis",
    "expert",
    "professor",
    "scientist",
    "source",
    "evidence",
    "investigation",
    "interview",
    "survey",
    "data",
    "statistics",
    "findings",
    "concluded",
    "discovered",
    "revealed",
    "confirmed",
    "published in",
    "journal",
    "university",
    "institute",
];

/// Balanced-perspective cues; each counts at most once.
pub const PERSPECTIVE_CUES: &[&str] = &[
    "however",
    "on the other hand",
    "critics",
    "proponents",
    "debate",
    "controversy",
];

static TERM_MATCHERS: Lazy<Vec<Regex>> = Lazy::new(|| word_matchers(JOURNALISM_TERMS));
static QUOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]+)"|'([^']+)'"#).expect("quote regex"));
static LONG_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?-u:\b)(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},\s+\d{4}(?-u:\b)",
    )
    .expect("date regex")
});
static ATTRIBUTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?-u:\b)(?:according to|said|says|reported by|stated by|confirmed by)(?-u:\b)")
        .expect("attribution regex")
});

#[derive(Debug, Clone, Copy, Default)]
pub struct JournalismDetector;

impl JournalismDetector {
    pub const THRESHOLD: u8 = 5;
}

impl SignalDetector for JournalismDetector {
    fn name(&self) -> &'static str {
        "journalism"
    }

    fn detect(&self, article: &Article<'_>) -> SignalScore {
        let term_hits = count_words(article.raw, &TERM_MATCHERS) as f64;
        let quotes = count_matches(article.raw, &QUOTE) as f64;
        let dates = count_matches(article.raw, &LONG_DATE) as f64;
        let attributions = count_matches(article.raw, &ATTRIBUTION) as f64;
        let perspectives = PERSPECTIVE_CUES
            .iter()
            .filter(|cue| article.lower.contains(*cue))
            .count() as f64;

        let score = (term_hits / 3.0).min(3.0)
            + quotes.min(2.0)
            + dates.min(1.0)
            + attributions.min(2.0)
            + perspectives.min(2.0);

        SignalScore::from_raw(score, Self::THRESHOLD)
    }
}
