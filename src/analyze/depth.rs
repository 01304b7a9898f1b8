//! Content-depth analyzer: sentence length, length, vocabulary, structure.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::text::{count_matches, safe_ratio, sentences, tokens, Article};
use super::{SignalDetector, SignalScore};

/// Newline, capital, run without sentence punctuation, newline.
static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n[A-Z][^.!?]+\n").expect("heading regex"));

/// Tokens longer than this count as complex vocabulary.
const COMPLEX_WORD_CHARS: usize = 8;

/// Raw statistics behind the depth score.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DepthStats {
    pub avg_sentence_len: f64,
    pub word_count: usize,
    pub unique_word_ratio: f64,
    pub complex_word_ratio: f64,
    pub heading_count: usize,
}

impl DepthStats {
    pub fn collect(raw: &str) -> Self {
        let segments = sentences(raw);
        let total_len: usize = segments.iter().map(|s| s.chars().count()).sum();
        let avg_sentence_len = safe_ratio(total_len as f64, segments.len() as f64);

        let words = tokens(raw);
        let word_count = words.len();
        let unique: HashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let complex = words
            .iter()
            .filter(|w| w.chars().count() > COMPLEX_WORD_CHARS)
            .count();

        Self {
            avg_sentence_len,
            word_count,
            unique_word_ratio: safe_ratio(unique.len() as f64, word_count as f64),
            complex_word_ratio: safe_ratio(complex as f64, word_count as f64),
            heading_count: count_matches(raw, &HEADING),
        }
    }

    pub fn raw_score(&self) -> f64 {
        (self.avg_sentence_len / 15.0).min(2.0)
            + (self.word_count as f64 / 500.0).min(2.0)
            + self.unique_word_ratio * 3.0
            + self.complex_word_ratio * 3.0
            + (self.heading_count as f64).min(2.0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DepthAnalyzer;

impl DepthAnalyzer {
    pub const THRESHOLD: u8 = 5;
}

impl SignalDetector for DepthAnalyzer {
    fn name(&self) -> &'static str {
        "depth"
    }

    fn detect(&self, article: &Article<'_>) -> SignalScore {
        SignalScore::from_raw(DepthStats::collect(article.raw).raw_score(), Self::THRESHOLD)
    }
}
