//! Shared text statistics used by the signal detectors.
//!
//! Everything here is a pure scan over `&str`. Divisions go through
//! [`safe_ratio`] so degenerate (empty) texts never yield NaN/inf.

use regex::Regex;

/// Borrowed view over one article + optional summary, built once per `evaluate`.
#[derive(Debug, Clone)]
pub struct Article<'a> {
    /// Raw text exactly as handed over by the extractor.
    pub raw: &'a str,
    /// Case-folded copy of the whole text.
    pub lower: String,
    /// Case-folded first line.
    pub title_lower: String,
    /// External summary; `None` when absent or blank.
    pub summary: Option<&'a str>,
}

impl<'a> Article<'a> {
    pub fn new(raw: &'a str, summary: Option<&'a str>) -> Self {
        Self {
            raw,
            lower: raw.to_lowercase(),
            title_lower: title_of(raw).to_lowercase(),
            summary: summary.filter(|s| !s.trim().is_empty()),
        }
    }

    /// Length of the whole text in chars.
    pub fn char_len(&self) -> usize {
        self.raw.chars().count()
    }
}

/// First line (up to the first `\n`); the whole text when there is no newline.
pub fn title_of(text: &str) -> &str {
    text.split('\n').next().unwrap_or_default()
}

/// Build one case-insensitive whole-word matcher per term.
///
/// Boundaries are ASCII-only: a non-ASCII letter next to a term does not
/// extend the word (`dealé` still counts as `deal`).
pub fn word_matchers(terms: &[&str]) -> Vec<Regex> {
    terms
        .iter()
        .map(|t| {
            Regex::new(&format!(r"(?i)(?-u:\b){}(?-u:\b)", regex::escape(t)))
                .expect("word matcher regex")
        })
        .collect()
}

/// Sum of whole-word hits over all matchers.
pub fn count_words(text: &str, matchers: &[Regex]) -> usize {
    matchers.iter().map(|re| re.find_iter(text).count()).sum()
}

/// Non-overlapping match count for a single pattern.
pub fn count_matches(text: &str, re: &Regex) -> usize {
    re.find_iter(text).count()
}

/// `num / den`, or 0.0 when the denominator is zero.
pub fn safe_ratio(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        0.0
    } else {
        num / den
    }
}

/// Sentence-like segments split on runs of `.`, `!`, `?`; trimmed, empties dropped.
pub fn sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Whitespace-delimited tokens.
pub fn tokens(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Round to the nearest integer and clamp to the 0..=10 signal scale.
pub fn to_signal_scale(raw: f64) -> u8 {
    if !raw.is_finite() {
        return 0;
    }
    raw.round().clamp(0.0, 10.0) as u8
}
