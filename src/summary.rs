// src/summary.rs
//! Digest of the text returned by the external summarizer.
//!
//! The summarizer answers in light markdown and may append a
//! `**Clickbait Determination:** ...` section. We strip the labelled sections
//! out of the display text and keep the determination as a separate signal.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub const NO_SUMMARY: &str = "No summary available";

static SUMMARY_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\*\*Summary:\*\*.*$").expect("summary section regex"));
static DETERMINATION_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\*\*Clickbait Determination:\*\*.*$").expect("determination section regex")
});
static BOLD_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*[\w\s]+:\*\*").expect("bold label regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));
static DETERMINATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\*\*Clickbait Determination:\*\*(.*?)(?:\.|$)").expect("determination regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDigest {
    /// Display text with labelled sections removed.
    pub formatted: String,
    /// Free-text verdict from the summarizer, if it gave one.
    pub clickbait_determination: Option<String>,
}

impl SummaryDigest {
    pub fn parse(raw: &str) -> Self {
        let cleaned = SUMMARY_SECTION.replace(raw, "");
        let cleaned = DETERMINATION_SECTION.replace(cleaned.trim(), "");
        let cleaned = BOLD_LABEL.replace_all(cleaned.trim(), "");
        let formatted = WHITESPACE.replace_all(&cleaned, " ").trim().to_string();

        let clickbait_determination = DETERMINATION
            .captures(raw)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string());

        Self {
            formatted: if formatted.is_empty() {
                NO_SUMMARY.to_string()
            } else {
                formatted
            },
            clickbait_determination,
        }
    }

    /// External verdict: the determination mentions "clickbait".
    pub fn says_clickbait(&self) -> bool {
        self.clickbait_determination
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains("clickbait"))
    }

    /// Text handed to the core detectors; `None` when nothing usable remains.
    pub fn for_analysis(&self) -> Option<&str> {
        if self.formatted == NO_SUMMARY {
            None
        } else {
            Some(self.formatted.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_sections_and_extracts_verdict() {
        let raw = "**Key Points:** The city approved a budget.\n\n\
            It funds transit.\n\n**Clickbait Determination:** Not clickbait. The title is accurate.";
        let d = SummaryDigest::parse(raw);
        assert_eq!(d.formatted, "The city approved a budget. It funds transit.");
        assert_eq!(d.clickbait_determination.as_deref(), Some("Not clickbait"));
        // substring test, so a negative verdict still mentions the word
        assert!(d.says_clickbait());
    }

    #[test]
    fn summary_section_is_dropped_to_end() {
        let raw = "Short take on the story.\n**Summary:** repeated text";
        let d = SummaryDigest::parse(raw);
        assert_eq!(d.formatted, "Short take on the story.");
        assert!(d.clickbait_determination.is_none());
        assert!(!d.says_clickbait());
    }

    #[test]
    fn determination_without_period_runs_to_end() {
        let d = SummaryDigest::parse("Body\n**Clickbait Determination:** Misleading headline");
        assert_eq!(d.clickbait_determination.as_deref(), Some("Misleading headline"));
        assert!(!d.says_clickbait());
    }

    #[test]
    fn empty_digest_falls_back() {
        let d = SummaryDigest::parse("**Summary:** only this");
        assert_eq!(d.formatted, NO_SUMMARY);
        assert!(d.for_analysis().is_none());
    }
}
