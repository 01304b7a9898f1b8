// src/report.rs
//! Service-facing report: the core `AnalysisResult` merged with the external
//! summarizer's verdict, plus a content warning for the UI.

use serde::Serialize;

use crate::analyze::{evaluate, AnalysisResult, ContentType};
use crate::decision::Icon;
use crate::summary::{SummaryDigest, NO_SUMMARY};

/// Prefixes the upstream extractor uses when it could not read the page.
pub const BLOCKED_PREFIXES: &[&str] = &["[Unable to access content:", "[Page not found:"];

/// Content type reported when no analysis ran.
pub const ACCESS_BLOCKED: &str = "access-blocked";

/// Score below which a shopping warning escalates to `high`.
const SHOPPING_HIGH_SEVERITY_BELOW: u8 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    ShoppingContent,
    LowValue,
    AccessBlocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentWarning {
    #[serde(rename = "type")]
    pub kind: WarningKind,
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportAction {
    pub action: String,
    pub reason: String,
    pub icon: Icon,
}

/// Flat sub-score view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetrics {
    pub journalistic_value: u8,
    pub content_depth: u8,
    pub product_list_score: u8,
    pub affiliate_score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub summary: String,
    pub is_clickbait: bool,
    /// One of the six content labels, or `access-blocked`.
    pub content_type: String,
    pub quality_score: u8,
    pub recommended_action: ReportAction,
    pub content_warning: Option<ContentWarning>,
    pub content_length: usize,
    pub metrics: ReportMetrics,
}

pub fn is_blocked_notice(text: &str) -> bool {
    BLOCKED_PREFIXES.iter().any(|p| text.starts_with(p))
}

pub fn content_warning(analysis: &AnalysisResult) -> Option<ContentWarning> {
    match analysis.content_type {
        ct if ct.is_shopping() => Some(ContentWarning {
            kind: WarningKind::ShoppingContent,
            message: "This appears to be a shopping/product list article that may not contain substantive information.".to_string(),
            severity: if analysis.metrics.quality_score < SHOPPING_HIGH_SEVERITY_BELOW {
                Severity::High
            } else {
                Severity::Medium
            },
        }),
        ContentType::LowValueContent => Some(ContentWarning {
            kind: WarningKind::LowValue,
            message: "This content appears to have minimal informational or journalistic value."
                .to_string(),
            severity: Severity::High,
        }),
        _ => None,
    }
}

impl ArticleReport {
    /// Analyze `text`, folding in the summarizer output when present.
    pub fn build(url: Option<String>, text: &str, raw_summary: Option<&str>) -> Self {
        if is_blocked_notice(text) {
            return Self::access_blocked(url, text);
        }

        let digest = raw_summary
            .filter(|s| !s.trim().is_empty())
            .map(SummaryDigest::parse);
        let analysis = evaluate(text, digest.as_ref().and_then(SummaryDigest::for_analysis));
        Self::from_analysis(url, text, &analysis, digest.as_ref())
    }

    pub fn from_analysis(
        url: Option<String>,
        text: &str,
        analysis: &AnalysisResult,
        digest: Option<&SummaryDigest>,
    ) -> Self {
        let external = digest.is_some_and(SummaryDigest::says_clickbait);
        let m = &analysis.metrics;
        Self {
            url,
            summary: digest
                .map(|d| d.formatted.clone())
                .unwrap_or_else(|| NO_SUMMARY.to_string()),
            is_clickbait: analysis.is_clickbait || external,
            content_type: analysis.content_type.as_str().to_string(),
            quality_score: m.quality_score,
            recommended_action: ReportAction {
                action: analysis.recommended_action.action.as_str().to_string(),
                reason: analysis.recommended_action.reason.clone(),
                icon: analysis.recommended_action.icon,
            },
            content_warning: content_warning(analysis),
            content_length: text.chars().count(),
            metrics: ReportMetrics {
                journalistic_value: m.has_journalistic_value.score,
                content_depth: m.content_depth.score,
                product_list_score: m.is_product_list.score,
                affiliate_score: m.is_affiliate_heavy.score,
            },
        }
    }

    /// Report for a page the extractor could not read; no analysis runs.
    pub fn access_blocked(url: Option<String>, notice: &str) -> Self {
        Self {
            url,
            summary: notice.to_string(),
            is_clickbait: false,
            content_type: ACCESS_BLOCKED.to_string(),
            quality_score: 0,
            recommended_action: ReportAction {
                action: "visit-directly".to_string(),
                reason: "This website blocks automated access. Try visiting it directly in your browser.".to_string(),
                icon: Icon::Warning,
            },
            content_warning: Some(ContentWarning {
                kind: WarningKind::AccessBlocked,
                message: "This website is blocking our access. This is common with news and shopping sites.".to_string(),
                severity: Severity::Medium,
            }),
            content_length: notice.chars().count(),
            metrics: ReportMetrics::default(),
        }
    }
}
