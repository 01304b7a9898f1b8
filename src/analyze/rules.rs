//! Content-type rule chain.
//!
//! Rules are an explicit ordered table evaluated top to bottom; the first
//! predicate that holds decides the label. Product-list rules come before the
//! journalism rules, so list-structured but well-sourced articles are labelled
//! as product lists.

use serde::{Deserialize, Serialize};

use super::QualityMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    AffiliateProductList,
    ProductList,
    InDepthJournalism,
    StandardReporting,
    LowValueContent,
    GeneralContent,
}

impl ContentType {
    pub const ALL: [ContentType; 6] = [
        ContentType::AffiliateProductList,
        ContentType::ProductList,
        ContentType::InDepthJournalism,
        ContentType::StandardReporting,
        ContentType::LowValueContent,
        ContentType::GeneralContent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::AffiliateProductList => "affiliate-product-list",
            ContentType::ProductList => "product-list",
            ContentType::InDepthJournalism => "in-depth-journalism",
            ContentType::StandardReporting => "standard-reporting",
            ContentType::LowValueContent => "low-value-content",
            ContentType::GeneralContent => "general-content",
        }
    }

    pub fn is_shopping(self) -> bool {
        matches!(
            self,
            ContentType::AffiliateProductList | ContentType::ProductList
        )
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(predicate, label)` entry of the chain.
pub struct Rule {
    pub name: &'static str,
    pub when: fn(&QualityMetrics) -> bool,
    pub then: ContentType,
}

/// Evaluated in order; first match wins.
pub static RULES: &[Rule] = &[
    Rule {
        name: "affiliate product list",
        when: |m| m.is_product_list.score >= 7 && m.is_affiliate_heavy.score >= 6,
        then: ContentType::AffiliateProductList,
    },
    Rule {
        name: "product list",
        when: |m| m.is_product_list.score >= 6,
        then: ContentType::ProductList,
    },
    Rule {
        name: "in-depth journalism",
        when: |m| m.has_journalistic_value.score >= 7 && m.content_depth.score >= 7,
        then: ContentType::InDepthJournalism,
    },
    Rule {
        name: "standard reporting",
        when: |m| m.has_journalistic_value.score >= 5,
        then: ContentType::StandardReporting,
    },
    Rule {
        name: "low value",
        when: |m| m.quality_score < 40,
        then: ContentType::LowValueContent,
    },
];

/// Label used when no rule matches.
pub const FALLBACK: ContentType = ContentType::GeneralContent;

pub fn classify(metrics: &QualityMetrics) -> ContentType {
    RULES
        .iter()
        .find(|r| (r.when)(metrics))
        .map(|r| r.then)
        .unwrap_or(FALLBACK)
}
