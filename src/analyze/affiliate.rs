//! Affiliate / sponsored-content detector.

use once_cell::sync::Lazy;
use regex::Regex;

use super::text::{count_matches, count_words, safe_ratio, word_matchers, Article};
use super::{SignalDetector, SignalScore};

pub const AFFILIATE_TERMS: &[&str] = &[
    "affiliate",
    "commission",
    "sponsored",
    "partner",
    "partnership",
    "we may earn",
    "we earn",
    "compensation",
    "paid for",
    "click here to buy",
    "shop now",
    "get it now",
    "check price",
    "best price",
    "discount",
    "deal",
    "coupon",
    "promo code",
];

static TERM_MATCHERS: Lazy<Vec<Regex>> = Lazy::new(|| word_matchers(AFFILIATE_TERMS));
static DISCLOSURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:affiliate|commission|compensation|may earn|we earn|paid|sponsored)")
        .expect("disclosure regex")
});
static BUY_BUTTON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:buy now|shop now|get it now|check price|best price|purchase)")
        .expect("buy button regex")
});

/// Literal hyperlink marker left behind by the extractor.
const LINK_MARKER: &str = "href";

#[derive(Debug, Clone, Copy, Default)]
pub struct AffiliateDetector;

impl AffiliateDetector {
    pub const THRESHOLD: u8 = 5;
}

/// Hyperlink markers per 1000 characters of raw text.
pub fn link_density(raw: &str) -> f64 {
    let links = raw.matches(LINK_MARKER).count() as f64;
    let per_mille = raw.chars().count() as f64 / 1000.0;
    safe_ratio(links, per_mille)
}

impl SignalDetector for AffiliateDetector {
    fn name(&self) -> &'static str {
        "affiliate"
    }

    fn detect(&self, article: &Article<'_>) -> SignalScore {
        let term_hits = count_words(article.raw, &TERM_MATCHERS) as f64;
        let disclosures = count_matches(article.raw, &DISCLOSURE) as f64;
        let buttons = count_matches(article.raw, &BUY_BUTTON) as f64;

        let score = (term_hits / 2.0).min(3.0)
            + disclosures.min(2.0)
            + buttons.min(3.0)
            + (link_density(article.raw) * 2.0).min(2.0);

        SignalScore::from_raw(score, Self::THRESHOLD)
    }
}
