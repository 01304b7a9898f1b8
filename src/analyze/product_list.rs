//! Shopping / listicle detector.

use once_cell::sync::Lazy;
use regex::Regex;

use super::text::{count_matches, count_words, word_matchers, Article};
use super::{SignalDetector, SignalScore};

pub const PRODUCT_LIST_TERMS: &[&str] = &[
    "products",
    "items",
    "things",
    "buy",
    "purchase",
    "shop",
    "amazon",
    "best-seller",
    "bestseller",
    "top-rated",
    "sale",
    "deal",
    "discount",
    "price",
    "affordable",
    "you need",
    "must-have",
    "essential",
    "check out",
    "perfect for",
    "solution for",
];

static TERM_MATCHERS: Lazy<Vec<Regex>> = Lazy::new(|| word_matchers(PRODUCT_LIST_TERMS));
static PRICE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\d+(\.\d{2})?").expect("price regex"));
static AMAZON_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)amzn\.to|amazon\.com").expect("amazon link regex"));
static LIST_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?mi)^\d+[.)]\s|(?-u:\b)\d+\s(?:products|things|items|buys|gifts|essentials)(?-u:\b)")
        .expect("list marker regex")
});

const TITLE_FOCUS_POINTS: f64 = 3.0;
const TERMS_PER_POINT: f64 = 5.0;
const TERMS_CAP: f64 = 3.0;
const PRICE_CAP: f64 = 3.0;
const AFFILIATE_LINK_WEIGHT: f64 = 2.0;
const AFFILIATE_LINK_CAP: f64 = 4.0;
const LIST_MARKERS_PER_POINT: f64 = 2.0;
const LIST_MARKER_CAP: f64 = 2.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct ProductListDetector;

impl ProductListDetector {
    pub const THRESHOLD: u8 = 6;
}

impl SignalDetector for ProductListDetector {
    fn name(&self) -> &'static str {
        "product_list"
    }

    fn detect(&self, article: &Article<'_>) -> SignalScore {
        // Summary is accepted by the pipeline but not scored here.
        let title_focus = PRODUCT_LIST_TERMS
            .iter()
            .any(|t| article.title_lower.contains(t));

        let term_hits = count_words(article.raw, &TERM_MATCHERS) as f64;
        let prices = count_matches(article.raw, &PRICE) as f64;
        let amazon = count_matches(article.raw, &AMAZON_LINK) as f64;
        let markers = count_matches(article.raw, &LIST_MARKER) as f64;

        let mut score = 0.0;
        if title_focus {
            score += TITLE_FOCUS_POINTS;
        }
        score += (term_hits / TERMS_PER_POINT).min(TERMS_CAP);
        score += prices.min(PRICE_CAP);
        score += (amazon * AFFILIATE_LINK_WEIGHT).min(AFFILIATE_LINK_CAP);
        score += (markers / LIST_MARKERS_PER_POINT).min(LIST_MARKER_CAP);

        SignalScore::from_raw(score, Self::THRESHOLD)
    }
}
