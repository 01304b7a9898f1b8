//! Composite quality score (0..=100).
//!
//! Linear fusion around a neutral baseline:
//! `50 + 3*journalism + 2*depth - 2*product_list - 2*affiliate - 5*clickbait_raw`,
//! clamped to [0,100]. The raw clickbait count is unbounded, so a handful of
//! sensational hits dominates everything else.

use super::clickbait::ClickbaitScore;

pub const BASELINE: i64 = 50;
pub const W_JOURNALISM: i64 = 3;
pub const W_DEPTH: i64 = 2;
pub const W_PRODUCT_LIST: i64 = 2;
pub const W_AFFILIATE: i64 = 2;
pub const W_CLICKBAIT: i64 = 5;

/// Sub-scores feeding the aggregator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreInputs {
    pub journalism: u8,
    pub depth: u8,
    pub product_list: u8,
    pub affiliate: u8,
    pub clickbait: ClickbaitScore,
}

pub fn quality_score(inputs: &ScoreInputs) -> u8 {
    let raw = BASELINE + W_JOURNALISM * i64::from(inputs.journalism)
        + W_DEPTH * i64::from(inputs.depth)
        - W_PRODUCT_LIST * i64::from(inputs.product_list)
        - W_AFFILIATE * i64::from(inputs.affiliate)
        - W_CLICKBAIT * i64::from(inputs.clickbait.value());
    raw.clamp(0, 100) as u8
}
