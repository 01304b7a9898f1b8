//! decision.rs: reading recommendation derived from the composite quality score.
//!
//! Pure threshold map, no hysteresis: the same score always yields the same tier.

use serde::{Deserialize, Serialize};

/// What the reader should do with the article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    Read,
    ReadSelectively,
    Skim,
    Skip,
}

/// Icon hint for the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Check,
    Info,
    Warning,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::ReadSelectively => "read-selectively",
            Action::Skim => "skim",
            Action::Skip => "skip",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedAction {
    pub action: Action,
    pub reason: String,
    pub icon: Icon,
}

/// Score tiers, highest first: `(min_score, action, icon, reason)`.
const TIERS: &[(u8, Action, Icon, &str)] = &[
    (
        75,
        Action::Read,
        Icon::Check,
        "This content appears to have substantial informational or journalistic value.",
    ),
    (
        60,
        Action::ReadSelectively,
        Icon::Info,
        "This content has some value but may contain unnecessary information.",
    ),
    (
        40,
        Action::Skim,
        Icon::Info,
        "This content has limited value and may not be worth reading in full.",
    ),
];

const SKIP_REASON: &str = "This content appears to have minimal informational value.";

pub fn recommend_action(quality_score: u8) -> RecommendedAction {
    TIERS
        .iter()
        .find(|(min, ..)| quality_score >= *min)
        .map(|&(_, action, icon, reason)| RecommendedAction {
            action,
            reason: reason.to_string(),
            icon,
        })
        .unwrap_or_else(|| RecommendedAction {
            action: Action::Skip,
            reason: SKIP_REASON.to_string(),
            icon: Icon::Warning,
        })
}
