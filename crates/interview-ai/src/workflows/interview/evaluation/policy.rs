use super::config::EvaluationConfig;
use serde::{Deserialize, Serialize};

/// Per-question hiring outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HireTier {
    NoValidResponse,
    Disqualified,
    StrongHire,
    Hire,
    Maybe,
    WeakMaybe,
    No,
}

impl HireTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoValidResponse => "No Valid Response",
            Self::Disqualified => "Disqualified",
            Self::StrongHire => "Strong Hire",
            Self::Hire => "Hire",
            Self::Maybe => "Maybe",
            Self::WeakMaybe => "Weak Maybe",
            Self::No => "No",
        }
    }

    /// Headline placed in front of the reason list.
    pub const fn headline(self) -> &'static str {
        match self {
            Self::NoValidResponse => "No valid audio response detected",
            Self::Disqualified => "Multiple serious violations - integrity compromised",
            Self::StrongHire => {
                "Exceptional candidate - outstanding communication and competence"
            }
            Self::Hire => "Strong candidate with excellent communication skills",
            Self::Maybe => "Moderate potential - further evaluation recommended",
            Self::WeakMaybe => "Below average - significant concerns present",
            Self::No => "Not recommended - needs substantial improvement",
        }
    }

    pub const fn is_favorable(self) -> bool {
        matches!(self, Self::StrongHire | Self::Hire)
    }
}

pub(crate) const NO_VALID_RESPONSE_ADVICE: &str =
    "Please ensure you speak clearly during recording";

/// Maps the point total to a tier. Violation count outranks every point threshold.
pub(crate) fn decide_tier(violations: usize, points: f64, config: &EvaluationConfig) -> HireTier {
    if violations >= config.question_disqualifying_violations {
        HireTier::Disqualified
    } else if points >= 9.0 {
        HireTier::StrongHire
    } else if points >= 7.0 {
        HireTier::Hire
    } else if points >= 5.0 {
        HireTier::Maybe
    } else if points >= 3.0 {
        HireTier::WeakMaybe
    } else {
        HireTier::No
    }
}
