mod config;
mod policy;
mod rules;

pub use config::EvaluationConfig;
pub use policy::HireTier;

use super::domain::QuestionResult;
use super::transcript::is_valid_transcript;
use policy::{decide_tier, NO_VALID_RESPONSE_ADVICE};
use serde::{Deserialize, Serialize};

/// Stateless evaluator applying the hiring rubric to one question result.
#[derive(Debug, Clone, Default)]
pub struct HireEngine {
    config: EvaluationConfig,
}

impl HireEngine {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    pub fn decide(&self, result: &QuestionResult) -> HireDecision {
        if !is_valid_transcript(&result.transcript) {
            return HireDecision {
                tier: HireTier::NoValidResponse,
                reasons: vec![
                    HireTier::NoValidResponse.headline().to_string(),
                    NO_VALID_RESPONSE_ADVICE.to_string(),
                ],
                points: 0.0,
                components: Vec::new(),
            };
        }

        let (components, points) = rules::score_result(result, &self.config);
        let tier = decide_tier(result.violation_count(), points, &self.config);

        let mut reasons = Vec::with_capacity(components.len() + 1);
        reasons.push(tier.headline().to_string());
        reasons.extend(components.iter().map(|component| component.note.clone()));

        HireDecision {
            tier,
            reasons,
            points,
            components,
        }
    }

    /// Decides and stores the tier and reasons on the result itself.
    pub fn attach(&self, result: &mut QuestionResult) -> HireDecision {
        let decision = self.decide(result);
        result.hire_decision = Some(decision.tier);
        result.hire_reasons = decision.reasons.clone();
        decision
    }
}

/// Decides a single result with the default rubric.
pub fn decide_hire(result: &QuestionResult) -> HireDecision {
    HireEngine::default().decide(result)
}

/// Rubric dimension a score component was produced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringFactor {
    Violations,
    Confidence,
    Accuracy,
    Fluency,
    SpeechRate,
    Grammar,
    Vocabulary,
    Coherence,
    FillerWords,
    Pauses,
    Nervousness,
}

/// Discrete contribution to a decision, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoringFactor,
    pub points: f64,
    pub note: String,
}

/// Decision output: tier, display reasons (headline first), and the point trail behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HireDecision {
    pub tier: HireTier,
    pub reasons: Vec<String>,
    pub points: f64,
    pub components: Vec<ScoreComponent>,
}

impl HireDecision {
    pub fn summary(&self) -> String {
        format!("{}: {}", self.tier.label(), self.tier.headline())
    }
}
