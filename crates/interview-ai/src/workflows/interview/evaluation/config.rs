use serde::{Deserialize, Serialize};

/// Rubric knobs that differ between the per-question decision and the aggregate score.
///
/// The two violation weights live on different scales: the per-question weight is subtracted
/// from the raw point accumulator, the aggregate weight from a percentage score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub total_questions: usize,
    pub question_violation_weight: f64,
    pub question_disqualifying_violations: usize,
    pub aggregate_violation_penalty: f64,
    pub aggregate_disqualifying_violations: usize,
}

impl EvaluationConfig {
    pub fn with_total_questions(total_questions: usize) -> Self {
        Self {
            total_questions,
            ..Self::default()
        }
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            total_questions: 3,
            question_violation_weight: 1.5,
            question_disqualifying_violations: 3,
            aggregate_violation_penalty: 5.0,
            aggregate_disqualifying_violations: 5,
        }
    }
}
