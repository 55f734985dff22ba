use super::super::domain::QuestionResult;
use super::super::evaluation::{EvaluationConfig, HireEngine};
use super::views::{
    AggregateScore, ComponentAverages, ComponentContributionEntry, InterviewReport,
    QuestionSummaryEntry, Recommendation, WeightedComponent,
};

/// Proportional aggregate over `results` for an interview of `total_questions` prompts.
///
/// Returns `None` when no result carries valid data or the interview has no questions; there is
/// no recommendation in that state.
pub fn aggregate(results: &[QuestionResult], total_questions: usize) -> Option<AggregateScore> {
    aggregate_with(results, &EvaluationConfig::with_total_questions(total_questions))
}

pub fn aggregate_with(
    results: &[QuestionResult],
    config: &EvaluationConfig,
) -> Option<AggregateScore> {
    let total_questions = config.total_questions;
    if total_questions == 0 {
        return None;
    }

    let valid: Vec<&QuestionResult> = results
        .iter()
        .filter(|result| result.has_valid_data)
        .collect();
    let averages = average_components(&valid)?;

    let questions_answered = valid.len();
    let max_possible_score = max_possible_score(questions_answered, total_questions);

    let raw_score: f64 = WeightedComponent::ordered()
        .into_iter()
        .map(|component| averages.input_for(component) * component.weight())
        .sum();
    let capped_score = raw_score / 100.0 * max_possible_score;

    let total_violations = total_violations(results);
    let violation_penalty = total_violations as f64 * config.aggregate_violation_penalty;
    let final_score = (capped_score - violation_penalty).max(0.0);

    let recommendation = if total_violations >= config.aggregate_disqualifying_violations {
        Recommendation::Disqualified
    } else {
        recommend(final_score, max_possible_score)
    };

    Some(AggregateScore {
        questions_answered,
        total_questions,
        max_possible_score,
        averages,
        raw_score,
        capped_score,
        total_violations,
        violation_penalty,
        final_score,
        recommendation,
        recommendation_label: recommendation.label(),
    })
}

pub(crate) fn max_possible_score(questions_answered: usize, total_questions: usize) -> f64 {
    if total_questions == 0 {
        return 0.0;
    }
    questions_answered as f64 / total_questions as f64 * 100.0
}

pub(crate) fn total_violations(results: &[QuestionResult]) -> usize {
    results.iter().map(QuestionResult::violation_count).sum()
}

// Thresholds scale with the maximum the candidate could reach.
fn recommend(final_score: f64, max_possible_score: f64) -> Recommendation {
    if final_score >= max_possible_score * 0.80 {
        Recommendation::Exceptional
    } else if final_score >= max_possible_score * 0.70 {
        Recommendation::Strong
    } else if final_score >= max_possible_score * 0.60 {
        Recommendation::Moderate
    } else if final_score >= max_possible_score * 0.50 {
        Recommendation::Weak
    } else {
        Recommendation::NotRecommended
    }
}

fn average_components(valid: &[&QuestionResult]) -> Option<ComponentAverages> {
    if valid.is_empty() {
        return None;
    }

    let mean = |value: fn(&QuestionResult) -> f64| -> f64 {
        valid.iter().map(|result| value(result)).sum::<f64>() / valid.len() as f64
    };

    Some(ComponentAverages {
        confidence: mean(|result| result.emotion_scores.confidence),
        accuracy: mean(|result| result.accuracy),
        fluency: mean(|result| result.fluency),
        grammar: mean(|result| result.fluency_detailed.grammar_score),
        vocabulary: mean(|result| result.fluency_detailed.lexical_diversity),
        coherence: mean(|result| result.fluency_detailed.coherence_score),
        filler_count: mean(|result| f64::from(result.filler_count)),
        words_per_minute: mean(|result| result.wpm),
        speech_rate_normalized: mean(|result| result.fluency_detailed.speech_rate_normalized),
        pause_ratio: mean(|result| result.fluency_detailed.pause_ratio),
    })
}

impl InterviewReport {
    /// Builds the dashboard view. Results without an attached decision are decided on the fly
    /// and left unmodified.
    pub fn build(results: &[QuestionResult], config: &EvaluationConfig) -> Self {
        let engine = HireEngine::new(config.clone());
        let questions_answered = results
            .iter()
            .filter(|result| result.has_valid_data)
            .count();
        let total_violations = total_violations(results);
        let questions_with_violations = results
            .iter()
            .filter(|result| !result.violations.is_empty())
            .count();

        let score = aggregate_with(results, config);
        let breakdown = score
            .as_ref()
            .map(|score| breakdown(&score.averages))
            .unwrap_or_default();

        let questions = results
            .iter()
            .enumerate()
            .map(|(index, result)| {
                let decision = result
                    .hire_decision
                    .unwrap_or_else(|| engine.decide(result).tier);
                let violation_count = result.violation_count();
                let question_number = if result.question_number > 0 {
                    result.question_number as usize
                } else {
                    index + 1
                };

                QuestionSummaryEntry {
                    question_number,
                    question: result.question.clone(),
                    decision,
                    decision_label: decision.label(),
                    fluency_level: result.fluency_level,
                    violation_count,
                    status_label: if violation_count == 0 {
                        "Clean".to_string()
                    } else {
                        format!("{violation_count} violation(s)")
                    },
                    has_valid_data: result.has_valid_data,
                }
            })
            .collect();

        let mut report = InterviewReport {
            questions_answered,
            total_questions: config.total_questions,
            max_possible_score: max_possible_score(questions_answered, config.total_questions),
            total_violations,
            questions_with_violations,
            score,
            breakdown,
            questions,
            observations: Vec::new(),
        };
        report.observations = super::generate_observations(&report, config);
        report
    }
}

fn breakdown(averages: &ComponentAverages) -> Vec<ComponentContributionEntry> {
    WeightedComponent::ordered()
        .into_iter()
        .map(|component| {
            let average = averages.input_for(component);
            ComponentContributionEntry {
                component,
                component_label: component.label(),
                weight: component.weight_label(),
                average,
                contribution: average * component.weight(),
            }
        })
        .collect()
}
