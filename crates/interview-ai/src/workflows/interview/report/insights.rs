use super::super::evaluation::EvaluationConfig;
use super::views::{InterviewReport, Recommendation};

pub(crate) fn generate_observations(
    report: &InterviewReport,
    config: &EvaluationConfig,
) -> Vec<String> {
    let mut observations = Vec::new();

    if report.questions_answered < report.total_questions {
        observations.push(format!(
            "Only {}/{} questions answered - maximum possible score: {:.1}%",
            report.questions_answered, report.total_questions, report.max_possible_score
        ));
    }

    if report.total_violations > 0 {
        observations.push(format!(
            "{} violation(s) detected across {} question(s) - each violation: -{:.0}% penalty",
            report.total_violations,
            report.questions_with_violations,
            config.aggregate_violation_penalty
        ));
    }

    let Some(score) = &report.score else {
        observations.push("No valid answers recorded - no recommendation available".to_string());
        return observations;
    };

    if score.recommendation == Recommendation::Disqualified {
        observations.push(score.recommendation.detail().to_string());
        return observations;
    }

    if score.questions_answered < score.total_questions {
        observations.push(format!(
            "Proportional scoring applied: raw score {:.1}% capped to {:.1}% of a possible {:.1}%",
            score.raw_score, score.capped_score, score.max_possible_score
        ));
    }

    if score.violation_penalty > 0.0 {
        observations.push(format!(
            "Score reduced by {:.0}% due to {} violation(s)",
            score.violation_penalty, score.total_violations
        ));
    }

    observations.push(format!(
        "{}: {}",
        score.recommendation.label(),
        score.recommendation.detail()
    ));

    observations
}
