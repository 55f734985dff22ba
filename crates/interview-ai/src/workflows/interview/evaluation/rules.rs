use super::super::domain::{FluencyLevel, QuestionResult};
use super::config::EvaluationConfig;
use super::{ScoreComponent, ScoringFactor};

/// Runs every threshold ladder over a result with a usable transcript.
///
/// Returns the components in reason order and the accumulated point total, which always
/// equals the sum of the component points.
pub(crate) fn score_result(
    result: &QuestionResult,
    config: &EvaluationConfig,
) -> (Vec<ScoreComponent>, f64) {
    let mut components = Vec::with_capacity(11);

    let violations = result.violation_count();
    if violations > 0 {
        components.push(ScoreComponent {
            factor: ScoringFactor::Violations,
            points: -(violations as f64) * config.question_violation_weight,
            note: format!("{violations} violation(s) detected - under review"),
        });
    }

    components.push(confidence(result.emotion_scores.confidence));
    components.push(accuracy(result.accuracy));
    components.push(fluency(result.fluency_level, result.fluency));
    components.extend(speech_rate(
        result.fluency_detailed.speech_rate_normalized,
        result.fluency_detailed.speech_rate,
    ));
    components.push(grammar(
        result.fluency_detailed.grammar_score,
        result.fluency_detailed.grammar_errors,
    ));
    components.push(vocabulary(result.fluency_detailed.lexical_diversity));
    components.extend(coherence(result.fluency_detailed.coherence_score));
    components.push(filler_words(result.fluency_detailed.filler_count));
    components.push(pauses(result.fluency_detailed.pause_ratio));
    components.extend(nervousness(result.emotion_scores.nervousness));

    let total = components.iter().map(|component| component.points).sum();
    (components, total)
}

fn component(factor: ScoringFactor, points: f64, note: String) -> ScoreComponent {
    ScoreComponent {
        factor,
        points,
        note,
    }
}

fn confidence(value: f64) -> ScoreComponent {
    let factor = ScoringFactor::Confidence;
    if value >= 75.0 {
        component(factor, 2.5, format!("Excellent confidence ({value:.1}%)"))
    } else if value >= 60.0 {
        component(factor, 2.0, format!("High confidence ({value:.1}%)"))
    } else if value >= 45.0 {
        component(factor, 1.0, format!("Moderate confidence ({value:.1}%)"))
    } else {
        component(factor, 0.0, format!("Low confidence ({value:.1}%)"))
    }
}

fn accuracy(value: f64) -> ScoreComponent {
    let factor = ScoringFactor::Accuracy;
    if value >= 75.0 {
        component(factor, 3.0, format!("Excellent answer relevance ({value:.1}%)"))
    } else if value >= 60.0 {
        component(factor, 2.0, format!("Strong answer relevance ({value:.1}%)"))
    } else if value >= 45.0 {
        component(factor, 1.0, format!("Acceptable answer ({value:.1}%)"))
    } else {
        component(factor, 0.0, format!("Low answer relevance ({value:.1}%)"))
    }
}

fn fluency(level: FluencyLevel, score: f64) -> ScoreComponent {
    let factor = ScoringFactor::Fluency;
    let label = level.label();
    match level {
        FluencyLevel::Excellent => component(
            factor,
            4.0,
            format!("Outstanding fluency ({score:.1}% - {label})"),
        ),
        FluencyLevel::Fluent => {
            component(factor, 3.0, format!("Strong fluency ({score:.1}% - {label})"))
        }
        FluencyLevel::Moderate => component(
            factor,
            1.5,
            format!("Moderate fluency ({score:.1}% - {label})"),
        ),
        FluencyLevel::NeedsImprovement | FluencyLevel::NoData => component(
            factor,
            0.0,
            format!("Fluency needs improvement ({score:.1}% - {label})"),
        ),
    }
}

// No fallback branch: a normalized rate below 0.7 with a raw rate inside 120..=180 adds no note.
fn speech_rate(normalized: f64, words_per_minute: f64) -> Option<ScoreComponent> {
    let factor = ScoringFactor::SpeechRate;
    let note = if normalized >= 0.9 {
        format!("Optimal speech rate ({words_per_minute:.0} WPM)")
    } else if normalized >= 0.7 {
        format!("Good speech rate ({words_per_minute:.0} WPM)")
    } else if words_per_minute > 180.0 {
        format!("Speaking too fast ({words_per_minute:.0} WPM - may indicate nervousness)")
    } else if words_per_minute < 120.0 {
        format!("Speaking too slow ({words_per_minute:.0} WPM)")
    } else {
        return None;
    };

    Some(component(factor, 0.0, note))
}

fn grammar(score: f64, errors: u32) -> ScoreComponent {
    let factor = ScoringFactor::Grammar;
    if score >= 85.0 {
        component(
            factor,
            1.0,
            format!("Excellent grammar ({score:.0}% - {errors} errors)"),
        )
    } else if score >= 70.0 {
        component(
            factor,
            0.0,
            format!("Good grammar ({score:.0}% - {errors} errors)"),
        )
    } else if score >= 55.0 {
        component(
            factor,
            0.0,
            format!("Acceptable grammar ({score:.0}% - {errors} errors)"),
        )
    } else {
        component(
            factor,
            0.0,
            format!("Grammar needs improvement ({score:.0}% - {errors} errors)"),
        )
    }
}

fn vocabulary(diversity: f64) -> ScoreComponent {
    let factor = ScoringFactor::Vocabulary;
    if diversity >= 65.0 {
        component(factor, 1.0, format!("Rich vocabulary ({diversity:.0}%)"))
    } else if diversity >= 50.0 {
        component(
            factor,
            0.0,
            format!("Good vocabulary variety ({diversity:.0}%)"),
        )
    } else {
        component(factor, 0.0, format!("Limited vocabulary ({diversity:.0}%)"))
    }
}

fn coherence(score: f64) -> Option<ScoreComponent> {
    let factor = ScoringFactor::Coherence;
    if score >= 75.0 {
        Some(component(
            factor,
            0.5,
            format!("Highly coherent response ({score:.0}%)"),
        ))
    } else if score >= 60.0 {
        Some(component(
            factor,
            0.0,
            format!("Coherent response ({score:.0}%)"),
        ))
    } else {
        None
    }
}

fn filler_words(count: u32) -> ScoreComponent {
    let factor = ScoringFactor::FillerWords;
    match count {
        0 => component(factor, 0.5, "No filler words detected".to_string()),
        1..=2 => component(factor, 0.0, format!("Minimal filler words ({count})")),
        3..=5 => component(factor, 0.0, format!("Some filler words ({count})")),
        _ => component(
            factor,
            -0.5,
            format!("Excessive filler words ({count} - impacts fluency)"),
        ),
    }
}

fn pauses(ratio: f64) -> ScoreComponent {
    let factor = ScoringFactor::Pauses;
    let pct = ratio * 100.0;
    if ratio < 0.15 {
        component(factor, 0.0, format!("Good speech flow ({pct:.1}% pauses)"))
    } else if ratio < 0.25 {
        component(factor, 0.0, format!("Acceptable pauses ({pct:.1}%)"))
    } else {
        component(
            factor,
            0.0,
            format!("Frequent pauses ({pct:.1}% - may indicate hesitation)"),
        )
    }
}

fn nervousness(value: f64) -> Option<ScoreComponent> {
    let factor = ScoringFactor::Nervousness;
    if value >= 60.0 {
        Some(component(
            factor,
            -1.5,
            format!("Very high nervousness ({value:.1}%)"),
        ))
    } else if value >= 45.0 {
        Some(component(
            factor,
            -0.5,
            format!("High nervousness ({value:.1}%)"),
        ))
    } else {
        None
    }
}
