use std::io::Write;

use chrono::NaiveDateTime;
use serde::Serialize;

use super::domain::QuestionResult;
use super::evaluation::EvaluationConfig;
use super::report::{aggregate_with, max_possible_score, WeightedComponent};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write CSV export: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush CSV export: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV export is not valid UTF-8")]
    Encoding,
}

/// File name offered for a download generated at `now`.
pub fn export_file_name(now: NaiveDateTime) -> String {
    format!(
        "interview_results_proportional_{}.csv",
        now.format("%Y%m%d_%H%M%S")
    )
}

/// Writes one row per result, including the proportional scoring fields shared by the
/// whole interview.
pub fn export_results_csv<W: Write>(
    writer: W,
    results: &[QuestionResult],
    config: &EvaluationConfig,
) -> Result<(), ExportError> {
    let questions_answered = results
        .iter()
        .filter(|result| result.has_valid_data)
        .count();
    let max_possible = max_possible_score(questions_answered, config.total_questions);
    let final_score = aggregate_with(results, config).map(|score| score.final_score);

    let mut csv_writer = csv::Writer::from_writer(writer);
    for (index, result) in results.iter().enumerate() {
        let row = ExportRow::from_result(
            index,
            result,
            config,
            questions_answered,
            max_possible,
            final_score,
        );
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn export_results_csv_string(
    results: &[QuestionResult],
    config: &EvaluationConfig,
) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    export_results_csv(&mut buffer, results, config)?;
    String::from_utf8(buffer).map_err(|_| ExportError::Encoding)
}

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "Question_Number")]
    question_number: usize,
    #[serde(rename = "Question")]
    question: &'a str,
    #[serde(rename = "Transcript")]
    transcript: &'a str,
    #[serde(rename = "Violations_Count")]
    violations_count: usize,
    #[serde(rename = "Violation_Details")]
    violation_details: String,
    #[serde(rename = "Violation_Penalty_Percent")]
    violation_penalty_percent: f64,
    #[serde(rename = "Max_Possible_Score")]
    max_possible_score: f64,
    #[serde(rename = "Questions_Answered")]
    questions_answered: usize,
    #[serde(rename = "Total_Questions")]
    total_questions: usize,
    #[serde(rename = "Confidence")]
    confidence: f64,
    #[serde(rename = "Confidence_Weight")]
    confidence_weight: String,
    #[serde(rename = "Nervousness")]
    nervousness: f64,
    #[serde(rename = "Accuracy")]
    accuracy: f64,
    #[serde(rename = "Accuracy_Weight")]
    accuracy_weight: String,
    #[serde(rename = "Fluency_Score")]
    fluency_score: f64,
    #[serde(rename = "Fluency_Weight")]
    fluency_weight: String,
    #[serde(rename = "Fluency_Level")]
    fluency_level: &'static str,
    #[serde(rename = "Speech_Rate_WPM")]
    speech_rate_wpm: f64,
    #[serde(rename = "Speech_Rate_Normalized")]
    speech_rate_normalized: f64,
    #[serde(rename = "Grammar_Score")]
    grammar_score: f64,
    #[serde(rename = "Grammar_Weight")]
    grammar_weight: String,
    #[serde(rename = "Grammar_Errors")]
    grammar_errors: u32,
    #[serde(rename = "Lexical_Diversity")]
    lexical_diversity: f64,
    #[serde(rename = "Vocabulary_Weight")]
    vocabulary_weight: String,
    #[serde(rename = "Coherence_Score")]
    coherence_score: f64,
    #[serde(rename = "Coherence_Weight")]
    coherence_weight: String,
    #[serde(rename = "Pause_Ratio")]
    pause_ratio: f64,
    #[serde(rename = "Avg_Pause_Duration")]
    avg_pause_duration: f64,
    #[serde(rename = "Num_Pauses")]
    num_pauses: u32,
    #[serde(rename = "Filler_Word_Count")]
    filler_word_count: u32,
    #[serde(rename = "Filler_Word_Ratio")]
    filler_word_ratio: f64,
    #[serde(rename = "Fillers_Weight")]
    fillers_weight: String,
    #[serde(rename = "Total_Words")]
    total_words: u32,
    #[serde(rename = "Meaningful_Words")]
    meaningful_words: u32,
    #[serde(rename = "Unique_Words")]
    unique_words: u32,
    #[serde(rename = "Unique_Meaningful_Words")]
    unique_meaningful_words: u32,
    #[serde(rename = "Blink_Count")]
    blink_count: u32,
    #[serde(rename = "Outfit")]
    outfit: &'a str,
    #[serde(rename = "Outfit_Confidence")]
    outfit_confidence: f64,
    #[serde(rename = "Hire_Decision")]
    hire_decision: &'static str,
    #[serde(rename = "Hire_Reasons")]
    hire_reasons: String,
    #[serde(rename = "Overall_Final_Score")]
    overall_final_score: Option<f64>,
    #[serde(rename = "Accurate_Metrics_Only")]
    accurate_metrics_only: bool,
    #[serde(rename = "Proportional_Scoring_Applied")]
    proportional_scoring_applied: bool,
    #[serde(rename = "Stopword_Filtering")]
    stopword_filtering: bool,
    #[serde(rename = "Quality_Weighted_Emotions")]
    quality_weighted_emotions: bool,
    #[serde(rename = "BERT_Coherence")]
    bert_coherence: bool,
    #[serde(rename = "Content_Similarity")]
    content_similarity: bool,
    #[serde(rename = "Filler_Word_Detection")]
    filler_word_detection: bool,
}

impl<'a> ExportRow<'a> {
    fn from_result(
        index: usize,
        result: &'a QuestionResult,
        config: &EvaluationConfig,
        questions_answered: usize,
        max_possible_score: f64,
        final_score: Option<f64>,
    ) -> Self {
        let detailed = &result.fluency_detailed;
        let words = &detailed.detailed_metrics;
        let improvements = result.improvements_applied;

        ExportRow {
            question_number: index + 1,
            question: &result.question,
            transcript: &result.transcript,
            violations_count: result.violation_count(),
            violation_details: result
                .violations
                .iter()
                .map(|violation| violation.reason.as_str())
                .collect::<Vec<_>>()
                .join("; "),
            violation_penalty_percent: result.violation_count() as f64
                * config.aggregate_violation_penalty,
            max_possible_score,
            questions_answered,
            total_questions: config.total_questions,
            confidence: result.emotion_scores.confidence,
            confidence_weight: WeightedComponent::Confidence.weight_label(),
            nervousness: result.emotion_scores.nervousness,
            accuracy: result.accuracy,
            accuracy_weight: WeightedComponent::Accuracy.weight_label(),
            fluency_score: result.fluency,
            fluency_weight: WeightedComponent::Fluency.weight_label(),
            fluency_level: result.fluency_level.label(),
            speech_rate_wpm: detailed.speech_rate,
            speech_rate_normalized: detailed.speech_rate_normalized,
            grammar_score: detailed.grammar_score,
            grammar_weight: WeightedComponent::Grammar.weight_label(),
            grammar_errors: detailed.grammar_errors,
            lexical_diversity: detailed.lexical_diversity,
            vocabulary_weight: WeightedComponent::Vocabulary.weight_label(),
            coherence_score: detailed.coherence_score,
            coherence_weight: WeightedComponent::Coherence.weight_label(),
            pause_ratio: detailed.pause_ratio,
            avg_pause_duration: detailed.avg_pause_duration,
            num_pauses: detailed.num_pauses,
            filler_word_count: detailed.filler_count,
            filler_word_ratio: detailed.filler_ratio,
            fillers_weight: WeightedComponent::Fillers.weight_label(),
            total_words: words.total_words,
            meaningful_words: words.meaningful_words,
            unique_words: words.unique_words,
            unique_meaningful_words: words.unique_meaningful_words,
            blink_count: result.blink_count,
            outfit: &result.outfit,
            outfit_confidence: result.outfit_confidence,
            hire_decision: result.hire_decision.map(|tier| tier.label()).unwrap_or(""),
            hire_reasons: result.hire_reasons.join("; "),
            overall_final_score: final_score,
            accurate_metrics_only: improvements.no_fake_metrics,
            proportional_scoring_applied: true,
            stopword_filtering: improvements.stopword_filtering,
            quality_weighted_emotions: improvements.quality_weighted_emotions,
            bert_coherence: improvements.bert_coherence,
            content_similarity: improvements.content_similarity_matching,
            filler_word_detection: improvements.filler_word_detection,
        }
    }
}
