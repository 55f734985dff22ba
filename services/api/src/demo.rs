use crate::infra::{evaluation_config, InMemorySessionRepository};
use chrono::Local;
use clap::Args;
use interview_ai::error::AppError;
use interview_ai::workflows::interview::{
    export_file_name, export_results_csv, EmotionScores, EvaluationConfig, FluencyDetailed,
    FluencyLevel, HireEngine, ImprovementsApplied, InterviewQuestion, InterviewReport,
    InterviewService, QuestionBank, QuestionResult, ResultsImporter, Violation, WordMetrics,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON array of question results produced by the analysis pipeline
    #[arg(long)]
    pub(crate) results: PathBuf,
    /// Number of questions in the interview (defaults to the standard bank size)
    #[arg(long)]
    pub(crate) total_questions: Option<usize>,
    /// Write the scored results as CSV to this path
    #[arg(long)]
    pub(crate) export: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Number of questions the simulated candidate answers
    #[arg(long, default_value_t = 3)]
    pub(crate) answered: usize,
    /// Proctoring violations spread across the answered questions
    #[arg(long, default_value_t = 0)]
    pub(crate) violations: usize,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        results,
        total_questions,
        export,
    } = args;

    let config =
        evaluation_config(total_questions.unwrap_or_else(|| QuestionBank::standard().len()))?;
    let mut results = ResultsImporter::from_path(&results)?;
    let engine = HireEngine::new(config.clone());
    for result in &mut results {
        engine.attach(result);
    }

    let report = InterviewReport::build(&results, &config);
    render_dashboard(&report, &results);

    if let Some(path) = export {
        write_export(&path, &results, &config)?;
        println!("\nExported {} row(s) to {}", results.len(), path.display());
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let bank = QuestionBank::standard();
    let config = evaluation_config(bank.len())?;
    let answered = args.answered.min(bank.len());

    let repository = Arc::new(InMemorySessionRepository::default());
    let service = InterviewService::new(repository, config);

    println!("Interview assessment demo (simulated analysis results)");
    let session = match service.start(true) {
        Ok(session) => session,
        Err(err) => {
            println!("  Session unavailable: {}", err);
            return Ok(());
        }
    };
    println!(
        "- Started {} ({} questions)",
        session.session_id.0, session.total_questions
    );

    for (index, question) in bank.questions().iter().take(answered).enumerate() {
        let violations = violations_for(index, answered, args.violations);
        let result = simulated_result(question, violations);
        match service.record_result(&session.session_id, result) {
            Ok(recorded) => println!(
                "  Q{} {} -> {}",
                recorded.question_number,
                question.prompt,
                recorded.decision.summary()
            ),
            Err(err) => {
                println!("  Recording failed: {}", err);
                return Ok(());
            }
        }
    }

    let stored = match service.get(&session.session_id) {
        Ok(stored) => stored,
        Err(err) => {
            println!("  Session lookup failed: {}", err);
            return Ok(());
        }
    };
    println!("  Session status: {}", stored.status.label());

    let report = InterviewReport::build(&stored.results, service.config());
    render_dashboard(&report, &stored.results);

    println!(
        "\nSuggested export file: {}",
        export_file_name(Local::now().naive_local())
    );
    Ok(())
}

fn write_export(
    path: &Path,
    results: &[QuestionResult],
    config: &EvaluationConfig,
) -> Result<(), AppError> {
    let file = File::create(path)?;
    export_results_csv(BufWriter::new(file), results, config)?;
    Ok(())
}

// Spreads `total` violations round-robin starting at the first answered question.
fn violations_for(index: usize, answered: usize, total: usize) -> usize {
    if answered == 0 {
        return 0;
    }
    total / answered + usize::from(index < total % answered)
}

/// Placeholder measurements used when no analysis pipeline is attached.
fn simulated_result(question: &InterviewQuestion, violations: usize) -> QuestionResult {
    QuestionResult {
        question: question.prompt.to_string(),
        question_number: 0,
        transcript: question.ideal_answer.to_string(),
        violations: (0..violations)
            .map(|index| Violation {
                reason: "Multiple faces detected".to_string(),
                timestamp: 5.0 + index as f64 * 7.5,
                image_path: None,
            })
            .collect(),
        emotion_scores: EmotionScores {
            confidence: 75.0,
            nervousness: 15.0,
            confidence_label: None,
            nervous_label: None,
        },
        accuracy: 78.5,
        fluency: 82.3,
        fluency_level: FluencyLevel::Fluent,
        fluency_detailed: FluencyDetailed {
            speech_rate: 145.0,
            speech_rate_normalized: 0.92,
            grammar_score: 88.5,
            grammar_errors: 2,
            lexical_diversity: 68.2,
            coherence_score: 72.4,
            filler_count: 3,
            filler_ratio: 0.04,
            pause_ratio: 0.12,
            num_pauses: 3,
            avg_pause_duration: 0.5,
            detailed_metrics: WordMetrics {
                total_words: 75,
                meaningful_words: 42,
                unique_words: 51,
                unique_meaningful_words: 35,
                filler_words_detected: 3,
                stopword_filtered: true,
            },
        },
        has_valid_data: true,
        wpm: 145.0,
        filler_count: 3,
        filler_ratio: 0.04,
        blink_count: 12,
        outfit: "Business Casual".to_string(),
        outfit_confidence: 0.8,
        improvements_applied: ImprovementsApplied {
            no_fake_metrics: true,
            stopword_filtering: true,
            quality_weighted_emotions: true,
            ..ImprovementsApplied::default()
        },
        hire_decision: None,
        hire_reasons: Vec::new(),
    }
}

pub(crate) fn render_dashboard(report: &InterviewReport, results: &[QuestionResult]) {
    println!("\nInterview results");
    println!(
        "Questions answered: {}/{} | Max possible score: {:.1}%",
        report.questions_answered, report.total_questions, report.max_possible_score
    );
    println!(
        "Violations: {} across {} question(s)",
        report.total_violations, report.questions_with_violations
    );

    match &report.score {
        Some(score) => {
            println!(
                "\nOverall score: {:.1}% (raw {:.1}%, capped {:.1}%, penalty -{:.0}%)",
                score.final_score, score.raw_score, score.capped_score, score.violation_penalty
            );
            println!(
                "Recommendation: {} - {}",
                score.recommendation_label,
                score.recommendation.detail()
            );
            println!(
                "Averages: {:.0} WPM | {:.2} normalized rate | {:.1}% pauses",
                score.averages.words_per_minute,
                score.averages.speech_rate_normalized,
                score.averages.pause_ratio * 100.0
            );
        }
        None => println!("\nOverall score: unavailable (no valid answers)"),
    }

    if !report.breakdown.is_empty() {
        println!("\nScore breakdown");
        for entry in &report.breakdown {
            println!(
                "- {} ({}): avg {:.1} -> {:.2} pts",
                entry.component_label, entry.weight, entry.average, entry.contribution
            );
        }
    }

    println!("\nPer-question decisions");
    for (entry, result) in report.questions.iter().zip(results) {
        let marker = if entry.decision.is_favorable() {
            "+"
        } else {
            "-"
        };
        println!(
            "[{}] Q{} {} | {} | fluency {} | {}",
            marker,
            entry.question_number,
            entry.question,
            entry.decision_label,
            entry.fluency_level.label(),
            entry.status_label
        );
        for reason in result.hire_reasons.iter().skip(1) {
            println!("      {}", reason);
        }
    }

    if !report.observations.is_empty() {
        println!("\nObservations");
        for observation in &report.observations {
            println!("- {}", observation);
        }
    }
}
