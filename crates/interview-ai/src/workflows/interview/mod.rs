//! Interview session scoring: per-question hire decisions, the proportional aggregate,
//! and the dashboard/export projections built on top of them.
//!
//! Upstream analysis (transcription, emotion, fluency, proctoring) is out of scope; this
//! module only consumes the `QuestionResult` records those collaborators produce.

pub mod domain;
pub(crate) mod evaluation;
pub mod export;
pub mod import;
pub mod question_bank;
pub(crate) mod report;
pub mod repository;
pub mod router;
pub mod service;
pub mod transcript;

#[cfg(test)]
mod tests;

pub use domain::{
    EmotionScores, FluencyDetailed, FluencyLevel, ImprovementsApplied, InterviewSession,
    QuestionResult, SessionId, SessionStatus, Violation, WordMetrics,
};
pub use evaluation::{
    decide_hire, EvaluationConfig, HireDecision, HireEngine, HireTier, ScoreComponent,
    ScoringFactor,
};
pub use export::{export_file_name, export_results_csv, export_results_csv_string, ExportError};
pub use import::{ResultsImportError, ResultsImporter};
pub use question_bank::{InterviewQuestion, QuestionBank, QuestionKind};
pub use report::{
    aggregate, aggregate_with, AggregateScore, ComponentAverages, ComponentContributionEntry,
    InterviewReport, QuestionSummaryEntry, Recommendation, WeightedComponent,
};
pub use repository::{NextQuestionView, RepositoryError, SessionRepository, SessionStatusView};
pub use router::{interview_router, DecisionView};
pub use service::{InterviewService, InterviewServiceError, RecordedAnswer};
pub use transcript::{is_valid_transcript, INVALID_TRANSCRIPT_MARKERS};
