use serde::Serialize;

use super::domain::{InterviewSession, SessionId};

/// Storage abstraction so the service module can be exercised in isolation.
pub trait SessionRepository: Send + Sync {
    fn insert(&self, session: InterviewSession) -> Result<InterviewSession, RepositoryError>;
    /// Replaces the stored session only while it still holds `expected_results` answers, so
    /// two writers racing from the same snapshot cannot drop each other's results. A stale
    /// write yields `Conflict`.
    fn update(
        &self,
        session: InterviewSession,
        expected_results: usize,
    ) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<InterviewSession>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("conflicting session write")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Sanitized representation of a session's progress.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatusView {
    pub session_id: SessionId,
    pub status: &'static str,
    pub questions_recorded: usize,
    pub total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_question: Option<NextQuestionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NextQuestionView {
    pub question_number: usize,
    pub prompt: &'static str,
    pub tip: &'static str,
}
