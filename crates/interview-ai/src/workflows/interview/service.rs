use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use super::domain::{InterviewSession, QuestionResult, SessionId, SessionStatus};
use super::evaluation::{EvaluationConfig, HireDecision, HireEngine};
use super::export::{export_results_csv_string, ExportError};
use super::question_bank::{InterviewQuestion, QuestionBank};
use super::report::InterviewReport;
use super::repository::{
    NextQuestionView, RepositoryError, SessionRepository, SessionStatusView,
};

/// Service composing the question bank, session repository, and hiring rubric.
pub struct InterviewService<R> {
    repository: Arc<R>,
    engine: Arc<HireEngine>,
    bank: Arc<QuestionBank>,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("session-{id:06}"))
}

impl<R> InterviewService<R>
where
    R: SessionRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: EvaluationConfig) -> Self {
        Self::with_bank(repository, config, QuestionBank::standard())
    }

    pub fn with_bank(repository: Arc<R>, config: EvaluationConfig, bank: QuestionBank) -> Self {
        Self {
            repository,
            engine: Arc::new(HireEngine::new(config)),
            bank: Arc::new(bank),
        }
    }

    pub fn config(&self) -> &EvaluationConfig {
        self.engine.config()
    }

    /// Open a new session. Candidates must accept the interview guidelines first.
    pub fn start(
        &self,
        guidelines_accepted: bool,
    ) -> Result<InterviewSession, InterviewServiceError> {
        if !guidelines_accepted {
            return Err(InterviewServiceError::GuidelinesNotAccepted);
        }

        let session = InterviewSession {
            session_id: next_session_id(),
            started_at: Utc::now(),
            guidelines_accepted,
            total_questions: self.config().total_questions,
            status: SessionStatus::InProgress,
            results: Vec::new(),
        };

        let stored = self.repository.insert(session)?;
        info!(session_id = %stored.session_id.0, total_questions = stored.total_questions, "interview session started");
        Ok(stored)
    }

    pub fn get(&self, session_id: &SessionId) -> Result<InterviewSession, InterviewServiceError> {
        let session = self
            .repository
            .fetch(session_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(session)
    }

    /// Prompt awaiting an answer, if the session has one left and the bank covers it.
    pub fn current_question(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<&InterviewQuestion>, InterviewServiceError> {
        let session = self.get(session_id)?;
        Ok(session
            .next_question_index()
            .and_then(|index| self.bank.get(index)))
    }

    pub fn status(&self, session_id: &SessionId) -> Result<SessionStatusView, InterviewServiceError> {
        let session = self.get(session_id)?;
        Ok(self.status_view(&session))
    }

    pub fn status_view(&self, session: &InterviewSession) -> SessionStatusView {
        let next_question = session.next_question_index().and_then(|index| {
            self.bank.get(index).map(|question| NextQuestionView {
                question_number: index + 1,
                prompt: question.prompt,
                tip: question.tip,
            })
        });

        SessionStatusView {
            session_id: session.session_id.clone(),
            status: session.status.label(),
            questions_recorded: session.results.len(),
            total_questions: session.total_questions,
            next_question,
        }
    }

    /// Decide the next answer, attach the decision to it, and persist it on the session.
    pub fn record_result(
        &self,
        session_id: &SessionId,
        mut result: QuestionResult,
    ) -> Result<RecordedAnswer, InterviewServiceError> {
        let mut session = self.get(session_id)?;
        let index = session
            .next_question_index()
            .ok_or(InterviewServiceError::SessionComplete)?;

        if result.question.trim().is_empty() {
            if let Some(question) = self.bank.get(index) {
                result.question = question.prompt.to_string();
            }
        }
        let question_number = (index + 1) as u32;
        result.question_number = question_number;

        let decision = self.engine.attach(&mut result);
        debug!(
            session_id = %session_id.0,
            question_number,
            tier = decision.tier.label(),
            points = decision.points,
            "question decided"
        );

        session.results.push(result);
        if session.next_question_index().is_none() {
            session.status = SessionStatus::Completed;
            info!(session_id = %session_id.0, "interview session completed");
        }

        // `index` is the answer count of the snapshot this write was built from.
        self.repository.update(session, index)?;
        Ok(RecordedAnswer {
            question_number,
            decision,
        })
    }

    pub fn report(&self, session_id: &SessionId) -> Result<InterviewReport, InterviewServiceError> {
        let session = self.get(session_id)?;
        Ok(InterviewReport::build(&session.results, self.config()))
    }

    pub fn export_csv(&self, session_id: &SessionId) -> Result<String, InterviewServiceError> {
        let session = self.get(session_id)?;
        let csv = export_results_csv_string(&session.results, self.config())?;
        Ok(csv)
    }
}

/// Decision for an answer together with the position it was recorded at.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedAnswer {
    pub question_number: u32,
    pub decision: HireDecision,
}

/// Error raised by the interview service.
#[derive(Debug, thiserror::Error)]
pub enum InterviewServiceError {
    #[error("interview guidelines must be accepted before starting")]
    GuidelinesNotAccepted,
    #[error("every question in this session has already been answered")]
    SessionComplete,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
