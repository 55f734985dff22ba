use interview_ai::workflows::interview::{
    EvaluationConfig, InterviewSession, RepositoryError, SessionId, SessionRepository,
};
use interview_ai::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) evaluation: Arc<EvaluationConfig>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySessionRepository {
    sessions: Arc<Mutex<HashMap<SessionId, InterviewSession>>>,
}

impl InMemorySessionRepository {
    fn lock(&self) -> Result<MutexGuard<'_, HashMap<SessionId, InterviewSession>>, RepositoryError> {
        self.sessions
            .lock()
            .map_err(|_| RepositoryError::Unavailable("session store poisoned".to_string()))
    }
}

impl SessionRepository for InMemorySessionRepository {
    fn insert(&self, session: InterviewSession) -> Result<InterviewSession, RepositoryError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&session.session_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(session.session_id.clone(), session.clone());
        Ok(session)
    }

    fn update(
        &self,
        session: InterviewSession,
        expected_results: usize,
    ) -> Result<(), RepositoryError> {
        let mut guard = self.lock()?;
        let stored = guard
            .get_mut(&session.session_id)
            .ok_or(RepositoryError::NotFound)?;
        if stored.results.len() != expected_results {
            return Err(RepositoryError::Conflict);
        }
        *stored = session;
        Ok(())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<InterviewSession>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.get(id).cloned())
    }
}

/// An interview without questions has no score to cap against.
pub(crate) fn validated_question_count(total_questions: usize) -> Result<usize, AppError> {
    if total_questions == 0 {
        return Err(AppError::InvalidRequest(
            "total_questions must be a positive integer (got 0)".to_string(),
        ));
    }
    Ok(total_questions)
}

pub(crate) fn evaluation_config(total_questions: usize) -> Result<EvaluationConfig, AppError> {
    let total_questions = validated_question_count(total_questions)?;
    Ok(EvaluationConfig::with_total_questions(total_questions))
}
