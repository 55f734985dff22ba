use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::interview::domain::{
    EmotionScores, FluencyDetailed, FluencyLevel, ImprovementsApplied, InterviewSession,
    QuestionResult, SessionId, Violation, WordMetrics,
};
use crate::workflows::interview::repository::{RepositoryError, SessionRepository};
use crate::workflows::interview::{interview_router, EvaluationConfig, InterviewService};

pub(super) fn evaluation_config() -> EvaluationConfig {
    EvaluationConfig::default()
}

/// Well-rounded answer: 10.5 rubric points, no violations.
pub(super) fn strong_result() -> QuestionResult {
    QuestionResult {
        question: "Tell me about yourself.".to_string(),
        question_number: 1,
        transcript: "I'm a computer science postgraduate who enjoys applying machine learning \
                     to practical problems and collaborating on team projects."
            .to_string(),
        violations: Vec::new(),
        emotion_scores: EmotionScores {
            confidence: 75.0,
            nervousness: 15.0,
            confidence_label: Some("Confident".to_string()),
            nervous_label: Some("Calm".to_string()),
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
            num_pauses: 4,
            avg_pause_duration: 0.6,
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
        outfit_confidence: 0.87,
        improvements_applied: ImprovementsApplied {
            no_fake_metrics: true,
            stopword_filtering: true,
            quality_weighted_emotions: true,
            bert_coherence: true,
            content_similarity_matching: true,
            filler_word_detection: true,
            grammar_error_count: true,
        },
        hire_decision: None,
        hire_reasons: Vec::new(),
    }
}

/// Valid transcript with every measurement at zero: only the filler bonus applies.
pub(super) fn blank_metrics_result() -> QuestionResult {
    QuestionResult {
        transcript: "I am not sure.".to_string(),
        has_valid_data: true,
        ..QuestionResult::default()
    }
}

pub(super) fn unanswered_result() -> QuestionResult {
    QuestionResult {
        transcript: "[Could not understand audio]".to_string(),
        has_valid_data: false,
        ..QuestionResult::default()
    }
}

pub(super) fn violation(reason: &str, timestamp: f64) -> Violation {
    Violation {
        reason: reason.to_string(),
        timestamp,
        image_path: None,
    }
}

pub(super) fn with_violations(mut result: QuestionResult, count: usize) -> QuestionResult {
    result.violations = (0..count)
        .map(|index| violation("Multiple faces detected", index as f64 * 4.0))
        .collect();
    result
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn build_service() -> (InterviewService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = InterviewService::new(repository.clone(), evaluation_config());
    (service, repository)
}

pub(super) fn router_with_service(service: InterviewService<MemoryRepository>) -> axum::Router {
    interview_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) sessions: Arc<Mutex<HashMap<SessionId, InterviewSession>>>,
}

impl SessionRepository for MemoryRepository {
    fn insert(&self, session: InterviewSession) -> Result<InterviewSession, RepositoryError> {
        let mut guard = self.sessions.lock().expect("repository mutex poisoned");
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
        let mut guard = self.sessions.lock().expect("repository mutex poisoned");
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
        let guard = self.sessions.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

/// Lands another writer's answer right after every fetch, as a concurrent request would.
#[derive(Default)]
pub(super) struct InterleavedWriterRepository {
    pub(super) inner: MemoryRepository,
}

impl SessionRepository for InterleavedWriterRepository {
    fn insert(&self, session: InterviewSession) -> Result<InterviewSession, RepositoryError> {
        self.inner.insert(session)
    }

    fn update(
        &self,
        session: InterviewSession,
        expected_results: usize,
    ) -> Result<(), RepositoryError> {
        self.inner.update(session, expected_results)
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<InterviewSession>, RepositoryError> {
        let snapshot = self.inner.fetch(id)?;
        if let Some(session) = &snapshot {
            let mut racing = session.clone();
            racing.results.push(blank_metrics_result());
            self.inner.update(racing, session.results.len())?;
        }
        Ok(snapshot)
    }
}

pub(super) struct UnavailableRepository;

impl SessionRepository for UnavailableRepository {
    fn insert(&self, _session: InterviewSession) -> Result<InterviewSession, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(
        &self,
        _session: InterviewSession,
        _expected_results: usize,
    ) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<InterviewSession>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
