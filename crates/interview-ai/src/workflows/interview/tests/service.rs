use super::common::*;
use crate::workflows::interview::domain::{SessionId, SessionStatus};
use crate::workflows::interview::evaluation::HireTier;
use crate::workflows::interview::repository::{RepositoryError, SessionRepository};
use crate::workflows::interview::{InterviewService, InterviewServiceError, QuestionResult};
use std::sync::Arc;

#[test]
fn start_requires_accepted_guidelines() {
    let (service, _) = build_service();

    match service.start(false) {
        Err(InterviewServiceError::GuidelinesNotAccepted) => {}
        other => panic!("expected guidelines error, got {other:?}"),
    }
}

#[test]
fn start_persists_an_in_progress_session() {
    let (service, repository) = build_service();

    let session = service.start(true).expect("session starts");

    assert!(session.session_id.0.starts_with("session-"));
    assert_eq!(session.status, SessionStatus::InProgress);
    assert_eq!(session.total_questions, 3);
    let stored = repository
        .fetch(&session.session_id)
        .expect("fetch succeeds")
        .expect("session present");
    assert_eq!(stored, session);

    let question = service
        .current_question(&session.session_id)
        .expect("lookup succeeds")
        .expect("first question pending");
    assert_eq!(question.prompt, "Tell me about yourself.");
}

#[test]
fn recording_results_advances_and_completes_the_session() {
    let (service, repository) = build_service();
    let session = service.start(true).expect("session starts");
    let id = session.session_id.clone();

    let first = service
        .record_result(&id, strong_result())
        .expect("first answer recorded");
    assert_eq!(first.question_number, 1);
    assert_eq!(first.decision.tier, HireTier::StrongHire);

    let status = service.status(&id).expect("status available");
    assert_eq!(status.questions_recorded, 1);
    assert_eq!(status.status, "in_progress");
    let next = status.next_question.expect("second question pending");
    assert_eq!(next.question_number, 2);
    assert_eq!(next.prompt, "What are your strengths and weaknesses?");

    let second = service
        .record_result(
            &id,
            QuestionResult {
                question: String::new(),
                ..unanswered_result()
            },
        )
        .expect("second answer recorded");
    assert_eq!(second.question_number, 2);
    assert_eq!(second.decision.tier, HireTier::NoValidResponse);

    service
        .record_result(&id, with_violations(strong_result(), 3))
        .expect("third answer recorded");

    let stored = repository
        .fetch(&id)
        .expect("fetch succeeds")
        .expect("session present");
    assert_eq!(stored.status, SessionStatus::Completed);
    assert_eq!(stored.results.len(), 3);
    assert_eq!(stored.results[1].question, "What are your strengths and weaknesses?");
    assert_eq!(stored.results[2].question_number, 3);
    assert_eq!(stored.results[2].hire_decision, Some(HireTier::Disqualified));
    assert!(service
        .current_question(&id)
        .expect("lookup succeeds")
        .is_none());

    match service.record_result(&id, strong_result()) {
        Err(InterviewServiceError::SessionComplete) => {}
        other => panic!("expected session complete, got {other:?}"),
    }
}

#[test]
fn report_and_export_cover_recorded_results() {
    let (service, _) = build_service();
    let session = service.start(true).expect("session starts");
    service
        .record_result(&session.session_id, strong_result())
        .expect("answer recorded");

    let report = service.report(&session.session_id).expect("report builds");
    assert_eq!(report.questions_answered, 1);
    assert_eq!(report.total_questions, 3);
    assert!(report.score.is_some());

    let csv = service
        .export_csv(&session.session_id)
        .expect("export builds");
    assert_eq!(csv.lines().count(), 2);
}

#[test]
fn get_propagates_not_found() {
    let (service, _) = build_service();

    match service.get(&SessionId("session-missing".to_string())) {
        Err(InterviewServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn stale_snapshots_conflict_instead_of_dropping_answers() {
    let repository = Arc::new(InterleavedWriterRepository::default());
    let service = InterviewService::new(repository.clone(), evaluation_config());
    let session = service.start(true).expect("session starts");

    match service.record_result(&session.session_id, strong_result()) {
        Err(InterviewServiceError::Repository(RepositoryError::Conflict)) => {}
        other => panic!("expected conflict, got {other:?}"),
    }

    let stored = repository
        .inner
        .fetch(&session.session_id)
        .expect("fetch succeeds")
        .expect("session present");
    assert_eq!(stored.results.len(), 1);
    assert_eq!(stored.results[0], blank_metrics_result());
}

#[test]
fn update_rejects_a_session_that_moved_on() {
    let (service, repository) = build_service();
    let session = service.start(true).expect("session starts");

    service
        .record_result(&session.session_id, strong_result())
        .expect("first answer recorded");

    let mut stale = session.clone();
    stale.results.push(blank_metrics_result());
    match repository.update(stale, 0) {
        Err(RepositoryError::Conflict) => {}
        other => panic!("expected conflict, got {other:?}"),
    }
    assert_eq!(
        service
            .status(&session.session_id)
            .expect("status available")
            .questions_recorded,
        1
    );
}

#[test]
fn repository_failures_surface_as_unavailable() {
    let service = InterviewService::new(Arc::new(UnavailableRepository), evaluation_config());

    match service.start(true) {
        Err(InterviewServiceError::Repository(RepositoryError::Unavailable(reason))) => {
            assert_eq!(reason, "database offline");
        }
        other => panic!("expected unavailable repository, got {other:?}"),
    }
}
