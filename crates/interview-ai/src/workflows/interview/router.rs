use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{QuestionResult, SessionId};
use super::evaluation::{HireDecision, HireTier};
use super::export::export_file_name;
use super::repository::{RepositoryError, SessionRepository};
use super::service::{InterviewService, InterviewServiceError};

#[derive(Debug, Deserialize)]
pub(crate) struct StartSessionRequest {
    #[serde(default)]
    pub(crate) guidelines_accepted: bool,
}

/// Decision payload returned to the capture client after each answer.
#[derive(Debug, Serialize)]
pub struct DecisionView {
    pub question_number: u32,
    pub decision: HireTier,
    pub decision_label: &'static str,
    pub points: f64,
    pub reasons: Vec<String>,
}

impl DecisionView {
    pub fn new(question_number: u32, decision: HireDecision) -> Self {
        Self {
            question_number,
            decision: decision.tier,
            decision_label: decision.tier.label(),
            points: decision.points,
            reasons: decision.reasons,
        }
    }
}

/// Router builder exposing HTTP endpoints for interview sessions.
pub fn interview_router<R>(service: Arc<InterviewService<R>>) -> Router
where
    R: SessionRepository + 'static,
{
    Router::new()
        .route("/api/v1/interviews", post(start_handler::<R>))
        .route(
            "/api/v1/interviews/:session_id",
            get(status_handler::<R>),
        )
        .route(
            "/api/v1/interviews/:session_id/results",
            post(record_result_handler::<R>),
        )
        .route(
            "/api/v1/interviews/:session_id/report",
            get(report_handler::<R>),
        )
        .route(
            "/api/v1/interviews/:session_id/export",
            get(export_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn start_handler<R>(
    State(service): State<Arc<InterviewService<R>>>,
    axum::Json(request): axum::Json<StartSessionRequest>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.start(request.guidelines_accepted) {
        Ok(session) => {
            let view = service.status_view(&session);
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<InterviewService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.status(&SessionId(session_id)) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn record_result_handler<R>(
    State(service): State<Arc<InterviewService<R>>>,
    Path(session_id): Path<String>,
    axum::Json(result): axum::Json<QuestionResult>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.record_result(&SessionId(session_id), result) {
        Ok(recorded) => {
            let view = DecisionView::new(recorded.question_number, recorded.decision);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn report_handler<R>(
    State(service): State<Arc<InterviewService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.report(&SessionId(session_id)) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn export_handler<R>(
    State(service): State<Arc<InterviewService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.export_csv(&SessionId(session_id)) {
        Ok(csv) => {
            let disposition = format!(
                "attachment; filename=\"{}\"",
                export_file_name(Local::now().naive_local())
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                csv,
            )
                .into_response()
        }
        Err(error) => error_response(error),
    }
}

fn error_response(error: InterviewServiceError) -> Response {
    let status = match &error {
        InterviewServiceError::GuidelinesNotAccepted => StatusCode::UNPROCESSABLE_ENTITY,
        InterviewServiceError::SessionComplete
        | InterviewServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        InterviewServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        InterviewServiceError::Repository(RepositoryError::Unavailable(_))
        | InterviewServiceError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
