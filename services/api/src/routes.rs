use crate::infra::{validated_question_count, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use interview_ai::error::AppError;
use interview_ai::workflows::interview::{
    interview_router, DecisionView, EvaluationConfig, HireEngine, InterviewReport,
    InterviewService, QuestionResult, SessionRepository,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct ScoringReportRequest {
    pub(crate) results: Vec<QuestionResult>,
    #[serde(default)]
    pub(crate) total_questions: Option<usize>,
}

pub(crate) fn with_interview_routes<R>(service: Arc<InterviewService<R>>) -> axum::Router
where
    R: SessionRepository + 'static,
{
    interview_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/scoring/decision",
            axum::routing::post(scoring_decision_endpoint),
        )
        .route(
            "/api/v1/scoring/report",
            axum::routing::post(scoring_report_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Decides a single result without storing it.
pub(crate) async fn scoring_decision_endpoint(
    Extension(state): Extension<AppState>,
    Json(result): Json<QuestionResult>,
) -> Json<DecisionView> {
    let engine = HireEngine::new(state.evaluation.as_ref().clone());
    let decision = engine.decide(&result);
    Json(DecisionView::new(result.question_number, decision))
}

pub(crate) async fn scoring_report_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ScoringReportRequest>,
) -> Result<Json<InterviewReport>, AppError> {
    let ScoringReportRequest {
        results,
        total_questions,
    } = payload;

    let config = match total_questions {
        Some(total_questions) => EvaluationConfig {
            total_questions: validated_question_count(total_questions)?,
            ..state.evaluation.as_ref().clone()
        },
        None => state.evaluation.as_ref().clone(),
    };

    Ok(Json(InterviewReport::build(&results, &config)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use interview_ai::workflows::interview::{
        EmotionScores, FluencyLevel, HireTier, Recommendation,
    };
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;

    fn app_state(ready: bool) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            evaluation: Arc::new(EvaluationConfig::default()),
        }
    }

    fn answered(confidence: f64, accuracy: f64) -> QuestionResult {
        QuestionResult {
            question_number: 2,
            transcript: "I focus on shipping reliable data tooling.".to_string(),
            emotion_scores: EmotionScores {
                confidence,
                ..EmotionScores::default()
            },
            accuracy,
            fluency: 70.0,
            fluency_level: FluencyLevel::Moderate,
            has_valid_data: true,
            ..QuestionResult::default()
        }
    }

    #[tokio::test]
    async fn readiness_reports_initializing_until_bound() {
        let response = readiness_endpoint(Extension(app_state(false)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = readiness_endpoint(Extension(app_state(true)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn scoring_decision_endpoint_decides_without_a_session() {
        let Json(view) =
            scoring_decision_endpoint(Extension(app_state(true)), Json(answered(75.0, 78.5)))
                .await;

        assert_eq!(view.question_number, 2);
        assert_eq!(view.decision, HireTier::Hire);
        assert_eq!(view.decision_label, "Hire");
        assert_eq!(view.reasons.len(), 9);
    }

    #[tokio::test]
    async fn scoring_report_endpoint_honors_total_questions() {
        let request = ScoringReportRequest {
            results: vec![answered(75.0, 78.5), answered(60.0, 60.0)],
            total_questions: Some(4),
        };

        let Json(report) = scoring_report_endpoint(Extension(app_state(true)), Json(request))
            .await
            .expect("report builds");

        assert_eq!(report.total_questions, 4);
        assert_eq!(report.questions_answered, 2);
        let score = report.score.expect("valid answers scored");
        assert!((score.max_possible_score - 50.0).abs() < 1e-9);
        assert!(score.final_score <= score.max_possible_score);
        assert_eq!(score.recommendation, Recommendation::Weak);
    }

    #[tokio::test]
    async fn scoring_report_endpoint_rejects_zero_questions() {
        let request = ScoringReportRequest {
            results: vec![answered(75.0, 78.5)],
            total_questions: Some(0),
        };

        let response = scoring_report_endpoint(Extension(app_state(true)), Json(request))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
            .await
            .expect("read body");
        let payload: serde_json::Value = serde_json::from_slice(&body).expect("json payload");
        assert!(payload["error"]
            .as_str()
            .expect("error message")
            .contains("total_questions"));
    }
}
