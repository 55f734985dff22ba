use crate::cli::ServeArgs;
use crate::infra::{evaluation_config, AppState, InMemorySessionRepository};
use crate::routes::with_interview_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use interview_ai::config::AppConfig;
use interview_ai::error::AppError;
use interview_ai::telemetry;
use interview_ai::workflows::interview::InterviewService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let evaluation = evaluation_config(config.interview.total_questions)?;
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        evaluation: Arc::new(evaluation.clone()),
    };

    let repository = Arc::new(InMemorySessionRepository::default());
    let interview_service = Arc::new(InterviewService::new(repository, evaluation));

    let app = with_interview_routes(interview_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        total_questions = config.interview.total_questions,
        "interview scoring service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
