use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use readiness_ai::assessment::{
    assessment_router, AssessmentInsights, AssessmentReport, AssessmentService,
    AssessmentSnapshot, CategoryScoreEntry, InitiativeEngine, InitiativeView, QuestionCatalog,
    ReportPublisher, RoiProjection, SnapshotStore,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

/// Stateless scoring result: the evaluated summary plus the narrative
/// insights, computed from the posted snapshot without persisting it.
#[derive(Debug, Serialize)]
pub(crate) struct AssessmentReportResponse {
    pub(crate) answered_questions: usize,
    pub(crate) category_scores: Vec<CategoryScoreEntry>,
    pub(crate) overall_score: u8,
    pub(crate) initiatives: Vec<InitiativeView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) roi: Option<RoiProjection>,
    pub(crate) insights: AssessmentInsights,
}

pub(crate) fn with_assessment_routes<S, P>(service: Arc<AssessmentService<S, P>>) -> axum::Router
where
    S: SnapshotStore + 'static,
    P: ReportPublisher + 'static,
{
    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/assessment/report",
            axum::routing::post(assessment_report_endpoint),
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

pub(crate) async fn assessment_report_endpoint(
    Json(snapshot): Json<AssessmentSnapshot>,
) -> Json<AssessmentReportResponse> {
    let catalog = QuestionCatalog::standard();
    let engine = InitiativeEngine::standard();
    let report = AssessmentReport::generate(&catalog, &engine, &snapshot);
    let summary = report.summary();
    let insights = summary.insights();

    Json(AssessmentReportResponse {
        answered_questions: snapshot.answers.len(),
        category_scores: summary.category_scores,
        overall_score: summary.overall_score,
        initiatives: summary.initiatives,
        roi: summary.roi,
        insights,
    })
}
