use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde_json::json;
use tracing::warn;

use super::domain::AssessmentSnapshot;
use super::service::AssessmentService;
use super::snapshot::SnapshotStore;
use super::submission::ReportPublisher;

/// Router builder exposing the survey state, catalog, and submission
/// endpoints.
pub fn assessment_router<S, P>(service: Arc<AssessmentService<S, P>>) -> Router
where
    S: SnapshotStore + 'static,
    P: ReportPublisher + 'static,
{
    Router::new()
        .route(
            "/api/v1/assessment/snapshot",
            get(snapshot_handler::<S, P>)
                .put(save_handler::<S, P>)
                .delete(reset_handler::<S, P>),
        )
        .route(
            "/api/v1/assessment/questions",
            get(questions_handler::<S, P>),
        )
        .route(
            "/api/v1/assessment/submissions",
            post(submit_handler::<S, P>),
        )
        .with_state(service)
}

pub(crate) async fn snapshot_handler<S, P>(
    State(service): State<Arc<AssessmentService<S, P>>>,
) -> Response
where
    S: SnapshotStore + 'static,
    P: ReportPublisher + 'static,
{
    let snapshot = service.restore();
    (StatusCode::OK, axum::Json(snapshot)).into_response()
}

/// Persists the posted form state and answers with the recomputed summary.
/// A failing store is logged and the summary still returned, matching the
/// survey's local-first behavior.
pub(crate) async fn save_handler<S, P>(
    State(service): State<Arc<AssessmentService<S, P>>>,
    axum::Json(snapshot): axum::Json<AssessmentSnapshot>,
) -> Response
where
    S: SnapshotStore + 'static,
    P: ReportPublisher + 'static,
{
    if let Err(err) = service.save(&snapshot) {
        warn!(error = %err, "snapshot save failed, serving recomputed summary anyway");
    }

    let summary = service.evaluate(&snapshot).summary();
    (StatusCode::OK, axum::Json(summary)).into_response()
}

pub(crate) async fn reset_handler<S, P>(
    State(service): State<Arc<AssessmentService<S, P>>>,
) -> Response
where
    S: SnapshotStore + 'static,
    P: ReportPublisher + 'static,
{
    match service.reset() {
        Ok(snapshot) => (StatusCode::OK, axum::Json(snapshot)).into_response(),
        Err(err) => {
            let payload = json!({
                "error": err.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn questions_handler<S, P>(
    State(service): State<Arc<AssessmentService<S, P>>>,
) -> Response
where
    S: SnapshotStore + 'static,
    P: ReportPublisher + 'static,
{
    let questions: Vec<_> = service
        .catalog()
        .questions()
        .iter()
        .map(|question| question.to_view())
        .collect();
    (StatusCode::OK, axum::Json(questions)).into_response()
}

pub(crate) async fn submit_handler<S, P>(
    State(service): State<Arc<AssessmentService<S, P>>>,
    axum::Json(snapshot): axum::Json<AssessmentSnapshot>,
) -> Response
where
    S: SnapshotStore + 'static,
    P: ReportPublisher + 'static,
{
    if let Err(err) = service.save(&snapshot) {
        warn!(error = %err, "snapshot save failed ahead of submission");
    }

    let receipt = service.submit(&snapshot, Utc::now());
    (StatusCode::ACCEPTED, axum::Json(receipt)).into_response()
}
