//! Integration specifications for the readiness assessment workflow.
//!
//! Scenarios run end to end through the public service and HTTP router:
//! restore, save, evaluate, and submit, plus the wire shape of the outbound
//! report payload.

mod common {
    use std::sync::{Arc, Mutex};

    use readiness_ai::assessment::{
        AnswerSheet, AssessmentService, AssessmentSnapshot, PublishError, ReportPublisher,
        ReportSubmission, SnapshotError, SnapshotStore,
    };

    pub(super) const TEST_ORG: &str = "Diversicom";

    #[derive(Default, Clone)]
    pub(super) struct MemorySnapshotStore {
        snapshot: Arc<Mutex<Option<AssessmentSnapshot>>>,
    }

    impl MemorySnapshotStore {
        pub(super) fn stored(&self) -> Option<AssessmentSnapshot> {
            self.snapshot.lock().expect("store mutex poisoned").clone()
        }
    }

    impl SnapshotStore for MemorySnapshotStore {
        fn load(&self) -> Result<Option<AssessmentSnapshot>, SnapshotError> {
            Ok(self.snapshot.lock().expect("store mutex poisoned").clone())
        }

        fn save(&self, snapshot: &AssessmentSnapshot) -> Result<(), SnapshotError> {
            *self.snapshot.lock().expect("store mutex poisoned") = Some(snapshot.clone());
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    pub(super) struct RecordingPublisher {
        deliveries: Arc<Mutex<Vec<ReportSubmission>>>,
    }

    impl RecordingPublisher {
        pub(super) fn deliveries(&self) -> Vec<ReportSubmission> {
            self.deliveries
                .lock()
                .expect("publisher mutex poisoned")
                .clone()
        }
    }

    impl ReportPublisher for RecordingPublisher {
        fn publish(&self, submission: &ReportSubmission) -> Result<(), PublishError> {
            self.deliveries
                .lock()
                .expect("publisher mutex poisoned")
                .push(submission.clone());
            Ok(())
        }
    }

    pub(super) fn build_service() -> (
        AssessmentService<MemorySnapshotStore, RecordingPublisher>,
        Arc<MemorySnapshotStore>,
        Arc<RecordingPublisher>,
    ) {
        let store = Arc::new(MemorySnapshotStore::default());
        let publisher = Arc::new(RecordingPublisher::default());
        let service = AssessmentService::new(store.clone(), publisher.clone(), TEST_ORG);
        (service, store, publisher)
    }

    pub(super) fn helpdesk_survey() -> AssessmentSnapshot {
        let mut answers = AnswerSheet::default();
        answers.set("ticket_volume", 3);
        answers.set("repetitive_tasks", 1);
        answers.set("kb_quality", 2);

        let mut snapshot = AssessmentSnapshot::default();
        snapshot.answers = answers;
        snapshot.company = "Acme Services Group".to_string();
        snapshot.email = "coo@acmeservices.example".to_string();
        snapshot.team_size = Some(10);
        snapshot.hours_per_person_week = Some(5.0);
        snapshot.hourly_rate = Some(60.0);
        snapshot.note = "Helpdesk first.".to_string();
        snapshot
    }
}

use std::sync::Arc;

use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use readiness_ai::assessment::{
    assessment_router, AssessmentService, AssessmentSnapshot, DisabledPublisher, ReadinessBand,
    SubmissionOutcome,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{build_service, helpdesk_survey, MemorySnapshotStore, TEST_ORG};

async fn read_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[test]
fn survey_flows_from_restore_to_submission() {
    let (service, store, publisher) = build_service();

    // Fresh store starts from the blank survey.
    assert_eq!(service.restore(), AssessmentSnapshot::default());

    let snapshot = helpdesk_survey();
    service.save(&snapshot).expect("save succeeds");
    assert_eq!(store.stored(), Some(snapshot.clone()));

    let summary = service.evaluate(&snapshot).summary();
    let ids: Vec<&str> = summary.initiatives.iter().map(|view| view.id).collect();
    assert_eq!(ids, vec!["policy", "triage", "kb-copilot"]);
    assert_eq!(summary.initiatives[0].priority, 1);

    let roi = summary.roi.expect("sizing inputs are complete");
    assert_eq!(roi.baseline_hours_per_month, 215);

    let insights = summary.insights();
    assert_eq!(insights.readiness_band, ReadinessBand::Foundational);

    let at = Utc
        .with_ymd_and_hms(2025, 11, 3, 9, 30, 0)
        .single()
        .expect("valid timestamp");
    let receipt = service.submit(&snapshot, at);
    assert_eq!(receipt.outcome, SubmissionOutcome::Sent);

    let deliveries = publisher.deliveries();
    assert_eq!(deliveries.len(), 1);
    assert_eq!(deliveries[0].org, TEST_ORG);
    assert_eq!(deliveries[0].created_at, at);
}

#[test]
fn unconfigured_publisher_keeps_reports_local() {
    let service = AssessmentService::new(
        Arc::new(MemorySnapshotStore::default()),
        Arc::new(DisabledPublisher),
        TEST_ORG,
    );

    let receipt = service.submit(&helpdesk_survey(), Utc::now());
    assert_eq!(receipt.outcome, SubmissionOutcome::SavedLocally);
    assert_eq!(receipt.submission.company, "Acme Services Group");
}

#[test]
fn submission_payload_matches_the_wire_format() {
    let (service, _, _) = build_service();
    let at = Utc
        .with_ymd_and_hms(2025, 11, 3, 9, 30, 0)
        .single()
        .expect("valid timestamp");

    let receipt = service.submit(&helpdesk_survey(), at);
    let value = serde_json::to_value(&receipt.submission).expect("payload serializes");

    assert_eq!(value["org"], json!("Diversicom"));
    assert_eq!(value["source"], json!("ai-readiness-finder"));
    assert_eq!(value["subscribe"], json!(true));
    assert_eq!(value["answers"]["ticket_volume"], json!(3));
    assert!(value["categoryScores"]["automation"].is_number());
    assert!(value["categoryScores"]["risk"].is_number());
    assert!(value["overall"].is_number());
    assert!(value["createdAt"].is_string());

    let first = &value["initiatives"][0];
    assert_eq!(first["id"], json!("policy"));
    assert_eq!(first["pillar"], json!("vCISO"));
    assert!(first["estHoursSavedPerMonth"].is_number());

    assert_eq!(value["roi"]["baselineHrs"], json!(215));
    assert_eq!(value["roi"]["hoursSaved"], json!(12));
    assert_eq!(value["roi"]["cashSaved"], json!(720));
}

#[test]
fn submission_roi_is_null_when_inputs_missing() {
    let (service, _, _) = build_service();
    let mut snapshot = helpdesk_survey();
    snapshot.hourly_rate = None;

    let receipt = service.submit(&snapshot, Utc::now());
    let value = serde_json::to_value(&receipt.submission).expect("payload serializes");
    assert_eq!(value["roi"], Value::Null);
}

#[tokio::test]
async fn http_round_trip_covers_save_submit_and_reset() {
    let (service, store, publisher) = build_service();
    let app = assessment_router(Arc::new(service));

    let put = axum::http::Request::put("/api/v1/assessment/snapshot")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(&helpdesk_survey()).expect("snapshot serializes"),
        ))
        .expect("request builds");
    let response = app.clone().oneshot(put).await.expect("route responds");
    assert_eq!(response.status(), StatusCode::OK);
    let summary = read_json_body(response).await;
    assert_eq!(summary["initiatives"][0]["id"], json!("policy"));

    let post = axum::http::Request::post("/api/v1/assessment/submissions")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(&helpdesk_survey()).expect("snapshot serializes"),
        ))
        .expect("request builds");
    let response = app.clone().oneshot(post).await.expect("route responds");
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert_eq!(publisher.deliveries().len(), 1);

    let delete = axum::http::Request::delete("/api/v1/assessment/snapshot")
        .body(axum::body::Body::empty())
        .expect("request builds");
    let response = app.oneshot(delete).await.expect("route responds");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.stored(), Some(AssessmentSnapshot::default()));
}
