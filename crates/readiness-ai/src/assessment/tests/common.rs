use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::domain::{AnswerSheet, AssessmentSnapshot};
use crate::assessment::service::AssessmentService;
use crate::assessment::snapshot::{SnapshotError, SnapshotStore};
use crate::assessment::submission::{PublishError, ReportPublisher, ReportSubmission};

pub(super) const TEST_ORG: &str = "Diversicom";

pub(super) fn answers(entries: &[(&str, u8)]) -> AnswerSheet {
    let mut sheet = AnswerSheet::default();
    for (id, rating) in entries {
        sheet.set(*id, *rating);
    }
    sheet
}

/// A mid-journey survey: every question answered, sizing inputs filled in.
pub(super) fn engaged_snapshot() -> AssessmentSnapshot {
    let mut snapshot = AssessmentSnapshot::default();
    snapshot.answers = answers(&[
        ("repetitive_tasks", 4),
        ("ticket_volume", 3),
        ("document_intake", 2),
        ("approvals", 3),
        ("data_sources", 4),
        ("kb_quality", 3),
        ("data_quality", 3),
        ("exec_sponsor", 4),
        ("champions", 3),
        ("training_budget", 2),
        ("security_basics", 4),
        ("compliance_req", 3),
        ("data_handling", 4),
    ]);
    snapshot.company = "Initech".to_string();
    snapshot.email = "ops@initech.example".to_string();
    snapshot.team_size = Some(12);
    snapshot.hours_per_person_week = Some(6.0);
    snapshot.hourly_rate = Some(55.0);
    snapshot.note = "Interested in helpdesk automation first.".to_string();
    snapshot
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

pub(super) struct FailingPublisher;

impl ReportPublisher for FailingPublisher {
    fn publish(&self, _submission: &ReportSubmission) -> Result<(), PublishError> {
        Err(PublishError::Transport(
            "webhook endpoint unreachable".to_string(),
        ))
    }
}

pub(super) struct UnavailableStore;

impl SnapshotStore for UnavailableStore {
    fn load(&self) -> Result<Option<AssessmentSnapshot>, SnapshotError> {
        Err(SnapshotError::Unavailable("disk offline".to_string()))
    }

    fn save(&self, _snapshot: &AssessmentSnapshot) -> Result<(), SnapshotError> {
        Err(SnapshotError::Unavailable("disk offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
