//! Integration specifications for the file-backed snapshot store.
//!
//! Scenarios cover the on-disk document layout and how the service recovers
//! when the stored document is missing or damaged.

use std::fs;
use std::sync::Arc;

use readiness_ai::assessment::{
    AssessmentService, AssessmentSnapshot, DisabledPublisher, FileSnapshotStore, SnapshotError,
    SnapshotStore, SNAPSHOT_KEY,
};

fn filled_snapshot() -> AssessmentSnapshot {
    let mut snapshot = AssessmentSnapshot::default();
    snapshot.answers.set("repetitive_tasks", 4);
    snapshot.answers.set("security_basics", 1);
    snapshot.company = "Initech".to_string();
    snapshot.team_size = Some(8);
    snapshot.hours_per_person_week = Some(4.0);
    snapshot.hourly_rate = Some(52.0);
    snapshot
}

#[test]
fn save_writes_the_keyed_document_and_load_round_trips() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = FileSnapshotStore::new(dir.path());

    let snapshot = filled_snapshot();
    store.save(&snapshot).expect("save succeeds");

    assert_eq!(store.path(), dir.path().join(format!("{SNAPSHOT_KEY}.json")));
    assert!(store.path().is_file());

    let restored = store.load().expect("load succeeds");
    assert_eq!(restored, Some(snapshot));
}

#[test]
fn stored_document_uses_survey_wire_keys() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = FileSnapshotStore::new(dir.path());
    store.save(&filled_snapshot()).expect("save succeeds");

    let text = fs::read_to_string(store.path()).expect("document readable");
    assert!(text.contains("\"teamSize\""));
    assert!(text.contains("\"hoursPerPersonWeek\""));
    assert!(text.contains("\"repetitive_tasks\""));
    assert!(!text.contains("team_size"));
}

#[test]
fn missing_document_loads_as_none() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = FileSnapshotStore::new(dir.path());

    assert!(matches!(store.load(), Ok(None)));
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = FileSnapshotStore::new(dir.path().join("data").join("surveys"));

    store.save(&filled_snapshot()).expect("save succeeds");
    assert!(store.path().is_file());
}

#[test]
fn damaged_document_reports_malformed() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = FileSnapshotStore::new(dir.path());
    fs::write(store.path(), b"{ not json").expect("write damaged document");

    assert!(matches!(store.load(), Err(SnapshotError::Malformed(_))));
}

#[test]
fn service_restore_recovers_from_a_damaged_document() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = Arc::new(FileSnapshotStore::new(dir.path()));
    fs::write(store.path(), b"\"wrong shape\"").expect("write damaged document");

    let service = AssessmentService::new(store, Arc::new(DisabledPublisher), "Diversicom");
    assert_eq!(service.restore(), AssessmentSnapshot::default());
}
