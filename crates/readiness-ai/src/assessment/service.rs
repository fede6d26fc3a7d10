use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use super::catalog::QuestionCatalog;
use super::domain::AssessmentSnapshot;
use super::initiatives::InitiativeEngine;
use super::report::AssessmentReport;
use super::snapshot::{SnapshotError, SnapshotStore};
use super::submission::{
    ReportPublisher, ReportSubmission, SubmissionOutcome, SUBMISSION_SOURCE,
};

/// Composes the survey catalog, inference engine, snapshot store, and report
/// publisher behind one entry point shared by the HTTP and CLI front ends.
pub struct AssessmentService<S, P> {
    catalog: QuestionCatalog,
    engine: InitiativeEngine,
    store: Arc<S>,
    publisher: Arc<P>,
    org: String,
}

impl<S, P> AssessmentService<S, P>
where
    S: SnapshotStore + 'static,
    P: ReportPublisher + 'static,
{
    pub fn new(store: Arc<S>, publisher: Arc<P>, org: impl Into<String>) -> Self {
        Self {
            catalog: QuestionCatalog::standard(),
            engine: InitiativeEngine::standard(),
            store,
            publisher,
            org: org.into(),
        }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn org(&self) -> &str {
        &self.org
    }

    /// Loads the persisted form state. An empty or unreadable store yields a
    /// fresh snapshot rather than an error.
    pub fn restore(&self) -> AssessmentSnapshot {
        match self.store.load() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => AssessmentSnapshot::default(),
            Err(err) => {
                warn!(error = %err, "stored snapshot unreadable, starting fresh");
                AssessmentSnapshot::default()
            }
        }
    }

    pub fn save(&self, snapshot: &AssessmentSnapshot) -> Result<(), SnapshotError> {
        self.store.save(snapshot)
    }

    /// Recomputes scores, initiatives, and the savings projection for the
    /// given state.
    pub fn evaluate(&self, snapshot: &AssessmentSnapshot) -> AssessmentReport {
        AssessmentReport::generate(&self.catalog, &self.engine, snapshot)
    }

    /// Assembles the outbound report and hands it to the publisher. Delivery
    /// failures are logged and swallowed; the caller always gets a receipt.
    pub fn submit(&self, snapshot: &AssessmentSnapshot, at: DateTime<Utc>) -> SubmissionReceipt {
        let report = self.evaluate(snapshot);
        let submission = ReportSubmission {
            org: self.org.clone(),
            company: snapshot.company.clone(),
            email: snapshot.email.clone(),
            subscribe: snapshot.subscribe,
            answers: snapshot.answers.clone(),
            category_scores: report.scorecard.per_category.clone(),
            overall: report.scorecard.overall,
            initiatives: report.initiatives.clone(),
            roi: report.roi,
            note: snapshot.note.clone(),
            created_at: at,
            source: SUBMISSION_SOURCE,
        };

        if !self.publisher.is_configured() {
            return SubmissionReceipt {
                outcome: SubmissionOutcome::SavedLocally,
                submission,
            };
        }

        if let Err(err) = self.publisher.publish(&submission) {
            warn!(error = %err, "report delivery failed, keeping local copy");
        }

        SubmissionReceipt {
            outcome: SubmissionOutcome::Sent,
            submission,
        }
    }

    /// Restores the default form state and persists it.
    pub fn reset(&self) -> Result<AssessmentSnapshot, SnapshotError> {
        let snapshot = AssessmentSnapshot::default();
        self.store.save(&snapshot)?;
        Ok(snapshot)
    }
}

/// Submission outcome paired with the payload that was (or would have been)
/// delivered.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    pub outcome: SubmissionOutcome,
    pub submission: ReportSubmission,
}
