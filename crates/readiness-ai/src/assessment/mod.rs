//! AI readiness assessment: survey catalog, weighted scoring, initiative
//! inference, ROI projection, snapshot persistence, and report submission.

pub mod catalog;
pub mod domain;
pub mod initiatives;
pub mod report;
pub mod roi;
pub mod router;
pub mod scoring;
pub mod service;
pub mod snapshot;
pub mod submission;

#[cfg(test)]
mod tests;

pub use catalog::{Question, QuestionCatalog, QuestionView};
pub use domain::{AnswerSheet, AssessmentSnapshot, Category, Pillar, MAX_RATING};
pub use initiatives::{Initiative, InitiativeEngine, MAX_INITIATIVES};
pub use report::views::{
    AssessmentInsights, AssessmentReportSummary, CategoryScoreEntry, InitiativeView, ReadinessBand,
};
pub use report::{write_category_scores_csv, write_initiatives_csv, AssessmentReport};
pub use roi::{RoiInputs, RoiProjection};
pub use router::assessment_router;
pub use scoring::{score, Scorecard};
pub use service::{AssessmentService, SubmissionReceipt};
pub use snapshot::{FileSnapshotStore, SnapshotError, SnapshotStore, SNAPSHOT_KEY};
pub use submission::{
    DisabledPublisher, PublishError, ReportPublisher, ReportSubmission, SubmissionOutcome,
    SUBMISSION_SOURCE,
};
