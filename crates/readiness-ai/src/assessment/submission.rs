use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{AnswerSheet, Category};
use super::initiatives::Initiative;
use super::roi::RoiProjection;

/// Origin marker stamped on every outbound report.
pub const SUBMISSION_SOURCE: &str = "ai-readiness-finder";

/// Outbound report payload assembled at submission time. Category scores and
/// the overall score stay unrounded; `roi` serializes as null when the sizing
/// inputs are incomplete.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSubmission {
    pub org: String,
    pub company: String,
    pub email: String,
    pub subscribe: bool,
    pub answers: AnswerSheet,
    pub category_scores: BTreeMap<Category, f32>,
    pub overall: f32,
    pub initiatives: Vec<Initiative>,
    pub roi: Option<RoiProjection>,
    pub note: String,
    pub created_at: DateTime<Utc>,
    pub source: &'static str,
}

/// Outbound delivery hook for completed reports.
pub trait ReportPublisher: Send + Sync {
    /// Whether a delivery endpoint is wired up. Unconfigured publishers keep
    /// reports local instead of receiving `publish` calls.
    fn is_configured(&self) -> bool {
        true
    }

    fn publish(&self, submission: &ReportSubmission) -> Result<(), PublishError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("publisher transport unavailable: {0}")]
    Transport(String),
}

/// Stand-in publisher used when no webhook endpoint is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledPublisher;

impl ReportPublisher for DisabledPublisher {
    fn is_configured(&self) -> bool {
        false
    }

    fn publish(&self, _submission: &ReportSubmission) -> Result<(), PublishError> {
        Ok(())
    }
}

/// How a submission finished from the caller's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Sent,
    SavedLocally,
}

impl SubmissionOutcome {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::SavedLocally => "saved locally",
        }
    }
}
