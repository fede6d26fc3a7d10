use super::super::domain::{Category, Pillar};
use super::super::roi::RoiProjection;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryScoreEntry {
    pub category: Category,
    pub category_label: &'static str,
    pub score: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct InitiativeView {
    pub priority: usize,
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub pillar: Pillar,
    pub pillar_label: &'static str,
    pub impact: u8,
    pub est_hours_saved_per_month: u16,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReportSummary {
    pub category_scores: Vec<CategoryScoreEntry>,
    pub overall_score: u8,
    pub initiatives: Vec<InitiativeView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roi: Option<RoiProjection>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessBand {
    PilotReady,
    Emerging,
    Foundational,
}

impl ReadinessBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PilotReady => "Pilot Ready",
            Self::Emerging => "Emerging",
            Self::Foundational => "Foundational",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentInsights {
    pub overall_score: u8,
    pub readiness_band: ReadinessBand,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_category: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_category_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub observations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommended_next_steps: Vec<String>,
}
