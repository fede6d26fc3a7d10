use super::super::catalog::QuestionCatalog;
use super::super::domain::{AssessmentSnapshot, Category};
use super::super::initiatives::{Initiative, InitiativeEngine};
use super::super::roi::RoiProjection;
use super::super::scoring::{score, Scorecard};
use super::views::{
    AssessmentInsights, AssessmentReportSummary, CategoryScoreEntry, InitiativeView,
};

// Displayed hours are floored; the submission payload keeps the raw figure.
const DISPLAY_HOURS_FLOOR: u16 = 2;

/// Everything derived from one survey state: the unrounded scorecard, the
/// ranked initiatives, and the optional savings projection.
#[derive(Debug, Clone)]
pub struct AssessmentReport {
    pub scorecard: Scorecard,
    pub initiatives: Vec<Initiative>,
    pub roi: Option<RoiProjection>,
}

impl AssessmentReport {
    pub fn generate(
        catalog: &QuestionCatalog,
        engine: &InitiativeEngine,
        snapshot: &AssessmentSnapshot,
    ) -> Self {
        let scorecard = score(catalog, &snapshot.answers);
        let initiatives = engine.recommend(&snapshot.answers);
        let roi = snapshot.roi_inputs().project(scorecard.overall);

        Self {
            scorecard,
            initiatives,
            roi,
        }
    }

    pub fn summary(&self) -> AssessmentReportSummary {
        let category_scores = Category::ordered()
            .into_iter()
            .map(|category| CategoryScoreEntry {
                category,
                category_label: category.label(),
                score: rounded_pct(self.scorecard.category(category)),
            })
            .collect();

        let initiatives = self
            .initiatives
            .iter()
            .enumerate()
            .map(|(index, initiative)| InitiativeView {
                priority: index + 1,
                id: initiative.id,
                title: initiative.title,
                description: initiative.description,
                pillar: initiative.pillar,
                pillar_label: initiative.pillar.label(),
                impact: initiative.impact,
                est_hours_saved_per_month: initiative
                    .est_hours_saved_per_month
                    .max(DISPLAY_HOURS_FLOOR),
            })
            .collect();

        AssessmentReportSummary {
            category_scores,
            overall_score: rounded_pct(self.scorecard.overall),
            initiatives,
            roi: self.roi,
        }
    }
}

impl AssessmentReportSummary {
    pub fn insights(&self) -> AssessmentInsights {
        super::generate_insights(self)
    }
}

fn rounded_pct(value: f32) -> u8 {
    value.clamp(0.0, 100.0).round() as u8
}
