mod rules;

use serde::Serialize;

use super::domain::{AnswerSheet, Pillar};
use rules::InitiativeRule;

/// Most initiatives a single recommendation list will carry.
pub const MAX_INITIATIVES: usize = 6;

const IMPACT_FLOOR: u8 = 5;
const IMPACT_CEILING: u8 = 100;

/// Recommended initiative derived from the survey answers. Field names follow
/// the submission wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Initiative {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub pillar: Pillar,
    pub impact: u8,
    pub est_hours_saved_per_month: u16,
}

/// Rule-driven recommendation engine.
pub struct InitiativeEngine {
    rules: Vec<InitiativeRule>,
}

impl InitiativeEngine {
    pub fn standard() -> Self {
        Self {
            rules: rules::standard_rules(),
        }
    }

    /// Fires every matching rule, clamps impacts into the ranking band, and
    /// returns at most [`MAX_INITIATIVES`] entries ordered by descending
    /// impact. Rules that tie keep their declaration order.
    pub fn recommend(&self, answers: &AnswerSheet) -> Vec<Initiative> {
        let mut fired: Vec<Initiative> = self
            .rules
            .iter()
            .filter(|rule| rule.trigger.fires(answers))
            .map(|rule| Initiative {
                id: rule.id,
                title: rule.title,
                description: rule.description,
                pillar: rule.pillar,
                impact: clamp_impact(rule.raw_impact(answers)),
                est_hours_saved_per_month: rule.hours_saved(answers),
            })
            .collect();

        fired.sort_by(|a, b| b.impact.cmp(&a.impact));
        fired.truncate(MAX_INITIATIVES);
        fired
    }
}

fn clamp_impact(raw: u16) -> u8 {
    raw.clamp(IMPACT_FLOOR as u16, IMPACT_CEILING as u16) as u8
}
