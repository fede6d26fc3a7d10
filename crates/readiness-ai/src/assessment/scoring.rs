use std::collections::BTreeMap;

use super::catalog::QuestionCatalog;
use super::domain::{AnswerSheet, Category, MAX_RATING};

/// Weighted percentages per category plus the blended overall score. Values
/// stay unrounded; presentation layers round for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Scorecard {
    pub per_category: BTreeMap<Category, f32>,
    pub overall: f32,
}

impl Scorecard {
    pub fn category(&self, category: Category) -> f32 {
        self.per_category.get(&category).copied().unwrap_or(0.0)
    }
}

/// Scores an answer sheet against the catalog. Each category is the
/// weight-normalized share of its maximum attainable score, expressed as a
/// percentage; the overall score blends the categories by their fixed weights.
pub fn score(catalog: &QuestionCatalog, answers: &AnswerSheet) -> Scorecard {
    let mut accumulators: BTreeMap<Category, (f32, f32)> = Category::ordered()
        .into_iter()
        .map(|category| (category, (0.0, 0.0)))
        .collect();

    for question in catalog.questions() {
        let rating = answers.rating(question.id);
        let entry = accumulators.entry(question.category).or_insert((0.0, 0.0));
        entry.0 += (rating as f32 / MAX_RATING as f32) * question.weight;
        entry.1 += question.weight;
    }

    let mut per_category = BTreeMap::new();
    let mut overall = 0.0;
    for (category, (scored, weight)) in accumulators {
        let pct = if weight > 0.0 {
            (scored / weight) * 100.0
        } else {
            0.0
        };
        overall += pct * category.blend_weight();
        per_category.insert(category, pct);
    }

    Scorecard {
        per_category,
        overall,
    }
}
