use super::views::{AssessmentInsights, AssessmentReportSummary, ReadinessBand};

pub(crate) fn generate_insights(summary: &AssessmentReportSummary) -> AssessmentInsights {
    let overall = summary.overall_score;

    let readiness_band = if overall >= 75 {
        ReadinessBand::PilotReady
    } else if overall >= 50 {
        ReadinessBand::Emerging
    } else {
        ReadinessBand::Foundational
    };

    let focus = summary
        .category_scores
        .iter()
        .min_by_key(|entry| entry.score);
    let strongest = summary
        .category_scores
        .iter()
        .max_by_key(|entry| entry.score);

    let mut observations = Vec::new();
    observations.push(format!(
        "Overall readiness {overall}% ({})",
        readiness_band.label()
    ));

    if let (Some(focus), Some(strongest)) = (focus, strongest) {
        if strongest.score > focus.score {
            observations.push(format!(
                "{} leads at {}%; {} trails at {}%",
                strongest.category_label, strongest.score, focus.category_label, focus.score
            ));
        }
    }

    match &summary.roi {
        Some(roi) => observations.push(format!(
            "Projected {} hour(s) and ${} saved per month at current readiness",
            roi.hours_saved_per_month, roi.cash_saved_per_month
        )),
        None => observations.push(
            "No savings projection yet; team size, weekly hours, and hourly rate are required"
                .to_string(),
        ),
    }

    if let Some(top) = summary.initiatives.first() {
        observations.push(format!(
            "{} initiative(s) recommended; top pick is {} (impact {})",
            summary.initiatives.len(),
            top.title,
            top.impact
        ));
    }

    let mut recommended_next_steps = Vec::new();
    match summary.initiatives.as_slice() {
        [] => recommended_next_steps
            .push("Complete more of the survey to surface tailored initiatives".to_string()),
        [only] => recommended_next_steps.push(format!(
            "Schedule a 30-minute walkthrough to turn {} into a 2-week pilot",
            only.title
        )),
        [first, second, ..] => recommended_next_steps.push(format!(
            "Schedule a 30-minute walkthrough to turn {} and {} into a 2-week pilot",
            first.title, second.title
        )),
    }

    if summary
        .initiatives
        .iter()
        .any(|initiative| initiative.id == "policy")
    {
        recommended_next_steps.push(
            "Stand up AI usage guardrails before piloting anything customer-facing".to_string(),
        );
    }

    if summary.roi.is_none() {
        recommended_next_steps.push(
            "Capture team size, hours per person, and hourly rate to size the business case"
                .to_string(),
        );
    }

    if readiness_band == ReadinessBand::Foundational {
        if let Some(focus) = focus {
            recommended_next_steps.push(format!(
                "Shore up {} fundamentals before scaling automation",
                focus.category_label
            ));
        }
    }

    AssessmentInsights {
        overall_score: overall,
        readiness_band,
        focus_category: focus.map(|entry| entry.category_label),
        focus_category_score: focus.map(|entry| entry.score),
        observations,
        recommended_next_steps,
    }
}
