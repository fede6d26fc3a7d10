use crate::infra::{InMemorySnapshotStore, WebhookPublisher};
use chrono::Utc;
use clap::Args;
use readiness_ai::assessment::{
    write_category_scores_csv, write_initiatives_csv, AssessmentReport, AssessmentReportSummary,
    AssessmentService, AssessmentSnapshot, FileSnapshotStore, InitiativeEngine, QuestionCatalog,
    SnapshotStore, SubmissionOutcome,
};
use readiness_ai::error::AppError;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Webhook endpoint for the demo submission (delivery is logged, not sent)
    #[arg(long)]
    pub(crate) webhook_url: Option<String>,
    /// Skip the report submission portion of the demo
    #[arg(long)]
    pub(crate) skip_submission: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AssessmentReportArgs {
    /// Directory holding the stored survey snapshot
    #[arg(long, default_value = "data")]
    pub(crate) snapshot_dir: PathBuf,
    /// Override the team size used for the savings projection
    #[arg(long)]
    pub(crate) team_size: Option<u32>,
    /// Override the hours per person per week used for the savings projection
    #[arg(long)]
    pub(crate) hours_per_week: Option<f32>,
    /// Override the hourly rate used for the savings projection
    #[arg(long)]
    pub(crate) hourly_rate: Option<f32>,
    /// Write the category scores to this CSV file
    #[arg(long)]
    pub(crate) scores_csv: Option<PathBuf>,
    /// Write the recommended initiatives to this CSV file
    #[arg(long)]
    pub(crate) initiatives_csv: Option<PathBuf>,
}

pub(crate) fn run_assessment_report(args: AssessmentReportArgs) -> Result<(), AppError> {
    let AssessmentReportArgs {
        snapshot_dir,
        team_size,
        hours_per_week,
        hourly_rate,
        scores_csv,
        initiatives_csv,
    } = args;

    let store = FileSnapshotStore::new(&snapshot_dir);
    let mut snapshot = store.load()?.unwrap_or_default();

    if let Some(team_size) = team_size {
        snapshot.team_size = Some(team_size);
    }
    if let Some(hours) = hours_per_week {
        snapshot.hours_per_person_week = Some(hours);
    }
    if let Some(rate) = hourly_rate {
        snapshot.hourly_rate = Some(rate);
    }

    let catalog = QuestionCatalog::standard();
    let engine = InitiativeEngine::standard();
    let report = AssessmentReport::generate(&catalog, &engine, &snapshot);
    let summary = report.summary();
    render_assessment_report(&snapshot, &summary);

    if let Some(path) = scores_csv {
        let file = File::create(&path)?;
        write_category_scores_csv(&summary, file)?;
        println!("\nCategory scores exported to {}", path.display());
    }

    if let Some(path) = initiatives_csv {
        let file = File::create(&path)?;
        write_initiatives_csv(&summary, file)?;
        println!("Initiatives exported to {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        webhook_url,
        skip_submission,
    } = args;

    println!("AI readiness demo");

    let store = Arc::new(InMemorySnapshotStore::default());
    let publisher = Arc::new(WebhookPublisher::new(webhook_url));
    let service = AssessmentService::new(store, publisher, "Diversicom");

    let snapshot = demo_snapshot();
    service.save(&snapshot)?;

    let summary = service.evaluate(&snapshot).summary();
    render_assessment_report(&snapshot, &summary);

    if skip_submission {
        return Ok(());
    }

    println!("\nReport submission demo");
    let receipt = service.submit(&snapshot, Utc::now());
    match receipt.outcome {
        SubmissionOutcome::Sent => println!("- Report handed to the webhook publisher"),
        SubmissionOutcome::SavedLocally => {
            println!("- Saved locally. Set APP_WEBHOOK_URL to deliver reports to your CRM or PSA.")
        }
    }

    match serde_json::to_string_pretty(&receipt.submission) {
        Ok(json) => println!("  Submission payload:\n{}", json),
        Err(err) => println!("  Submission payload unavailable: {}", err),
    }

    Ok(())
}

fn demo_snapshot() -> AssessmentSnapshot {
    let mut snapshot = AssessmentSnapshot::default();
    for (question_id, rating) in [
        ("repetitive_tasks", 4),
        ("ticket_volume", 4),
        ("document_intake", 3),
        ("approvals", 3),
        ("data_sources", 3),
        ("kb_quality", 2),
        ("data_quality", 3),
        ("exec_sponsor", 4),
        ("champions", 3),
        ("training_budget", 2),
        ("security_basics", 3),
        ("compliance_req", 4),
        ("data_handling", 2),
    ] {
        snapshot.answers.set(question_id, rating);
    }

    snapshot.company = "Acme Services Group".to_string();
    snapshot.email = "coo@acmeservices.example".to_string();
    snapshot.team_size = Some(12);
    snapshot.hours_per_person_week = Some(6.0);
    snapshot.hourly_rate = Some(58.0);
    snapshot.note = "Helpdesk and document workflows first.".to_string();
    snapshot
}

fn render_assessment_report(snapshot: &AssessmentSnapshot, summary: &AssessmentReportSummary) {
    println!("AI readiness report");
    if snapshot.company.is_empty() {
        println!(
            "Survey coverage: {} question(s) answered",
            snapshot.answers.len()
        );
    } else {
        println!(
            "Company: {} | {} question(s) answered",
            snapshot.company,
            snapshot.answers.len()
        );
    }

    println!("\nCategory scores");
    for entry in &summary.category_scores {
        println!("- {}: {}%", entry.category_label, entry.score);
    }

    let insights = summary.insights();
    println!(
        "\nOverall readiness: {}% ({})",
        summary.overall_score,
        insights.readiness_band.label()
    );

    if summary.initiatives.is_empty() {
        println!("\nRecommended initiatives: none yet");
    } else {
        println!("\nRecommended initiatives");
        for view in &summary.initiatives {
            println!(
                "{}. {} [{}] | impact {} | ~{} hrs/month",
                view.priority,
                view.title,
                view.pillar_label,
                view.impact,
                view.est_hours_saved_per_month
            );
            println!("   {}", view.description);
        }
    }

    match &summary.roi {
        Some(roi) => {
            println!("\nProjected monthly savings");
            println!(
                "- Baseline {} hrs | automation yield {}%",
                roi.baseline_hours_per_month, roi.automation_yield_pct
            );
            println!(
                "- {} hrs and ${} back per month",
                roi.hours_saved_per_month, roi.cash_saved_per_month
            );
        }
        None => println!(
            "\nProjected monthly savings: add team size, hours, and rate to size the business case"
        ),
    }

    if let Some(category) = insights.focus_category {
        match insights.focus_category_score {
            Some(score) => println!("\nFocus area: {} ({}%)", category, score),
            None => println!("\nFocus area: {}", category),
        }
    }

    if !insights.observations.is_empty() {
        println!("\nObservations");
        for note in &insights.observations {
            println!("- {}", note);
        }
    }

    if !insights.recommended_next_steps.is_empty() {
        println!("\nRecommended next steps");
        for step in &insights.recommended_next_steps {
            println!("- {}", step);
        }
    }
}
