use std::io;

use csv::Writer;

use super::views::AssessmentReportSummary;

/// Writes the rounded category scores plus a trailing overall row.
pub fn write_category_scores_csv<W: io::Write>(
    summary: &AssessmentReportSummary,
    writer: W,
) -> Result<(), csv::Error> {
    let mut csv_writer = Writer::from_writer(writer);

    for entry in &summary.category_scores {
        csv_writer.serialize(entry)?;
    }
    csv_writer.write_record([
        "overall",
        "Overall",
        &summary.overall_score.to_string(),
    ])?;
    csv_writer.flush()?;
    Ok(())
}

/// Writes the ranked initiatives with their display columns.
pub fn write_initiatives_csv<W: io::Write>(
    summary: &AssessmentReportSummary,
    writer: W,
) -> Result<(), csv::Error> {
    let mut csv_writer = Writer::from_writer(writer);

    for view in &summary.initiatives {
        csv_writer.serialize(view)?;
    }
    csv_writer.flush()?;
    Ok(())
}
