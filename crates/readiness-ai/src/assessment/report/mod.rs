mod export;
mod insights;
mod summary;
pub mod views;

pub use export::{write_category_scores_csv, write_initiatives_csv};
pub use summary::AssessmentReport;

pub(crate) use insights::generate_insights;
