//! Scoring and recommendation engine for AI readiness assessments.
//!
//! The [`assessment`] module owns the survey catalog, weighted category
//! scorer, initiative inference rules, ROI projection, snapshot persistence,
//! and report submission. [`config`], [`telemetry`], and [`error`] carry the
//! plumbing shared with the HTTP/CLI crate.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
