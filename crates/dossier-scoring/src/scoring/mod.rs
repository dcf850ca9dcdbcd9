//! Weighted scoring of financing dossiers.
//!
//! Analysts grade each criterion of the catalog from 0 to 10; the engine turns a complete
//! grid into a final score with a letter grade, and the aggregator derives per-dimension
//! averages for the risk profile shown to reviewers and investors. Everything here is pure
//! and synchronous; mutation lives in [`ScoringSession`] snapshots owned by the caller.

pub mod catalog;
pub mod dimensions;
pub mod engine;
mod error;
pub mod grade;
pub mod import;
pub mod labeled;
pub mod router;
pub mod scale;
pub mod service;
pub mod session;
pub mod views;

#[cfg(test)]
mod tests;

pub use catalog::{criteria, Criterion, CRITERIA_COUNT};
pub use dimensions::{standard_dimensions, DimensionScore, RiskDimension};
pub use engine::{ScoringEngine, ScoringResult};
pub use error::{ScoringError, ShapeMismatch};
pub use grade::{Grade, GradeEntry};
pub use import::{GradeSheetImportError, GradeSheetImporter};
pub use labeled::Labeled;
pub use router::scoring_router;
pub use scale::{grade_scale, lookup, GradeCode, GradeScaleEntry, SeverityTier};
pub use service::{ScoreRequest, ScoringService};
pub use session::{ScoringSession, SessionState};
pub use views::{DimensionView, ScoreCard, TierThresholds};
