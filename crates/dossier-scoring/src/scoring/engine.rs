use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::{self, Criterion};
use super::dimensions::{validate_dimension, weighted_average, DimensionScore, RiskDimension};
use super::error::{ScoringError, ShapeMismatch};
use super::grade::GradeEntry;
use super::scale::{self, GradeCode, GradeScaleEntry};

/// Weighted final score and the letter grade it maps to.
///
/// The score is not clamped: a grid whose weights sum above 10 can exceed 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub final_score: f64,
    pub grade: GradeCode,
}

impl ScoringResult {
    pub fn scale_entry(&self) -> &'static GradeScaleEntry {
        self.grade.entry()
    }
}

/// Stateless evaluator applying a criteria catalog to grade entries.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine {
    criteria: &'static [Criterion],
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl ScoringEngine {
    pub fn standard() -> Self {
        Self {
            criteria: catalog::criteria(),
        }
    }

    pub fn new(criteria: &'static [Criterion]) -> Result<Self, ScoringError> {
        catalog::validate_catalog(criteria)?;
        Ok(Self { criteria })
    }

    pub fn criteria(&self) -> &'static [Criterion] {
        self.criteria
    }

    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    /// One ungraded entry per criterion, in catalog order.
    pub fn blank_entries(&self) -> Vec<GradeEntry> {
        self.criteria
            .iter()
            .map(|criterion| GradeEntry::empty(criterion.index))
            .collect()
    }

    /// Entries must line up 1:1 with the catalog; nothing is truncated or padded.
    pub fn validate_shape(&self, entries: &[GradeEntry]) -> Result<(), ScoringError> {
        let len = self.criteria.len();
        if entries.len() != len {
            return Err(ShapeMismatch::Length {
                expected: len,
                actual: entries.len(),
            }
            .into());
        }

        for (position, entry) in entries.iter().enumerate() {
            if entry.criterion_index >= len {
                return Err(ShapeMismatch::IndexOutOfRange {
                    position,
                    index: entry.criterion_index,
                    len,
                }
                .into());
            }
            if entry.criterion_index != position {
                return Err(ShapeMismatch::MisplacedEntry {
                    position,
                    index: entry.criterion_index,
                }
                .into());
            }
        }

        Ok(())
    }

    pub fn compute_score(&self, entries: &[GradeEntry]) -> Result<ScoringResult, ScoringError> {
        self.validate_shape(entries)?;

        let missing: Vec<usize> = entries
            .iter()
            .filter(|entry| entry.grade.is_none())
            .map(|entry| entry.criterion_index)
            .collect();
        if !missing.is_empty() {
            return Err(ScoringError::IncompleteInput { missing });
        }

        let weighted_sum: f64 = entries
            .iter()
            .zip(self.criteria)
            .filter_map(|(entry, criterion)| {
                entry.grade.map(|grade| grade.value() * criterion.weight)
            })
            .sum();

        let final_score = (weighted_sum * 10.0).round() / 10.0;
        let matched = scale::lookup(final_score);

        debug!(
            final_score,
            grade = matched.code.as_str(),
            "computed dossier score"
        );

        Ok(ScoringResult {
            final_score,
            grade: matched.code,
        })
    }

    pub fn compute_dimension_score(
        &self,
        entries: &[GradeEntry],
        dimension: &RiskDimension,
    ) -> Result<Option<f64>, ScoringError> {
        self.validate_shape(entries)?;
        validate_dimension(dimension, self.criteria.len())?;
        Ok(weighted_average(entries, self.criteria, dimension))
    }

    /// Per-dimension averages in the order the dimensions are given.
    pub fn risk_profile(
        &self,
        entries: &[GradeEntry],
        dimensions: &[RiskDimension],
    ) -> Result<Vec<DimensionScore>, ScoringError> {
        self.validate_shape(entries)?;

        dimensions
            .iter()
            .map(|dimension| -> Result<DimensionScore, ScoringError> {
                validate_dimension(dimension, self.criteria.len())?;
                Ok(DimensionScore {
                    label: dimension.label,
                    score: weighted_average(entries, self.criteria, dimension),
                })
            })
            .collect()
    }
}
