use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::config::ScoringConfig;

use super::dimensions::{standard_dimensions, RiskDimension};
use super::engine::ScoringEngine;
use super::error::ScoringError;
use super::grade::GradeEntry;
use super::labeled::Labeled;
use super::views::{DimensionView, ScoreCard, TierThresholds};

/// Request body shared by the compute endpoint and the CLI.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreRequest {
    pub grades: Vec<GradeEntry>,
    #[serde(default)]
    pub highlights: Vec<Labeled>,
}

/// Composes the engine, the risk dimensions and the display thresholds.
#[derive(Debug, Clone)]
pub struct ScoringService {
    engine: ScoringEngine,
    dimensions: &'static [RiskDimension],
    tiers: TierThresholds,
}

impl Default for ScoringService {
    fn default() -> Self {
        Self::new(&ScoringConfig::default())
    }
}

impl ScoringService {
    pub fn new(config: &ScoringConfig) -> Self {
        Self::with_parts(ScoringEngine::standard(), standard_dimensions(), config.tiers)
    }

    pub fn with_parts(
        engine: ScoringEngine,
        dimensions: &'static [RiskDimension],
        tiers: TierThresholds,
    ) -> Self {
        Self {
            engine,
            dimensions,
            tiers,
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn dimensions(&self) -> &'static [RiskDimension] {
        self.dimensions
    }

    /// Requires every criterion to be graded.
    pub fn score_card(&self, request: ScoreRequest) -> Result<ScoreCard, ScoringError> {
        let ScoreRequest { grades, highlights } = request;

        let result = self.engine.compute_score(&grades)?;
        let risk_profile = self.risk_profile(&grades)?;
        let entry = result.scale_entry();

        info!(
            final_score = result.final_score,
            grade = result.grade.as_str(),
            "score card issued"
        );

        Ok(ScoreCard {
            final_score: result.final_score,
            grade: result.grade,
            grade_label: entry.label,
            tier: entry.tier,
            risk_profile,
            highlights,
            computed_at: Utc::now(),
        })
    }

    /// Accepts partially graded grids; dimensions without data render empty.
    pub fn risk_profile(&self, grades: &[GradeEntry]) -> Result<Vec<DimensionView>, ScoringError> {
        let scores = self.engine.risk_profile(grades, self.dimensions)?;
        Ok(scores
            .iter()
            .map(|score| DimensionView::from_score(score, &self.tiers))
            .collect())
    }
}
