use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::dimensions::DimensionScore;
use super::labeled::Labeled;
use super::scale::{GradeCode, SeverityTier};

/// Cut-offs mapping a 0-10 dimension average onto a traffic light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub green: f64,
    pub orange: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            green: 7.0,
            orange: 4.0,
        }
    }
}

impl TierThresholds {
    pub fn classify(&self, score: f64) -> SeverityTier {
        if score >= self.green {
            SeverityTier::Green
        } else if score >= self.orange {
            SeverityTier::Orange
        } else {
            SeverityTier::Red
        }
    }
}

/// One bar of the risk profile as rendered by review screens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionView {
    pub label: &'static str,
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<SeverityTier>,
    pub width_pct: u8,
}

impl DimensionView {
    pub fn from_score(score: &DimensionScore, tiers: &TierThresholds) -> Self {
        match score.score {
            Some(value) => Self {
                label: score.label,
                score: Some(round_tenths(value)),
                tier: Some(tiers.classify(value)),
                width_pct: (value * 10.0).round().clamp(0.0, 100.0) as u8,
            },
            None => Self {
                label: score.label,
                score: None,
                tier: None,
                width_pct: 0,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreCard {
    pub final_score: f64,
    pub grade: GradeCode,
    pub grade_label: &'static str,
    pub tier: SeverityTier,
    pub risk_profile: Vec<DimensionView>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<Labeled>,
    pub computed_at: DateTime<Utc>,
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
