use serde::Serialize;

use super::catalog::Criterion;
use super::error::ShapeMismatch;
use super::grade::GradeEntry;

/// Named group of criteria shown as one bar of the risk profile. Groups may overlap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskDimension {
    pub label: &'static str,
    pub criterion_indices: &'static [usize],
}

/// Sub-average for one dimension; `None` when none of its criteria are graded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionScore {
    pub label: &'static str,
    pub score: Option<f64>,
}

static STANDARD_DIMENSIONS: [RiskDimension; 5] = [
    RiskDimension {
        label: "Garanties",
        criterion_indices: &[0, 8],
    },
    RiskDimension {
        label: "Structure financière",
        criterion_indices: &[4, 6, 8],
    },
    RiskDimension {
        label: "Porteur de projet",
        criterion_indices: &[1, 3],
    },
    RiskDimension {
        label: "Marché",
        criterion_indices: &[2, 5],
    },
    RiskDimension {
        label: "Exécution",
        criterion_indices: &[6, 7, 9],
    },
];

pub fn standard_dimensions() -> &'static [RiskDimension] {
    &STANDARD_DIMENSIONS
}

pub(crate) fn validate_dimension(
    dimension: &RiskDimension,
    criterion_count: usize,
) -> Result<(), ShapeMismatch> {
    for (position, &index) in dimension.criterion_indices.iter().enumerate() {
        if index >= criterion_count {
            return Err(ShapeMismatch::DimensionIndexOutOfRange {
                label: dimension.label.to_string(),
                index,
                len: criterion_count,
            });
        }
        if dimension.criterion_indices[..position].contains(&index) {
            return Err(ShapeMismatch::DuplicateDimensionIndex {
                label: dimension.label.to_string(),
                index,
            });
        }
    }

    Ok(())
}

/// Expects entries and dimension to be validated against `criteria` already.
pub(crate) fn weighted_average(
    entries: &[GradeEntry],
    criteria: &[Criterion],
    dimension: &RiskDimension,
) -> Option<f64> {
    let (weighted_sum, total_weight) = dimension
        .criterion_indices
        .iter()
        .filter_map(|&index| {
            let weight = criteria[index].weight;
            entries[index]
                .grade
                .map(|grade| (grade.value() * weight, weight))
        })
        .fold((0.0, 0.0), |(sum, total), (weighted, weight)| {
            (sum + weighted, total + weight)
        });

    if total_weight > 0.0 {
        Some(weighted_sum / total_weight)
    } else {
        None
    }
}
