use super::common::*;
use crate::scoring::{standard_dimensions, RiskDimension, ScoringError, ShapeMismatch};

const FIRST_TWO: RiskDimension = RiskDimension {
    label: "Garanties et opérateur",
    criterion_indices: &[0, 1],
};

#[test]
fn averages_graded_members_by_weight() {
    let score = engine()
        .compute_dimension_score(&reference_entries(), &FIRST_TWO)
        .expect("dimension validates")
        .expect("dimension has data");

    // (8 x 1.5 + 7 x 1) / 2.5
    assert!((score - 7.6).abs() < 1e-9);
}

#[test]
fn skips_ungraded_members() {
    let entries = partial_entries(&[1]);
    let score = engine()
        .compute_dimension_score(&entries, &FIRST_TWO)
        .expect("dimension validates");

    assert_eq!(score, Some(7.0));
}

#[test]
fn returns_none_when_no_member_is_graded() {
    let entries = partial_entries(&[2, 3, 4]);
    let score = engine()
        .compute_dimension_score(&entries, &FIRST_TWO)
        .expect("dimension validates");

    assert_eq!(score, None);
}

#[test]
fn zero_grades_are_data_not_absence() {
    let entries = entries_from(&[0.0; 10]);
    let score = engine()
        .compute_dimension_score(&entries, &FIRST_TWO)
        .expect("dimension validates");

    assert_eq!(score, Some(0.0));
}

#[test]
fn rejects_dimension_outside_catalog() {
    let dimension = RiskDimension {
        label: "Hors grille",
        criterion_indices: &[3, 10],
    };

    match engine().compute_dimension_score(&reference_entries(), &dimension) {
        Err(ScoringError::InputShapeMismatch(ShapeMismatch::DimensionIndexOutOfRange {
            label,
            index,
            len,
        })) => {
            assert_eq!(label, "Hors grille");
            assert_eq!(index, 10);
            assert_eq!(len, 10);
        }
        other => panic!("expected dimension index error, got {other:?}"),
    }
}

#[test]
fn rejects_misshapen_entries_even_for_partial_data() {
    let mut entries = partial_entries(&[0]);
    entries.pop();

    assert!(matches!(
        engine().compute_dimension_score(&entries, &FIRST_TWO),
        Err(ScoringError::InputShapeMismatch(ShapeMismatch::Length { .. }))
    ));
}

#[test]
fn risk_profile_follows_dimension_order() {
    let profile = engine()
        .risk_profile(&partial_entries(&[0, 8]), standard_dimensions())
        .expect("profile builds");

    let labels: Vec<&str> = profile.iter().map(|score| score.label).collect();
    let expected: Vec<&str> = standard_dimensions()
        .iter()
        .map(|dimension| dimension.label)
        .collect();
    assert_eq!(labels, expected);

    // Garanties covers criteria 0 and 8: (8 x 1.5 + 9 x 1.5) / 3
    assert_eq!(profile[0].score, Some(8.5));
    assert_eq!(profile[2].score, None);
}
