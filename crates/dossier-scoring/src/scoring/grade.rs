use serde::{Deserialize, Serialize};

use super::error::ScoringError;

/// Analyst rating for one criterion: 0 to 10 in half-point steps.
///
/// Stored as a count of half points so equality and hashing stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Grade(u8);

impl Grade {
    pub const MAX: f64 = 10.0;

    pub fn new(value: f64) -> Result<Self, ScoringError> {
        let halves = value * 2.0;
        if !value.is_finite() || !(0.0..=Self::MAX).contains(&value) || halves.fract() != 0.0 {
            return Err(ScoringError::InvalidGrade { value });
        }

        Ok(Self(halves as u8))
    }

    pub fn value(self) -> f64 {
        f64::from(self.0) / 2.0
    }
}

impl TryFrom<f64> for Grade {
    type Error = ScoringError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Grade> for f64 {
    fn from(grade: Grade) -> Self {
        grade.value()
    }
}

/// One row of an analysis report's grading grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeEntry {
    pub criterion_index: usize,
    #[serde(default)]
    pub grade: Option<Grade>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl GradeEntry {
    pub fn empty(criterion_index: usize) -> Self {
        Self {
            criterion_index,
            grade: None,
            comment: None,
        }
    }

    pub fn graded(criterion_index: usize, grade: Grade) -> Self {
        Self {
            criterion_index,
            grade: Some(grade),
            comment: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_half_point_steps() {
        for raw in [0.0, 0.5, 4.5, 7.0, 10.0] {
            let grade = Grade::new(raw).expect("valid grade");
            assert_eq!(grade.value(), raw);
        }
    }

    #[test]
    fn rejects_out_of_range_and_off_step_values() {
        for raw in [-0.5, 10.5, 3.25, 7.1, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(Grade::new(raw), Err(ScoringError::InvalidGrade { .. })),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn deserializes_from_json_numbers() {
        let entry: GradeEntry =
            serde_json::from_str(r#"{"criterion_index": 3, "grade": 8}"#).expect("entry parses");
        assert_eq!(entry.grade.map(Grade::value), Some(8.0));
        assert!(entry.comment.is_none());

        let missing: GradeEntry =
            serde_json::from_str(r#"{"criterion_index": 1, "grade": null, "comment": "à revoir"}"#)
                .expect("entry parses");
        assert!(missing.grade.is_none());
        assert_eq!(missing.comment.as_deref(), Some("à revoir"));

        let invalid = serde_json::from_str::<GradeEntry>(r#"{"criterion_index": 0, "grade": 11}"#);
        assert!(invalid.is_err());
    }
}
