use serde::{Deserialize, Serialize};

/// Letter grade attached to a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradeCode {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D")]
    D,
}

impl GradeCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            GradeCode::APlus => "A+",
            GradeCode::A => "A",
            GradeCode::AMinus => "A-",
            GradeCode::BPlus => "B+",
            GradeCode::B => "B",
            GradeCode::BMinus => "B-",
            GradeCode::CPlus => "C+",
            GradeCode::C => "C",
            GradeCode::D => "D",
        }
    }

    /// Scale row for this code.
    pub fn entry(self) -> &'static GradeScaleEntry {
        GRADE_SCALE
            .iter()
            .find(|entry| entry.code == self)
            .unwrap_or(&GRADE_SCALE[GRADE_SCALE.len() - 1])
    }
}

impl std::fmt::Display for GradeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Traffic-light severity shared by the grade scale and the risk profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    Green,
    Orange,
    Red,
}

impl SeverityTier {
    pub const fn label(self) -> &'static str {
        match self {
            SeverityTier::Green => "green",
            SeverityTier::Orange => "orange",
            SeverityTier::Red => "red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeScaleEntry {
    pub code: GradeCode,
    pub min_score: u8,
    pub max_score: u8,
    pub label: &'static str,
    pub tier: SeverityTier,
}

const fn row(
    code: GradeCode,
    min_score: u8,
    max_score: u8,
    label: &'static str,
    tier: SeverityTier,
) -> GradeScaleEntry {
    GradeScaleEntry {
        code,
        min_score,
        max_score,
        label,
        tier,
    }
}

/// Ordered by descending `min_score`; the last row starts at zero.
static GRADE_SCALE: [GradeScaleEntry; 9] = [
    row(GradeCode::APlus, 91, 100, "Excellent", SeverityTier::Green),
    row(GradeCode::A, 81, 90, "Très bon", SeverityTier::Green),
    row(GradeCode::AMinus, 71, 80, "Bon", SeverityTier::Green),
    row(GradeCode::BPlus, 61, 70, "Assez bon", SeverityTier::Orange),
    row(GradeCode::B, 51, 60, "Correct", SeverityTier::Orange),
    row(GradeCode::BMinus, 41, 50, "Passable", SeverityTier::Orange),
    row(GradeCode::CPlus, 31, 40, "Fragile", SeverityTier::Red),
    row(GradeCode::C, 21, 30, "Insuffisant", SeverityTier::Red),
    row(GradeCode::D, 0, 20, "Très risqué", SeverityTier::Red),
];

pub fn grade_scale() -> &'static [GradeScaleEntry] {
    &GRADE_SCALE
}

/// First row whose `min_score` the score reaches. Scores above 100 land on the top row.
pub fn lookup(final_score: f64) -> &'static GradeScaleEntry {
    GRADE_SCALE
        .iter()
        .find(|entry| final_score >= f64::from(entry.min_score))
        .unwrap_or(&GRADE_SCALE[GRADE_SCALE.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_integer_score_has_exactly_one_row() {
        for score in 0u8..=100 {
            let containing: Vec<_> = grade_scale()
                .iter()
                .filter(|entry| entry.min_score <= score && score <= entry.max_score)
                .collect();
            assert_eq!(containing.len(), 1, "score {score} covered once");
            assert_eq!(lookup(f64::from(score)), containing[0]);
        }
    }

    #[test]
    fn rows_descend_without_gaps() {
        let scale = grade_scale();
        assert_eq!(scale[0].max_score, 100);
        assert_eq!(scale[scale.len() - 1].min_score, 0);
        for pair in scale.windows(2) {
            assert_eq!(pair[1].max_score + 1, pair[0].min_score);
        }
    }

    #[test]
    fn fractional_and_overflow_scores_resolve() {
        assert_eq!(lookup(72.5).code, GradeCode::AMinus);
        assert_eq!(lookup(72.5).label, "Bon");
        assert_eq!(lookup(70.9).code, GradeCode::BPlus);
        assert_eq!(lookup(105.0).code, GradeCode::APlus);
        assert_eq!(lookup(0.0).code, GradeCode::D);
    }

    #[test]
    fn codes_round_trip_through_entries() {
        for entry in grade_scale() {
            assert_eq!(entry.code.entry(), entry);
        }
        assert_eq!(
            serde_json::to_string(&GradeCode::AMinus).expect("serializes"),
            "\"A-\""
        );
    }
}
