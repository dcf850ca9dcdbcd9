use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct GradeRecord {
    pub(crate) criterion_index: usize,
    pub(crate) grade: Option<String>,
    pub(crate) comment: Option<String>,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<GradeRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<GradeRow>() {
        let row = record?;
        records.push(GradeRecord {
            criterion_index: row.criterion,
            grade: row.grade,
            comment: row.comment,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct GradeRow {
    #[serde(rename = "Criterion")]
    criterion: usize,
    #[serde(rename = "Grade", default, deserialize_with = "empty_string_as_none")]
    grade: Option<String>,
    #[serde(rename = "Comment", default, deserialize_with = "empty_string_as_none")]
    comment: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Accepts `7.5` as well as the French `7,5`.
pub(crate) fn parse_grade_value(raw: &str) -> Option<f64> {
    raw.trim().replace(',', ".").parse::<f64>().ok()
}
