mod parser;

use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::engine::ScoringEngine;
use super::error::{ScoringError, ShapeMismatch};
use super::grade::{Grade, GradeEntry};

#[derive(Debug)]
pub enum GradeSheetImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    UnparsableGrade { criterion_index: usize, value: String },
    Scoring(ScoringError),
}

impl std::fmt::Display for GradeSheetImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradeSheetImportError::Io(err) => write!(f, "failed to read grade sheet: {}", err),
            GradeSheetImportError::Csv(err) => write!(f, "invalid grade sheet CSV: {}", err),
            GradeSheetImportError::UnparsableGrade {
                criterion_index,
                value,
            } => write!(
                f,
                "grade '{}' for criterion {} is not a number",
                value, criterion_index
            ),
            GradeSheetImportError::Scoring(err) => {
                write!(f, "grade sheet does not fit the criteria grid: {}", err)
            }
        }
    }
}

impl std::error::Error for GradeSheetImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GradeSheetImportError::Io(err) => Some(err),
            GradeSheetImportError::Csv(err) => Some(err),
            GradeSheetImportError::UnparsableGrade { .. } => None,
            GradeSheetImportError::Scoring(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for GradeSheetImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for GradeSheetImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<ScoringError> for GradeSheetImportError {
    fn from(err: ScoringError) -> Self {
        Self::Scoring(err)
    }
}

impl From<ShapeMismatch> for GradeSheetImportError {
    fn from(err: ShapeMismatch) -> Self {
        Self::Scoring(err.into())
    }
}

/// Loads an analyst grade sheet (`Criterion,Grade,Comment`) into catalog-ordered entries.
pub struct GradeSheetImporter;

impl GradeSheetImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        engine: &ScoringEngine,
    ) -> Result<Vec<GradeEntry>, GradeSheetImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, engine)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        engine: &ScoringEngine,
    ) -> Result<Vec<GradeEntry>, GradeSheetImportError> {
        let len = engine.criterion_count();
        let mut slots: Vec<Option<GradeEntry>> = vec![None; len];

        for (position, record) in parser::parse_records(reader)?.into_iter().enumerate() {
            let index = record.criterion_index;
            let slot = slots
                .get_mut(index)
                .ok_or(ShapeMismatch::IndexOutOfRange {
                    position,
                    index,
                    len,
                })?;
            if slot.is_some() {
                return Err(ShapeMismatch::DuplicateIndex { index }.into());
            }

            let grade = match record.grade {
                Some(raw) => {
                    let value = parser::parse_grade_value(&raw).ok_or_else(|| {
                        GradeSheetImportError::UnparsableGrade {
                            criterion_index: index,
                            value: raw.clone(),
                        }
                    })?;
                    Some(Grade::new(value)?)
                }
                None => None,
            };

            *slot = Some(GradeEntry {
                criterion_index: index,
                grade,
                comment: record.comment,
            });
        }

        let entries = slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| slot.ok_or(ShapeMismatch::MissingIndex { index }))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(rows = entries.len(), "grade sheet imported");
        Ok(entries)
    }
}
