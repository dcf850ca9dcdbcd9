use serde::{Deserialize, Serialize};

use super::engine::{ScoringEngine, ScoringResult};
use super::error::{ScoringError, ShapeMismatch};
use super::grade::{Grade, GradeEntry};

/// Whether a session currently carries a computed result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Unscored,
    Scored,
}

/// Snapshot of an analyst's grading grid and the last computed result.
///
/// Every edit consumes the snapshot and returns a new one. Changing a grade drops the
/// result, so a score is never shown for grades it was not computed from; only
/// [`ScoringSession::compute`] produces a new one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringSession {
    entries: Vec<GradeEntry>,
    result: Option<ScoringResult>,
}

impl ScoringSession {
    pub fn open(engine: &ScoringEngine) -> Self {
        Self {
            entries: engine.blank_entries(),
            result: None,
        }
    }

    /// Rebuilds a session from persisted report data, e.g. for read-only redisplay.
    pub fn restore(
        engine: &ScoringEngine,
        entries: Vec<GradeEntry>,
        result: Option<ScoringResult>,
    ) -> Result<Self, ScoringError> {
        engine.validate_shape(&entries)?;
        Ok(Self { entries, result })
    }

    pub fn entries(&self) -> &[GradeEntry] {
        &self.entries
    }

    pub fn result(&self) -> Option<&ScoringResult> {
        self.result.as_ref()
    }

    pub fn state(&self) -> SessionState {
        if self.result.is_some() {
            SessionState::Scored
        } else {
            SessionState::Unscored
        }
    }

    pub fn graded_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.grade.is_some())
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|entry| entry.grade.is_some())
    }

    pub fn missing_criteria(&self) -> Vec<usize> {
        self.entries
            .iter()
            .filter(|entry| entry.grade.is_none())
            .map(|entry| entry.criterion_index)
            .collect()
    }

    pub fn with_grade(
        mut self,
        criterion_index: usize,
        grade: Option<Grade>,
    ) -> Result<Self, ScoringError> {
        let entry = self.entry_mut(criterion_index)?;
        if entry.grade != grade {
            entry.grade = grade;
            self.result = None;
        }
        Ok(self)
    }

    /// Comments do not feed the score, so the current result survives.
    pub fn with_comment(
        mut self,
        criterion_index: usize,
        comment: Option<String>,
    ) -> Result<Self, ScoringError> {
        self.entry_mut(criterion_index)?.comment = comment.filter(|text| !text.trim().is_empty());
        Ok(self)
    }

    /// Scores the current grades. On error the caller keeps its previous snapshot.
    pub fn compute(&self, engine: &ScoringEngine) -> Result<Self, ScoringError> {
        let result = engine.compute_score(&self.entries)?;
        Ok(Self {
            entries: self.entries.clone(),
            result: Some(result),
        })
    }

    fn entry_mut(&mut self, criterion_index: usize) -> Result<&mut GradeEntry, ScoringError> {
        let len = self.entries.len();
        self.entries.get_mut(criterion_index).ok_or_else(|| {
            ShapeMismatch::UnknownCriterion {
                index: criterion_index,
                len,
            }
            .into()
        })
    }
}
