use axum::http::StatusCode;

/// Structural problems with grade sequences, dimensions or catalogs.
///
/// These are integration bugs on the caller's side; nothing here is recoverable by retrying.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeMismatch {
    #[error("expected {expected} grade entries, got {actual}")]
    Length { expected: usize, actual: usize },
    #[error("entry at position {position} references criterion {index}, catalog has {len}")]
    IndexOutOfRange {
        position: usize,
        index: usize,
        len: usize,
    },
    #[error("criterion {index} is not in the catalog of {len}")]
    UnknownCriterion { index: usize, len: usize },
    #[error("entry at position {position} references criterion {index}")]
    MisplacedEntry { position: usize, index: usize },
    #[error("criterion {index} appears more than once")]
    DuplicateIndex { index: usize },
    #[error("criterion {index} is missing")]
    MissingIndex { index: usize },
    #[error("dimension '{label}' references criterion {index}, catalog has {len}")]
    DimensionIndexOutOfRange {
        label: String,
        index: usize,
        len: usize,
    },
    #[error("dimension '{label}' lists criterion {index} twice")]
    DuplicateDimensionIndex { label: String, index: usize },
    #[error("criteria catalog is empty")]
    EmptyCatalog,
    #[error("catalog entry at position {position} declares index {index}")]
    CatalogIndex { position: usize, index: usize },
    #[error("criterion {index} has non-positive weight {weight}")]
    InvalidWeight { index: usize, weight: f64 },
}

/// Error raised by the scoring engine and aggregator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("input shape mismatch: {0}")]
    InputShapeMismatch(#[from] ShapeMismatch),
    #[error("criteria {missing:?} are not graded yet")]
    IncompleteInput { missing: Vec<usize> },
    #[error("grade {value} must be between 0 and 10 in half-point steps")]
    InvalidGrade { value: f64 },
}

impl ScoringError {
    pub fn status(&self) -> StatusCode {
        match self {
            ScoringError::InputShapeMismatch(_) => StatusCode::BAD_REQUEST,
            ScoringError::IncompleteInput { .. } | ScoringError::InvalidGrade { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }
}
