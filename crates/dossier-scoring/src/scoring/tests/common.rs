use std::sync::Arc;

use axum::response::Response;
use axum::Router;
use serde_json::Value;

use crate::scoring::{
    scoring_router, Grade, GradeEntry, ScoreRequest, ScoringEngine, ScoringService,
};

/// Grades from the reference scenario; weighted sum 72.5.
pub(super) const REFERENCE_GRADES: [f64; 10] = [8.0, 7.0, 6.0, 9.0, 5.0, 7.0, 6.0, 8.0, 9.0, 7.0];

pub(super) fn grade(value: f64) -> Grade {
    Grade::new(value).expect("valid grade")
}

pub(super) fn entries_from(values: &[f64]) -> Vec<GradeEntry> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| GradeEntry::graded(index, grade(value)))
        .collect()
}

pub(super) fn reference_entries() -> Vec<GradeEntry> {
    entries_from(&REFERENCE_GRADES)
}

/// Reference grid with only the listed criteria graded.
pub(super) fn partial_entries(graded: &[usize]) -> Vec<GradeEntry> {
    reference_entries()
        .into_iter()
        .map(|entry| {
            if graded.contains(&entry.criterion_index) {
                entry
            } else {
                GradeEntry::empty(entry.criterion_index)
            }
        })
        .collect()
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::standard()
}

pub(super) fn reference_request() -> ScoreRequest {
    ScoreRequest {
        grades: reference_entries(),
        highlights: Vec::new(),
    }
}

pub(super) fn router() -> Router {
    scoring_router(Arc::new(ScoringService::default()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
