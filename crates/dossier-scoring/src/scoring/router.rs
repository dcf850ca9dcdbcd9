use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::catalog::criteria;
use super::grade::GradeEntry;
use super::scale::grade_scale;
use super::service::{ScoreRequest, ScoringService};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub(crate) struct RiskProfileRequest {
    grades: Vec<GradeEntry>,
}

/// Router exposing the catalog, the grade scale and the stateless scoring operations.
pub fn scoring_router(service: Arc<ScoringService>) -> Router {
    Router::new()
        .route("/api/v1/scoring/criteria", get(criteria_handler))
        .route("/api/v1/scoring/scale", get(scale_handler))
        .route("/api/v1/scoring/compute", post(compute_handler))
        .route("/api/v1/scoring/risk-profile", post(risk_profile_handler))
        .with_state(service)
}

pub(crate) async fn criteria_handler() -> Response {
    (StatusCode::OK, Json(criteria())).into_response()
}

pub(crate) async fn scale_handler() -> Response {
    (StatusCode::OK, Json(grade_scale())).into_response()
}

pub(crate) async fn compute_handler(
    State(service): State<Arc<ScoringService>>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let card = service.score_card(request)?;
    Ok((StatusCode::OK, Json(card)).into_response())
}

pub(crate) async fn risk_profile_handler(
    State(service): State<Arc<ScoringService>>,
    payload: Result<Json<RiskProfileRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let profile = service.risk_profile(&request.grades)?;
    Ok((StatusCode::OK, Json(profile)).into_response())
}
