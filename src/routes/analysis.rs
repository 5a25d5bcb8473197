use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{AnalyzeRequest, RoiReport};
use crate::services::analysis_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/analyze", post(analyze_roi))
}

pub async fn analyze_roi(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<Vec<RoiReport>>, AppError> {
    info!("POST /roi/analyze - Analyzing {} investment(s)", request.investments.len());
    let reports = analysis_service::analyze(&state.store, request).map_err(|e| {
        error!("Failed to analyze ROI: {}", e);
        e
    })?;
    Ok(Json(reports))
}
