use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{LatestRecommendations, RecommendRequest, Recommendation};
use crate::services::analysis_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(fetch_recommendations))
        .route("/generate", post(generate_recommendations))
}

pub async fn generate_recommendations(
    Json(request): Json<RecommendRequest>,
) -> Result<Json<Vec<Recommendation>>, AppError> {
    info!(
        "POST /recommendations/generate - Generating recommendations for tool: {}",
        request.investment.tool_name
    );
    let recommendations = analysis_service::recommend(request).map_err(|e| {
        error!("Failed to generate recommendations: {}", e);
        e
    })?;
    Ok(Json(recommendations))
}

pub async fn fetch_recommendations(
    State(state): State<AppState>,
) -> Result<Json<LatestRecommendations>, AppError> {
    info!("GET /recommendations - Fetching latest recommendations");
    let latest = analysis_service::latest_recommendations(&state.store);
    Ok(Json(latest))
}
