use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use crate::errors::AppError;
use crate::models::{HistoryPage, HistoryQuery};
use crate::services::analysis_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(fetch_history))
}

pub async fn fetch_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryPage>, AppError> {
    info!(
        "GET /history - Fetching analysis history (limit: {}, offset: {})",
        query.limit, query.offset
    );
    let page = analysis_service::history(&state.store, &query);
    Ok(Json(page))
}
