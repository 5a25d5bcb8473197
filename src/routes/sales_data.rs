use axum::extract::{Query, State};
use axum::routing::post;
use axum::{Json, Router};
use http::StatusCode;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{CreateSalesRecord, SalesQuery, SalesRecord};
use crate::services::sales_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(create_sales_record).get(fetch_sales_records))
}

pub async fn create_sales_record(
    State(state): State<AppState>,
    Json(data): Json<CreateSalesRecord>,
) -> Result<(StatusCode, Json<SalesRecord>), AppError> {
    info!("POST /sales-data - Recording sales data for {}", data.investment_id);
    let record = sales_service::create(&state.store, data).map_err(|e| {
        error!("Failed to record sales data: {}", e);
        e
    })?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn fetch_sales_records(
    State(state): State<AppState>,
    Query(query): Query<SalesQuery>,
) -> Result<Json<Vec<SalesRecord>>, AppError> {
    info!("GET /sales-data - Fetching sales records");
    Ok(Json(sales_service::fetch(&state.store, &query)))
}
