use axum::extract::{Path, State};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use http::StatusCode;
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{CreateInvestment, Investment, UpdateInvestment};
use crate::services::investment_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_investment).get(fetch_investments))
        .route("/:id", get(get_investment))
        .route("/:id", put(update_investment))
        .route("/:id", delete(delete_investment))
}

#[axum::debug_handler]
pub async fn create_investment(
    State(state): State<AppState>,
    Json(data): Json<CreateInvestment>,
) -> Result<(StatusCode, Json<Investment>), AppError> {
    info!("POST /investments - Creating new investment");
    let investment = investment_service::create(&state.store, data).map_err(|e| {
        error!("Failed to create investment: {}", e);
        e
    })?;
    Ok((StatusCode::CREATED, Json(investment)))
}

pub async fn fetch_investments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Investment>>, AppError> {
    info!("GET /investments - Fetching all investments");
    Ok(Json(investment_service::fetch_all(&state.store)))
}

pub async fn get_investment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Investment>, AppError> {
    info!("GET /investments/{} - Fetching investment", id);
    let investment = investment_service::fetch_one(&state.store, id).map_err(|e| {
        error!("Failed to fetch investment {}: {}", id, e);
        e
    })?;
    Ok(Json(investment))
}

pub async fn update_investment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateInvestment>,
) -> Result<Json<Investment>, AppError> {
    info!("PUT /investments/{} - Updating investment", id);
    let investment = investment_service::update(&state.store, id, data).map_err(|e| {
        error!("Failed to update investment {}: {}", id, e);
        e
    })?;
    Ok(Json(investment))
}

pub async fn delete_investment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, AppError> {
    info!("DELETE /investments/{} - Deleting investment and its sales data", id);
    investment_service::delete(&state.store, id).map_err(|e| {
        error!("Failed to delete investment {}: {}", id, e);
        e
    })?;
    Ok(Json(()))
}
