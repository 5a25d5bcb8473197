use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes::{analysis, health, history, investments, recommendations, sales_data};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/investments", investments::router())
        .nest("/api/sales-data", sales_data::router())
        .nest("/api/roi", analysis::router())
        .nest("/api/recommendations", recommendations::router())
        .nest("/api/history", history::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
