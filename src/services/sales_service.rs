use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{CreateSalesRecord, SalesQuery, SalesRecord};
use crate::store::{self, DataStore};

pub fn create(store: &DataStore, input: CreateSalesRecord) -> Result<SalesRecord, AppError> {
    if !input.revenue.is_finite() || input.revenue < 0.0 {
        return Err(AppError::Validation("Revenue must be a non-negative number".into()));
    }
    if !input.time_saved_hours.is_finite() || input.time_saved_hours < 0.0 {
        return Err(AppError::Validation("Time saved must be a non-negative number".into()));
    }
    if !input.conversion_rate.is_finite() || !(0.0..=100.0).contains(&input.conversion_rate) {
        return Err(AppError::Validation("Conversion rate must be between 0 and 100".into()));
    }
    if !store::investments::exists(store, input.investment_id) {
        return Err(AppError::NotFound("Investment not found".to_string()));
    }

    let record = SalesRecord {
        id: Uuid::new_v4(),
        investment_id: input.investment_id,
        date: input.date,
        revenue: input.revenue,
        deals_closed: input.deals_closed,
        time_saved_hours: input.time_saved_hours,
        conversion_rate: input.conversion_rate,
        created_at: Utc::now(),
    };
    store::sales::insert(store, record)
}

pub fn fetch(store: &DataStore, query: &SalesQuery) -> Vec<SalesRecord> {
    store::sales::query(store, query)
}
