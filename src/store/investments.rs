use uuid::Uuid;

use super::DataStore;
use crate::errors::AppError;
use crate::models::{Investment, UpdateInvestment};

/// All investments, most recently created first
pub fn all(store: &DataStore) -> Vec<Investment> {
    let mut investments = store.read(|data| data.investments.clone());
    investments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    investments
}

pub fn find(store: &DataStore, id: Uuid) -> Option<Investment> {
    store.read(|data| data.investments.iter().find(|i| i.id == id).cloned())
}

pub fn exists(store: &DataStore, id: Uuid) -> bool {
    store.read(|data| data.investments.iter().any(|i| i.id == id))
}

pub fn insert(store: &DataStore, investment: Investment) -> Result<Investment, AppError> {
    store.write(|data| {
        data.investments.push(investment.clone());
        investment
    })
}

/// Replace the mutable fields; returns None when the id is unknown
pub fn update(
    store: &DataStore,
    id: Uuid,
    changes: UpdateInvestment,
) -> Result<Option<Investment>, AppError> {
    store.write(|data| {
        let investment = data.investments.iter_mut().find(|i| i.id == id)?;
        investment.tool_name = changes.tool_name;
        investment.cost = changes.cost;
        investment.implementation_date = changes.implementation_date;
        investment.expected_benefits = changes.expected_benefits;
        investment.category = changes.category;
        investment.status = changes.status;
        Some(investment.clone())
    })
}

/// Remove the investment and cascade to its sales records
pub fn remove(store: &DataStore, id: Uuid) -> Result<bool, AppError> {
    store.write(|data| {
        let before = data.investments.len();
        data.investments.retain(|i| i.id != id);
        let removed = data.investments.len() < before;
        if removed {
            data.sales.retain(|s| s.investment_id != id);
        }
        removed
    })
}
