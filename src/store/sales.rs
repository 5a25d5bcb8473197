use uuid::Uuid;

use super::DataStore;
use crate::errors::AppError;
use crate::models::{SalesQuery, SalesRecord};

/// Records matching the filter, newest date first
pub fn query(store: &DataStore, filter: &SalesQuery) -> Vec<SalesRecord> {
    let mut records: Vec<SalesRecord> = store.read(|data| {
        data.sales
            .iter()
            .filter(|r| {
                filter.investment_id.map_or(true, |id| r.investment_id == id)
                    && filter.start_date.map_or(true, |start| r.date >= start)
                    && filter.end_date.map_or(true, |end| r.date <= end)
            })
            .cloned()
            .collect()
    });
    records.sort_by(|a, b| b.date.cmp(&a.date));
    records
}

pub fn for_investment(store: &DataStore, investment_id: Uuid) -> Vec<SalesRecord> {
    store.read(|data| {
        data.sales
            .iter()
            .filter(|r| r.investment_id == investment_id)
            .cloned()
            .collect()
    })
}

pub fn all(store: &DataStore) -> Vec<SalesRecord> {
    store.read(|data| data.sales.clone())
}

pub fn insert(store: &DataStore, record: SalesRecord) -> Result<SalesRecord, AppError> {
    store.write(|data| {
        data.sales.push(record.clone());
        record
    })
}
