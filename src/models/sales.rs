use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One reporting period of sales outcomes attributed to an investment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesRecord {
    pub id: Uuid,
    pub investment_id: Uuid,
    pub date: NaiveDate,
    pub revenue: f64,
    pub deals_closed: u32,
    pub time_saved_hours: f64,
    /// Percentage in [0, 100]
    pub conversion_rate: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSalesRecord {
    pub investment_id: Uuid,
    pub date: NaiveDate,
    pub revenue: f64,
    pub deals_closed: u32,
    pub time_saved_hours: f64,
    pub conversion_rate: f64,
}

/// Query parameters for listing sales records
#[derive(Debug, Clone, Deserialize)]
pub struct SalesQuery {
    pub investment_id: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
