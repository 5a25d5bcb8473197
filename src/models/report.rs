use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether cumulative revenue has covered the investment cost
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Payback {
    /// Cost was covered; months counted from the implementation date
    Reached { months: u32 },
    /// Revenue observed so far never reaches the cost
    NotReached,
    /// Zero-cost investment, payback is not a meaningful question
    Undefined,
}

impl Payback {
    pub fn months(&self) -> Option<u32> {
        match self {
            Payback::Reached { months } => Some(*months),
            Payback::NotReached | Payback::Undefined => None,
        }
    }
}

/// One calendar month of the amortized ROI series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyPoint {
    /// Month label, e.g. "Feb 2024"
    pub month: String,
    pub roi: f64,
    pub revenue: f64,
    /// Straight-line share of the investment cost for this month
    pub cost: f64,
}

/// Computed ROI summary for a single investment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiReport {
    pub investment_id: Uuid,
    pub total_investment: f64,
    pub total_revenue: f64,
    pub net_profit: f64,
    pub roi_percentage: f64,
    pub payback: Payback,
    pub monthly_series: Vec<MonthlyPoint>,
    pub generated_at: DateTime<Utc>,
}
