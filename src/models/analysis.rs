use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Investment, Payback, Recommendation, RoiReport, SalesRecord};

/// Stored result of one analysis run for one investment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSnapshot {
    pub id: Uuid,
    pub investment_id: Uuid,
    pub report: RoiReport,
    pub recommendations: Vec<Recommendation>,
    pub created_at: DateTime<Utc>,
}

/// Inclusive date window applied to sales records before analysis
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub investments: Vec<Investment>,
    pub sales_data: Vec<SalesRecord>,
    pub date_range: Option<DateRange>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendRequest {
    pub report: RoiReport,
    pub investment: Investment,
    pub sales_data: Vec<SalesRecord>,
}

fn default_history_limit() -> usize {
    50
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryQuery {
    #[serde(default = "default_history_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

/// Condensed view of one snapshot for the history listing
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub investment_id: Uuid,
    pub date: DateTime<Utc>,
    pub total_investment: f64,
    pub total_revenue: f64,
    pub roi_percentage: f64,
    pub payback: Payback,
    pub recommendations_count: usize,
    pub high_priority_recommendations: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistorySummary {
    pub total_analyses: usize,
    pub average_roi: f64,
    /// Mean over snapshots whose payback was actually reached
    pub average_payback_months: f64,
    pub total_revenue: f64,
    pub high_priority_recommendations: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Pagination {
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub has_more: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryPage {
    pub analyses: Vec<HistoryEntry>,
    pub summary: HistorySummary,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct RecommendationsByCategory {
    pub cost_reduction: Vec<Recommendation>,
    pub revenue_increase: Vec<Recommendation>,
    pub efficiency: Vec<Recommendation>,
    pub automation: Vec<Recommendation>,
}

/// Top recommendations from the most recent analysis snapshot
#[derive(Debug, Clone, Serialize)]
pub struct LatestRecommendations {
    pub recommendations: Vec<Recommendation>,
    pub by_category: RecommendationsByCategory,
    pub analysis_id: Option<Uuid>,
    pub analysis_date: Option<DateTime<Utc>>,
    pub total_count: usize,
}
