mod analysis;
mod investment;
mod recommendation;
mod report;
mod sales;

pub use analysis::{
    AnalysisSnapshot, AnalyzeRequest, DateRange, HistoryEntry, HistoryPage, HistoryQuery,
    HistorySummary, LatestRecommendations, Pagination, RecommendRequest,
    RecommendationsByCategory,
};
pub use investment::{CreateInvestment, Investment, InvestmentStatus, ToolCategory, UpdateInvestment};
pub use recommendation::{Effort, Priority, Recommendation, RecommendationCategory};
pub use report::{MonthlyPoint, Payback, RoiReport};
pub use sales::{CreateSalesRecord, SalesQuery, SalesRecord};
