use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{
    AnalysisSnapshot, AnalyzeRequest, HistoryEntry, HistoryPage, HistoryQuery, HistorySummary,
    Investment, LatestRecommendations, Pagination, Priority, Recommendation,
    RecommendRequest, RecommendationCategory, RecommendationsByCategory, RoiReport, SalesRecord,
};
use crate::services::{prioritizer, roi, rules};
use crate::store::{self, DataStore};

/// How many entries the latest-recommendations view returns
const TOP_RECOMMENDATIONS: usize = 10;

/// Compute a report per investment, record a snapshot per report, and
/// return the reports. Investments without matching sales data are
/// skipped; an empty result is a success, not an error.
pub fn analyze(store: &DataStore, request: AnalyzeRequest) -> Result<Vec<RoiReport>, AppError> {
    if request.investments.is_empty() {
        return Err(AppError::Validation(
            "Investments array is required and must not be empty".into(),
        ));
    }
    validate_investments(&request.investments)?;
    validate_records(&request.sales_data)?;

    let pool: Vec<SalesRecord> = match &request.date_range {
        Some(range) => request
            .sales_data
            .iter()
            .filter(|r| range.contains(r.date))
            .cloned()
            .collect(),
        None => request.sales_data,
    };

    let mut reports = Vec::new();
    for investment in &request.investments {
        let related: Vec<SalesRecord> = pool
            .iter()
            .filter(|r| r.investment_id == investment.id)
            .cloned()
            .collect();
        if related.is_empty() {
            continue;
        }

        let report = roi::compute_report(investment, &related);
        let recommendations = rules::generate(&report, investment, &related);
        store::snapshots::record(
            store,
            AnalysisSnapshot {
                id: Uuid::new_v4(),
                investment_id: investment.id,
                report: report.clone(),
                recommendations,
                created_at: Utc::now(),
            },
        )?;
        reports.push(report);
    }

    info!("Analyzed ROI for {} investment(s)", reports.len());
    Ok(reports)
}

/// Rule evaluation over caller-supplied data; nothing is stored
pub fn recommend(request: RecommendRequest) -> Result<Vec<Recommendation>, AppError> {
    validate_report(&request.report)?;
    validate_investments(std::slice::from_ref(&request.investment))?;
    validate_records(&request.sales_data)?;

    Ok(rules::generate(&request.report, &request.investment, &request.sales_data))
}

/// Top recommendations from the most recent snapshot, grouped by category
pub fn latest_recommendations(store: &DataStore) -> LatestRecommendations {
    let snapshot = match store::snapshots::latest(store) {
        Some(snapshot) => snapshot,
        None => {
            return LatestRecommendations {
                recommendations: Vec::new(),
                by_category: RecommendationsByCategory::default(),
                analysis_id: None,
                analysis_date: None,
                total_count: 0,
            }
        }
    };

    let total_count = snapshot.recommendations.len();
    let top: Vec<Recommendation> = prioritizer::rank(snapshot.recommendations)
        .into_iter()
        .take(TOP_RECOMMENDATIONS)
        .collect();

    let mut by_category = RecommendationsByCategory::default();
    for rec in &top {
        match rec.category {
            RecommendationCategory::CostReduction => by_category.cost_reduction.push(rec.clone()),
            RecommendationCategory::RevenueIncrease => {
                by_category.revenue_increase.push(rec.clone())
            }
            RecommendationCategory::Efficiency => by_category.efficiency.push(rec.clone()),
            RecommendationCategory::Automation => by_category.automation.push(rec.clone()),
        }
    }

    LatestRecommendations {
        recommendations: top,
        by_category,
        analysis_id: Some(snapshot.id),
        analysis_date: Some(snapshot.created_at),
        total_count,
    }
}

/// Snapshot history, newest first, with aggregate summary and pagination
pub fn history(store: &DataStore, query: &HistoryQuery) -> HistoryPage {
    let snapshots = store::snapshots::all(store);
    let total = snapshots.len();
    let summary = summarize(&snapshots);

    let analyses: Vec<HistoryEntry> = snapshots
        .iter()
        .skip(query.offset)
        .take(query.limit)
        .map(history_entry)
        .collect();

    HistoryPage {
        analyses,
        summary,
        pagination: Pagination {
            total,
            limit: query.limit,
            offset: query.offset,
            // saturate: limit and offset come straight off the query string
            has_more: query.offset.saturating_add(query.limit) < total,
        },
    }
}

fn history_entry(snapshot: &AnalysisSnapshot) -> HistoryEntry {
    HistoryEntry {
        id: snapshot.id,
        investment_id: snapshot.investment_id,
        date: snapshot.created_at,
        total_investment: snapshot.report.total_investment,
        total_revenue: snapshot.report.total_revenue,
        roi_percentage: snapshot.report.roi_percentage,
        payback: snapshot.report.payback,
        recommendations_count: snapshot.recommendations.len(),
        high_priority_recommendations: snapshot
            .recommendations
            .iter()
            .filter(|r| r.priority == Priority::High)
            .count(),
    }
}

fn summarize(snapshots: &[AnalysisSnapshot]) -> HistorySummary {
    let total = snapshots.len();
    let average_roi = if total > 0 {
        snapshots.iter().map(|s| s.report.roi_percentage).sum::<f64>() / total as f64
    } else {
        0.0
    };

    // only snapshots whose payback was actually reached carry a month count
    let reached: Vec<u32> = snapshots.iter().filter_map(|s| s.report.payback.months()).collect();
    let average_payback_months = if reached.is_empty() {
        0.0
    } else {
        reached.iter().map(|&m| f64::from(m)).sum::<f64>() / reached.len() as f64
    };

    HistorySummary {
        total_analyses: total,
        average_roi: roi::round2(average_roi),
        average_payback_months: roi::round2(average_payback_months),
        total_revenue: roi::round2(snapshots.iter().map(|s| s.report.total_revenue).sum()),
        high_priority_recommendations: snapshots
            .iter()
            .flat_map(|s| &s.recommendations)
            .filter(|r| r.priority == Priority::High)
            .count(),
    }
}

fn validate_investments(investments: &[Investment]) -> Result<(), AppError> {
    for investment in investments {
        if !investment.cost.is_finite() || investment.cost < 0.0 {
            return Err(AppError::Validation(format!(
                "Investment '{}' has an invalid cost",
                investment.tool_name
            )));
        }
    }
    Ok(())
}

fn validate_records(records: &[SalesRecord]) -> Result<(), AppError> {
    for record in records {
        if !record.revenue.is_finite() || record.revenue < 0.0 {
            return Err(AppError::Validation("Sales record has an invalid revenue".into()));
        }
        if !record.time_saved_hours.is_finite() || record.time_saved_hours < 0.0 {
            return Err(AppError::Validation("Sales record has invalid time saved".into()));
        }
        if !record.conversion_rate.is_finite()
            || !(0.0..=100.0).contains(&record.conversion_rate)
        {
            return Err(AppError::Validation(
                "Sales record conversion rate must be between 0 and 100".into(),
            ));
        }
    }
    Ok(())
}

fn validate_report(report: &RoiReport) -> Result<(), AppError> {
    let values = [
        report.total_investment,
        report.total_revenue,
        report.net_profit,
        report.roi_percentage,
    ];
    if values.iter().any(|v| !v.is_finite()) {
        return Err(AppError::Validation("Report contains non-finite numbers".into()));
    }
    Ok(())
}
