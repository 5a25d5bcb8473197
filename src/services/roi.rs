use chrono::Utc;

use crate::models::{Investment, MonthlyPoint, Payback, RoiReport, SalesRecord};
use crate::services::timeseries;

/// Round to 2 decimals; applied once, at the reporting boundary
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the full ROI report for one investment.
///
/// Records belonging to other investments are ignored. Total function:
/// zero cost, zero revenue and empty input all produce a well-defined
/// report instead of an error.
pub fn compute_report(investment: &Investment, records: &[SalesRecord]) -> RoiReport {
    let mut related: Vec<SalesRecord> = records
        .iter()
        .filter(|r| r.investment_id == investment.id)
        .cloned()
        .collect();
    related.sort_by_key(|r| r.date);

    let total_investment = investment.cost;
    let total_revenue: f64 = related.iter().map(|r| r.revenue).sum();
    let net_profit = total_revenue - total_investment;
    let roi_percentage = if total_investment > 0.0 {
        net_profit / total_investment * 100.0
    } else {
        0.0
    };

    RoiReport {
        investment_id: investment.id,
        total_investment: round2(total_investment),
        total_revenue: round2(total_revenue),
        net_profit: round2(net_profit),
        roi_percentage: round2(roi_percentage),
        payback: payback(investment, &related),
        monthly_series: monthly_series(investment, &related),
        generated_at: Utc::now(),
    }
}

/// Walk cumulative revenue in date order until it covers the cost
fn payback(investment: &Investment, sorted: &[SalesRecord]) -> Payback {
    if investment.cost <= 0.0 {
        return Payback::Undefined;
    }

    let mut cumulative = 0.0;
    for record in sorted {
        cumulative += record.revenue;
        if cumulative >= investment.cost {
            let months =
                timeseries::months_between(investment.implementation_date, record.date).max(0);
            return Payback::Reached { months: months as u32 };
        }
    }
    Payback::NotReached
}

/// Month-by-month ROI from the implementation month through the last
/// record's month, with the cost amortized evenly across the span
fn monthly_series(investment: &Investment, sorted: &[SalesRecord]) -> Vec<MonthlyPoint> {
    let last = match sorted.last() {
        Some(record) => record.date,
        None => return Vec::new(),
    };

    let months = timeseries::month_span(investment.implementation_date, last);
    let monthly_cost = investment.cost / months.len() as f64;
    let buckets = timeseries::bucket_monthly(&months, sorted);

    months
        .iter()
        .zip(buckets)
        .map(|(month, bucket)| {
            let revenue: f64 = bucket.iter().map(|r| r.revenue).sum();
            let roi = if monthly_cost > 0.0 {
                (revenue - monthly_cost) / monthly_cost * 100.0
            } else {
                0.0
            };
            MonthlyPoint {
                month: month.format("%b %Y").to_string(),
                roi: round2(roi),
                revenue: round2(revenue),
                cost: round2(monthly_cost),
            }
        })
        .collect()
}

// ============================================================================
// Aggregates consumed by the recommendation rules
// ============================================================================

pub fn average_conversion_rate(records: &[SalesRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    records.iter().map(|r| r.conversion_rate).sum::<f64>() / records.len() as f64
}

pub fn total_time_saved(records: &[SalesRecord]) -> f64 {
    records.iter().map(|r| r.time_saved_hours).sum()
}

pub fn total_deals_closed(records: &[SalesRecord]) -> u64 {
    records.iter().map(|r| u64::from(r.deals_closed)).sum()
}
