/// ROI Calculation Accuracy Tests
///
/// Known-value checks for the reporting pipeline: amortized monthly
/// series, payback detection, sliding trend windows, and the
/// recommendation battery driven end to end by computed reports.
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use salesroi::models::{Investment, InvestmentStatus, Payback, Priority, SalesRecord, ToolCategory};
use salesroi::services::{roi, rules, trend};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn investment(cost: f64, implemented: NaiveDate, category: ToolCategory) -> Investment {
    Investment {
        id: Uuid::new_v4(),
        tool_name: "Acme Outreach".to_string(),
        cost,
        implementation_date: implemented,
        expected_benefits: String::new(),
        category,
        status: InvestmentStatus::Active,
        created_at: Utc::now(),
    }
}

fn record(investment_id: Uuid, day: NaiveDate, revenue: f64) -> SalesRecord {
    SalesRecord {
        id: Uuid::new_v4(),
        investment_id,
        date: day,
        revenue,
        deals_closed: 12,
        time_saved_hours: 30.0,
        conversion_rate: 30.0,
        created_at: Utc::now(),
    }
}

// ---------------------------------------------------------------------------
// Monthly Series
// ---------------------------------------------------------------------------

#[cfg(test)]
mod monthly_series {
    use super::*;

    #[test]
    fn test_series_spans_implementation_through_last_record() {
        let inv = investment(10_000.0, date(2024, 1, 1), ToolCategory::Email);
        let records = vec![
            record(inv.id, date(2024, 2, 1), 4000.0),
            record(inv.id, date(2024, 3, 1), 7000.0),
        ];

        let report = roi::compute_report(&inv, &records);
        let labels: Vec<&str> =
            report.monthly_series.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(labels, vec!["Jan 2024", "Feb 2024", "Mar 2024"]);
    }

    #[test]
    fn test_cost_amortized_evenly_with_known_roi_values() {
        let inv = investment(10_000.0, date(2024, 1, 1), ToolCategory::Email);
        let records = vec![
            record(inv.id, date(2024, 2, 1), 4000.0),
            record(inv.id, date(2024, 3, 1), 7000.0),
        ];

        let report = roi::compute_report(&inv, &records);
        // 10000 over 3 months
        assert!(report.monthly_series.iter().all(|p| p.cost == 3333.33));
        let rois: Vec<f64> = report.monthly_series.iter().map(|p| p.roi).collect();
        assert_eq!(rois, vec![-100.0, 20.0, 110.0]);
    }

    #[test]
    fn test_records_in_the_same_month_are_summed() {
        let inv = investment(3000.0, date(2024, 2, 1), ToolCategory::Email);
        let records = vec![
            record(inv.id, date(2024, 2, 5), 1000.0),
            record(inv.id, date(2024, 2, 25), 2000.0),
        ];

        let report = roi::compute_report(&inv, &records);
        assert_eq!(report.monthly_series.len(), 1);
        assert_eq!(report.monthly_series[0].revenue, 3000.0);
    }

    #[test]
    fn test_series_crosses_year_boundaries() {
        let inv = investment(3000.0, date(2024, 11, 15), ToolCategory::Email);
        let records = vec![record(inv.id, date(2025, 1, 10), 5000.0)];

        let report = roi::compute_report(&inv, &records);
        let labels: Vec<&str> =
            report.monthly_series.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(labels, vec!["Nov 2024", "Dec 2024", "Jan 2025"]);
    }
}

// ---------------------------------------------------------------------------
// Payback
// ---------------------------------------------------------------------------

#[cfg(test)]
mod payback {
    use super::*;

    #[test]
    fn test_cumulative_revenue_exactly_covering_cost_counts() {
        let inv = investment(1000.0, date(2024, 1, 1), ToolCategory::Email);
        let records = vec![
            record(inv.id, date(2024, 2, 1), 400.0),
            record(inv.id, date(2024, 3, 1), 600.0),
        ];

        let report = roi::compute_report(&inv, &records);
        assert_eq!(report.payback, Payback::Reached { months: 2 });
    }

    #[test]
    fn test_revenue_short_of_cost_never_reaches() {
        let inv = investment(1000.0, date(2024, 1, 1), ToolCategory::Email);
        let records = vec![record(inv.id, date(2024, 2, 1), 999.99)];

        let report = roi::compute_report(&inv, &records);
        assert_eq!(report.payback, Payback::NotReached);
    }

    #[test]
    fn test_zero_cost_payback_is_undefined() {
        let inv = investment(0.0, date(2024, 1, 1), ToolCategory::Email);
        let records = vec![record(inv.id, date(2024, 2, 1), 5000.0)];

        let report = roi::compute_report(&inv, &records);
        assert_eq!(report.payback, Payback::Undefined);
    }

    #[test]
    fn test_month_count_uses_month_end_clamping() {
        // Jan 31 -> Feb 28 is short of a full month, Jan 31 -> Feb 29 is one
        let inv = investment(100.0, date(2024, 1, 31), ToolCategory::Email);

        let early = vec![record(inv.id, date(2024, 2, 28), 100.0)];
        assert_eq!(
            roi::compute_report(&inv, &early).payback,
            Payback::Reached { months: 0 }
        );

        let on_time = vec![record(inv.id, date(2024, 2, 29), 100.0)];
        assert_eq!(
            roi::compute_report(&inv, &on_time).payback,
            Payback::Reached { months: 1 }
        );
    }
}

// ---------------------------------------------------------------------------
// Trend Windows
// ---------------------------------------------------------------------------

#[cfg(test)]
mod trend_windows {
    use super::*;

    #[test]
    fn test_short_series_reads_as_no_trend() {
        // five points cannot fill two disjoint windows of three
        let t = trend::sliding_trend(&[10.0, 12.0, 14.0, 16.0, 18.0]);
        assert_eq!(t.recent_avg, t.older_avg);
        assert_eq!(t.growth_ratio, 0.0);
    }

    #[test]
    fn test_six_points_compare_first_and_last_windows() {
        let t = trend::sliding_trend(&[10.0, 10.0, 10.0, 20.0, 20.0, 20.0]);
        assert_eq!(t.older_avg, 10.0);
        assert_eq!(t.recent_avg, 20.0);
        assert_eq!(t.growth_ratio, 1.0);
    }

    #[test]
    fn test_middle_values_do_not_contribute() {
        let t = trend::sliding_trend(&[10.0, 10.0, 10.0, 99.0, 20.0, 20.0, 20.0]);
        assert_eq!(t.older_avg, 10.0);
        assert_eq!(t.recent_avg, 20.0);
        assert_eq!(t.growth_ratio, 1.0);
    }
}

// ---------------------------------------------------------------------------
// Recommendation Pipeline
// ---------------------------------------------------------------------------

#[cfg(test)]
mod recommendation_pipeline {
    use super::*;

    #[test]
    fn test_struggling_investment_yields_high_priority_actions() {
        let inv = investment(50_000.0, date(2024, 1, 1), ToolCategory::Crm);
        let records: Vec<SalesRecord> = (0..6)
            .map(|i| {
                let mut r = record(inv.id, date(2024, 1 + i, 1), 500.0);
                r.conversion_rate = 8.0;
                r.time_saved_hours = 5.0;
                r.deals_closed = 2;
                r
            })
            .collect();

        let report = roi::compute_report(&inv, &records);
        let recs = rules::generate(&report, &inv, &records);

        assert!(!recs.is_empty());
        assert_eq!(recs[0].priority, Priority::High);
        let titles: Vec<&str> = recs.iter().map(|r| r.title.as_str()).collect();
        assert!(titles.contains(&"Low ROI Alert: Optimize Tool Usage"));
        assert!(titles.contains(&"High Cost-to-Revenue Ratio: Optimize Spending"));
        assert!(titles.contains(&"Low Conversion Rate: Optimize Sales Funnel"));
    }

    #[test]
    fn test_healthy_investment_yields_only_soft_suggestions() {
        let inv = investment(3000.0, date(2024, 1, 1), ToolCategory::Email);
        let revenues = [2000.0, 2000.0, 2000.0, 3000.0, 3000.0, 3000.0];
        let records: Vec<SalesRecord> = revenues
            .iter()
            .enumerate()
            .map(|(i, &rev)| {
                let mut r = record(inv.id, date(2024, 2 + i as u32, 1), rev);
                r.time_saved_hours = 45.0;
                r
            })
            .collect();

        let report = roi::compute_report(&inv, &records);
        assert_eq!(report.roi_percentage, 400.0);
        assert_eq!(report.payback, Payback::Reached { months: 2 });

        let recs = rules::generate(&report, &inv, &records);
        assert_eq!(recs.len(), 2);
        assert!(recs.iter().all(|r| r.priority == Priority::Low));
        assert_eq!(recs[0].title, "Excellent Time Savings: Reinvest in Growth");
        assert_eq!(recs[1].title, "Strong Growth: Maintain Momentum");
    }

    #[test]
    fn test_every_recommendation_carries_actionable_content() {
        let inv = investment(50_000.0, date(2024, 1, 1), ToolCategory::Crm);
        let records: Vec<SalesRecord> = (0..6)
            .map(|i| record(inv.id, date(2024, 1 + i, 1), 500.0))
            .collect();

        let report = roi::compute_report(&inv, &records);
        for rec in rules::generate(&report, &inv, &records) {
            assert!(!rec.title.is_empty());
            assert!(!rec.description.is_empty());
            assert!(!rec.potential_impact.is_empty());
            assert_eq!(rec.action_items.len(), 4);
            assert!(rec.estimated_roi_increase > 0.0);
        }
    }
}
