use chrono::Utc;
use uuid::Uuid;

use crate::models::{
    Effort, Investment, Payback, Priority, Recommendation, RecommendationCategory, RoiReport,
    SalesRecord, ToolCategory,
};
use crate::services::{prioritizer, roi, trend};

/// Everything a rule may examine. `records` belong to the investment and
/// are sorted by date ascending.
pub struct RuleInput<'a> {
    pub report: &'a RoiReport,
    pub investment: &'a Investment,
    pub records: &'a [SalesRecord],
}

pub type Rule = fn(&RuleInput) -> Vec<Recommendation>;

/// Fixed evaluation order; prioritization breaks ties by this order
pub const RULE_BATTERY: [Rule; 5] = [
    roi_performance,
    conversion_rates,
    time_savings,
    cost_efficiency,
    revenue_growth,
];

/// Run every rule in battery order
pub fn evaluate(input: &RuleInput) -> Vec<Recommendation> {
    RULE_BATTERY.iter().flat_map(|rule| rule(input)).collect()
}

/// Evaluate the battery for one investment and rank the result.
/// Records belonging to other investments are ignored.
pub fn generate(
    report: &RoiReport,
    investment: &Investment,
    records: &[SalesRecord],
) -> Vec<Recommendation> {
    let mut related: Vec<SalesRecord> = records
        .iter()
        .filter(|r| r.investment_id == investment.id)
        .cloned()
        .collect();
    related.sort_by_key(|r| r.date);

    let input = RuleInput { report, investment, records: &related };
    prioritizer::rank(evaluate(&input))
}

fn recommendation(
    title: &str,
    description: String,
    priority: Priority,
    category: RecommendationCategory,
    potential_impact: &str,
    action_items: [&str; 4],
    estimated_roi_increase: f64,
    implementation_effort: Effort,
) -> Recommendation {
    Recommendation {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description,
        priority,
        category,
        potential_impact: potential_impact.to_string(),
        action_items: action_items.iter().map(|item| item.to_string()).collect(),
        estimated_roi_increase,
        implementation_effort,
        created_at: Utc::now(),
    }
}

/// Overall ROI level and payback speed
fn roi_performance(input: &RuleInput) -> Vec<Recommendation> {
    let report = input.report;
    let mut out = Vec::new();

    if report.roi_percentage < 50.0 {
        out.push(recommendation(
            "Low ROI Alert: Optimize Tool Usage",
            format!(
                "Your {} is showing ROI of {:.1}%, which is below the 50% threshold. \
                 Consider reviewing implementation strategy and team training.",
                input.investment.tool_name, report.roi_percentage
            ),
            Priority::High,
            RecommendationCategory::Efficiency,
            "Potential to increase ROI by 30-50% through better utilization",
            [
                "Conduct team training session on advanced features",
                "Review current workflows and identify bottlenecks",
                "Set up automation rules to maximize efficiency",
                "Benchmark against industry best practices",
            ],
            35.0,
            Effort::Medium,
        ));
    }

    if let Payback::Reached { months } = report.payback {
        if months > 12 {
            out.push(recommendation(
                "Extended Payback Period: Accelerate Returns",
                format!(
                    "Payback period of {} months is longer than optimal. \
                     Focus on quick wins to accelerate ROI.",
                    months
                ),
                Priority::High,
                RecommendationCategory::RevenueIncrease,
                "Reduce payback period by 3-6 months",
                [
                    "Identify high-value use cases for immediate implementation",
                    "Focus on features with direct revenue impact",
                    "Increase adoption rate across sales team",
                    "Optimize pricing strategy for better margins",
                ],
                25.0,
                Effort::Medium,
            ));
        }
    }

    if report.roi_percentage > 100.0 && report.roi_percentage < 200.0 {
        out.push(recommendation(
            "Strong ROI: Scale Your Success",
            format!(
                "With {:.1}% ROI, you're seeing good returns. Consider scaling to maximize impact.",
                report.roi_percentage
            ),
            Priority::Medium,
            RecommendationCategory::RevenueIncrease,
            "Potential to double current returns through scaling",
            [
                "Expand tool usage to additional team members",
                "Explore advanced features and integrations",
                "Document and share best practices across organization",
                "Consider upgrading to premium tier for enhanced capabilities",
            ],
            40.0,
            Effort::Low,
        ));
    }

    out
}

/// Average conversion level plus the recent-window trend
fn conversion_rates(input: &RuleInput) -> Vec<Recommendation> {
    if input.records.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();
    let avg = roi::average_conversion_rate(input.records);

    if avg < 15.0 {
        out.push(recommendation(
            "Low Conversion Rate: Optimize Sales Funnel",
            format!(
                "Average conversion rate of {:.1}% is below industry standard. \
                 Focus on lead qualification and nurturing.",
                avg
            ),
            Priority::High,
            RecommendationCategory::RevenueIncrease,
            "Increase conversion rate by 5-10 percentage points",
            [
                "Implement lead scoring to prioritize high-quality prospects",
                "Set up automated nurture campaigns",
                "Analyze lost deals to identify common objections",
                "Create targeted content for different buyer personas",
            ],
            45.0,
            Effort::High,
        ));
    }

    if (15.0..25.0).contains(&avg) {
        out.push(recommendation(
            "Good Conversion Rate: Fine-tune for Excellence",
            format!(
                "Your {:.1}% conversion rate is solid. Small optimizations can push you \
                 to top-tier performance.",
                avg
            ),
            Priority::Medium,
            RecommendationCategory::Efficiency,
            "Achieve 25%+ conversion rate through targeted improvements",
            [
                "A/B test email templates and call scripts",
                "Implement real-time lead alerts for hot prospects",
                "Optimize follow-up timing and frequency",
                "Leverage AI insights for personalized outreach",
            ],
            20.0,
            Effort::Medium,
        ));
    }

    let rates: Vec<f64> = input.records.iter().map(|r| r.conversion_rate).collect();
    let conversion_trend = trend::sliding_trend(&rates);
    if conversion_trend.growth_ratio < -0.10 {
        out.push(recommendation(
            "Declining Conversion Trend: Immediate Action Required",
            format!(
                "Conversion rate has dropped from {:.1}% to {:.1}%. \
                 Investigate and address root causes.",
                conversion_trend.older_avg, conversion_trend.recent_avg
            ),
            Priority::High,
            RecommendationCategory::Efficiency,
            "Recover lost conversion rate and prevent further decline",
            [
                "Review recent changes to sales process or messaging",
                "Analyze competitor activities and market conditions",
                "Conduct team feedback session to identify challenges",
                "Refresh training on objection handling",
            ],
            30.0,
            Effort::Medium,
        ));
    }

    out
}

/// Hours saved per reporting period
fn time_savings(input: &RuleInput) -> Vec<Recommendation> {
    if input.records.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();
    let avg_per_month = roi::total_time_saved(input.records) / input.records.len() as f64;

    if avg_per_month < 20.0 {
        out.push(recommendation(
            "Low Time Savings: Maximize Automation",
            format!(
                "Only {:.1} hours saved per month. Your {} has untapped automation potential.",
                avg_per_month, input.investment.tool_name
            ),
            Priority::Medium,
            RecommendationCategory::Automation,
            "Save an additional 15-25 hours per month through automation",
            [
                "Audit manual tasks that can be automated",
                "Set up workflow automation for repetitive processes",
                "Enable email templates and sequences",
                "Integrate with other tools to eliminate data entry",
            ],
            28.0,
            Effort::Medium,
        ));
    }

    if avg_per_month >= 40.0 {
        out.push(recommendation(
            "Excellent Time Savings: Reinvest in Growth",
            format!(
                "You're saving {:.1} hours per month. Reinvest this time into \
                 high-value activities.",
                avg_per_month
            ),
            Priority::Low,
            RecommendationCategory::Efficiency,
            "Convert saved time into additional revenue opportunities",
            [
                "Allocate saved time to strategic account planning",
                "Increase focus on relationship building with key accounts",
                "Invest time in professional development and skill building",
                "Explore new market segments or product lines",
            ],
            15.0,
            Effort::Low,
        ));
    }

    out
}

/// Spend relative to the revenue it generates
fn cost_efficiency(input: &RuleInput) -> Vec<Recommendation> {
    let report = input.report;
    let mut out = Vec::new();

    let cost_ratio = if report.total_revenue > 0.0 {
        report.total_investment / report.total_revenue * 100.0
    } else {
        100.0
    };

    if cost_ratio > 30.0 {
        out.push(recommendation(
            "High Cost-to-Revenue Ratio: Optimize Spending",
            format!(
                "Your cost represents {:.1}% of revenue. Look for ways to reduce costs \
                 or increase revenue efficiency.",
                cost_ratio
            ),
            Priority::High,
            RecommendationCategory::CostReduction,
            "Reduce cost-to-revenue ratio by 10-15 percentage points",
            [
                "Review subscription tier and downgrade if features are unused",
                "Negotiate better pricing with vendor based on usage",
                "Consolidate tools to eliminate redundant subscriptions",
                "Optimize user licenses and remove inactive accounts",
            ],
            22.0,
            Effort::Low,
        ));
    }

    if input.investment.category == ToolCategory::Crm && report.roi_percentage < 80.0 {
        out.push(recommendation(
            "CRM Optimization: Enhance Data Quality",
            "CRM systems typically deliver 100%+ ROI. Focus on data quality and adoption \
             to maximize value."
                .to_string(),
            Priority::Medium,
            RecommendationCategory::Efficiency,
            "Improve ROI by 25-40% through better CRM utilization",
            [
                "Implement data hygiene protocols and regular cleanup",
                "Set up mandatory field requirements for deal stages",
                "Create custom dashboards for sales team visibility",
                "Integrate with marketing automation for lead tracking",
            ],
            32.0,
            Effort::Medium,
        ));
    }

    out
}

/// Revenue trajectory and deal volume
fn revenue_growth(input: &RuleInput) -> Vec<Recommendation> {
    if input.records.len() < 2 {
        return Vec::new();
    }

    let mut out = Vec::new();
    let revenues: Vec<f64> = input.records.iter().map(|r| r.revenue).collect();
    let revenue_trend = trend::sliding_trend(&revenues);
    let growth_pct = revenue_trend.growth_ratio * 100.0;

    if revenue_trend.growth_ratio < 0.10 {
        out.push(recommendation(
            "Stagnant Revenue Growth: Accelerate Sales Velocity",
            format!(
                "Revenue growth of {:.1}% is below target. Focus on increasing deal size \
                 and velocity.",
                growth_pct
            ),
            Priority::High,
            RecommendationCategory::RevenueIncrease,
            "Achieve 20%+ monthly revenue growth",
            [
                "Implement upselling and cross-selling strategies",
                "Shorten sales cycle through better qualification",
                "Expand into new market segments",
                "Launch targeted campaigns for high-value accounts",
            ],
            38.0,
            Effort::High,
        ));
    }

    if revenue_trend.growth_ratio > 0.30 {
        out.push(recommendation(
            "Strong Growth: Maintain Momentum",
            format!(
                "Excellent {:.1}% revenue growth. Document what's working and scale \
                 successful strategies.",
                growth_pct
            ),
            Priority::Low,
            RecommendationCategory::Efficiency,
            "Sustain high growth rate and prevent plateau",
            [
                "Document winning strategies and create playbooks",
                "Share best practices across entire sales team",
                "Invest in tools and resources that support growth",
                "Monitor key metrics to catch early warning signs",
            ],
            12.0,
            Effort::Low,
        ));
    }

    let avg_deals = roi::total_deals_closed(input.records) as f64 / input.records.len() as f64;
    if avg_deals < 10.0 {
        out.push(recommendation(
            "Low Deal Volume: Increase Pipeline Activity",
            format!(
                "Average of {:.1} deals per month. Focus on top-of-funnel activities \
                 to increase volume.",
                avg_deals
            ),
            Priority::Medium,
            RecommendationCategory::RevenueIncrease,
            "Double deal volume through increased prospecting",
            [
                "Increase daily prospecting activities",
                "Leverage AI tools for lead generation",
                "Expand outreach channels (email, social, phone)",
                "Partner with marketing for lead generation campaigns",
            ],
            35.0,
            Effort::Medium,
        ));
    }

    out
}
