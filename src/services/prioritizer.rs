use std::cmp::Ordering;

use crate::models::Recommendation;

/// Order recommendations by urgency: priority rank descending, then
/// estimated ROI increase descending. The sort is stable, so entries that
/// tie on both keys keep their rule-battery order.
pub fn rank(mut recommendations: Vec<Recommendation>) -> Vec<Recommendation> {
    recommendations.sort_by(|a, b| {
        b.priority.rank().cmp(&a.priority.rank()).then_with(|| {
            b.estimated_roi_increase
                .partial_cmp(&a.estimated_roi_increase)
                .unwrap_or(Ordering::Equal)
        })
    });
    recommendations
}
