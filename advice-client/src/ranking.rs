//! Ordering of recommendations for display.
//!
//! Priority first (critical before low), then effort (easy before
//! difficult, missing counts as moderate), then cost (cheapest first,
//! missing counts as free). Fully tied items keep their original order.

use crate::types::{difficulty_rank, Recommendation};
use std::cmp::Ordering;

/// Compare two recommendations by priority, difficulty and cost
pub fn compare_recommendations(a: &Recommendation, b: &Recommendation) -> Ordering {
    a.priority
        .rank()
        .cmp(&b.priority.rank())
        .then_with(|| {
            difficulty_rank(a.implementation_difficulty.as_ref())
                .cmp(&difficulty_rank(b.implementation_difficulty.as_ref()))
        })
        .then_with(|| {
            let cost_a = a.estimated_cost.unwrap_or(0.0);
            let cost_b = b.estimated_cost.unwrap_or(0.0);
            cost_a.partial_cmp(&cost_b).unwrap_or(Ordering::Equal)
        })
}

/// Return a sorted copy; the input is left untouched
pub fn sort_recommendations(recommendations: &[Recommendation]) -> Vec<Recommendation> {
    let mut sorted = recommendations.to_vec();
    // sort_by is stable, which keeps fully tied items in input order
    sorted.sort_by(compare_recommendations);
    sorted
}
