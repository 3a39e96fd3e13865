//! Ranking of triggered factors.

use crate::models::FactorContribution;

/// Sorts contributions by weight, descending, and keeps the first `limit`.
///
/// The sort is stable: equal weights keep their rule-evaluation order.
///
/// # Examples
///
/// ```
/// use attrition_engine::analysis::rank_factors;
/// use attrition_engine::models::{FactorCategory, FactorContribution};
///
/// let ranked = rank_factors(
///     vec![
///         FactorContribution::new(FactorCategory::NoRecentTraining, 7),
///         FactorContribution::new(FactorCategory::FrequentOvertime, 20),
///     ],
///     5,
/// );
/// assert_eq!(ranked[0].category, FactorCategory::FrequentOvertime);
/// ```
pub fn rank_factors(mut factors: Vec<FactorContribution>, limit: usize) -> Vec<FactorContribution> {
    factors.sort_by(|a, b| b.weight.cmp(&a.weight));
    factors.truncate(limit);
    factors
}
