//! Actions for triggered risk factors.

use crate::models::{FactorCategory, FactorContribution};

/// Candidate actions in output order, keyed by the factor that unlocks them.
///
/// Commute distance and environment satisfaction have no dedicated action.
pub const RISK_ACTIONS: [(FactorCategory, &str); 6] = [
    (
        FactorCategory::LowJobSatisfaction,
        "Schedule one-on-one meetings to discuss job satisfaction and career goals",
    ),
    (
        FactorCategory::PoorWorkLifeBalance,
        "Review workload and consider flexible working arrangements",
    ),
    (
        FactorCategory::FrequentOvertime,
        "Reduce overtime requirements and improve team capacity",
    ),
    (
        FactorCategory::BelowExpectedIncome,
        "Review compensation package and market benchmarks",
    ),
    (
        FactorCategory::NoRecentTraining,
        "Provide professional development and training opportunities",
    ),
    (
        FactorCategory::LowTenure,
        "Implement stronger onboarding and mentorship programs",
    ),
];

/// Builds the ordered action list for a set of top factors.
///
/// Only factors present in `top_factors` contribute, so a factor ranked
/// outside the top list gets no action.
pub fn recommend_actions(top_factors: &[FactorContribution]) -> Vec<String> {
    RISK_ACTIONS
        .iter()
        .filter(|(category, _)| top_factors.iter().any(|f| f.category == *category))
        .map(|(_, action)| action.to_string())
        .collect()
}
