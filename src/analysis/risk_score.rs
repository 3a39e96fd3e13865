//! Attrition risk scoring.
//!
//! This module wires the factor rules, the ranker, the tier classifier and the
//! recommendation table into a single [`RiskAssessment`].

use tracing::debug;

use crate::config::RiskPolicy;
use crate::models::{EmployeeRecord, FactorContribution, RiskAssessment};

use super::factor_ranking::rank_factors;
use super::factors::evaluate_factors;
use super::recommendations::recommend_actions;
use super::risk_tier::classify_tier;

/// Upper bound of the risk score.
pub const MAX_RISK_SCORE: u32 = 100;

/// Sums contribution weights and clamps the total to [`MAX_RISK_SCORE`].
///
/// # Examples
///
/// ```
/// use attrition_engine::analysis::score_risk;
/// use attrition_engine::models::{FactorCategory, FactorContribution};
///
/// let factors = [
///     FactorContribution::new(FactorCategory::LowJobSatisfaction, 30),
///     FactorContribution::new(FactorCategory::FrequentOvertime, 20),
/// ];
/// assert_eq!(score_risk(&factors), 50);
/// ```
pub fn score_risk(factors: &[FactorContribution]) -> u32 {
    factors
        .iter()
        .fold(0u32, |total, f| total.saturating_add(f.weight))
        .min(MAX_RISK_SCORE)
}

/// Computes the full risk assessment for one employee.
///
/// Pure and deterministic: the same record and policy always yield the same
/// assessment.
pub fn assess_risk(record: &EmployeeRecord, policy: &RiskPolicy) -> RiskAssessment {
    let factors = evaluate_factors(record, policy);
    let risk_score = score_risk(&factors);
    let risk_tier = classify_tier(risk_score, &policy.tiers);
    let top_factors = rank_factors(factors, policy.limits.top_factors);
    let recommendations = recommend_actions(&top_factors);

    debug!(
        employee_id = %record.id,
        risk_score,
        risk_tier = %risk_tier,
        factors = top_factors.len(),
        "Assessed attrition risk"
    );

    RiskAssessment {
        risk_score,
        risk_tier,
        top_factors,
        recommendations,
    }
}
