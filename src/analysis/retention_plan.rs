//! Retention strategy planning for at-risk employees.

use tracing::debug;

use crate::config::RiskPolicy;
use crate::models::{
    EmployeeRecord, Level, RetentionPlan, RetentionStrategy, RiskAssessment, StrategyCategory,
    scale_at_most,
};

use super::factors::DISSATISFIED_CEILING;
use super::risk_tier::classify_priority;

/// Tenure (years) from which a career development conversation is due.
const CAREER_REVIEW_TENURE_YEARS: u32 = 5;

/// Performance rating from which recognition is offered. Ratings above the
/// survey scale still count.
const RECOGNITION_RATING_FLOOR: i32 = 3;

const HIGH_IMPACT_POINTS: u32 = 25;
const MEDIUM_IMPACT_POINTS: u32 = 15;

fn strategy(
    category: StrategyCategory,
    action: &str,
    timeline: &str,
    impact: Level,
    cost: Level,
) -> RetentionStrategy {
    RetentionStrategy {
        category,
        action: action.to_string(),
        timeline: timeline.to_string(),
        impact,
        cost,
    }
}

/// Lists every strategy whose trigger holds, in generation order.
///
/// Professional development is always included.
pub fn candidate_strategies(
    record: &EmployeeRecord,
    assessment: &RiskAssessment,
) -> Vec<RetentionStrategy> {
    let mut strategies = Vec::new();

    if assessment.mentions_compensation() {
        strategies.push(strategy(
            StrategyCategory::Compensation,
            "Salary review and adjustment (+10-15% market rate comparison)",
            "Immediate (1-2 weeks)",
            Level::High,
            Level::High,
        ));
    }

    if record.over_time || scale_at_most(record.work_life_balance, DISSATISFIED_CEILING) {
        strategies.push(strategy(
            StrategyCategory::WorkLifeBalance,
            "Reduce overtime, implement flexible schedule, remote work options",
            "Short-term (2-4 weeks)",
            Level::High,
            Level::Low,
        ));
    }

    if record.training_times_last_year == 0
        || record.years_at_company >= CAREER_REVIEW_TENURE_YEARS
    {
        strategies.push(strategy(
            StrategyCategory::CareerDevelopment,
            "Create personalized development plan, assign mentor, discuss promotion path",
            "Medium-term (1-3 months)",
            Level::High,
            Level::Medium,
        ));
    }

    if record.performance_rating >= RECOGNITION_RATING_FLOOR {
        strategies.push(strategy(
            StrategyCategory::Recognition,
            "Employee recognition program, spot bonuses, public acknowledgment",
            "Immediate (1 week)",
            Level::Medium,
            Level::Low,
        ));
    }

    strategies.push(strategy(
        StrategyCategory::ProfessionalDevelopment,
        "Enroll in training programs, conference attendance, certification support",
        "Medium-term (2-3 months)",
        Level::Medium,
        Level::Medium,
    ));

    if scale_at_most(record.job_satisfaction, DISSATISFIED_CEILING) {
        strategies.push(strategy(
            StrategyCategory::JobRedesign,
            "One-on-one discussion, role adjustment, task variety increase",
            "Short-term (2-4 weeks)",
            Level::High,
            Level::Low,
        ));
    }

    if scale_at_most(record.relationship_satisfaction, DISSATISFIED_CEILING) {
        strategies.push(strategy(
            StrategyCategory::TeamBuilding,
            "Team building activities, manager coaching, conflict resolution",
            "Short-term (1 month)",
            Level::Medium,
            Level::Low,
        ));
    }

    strategies
}

/// Estimates the retention chance of a set of strategies, capped at `cap`.
pub fn estimate_effectiveness(strategies: &[RetentionStrategy], cap: u32) -> u32 {
    strategies
        .iter()
        .map(|s| match s.impact {
            Level::High => HIGH_IMPACT_POINTS,
            Level::Medium => MEDIUM_IMPACT_POINTS,
            Level::Low => 0,
        })
        .sum::<u32>()
        .min(cap)
}

/// Builds a retention plan, or `None` when the score is below the plan threshold.
///
/// Strategies are cut to the policy limit before the effectiveness estimate,
/// so only the selected strategies count.
pub fn plan_retention(
    record: &EmployeeRecord,
    assessment: &RiskAssessment,
    policy: &RiskPolicy,
) -> Option<RetentionPlan> {
    if assessment.risk_score < policy.plan_threshold {
        return None;
    }

    let mut strategies = candidate_strategies(record, assessment);
    strategies.truncate(policy.limits.strategies);

    let priority = classify_priority(assessment.risk_score, &policy.priority);
    let estimated_effectiveness =
        estimate_effectiveness(&strategies, policy.limits.effectiveness_cap);

    debug!(
        employee_id = %record.id,
        risk_score = assessment.risk_score,
        strategies = strategies.len(),
        estimated_effectiveness,
        "Planned retention"
    );

    Some(RetentionPlan {
        employee_id: record.id.clone(),
        risk_score: assessment.risk_score,
        priority,
        strategies,
        estimated_effectiveness,
    })
}
