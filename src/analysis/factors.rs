//! Risk factor evaluation.
//!
//! Each rule is checked independently against the record; any number of them
//! may fire. The output keeps rule order, which the ranker relies on to break
//! ties between equal weights.

use rust_decimal::Decimal;

use crate::config::RiskPolicy;
use crate::models::{EmployeeRecord, FactorCategory, FactorContribution, scale_at_most};

/// Highest survey score that still counts as dissatisfied.
pub const DISSATISFIED_CEILING: i32 = 2;

/// Commute distance (km) above which the commute counts as long.
pub const LONG_COMMUTE_KM: u32 = 20;

/// Tenure (years) below which an employee counts as new.
pub const LOW_TENURE_YEARS: u32 = 2;

/// Points per step below 3 on job satisfaction.
const JOB_SATISFACTION_STEP: u32 = 15;

/// Points per step below 3 on work-life balance.
const WORK_LIFE_BALANCE_STEP: u32 = 12;

const OVERTIME_WEIGHT: u32 = 20;
const LONG_COMMUTE_WEIGHT: u32 = 10;
const LOW_TENURE_WEIGHT: u32 = 18;
const LOW_ENVIRONMENT_WEIGHT: u32 = 8;
const BELOW_EXPECTED_INCOME_WEIGHT: u32 = 12;
const NO_TRAINING_WEIGHT: u32 = 7;

/// Evaluates every risk rule against an employee record.
///
/// | Rule | Weight |
/// |---|---|
/// | job satisfaction ≤ 2 | (3 − score) × 15 |
/// | work-life balance ≤ 2 | (3 − score) × 12 |
/// | overtime | 20 |
/// | commute > 20 km | 10 |
/// | tenure < 2 years | 18 |
/// | environment satisfaction ≤ 2 | 8 |
/// | income < age × expected income per year of age | 12 |
/// | no training last year | 7 |
///
/// Survey scores outside 1-4 never trigger.
///
/// # Examples
///
/// ```
/// use attrition_engine::analysis::evaluate_factors;
/// use attrition_engine::config::RiskPolicy;
/// use attrition_engine::models::{EmployeeRecord, FactorCategory};
///
/// let record: EmployeeRecord = serde_json::from_value(serde_json::json!({
///     "id": "EMP0001", "age": 40, "yearsAtCompany": 10, "monthlyIncome": 20000,
///     "distanceFromHome": 5, "jobSatisfaction": 4, "workLifeBalance": 4,
///     "environmentSatisfaction": 4, "relationshipSatisfaction": 4, "overTime": true,
///     "education": 3, "attrition": false, "performanceRating": 3,
///     "numCompaniesWorked": 1, "trainingTimesLastYear": 3
/// })).unwrap();
///
/// let factors = evaluate_factors(&record, &RiskPolicy::default());
/// assert_eq!(factors.len(), 1);
/// assert_eq!(factors[0].category, FactorCategory::FrequentOvertime);
/// assert_eq!(factors[0].weight, 20);
/// ```
pub fn evaluate_factors(record: &EmployeeRecord, policy: &RiskPolicy) -> Vec<FactorContribution> {
    let mut factors = Vec::new();

    if scale_at_most(record.job_satisfaction, DISSATISFIED_CEILING) {
        factors.push(FactorContribution::new(
            FactorCategory::LowJobSatisfaction,
            steps_below_neutral(record.job_satisfaction) * JOB_SATISFACTION_STEP,
        ));
    }

    if scale_at_most(record.work_life_balance, DISSATISFIED_CEILING) {
        factors.push(FactorContribution::new(
            FactorCategory::PoorWorkLifeBalance,
            steps_below_neutral(record.work_life_balance) * WORK_LIFE_BALANCE_STEP,
        ));
    }

    if record.over_time {
        factors.push(FactorContribution::new(
            FactorCategory::FrequentOvertime,
            OVERTIME_WEIGHT,
        ));
    }

    if record.distance_from_home > LONG_COMMUTE_KM {
        factors.push(FactorContribution::new(
            FactorCategory::LongCommuteDistance,
            LONG_COMMUTE_WEIGHT,
        ));
    }

    if record.years_at_company < LOW_TENURE_YEARS {
        factors.push(FactorContribution::new(
            FactorCategory::LowTenure,
            LOW_TENURE_WEIGHT,
        ));
    }

    if scale_at_most(record.environment_satisfaction, DISSATISFIED_CEILING) {
        factors.push(FactorContribution::new(
            FactorCategory::LowEnvironmentSatisfaction,
            LOW_ENVIRONMENT_WEIGHT,
        ));
    }

    // An expectation too large to represent is never met.
    let below_expected = Decimal::from(record.age)
        .checked_mul(policy.income.expected_per_year_of_age)
        .is_none_or(|expected| record.monthly_income < expected);
    if below_expected {
        factors.push(FactorContribution::new(
            FactorCategory::BelowExpectedIncome,
            BELOW_EXPECTED_INCOME_WEIGHT,
        ));
    }

    if record.training_times_last_year == 0 {
        factors.push(FactorContribution::new(
            FactorCategory::NoRecentTraining,
            NO_TRAINING_WEIGHT,
        ));
    }

    factors
}

/// Distance of an in-range dissatisfied score from the neutral point 3.
fn steps_below_neutral(score: i32) -> u32 {
    (3 - score).max(0) as u32
}
