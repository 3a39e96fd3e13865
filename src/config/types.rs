//! Policy types for attrition scoring.
//!
//! [`RiskPolicy`] collects every threshold the engine compares against so the
//! scorer, planner and alerting all read one set of boundaries. The income
//! references are tunable heuristics carried over from the source dataset,
//! not derived quantities.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Score boundaries between risk tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    /// Lowest score classified as Medium.
    pub medium_from: u32,
    /// Lowest score classified as High.
    pub high_from: u32,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            medium_from: 30,
            high_from: 60,
        }
    }
}

/// Score boundaries between plan and alert priorities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityThresholds {
    /// Lowest score with `high` priority.
    pub high_from: u32,
    /// Lowest score with `urgent` priority.
    pub urgent_from: u32,
}

impl Default for PriorityThresholds {
    fn default() -> Self {
        Self {
            high_from: 60,
            urgent_from: 75,
        }
    }
}

/// Income reference values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomeReference {
    /// Expected monthly income per year of age.
    pub expected_per_year_of_age: Decimal,
    /// Reference market average monthly income.
    pub market_average: Decimal,
    /// Fraction of the market average below which pay counts as below market.
    pub below_market_ratio: Decimal,
    /// Fraction of the market average below which a highly educated employee counts as overqualified.
    pub overqualified_ratio: Decimal,
}

impl Default for IncomeReference {
    fn default() -> Self {
        Self {
            expected_per_year_of_age: Decimal::new(400, 0),
            market_average: Decimal::new(6500, 0),
            below_market_ratio: Decimal::new(8, 1),
            overqualified_ratio: Decimal::new(9, 1),
        }
    }
}

impl IncomeReference {
    /// Income below which pay is treated as below market.
    pub fn below_market_line(&self) -> Decimal {
        self.market_average * self.below_market_ratio
    }

    /// Income below which a highly educated employee is treated as overqualified.
    pub fn overqualified_line(&self) -> Decimal {
        self.market_average * self.overqualified_ratio
    }
}

/// Caps on the size of engine outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputLimits {
    /// Maximum number of top factors in an assessment.
    pub top_factors: usize,
    /// Maximum number of reasons in a leave analysis.
    pub leave_reasons: usize,
    /// Maximum number of strategies in a retention plan.
    pub strategies: usize,
    /// Upper bound on estimated plan effectiveness.
    pub effectiveness_cap: u32,
}

impl Default for OutputLimits {
    fn default() -> Self {
        Self {
            top_factors: 5,
            leave_reasons: 10,
            strategies: 5,
            effectiveness_cap: 85,
        }
    }
}

/// The complete scoring policy.
///
/// # Example
///
/// ```
/// use attrition_engine::config::RiskPolicy;
///
/// let policy = RiskPolicy::default();
/// assert_eq!(policy.tiers.high_from, 60);
/// assert_eq!(policy.plan_threshold, 50);
/// assert!(policy.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskPolicy {
    /// Risk tier boundaries.
    pub tiers: TierThresholds,
    /// Priority boundaries.
    pub priority: PriorityThresholds,
    /// Minimum score for a retention plan or alert.
    pub plan_threshold: u32,
    /// Income reference values.
    pub income: IncomeReference,
    /// Output size limits.
    pub limits: OutputLimits,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            tiers: TierThresholds::default(),
            priority: PriorityThresholds::default(),
            plan_threshold: 50,
            income: IncomeReference::default(),
            limits: OutputLimits::default(),
        }
    }
}

impl RiskPolicy {
    /// Checks that the boundaries are ordered and the limits usable.
    pub fn validate(&self) -> EngineResult<()> {
        if self.tiers.medium_from == 0 || self.tiers.medium_from >= self.tiers.high_from {
            return Err(invalid(
                "tiers.medium_from",
                "must be positive and below tiers.high_from",
            ));
        }
        if self.tiers.high_from > 100 {
            return Err(invalid("tiers.high_from", "must not exceed 100"));
        }
        if self.priority.high_from > self.priority.urgent_from {
            return Err(invalid(
                "priority.high_from",
                "must not exceed priority.urgent_from",
            ));
        }
        if self.priority.urgent_from > 100 {
            return Err(invalid("priority.urgent_from", "must not exceed 100"));
        }
        if self.plan_threshold > self.priority.high_from {
            return Err(invalid(
                "plan_threshold",
                "must not exceed priority.high_from",
            ));
        }
        if self.income.market_average <= Decimal::ZERO {
            return Err(invalid("income.market_average", "must be positive"));
        }
        if self.income.expected_per_year_of_age < Decimal::ZERO {
            return Err(invalid(
                "income.expected_per_year_of_age",
                "must not be negative",
            ));
        }
        for (field, ratio) in [
            ("income.below_market_ratio", self.income.below_market_ratio),
            ("income.overqualified_ratio", self.income.overqualified_ratio),
        ] {
            if ratio <= Decimal::ZERO || ratio > Decimal::ONE {
                return Err(invalid(field, "must be in (0, 1]"));
            }
        }
        for (field, limit) in [
            ("limits.top_factors", self.limits.top_factors),
            ("limits.leave_reasons", self.limits.leave_reasons),
            ("limits.strategies", self.limits.strategies),
        ] {
            if limit == 0 {
                return Err(invalid(field, "must be at least 1"));
            }
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidPolicy {
        field: field.to_string(),
        message: message.to_string(),
    }
}
