//! Risk assessment models.
//!
//! This module contains the [`RiskAssessment`] produced by the scoring path
//! together with the factor categories and contributions it is built from.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named condition that contributes weight to an attrition risk score.
///
/// Serializes to the human-readable factor name, e.g. `"Frequent Overtime"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactorCategory {
    /// Job satisfaction at or below 2.
    #[serde(rename = "Low Job Satisfaction")]
    LowJobSatisfaction,
    /// Work-life balance at or below 2.
    #[serde(rename = "Poor Work-Life Balance")]
    PoorWorkLifeBalance,
    /// Regular overtime.
    #[serde(rename = "Frequent Overtime")]
    FrequentOvertime,
    /// Commute longer than 20 km.
    #[serde(rename = "Long Commute Distance")]
    LongCommuteDistance,
    /// Fewer than two years at the company.
    #[serde(rename = "Low Tenure")]
    LowTenure,
    /// Environment satisfaction at or below 2.
    #[serde(rename = "Low Environment Satisfaction")]
    LowEnvironmentSatisfaction,
    /// Income below the age-based expectation.
    #[serde(rename = "Below Expected Income")]
    BelowExpectedIncome,
    /// No training sessions in the last year.
    #[serde(rename = "No Recent Training")]
    NoRecentTraining,
}

impl FactorCategory {
    /// Returns the display name of the factor.
    pub fn label(self) -> &'static str {
        match self {
            FactorCategory::LowJobSatisfaction => "Low Job Satisfaction",
            FactorCategory::PoorWorkLifeBalance => "Poor Work-Life Balance",
            FactorCategory::FrequentOvertime => "Frequent Overtime",
            FactorCategory::LongCommuteDistance => "Long Commute Distance",
            FactorCategory::LowTenure => "Low Tenure",
            FactorCategory::LowEnvironmentSatisfaction => "Low Environment Satisfaction",
            FactorCategory::BelowExpectedIncome => "Below Expected Income",
            FactorCategory::NoRecentTraining => "No Recent Training",
        }
    }

    /// Returns true for factors that concern pay.
    pub fn is_compensation(self) -> bool {
        matches!(self, FactorCategory::BelowExpectedIncome)
    }
}

impl fmt::Display for FactorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One triggered factor and the weight it adds to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorContribution {
    /// The factor that fired.
    #[serde(rename = "factor")]
    pub category: FactorCategory,
    /// The weight it contributes to the raw score.
    #[serde(rename = "impact")]
    pub weight: u32,
}

impl FactorContribution {
    /// Creates a new contribution.
    pub fn new(category: FactorCategory, weight: u32) -> Self {
        Self { category, weight }
    }
}

/// Coarse attrition risk bucket derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    /// Score below the medium boundary.
    Low,
    /// Score between the medium and high boundaries.
    Medium,
    /// Score at or above the high boundary.
    High,
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        };
        f.write_str(label)
    }
}

/// The result of scoring one employee.
///
/// # Example
///
/// ```
/// use attrition_engine::models::{FactorCategory, FactorContribution, RiskAssessment, RiskTier};
///
/// let assessment = RiskAssessment {
///     risk_score: 38,
///     risk_tier: RiskTier::Medium,
///     top_factors: vec![
///         FactorContribution::new(FactorCategory::FrequentOvertime, 20),
///         FactorContribution::new(FactorCategory::LowTenure, 18),
///     ],
///     recommendations: vec![],
/// };
/// let json = serde_json::to_value(&assessment).unwrap();
/// assert_eq!(json["riskTier"], "Medium");
/// assert_eq!(json["topFactors"][0]["factor"], "Frequent Overtime");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Bounded risk score in `0..=100`.
    pub risk_score: u32,
    /// Tier the score falls into.
    pub risk_tier: RiskTier,
    /// Highest-weighted factors, descending.
    pub top_factors: Vec<FactorContribution>,
    /// Ordered actions for the triggered factors.
    pub recommendations: Vec<String>,
}

impl RiskAssessment {
    /// Returns true if any of the top factors concerns pay.
    pub fn mentions_compensation(&self) -> bool {
        self.top_factors.iter().any(|f| f.category.is_compensation())
    }
}
