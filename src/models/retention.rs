//! Retention plan models.

use serde::{Deserialize, Serialize};

/// Kind of intervention a retention strategy represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyCategory {
    /// Salary review.
    Compensation,
    /// Overtime reduction and flexible schedules.
    #[serde(rename = "Work-Life Balance")]
    WorkLifeBalance,
    /// Development plan and promotion path.
    #[serde(rename = "Career Development")]
    CareerDevelopment,
    /// Recognition and rewards.
    Recognition,
    /// Training and certification.
    #[serde(rename = "Professional Development")]
    ProfessionalDevelopment,
    /// Role adjustment.
    #[serde(rename = "Job Redesign")]
    JobRedesign,
    /// Team and manager relationships.
    #[serde(rename = "Team Building")]
    TeamBuilding,
}

/// Three-point scale used for strategy impact and cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// High.
    High,
    /// Medium.
    Medium,
    /// Low.
    Low,
}

/// Urgency of acting on an at-risk employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Act immediately.
    Urgent,
    /// Act soon.
    High,
    /// Monitor and plan.
    Medium,
}

/// One recommended intervention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionStrategy {
    /// Kind of intervention.
    pub category: StrategyCategory,
    /// What to do.
    pub action: String,
    /// When to do it.
    pub timeline: String,
    /// Expected effect on retention.
    pub impact: Level,
    /// Expected cost to the organisation.
    pub cost: Level,
}

/// Prioritised interventions for one at-risk employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionPlan {
    /// Identifier of the employee.
    pub employee_id: String,
    /// Risk score the plan was built from.
    pub risk_score: u32,
    /// Urgency bucket.
    pub priority: Priority,
    /// Selected strategies in generation order.
    pub strategies: Vec<RetentionStrategy>,
    /// Estimated chance of retention, capped.
    pub estimated_effectiveness: u32,
}
