//! Risk alert models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{FactorContribution, Priority, RiskTier};

/// Workflow state of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    /// Not yet looked at.
    New,
    /// Seen by a manager.
    Viewed,
    /// A retention action was recorded.
    ActionTaken,
}

/// Notification raised for an employee whose score crosses the plan threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAlert {
    /// Alert identifier (the employee id; one open alert per employee).
    pub id: String,
    /// Identifier of the at-risk employee.
    pub employee_id: String,
    /// Score that raised the alert.
    pub risk_score: u32,
    /// Tier of that score.
    pub risk_tier: RiskTier,
    /// Urgency bucket.
    pub priority: Priority,
    /// When the alert was raised.
    pub timestamp: DateTime<Utc>,
    /// Workflow state.
    pub status: AlertStatus,
    /// Factors that drove the score.
    pub top_factors: Vec<FactorContribution>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_status_serialization() {
        assert_eq!(serde_json::to_string(&AlertStatus::New).unwrap(), "\"new\"");
        assert_eq!(
            serde_json::to_string(&AlertStatus::ActionTaken).unwrap(),
            "\"action_taken\""
        );
    }
}
