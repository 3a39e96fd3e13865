//! Alert construction for employees whose risk crosses the plan threshold.

use chrono::{DateTime, Utc};

use crate::config::RiskPolicy;
use crate::models::{AlertStatus, EmployeeRecord, RiskAlert, RiskAssessment};

use super::risk_tier::classify_priority;

/// Builds a new alert, or `None` when the score is below the plan threshold.
///
/// The timestamp is supplied by the caller so the builder stays deterministic.
pub fn build_alert(
    record: &EmployeeRecord,
    assessment: &RiskAssessment,
    policy: &RiskPolicy,
    timestamp: DateTime<Utc>,
) -> Option<RiskAlert> {
    if assessment.risk_score < policy.plan_threshold {
        return None;
    }

    Some(RiskAlert {
        id: record.id.clone(),
        employee_id: record.id.clone(),
        risk_score: assessment.risk_score,
        risk_tier: assessment.risk_tier,
        priority: classify_priority(assessment.risk_score, &policy.priority),
        timestamp,
        status: AlertStatus::New,
        top_factors: assessment.top_factors.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::assess_risk;
    use crate::models::{Priority, RiskTier};
    use crate::test_support::{content_employee, overloaded_employee};
    use chrono::TimeZone;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_alert_for_high_risk_employee() {
        let policy = RiskPolicy::default();
        let record = overloaded_employee();
        let assessment = assess_risk(&record, &policy);

        let alert = build_alert(&record, &assessment, &policy, noon()).unwrap();

        assert_eq!(alert.id, "EMP0200");
        assert_eq!(alert.employee_id, "EMP0200");
        assert_eq!(alert.risk_score, 100);
        assert_eq!(alert.risk_tier, RiskTier::High);
        assert_eq!(alert.priority, Priority::Urgent);
        assert_eq!(alert.status, AlertStatus::New);
        assert_eq!(alert.timestamp, noon());
        assert_eq!(alert.top_factors, assessment.top_factors);
    }

    #[test]
    fn test_no_alert_below_threshold() {
        let policy = RiskPolicy::default();
        let record = content_employee();
        let assessment = assess_risk(&record, &policy);

        assert!(build_alert(&record, &assessment, &policy, noon()).is_none());
    }
}
