//! Batch evaluation over many employee records.
//!
//! Every record is evaluated independently, so batches fan out across the
//! rayon thread pool. Indexed parallel iterators collect in input order, which
//! keeps `assess_batch` aligned with its input; the plan and alert batches are
//! then sorted by risk score, highest first (ties keep input order).

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use tracing::debug;

use crate::analysis::{analyze_departure, assess_risk, build_alert, plan_retention};
use crate::config::RiskPolicy;
use crate::models::{EmployeeRecord, LeaveAnalysis, RetentionPlan, RiskAlert, RiskAssessment};
use crate::repository::AlertStatusRepository;

/// Assesses every record; output position `i` belongs to input record `i`.
pub fn assess_batch(records: &[EmployeeRecord], policy: &RiskPolicy) -> Vec<RiskAssessment> {
    let assessments: Vec<RiskAssessment> = records
        .par_iter()
        .map(|record| assess_risk(record, policy))
        .collect();

    debug!(records = records.len(), "Assessed batch");
    assessments
}

/// Analyzes the departures of every attrited record, in input order.
///
/// Records still employed are skipped.
pub fn analyze_departures(records: &[EmployeeRecord], policy: &RiskPolicy) -> Vec<LeaveAnalysis> {
    let analyses: Vec<LeaveAnalysis> = records
        .par_iter()
        .filter(|record| record.attrition)
        .map(|record| analyze_departure(record, policy))
        .collect();

    debug!(
        records = records.len(),
        departed = analyses.len(),
        "Analyzed departures"
    );
    analyses
}

/// Plans retention for every record at or above the plan threshold.
///
/// Records below the threshold produce no plan and are dropped.
pub fn plan_retention_batch(records: &[EmployeeRecord], policy: &RiskPolicy) -> Vec<RetentionPlan> {
    let mut plans: Vec<RetentionPlan> = records
        .par_iter()
        .filter_map(|record| {
            let assessment = assess_risk(record, policy);
            plan_retention(record, &assessment, policy)
        })
        .collect();

    plans.sort_by(|a, b| b.risk_score.cmp(&a.risk_score));

    debug!(
        records = records.len(),
        plans = plans.len(),
        "Planned retention batch"
    );
    plans
}

/// Raises an alert for every record at or above the plan threshold.
///
/// All alerts share `timestamp`. Each carries the status recorded in
/// `statuses`, or stays new when none was recorded.
pub fn build_alerts(
    records: &[EmployeeRecord],
    policy: &RiskPolicy,
    statuses: &dyn AlertStatusRepository,
    timestamp: DateTime<Utc>,
) -> Vec<RiskAlert> {
    let mut alerts: Vec<RiskAlert> = records
        .par_iter()
        .filter_map(|record| {
            let assessment = assess_risk(record, policy);
            let mut alert = build_alert(record, &assessment, policy, timestamp)?;
            if let Some(status) = statuses.status(&alert.id) {
                alert.status = status;
            }
            Some(alert)
        })
        .collect();

    alerts.sort_by(|a, b| b.risk_score.cmp(&a.risk_score));

    debug!(
        records = records.len(),
        alerts = alerts.len(),
        "Built alerts"
    );
    alerts
}
