//! Workforce summary statistics.
//!
//! Aggregates assessments and departure analyses over a whole workforce for
//! dashboard-style reporting. Every rate is a percentage rounded to one
//! decimal place, and every rate or average over an empty set is 0.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::batch::{analyze_departures, assess_batch};
use crate::config::RiskPolicy;
use crate::models::{EmployeeRecord, LeaveCategory, RiskTier};

/// Number of departure categories reported in a summary.
pub const TOP_DEPARTURE_CATEGORIES: usize = 5;

/// Headcount and attrition for one department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStats {
    /// Department name.
    pub department: String,
    /// Employees in the department.
    pub total: usize,
    /// Employees who left.
    pub attrited: usize,
    /// Share who left, in percent.
    pub attrition_rate: f64,
}

/// Number of current employees per risk tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierDistribution {
    /// Low tier count.
    pub low: usize,
    /// Medium tier count.
    pub medium: usize,
    /// High tier count.
    pub high: usize,
}

impl TierDistribution {
    fn record(&mut self, tier: RiskTier) {
        match tier {
            RiskTier::Low => self.low += 1,
            RiskTier::Medium => self.medium += 1,
            RiskTier::High => self.high += 1,
        }
    }
}

/// How often a category appears among departure reasons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// Departure category.
    pub category: LeaveCategory,
    /// Number of departed employees citing it.
    pub count: usize,
}

/// Dashboard view of a workforce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkforceSummary {
    /// All records, current and departed.
    pub total_employees: usize,
    /// Records still employed.
    pub active_employees: usize,
    /// Records who left.
    pub attrited_employees: usize,
    /// Share who left, in percent.
    pub attrition_rate: f64,
    /// Per-department breakdown, sorted by department name.
    pub departments: Vec<DepartmentStats>,
    /// Risk tiers of the active employees.
    pub risk_distribution: TierDistribution,
    /// Mean risk score of the active employees.
    pub average_risk_score: f64,
    /// Most cited departure categories, most frequent first.
    pub top_departure_categories: Vec<CategoryCount>,
    /// Share of departures with at least one preventable reason, in percent.
    pub preventable_departure_rate: f64,
}

/// `part / whole` as a percentage with one decimal, or 0 when `whole` is 0.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round_one_decimal(part as f64 / whole as f64 * 100.0)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn department_breakdown(records: &[EmployeeRecord]) -> Vec<DepartmentStats> {
    let mut counts: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for record in records {
        let entry = counts.entry(record.department.as_str()).or_default();
        entry.0 += 1;
        if record.attrition {
            entry.1 += 1;
        }
    }

    counts
        .into_iter()
        .map(|(department, (total, attrited))| DepartmentStats {
            department: department.to_string(),
            total,
            attrited,
            attrition_rate: percentage(attrited, total),
        })
        .collect()
}

/// Summarizes a workforce.
///
/// Risk figures cover active employees; departure figures cover the rest.
pub fn summarize(records: &[EmployeeRecord], policy: &RiskPolicy) -> WorkforceSummary {
    let (departed, active): (Vec<EmployeeRecord>, Vec<EmployeeRecord>) =
        records.iter().cloned().partition(|record| record.attrition);

    let assessments = assess_batch(&active, policy);
    let mut risk_distribution = TierDistribution::default();
    for assessment in &assessments {
        risk_distribution.record(assessment.risk_tier);
    }
    let average_risk_score = if assessments.is_empty() {
        0.0
    } else {
        let total: u64 = assessments.iter().map(|a| u64::from(a.risk_score)).sum();
        round_one_decimal(total as f64 / assessments.len() as f64)
    };

    let analyses = analyze_departures(&departed, policy);
    let mut category_counts: HashMap<LeaveCategory, usize> = HashMap::new();
    for analysis in &analyses {
        for reason in &analysis.reasons {
            *category_counts.entry(reason.category).or_default() += 1;
        }
    }
    let mut top_departure_categories: Vec<CategoryCount> = category_counts
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect();
    top_departure_categories.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.category.cmp(&b.category))
    });
    top_departure_categories.truncate(TOP_DEPARTURE_CATEGORIES);

    let preventable = analyses.iter().filter(|a| a.preventable).count();

    WorkforceSummary {
        total_employees: records.len(),
        active_employees: active.len(),
        attrited_employees: departed.len(),
        attrition_rate: percentage(departed.len(), records.len()),
        departments: department_breakdown(records),
        risk_distribution,
        average_risk_score,
        top_departure_categories,
        preventable_departure_rate: percentage(preventable, analyses.len()),
    }
}
