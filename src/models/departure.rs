//! Departure ("why they left") models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category a leave reason belongs to.
///
/// Serializes to the display name, e.g. `"Work-Life Balance"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LeaveCategory {
    /// Dissatisfaction with the role.
    #[serde(rename = "Job Satisfaction")]
    JobSatisfaction,
    /// Poor work-life balance.
    #[serde(rename = "Work-Life Balance")]
    WorkLifeBalance,
    /// Sustained overtime.
    #[serde(rename = "Workload")]
    Workload,
    /// Culture, tools or physical environment.
    #[serde(rename = "Work Environment")]
    WorkEnvironment,
    /// Pay below the market reference.
    #[serde(rename = "Compensation")]
    Compensation,
    /// Long tenure without salary growth.
    #[serde(rename = "Career Growth")]
    CareerGrowth,
    /// Long commute.
    #[serde(rename = "Commute")]
    Commute,
    /// Frequent job changes.
    #[serde(rename = "Career Progression")]
    CareerProgression,
    /// Team or manager relationships.
    #[serde(rename = "Workplace Relationships")]
    WorkplaceRelationships,
    /// No training.
    #[serde(rename = "Professional Development")]
    ProfessionalDevelopment,
    /// Low performance rating.
    #[serde(rename = "Performance")]
    Performance,
    /// Life changes outside work.
    #[serde(rename = "Personal Circumstances")]
    PersonalCircumstances,
    /// Education not reflected in pay.
    #[serde(rename = "Education Mismatch")]
    EducationMismatch,
    /// Young employee early in their career.
    #[serde(rename = "Early Career Exploration")]
    EarlyCareerExploration,
}

impl LeaveCategory {
    /// Returns the display name of the category.
    pub fn label(self) -> &'static str {
        match self {
            LeaveCategory::JobSatisfaction => "Job Satisfaction",
            LeaveCategory::WorkLifeBalance => "Work-Life Balance",
            LeaveCategory::Workload => "Workload",
            LeaveCategory::WorkEnvironment => "Work Environment",
            LeaveCategory::Compensation => "Compensation",
            LeaveCategory::CareerGrowth => "Career Growth",
            LeaveCategory::Commute => "Commute",
            LeaveCategory::CareerProgression => "Career Progression",
            LeaveCategory::WorkplaceRelationships => "Workplace Relationships",
            LeaveCategory::ProfessionalDevelopment => "Professional Development",
            LeaveCategory::Performance => "Performance",
            LeaveCategory::PersonalCircumstances => "Personal Circumstances",
            LeaveCategory::EducationMismatch => "Education Mismatch",
            LeaveCategory::EarlyCareerExploration => "Early Career Exploration",
        }
    }

    /// Returns true if organisational action could have addressed this category.
    pub fn is_preventable(self) -> bool {
        matches!(
            self,
            LeaveCategory::JobSatisfaction
                | LeaveCategory::WorkLifeBalance
                | LeaveCategory::Compensation
                | LeaveCategory::CareerGrowth
                | LeaveCategory::WorkEnvironment
        )
    }
}

impl fmt::Display for LeaveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Severity of a single leave reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasonSeverity {
    /// Severe on its own.
    Critical,
    /// Significant.
    Major,
    /// Contributing.
    Moderate,
    /// Background.
    Minor,
}

/// Aggregate severity of a departure case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallSeverity {
    /// Several critical or major reasons.
    Critical,
    /// At least one critical or two major reasons.
    High,
    /// Three or more reasons of lesser severity.
    Medium,
    /// Few, minor reasons.
    Low,
}

/// One reason an employee likely left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveReason {
    /// Category of the reason.
    pub category: LeaveCategory,
    /// Formatted headline, e.g. `"Low Job Satisfaction (1/4)"`.
    pub reason: String,
    /// Severity of this reason.
    pub severity: ReasonSeverity,
    /// Fixed weight used for ranking.
    pub impact: u32,
    /// Longer explanation for reports.
    pub description: String,
    /// Icon identifier for the presentation layer.
    pub icon: String,
}

/// Aggregated explanation of a departure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveAnalysis {
    /// Identifier of the departed employee.
    pub employee_id: String,
    /// Headline of the highest-impact reason.
    pub primary_reason: String,
    /// Highest-impact reasons, descending.
    pub reasons: Vec<LeaveReason>,
    /// Aggregate severity.
    pub overall_severity: OverallSeverity,
    /// Whether any reason was addressable by the organisation.
    pub preventable: bool,
    /// Ordered, deduplicated actions.
    pub recommendations: Vec<String>,
    /// One-paragraph narrative.
    pub summary: String,
}
