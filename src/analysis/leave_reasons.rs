//! Departure analysis ("why they left").
//!
//! Runs an independent rule table against an employee who has already left
//! and aggregates the triggered reasons into a [`LeaveAnalysis`]. Gating on
//! `attrition` is the caller's job; the analysis itself runs on any record.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::config::RiskPolicy;
use crate::models::{
    EDUCATION_MAX, EmployeeRecord, LeaveAnalysis, LeaveCategory, LeaveReason, OverallSeverity,
    ReasonSeverity, scale_at_most,
};

use super::factors::{DISSATISFIED_CEILING, LONG_COMMUTE_KM, LOW_TENURE_YEARS};

/// Primary reason reported when no rule fires.
pub const FALLBACK_PRIMARY_REASON: &str = "Multiple contributing factors";

/// Summary reported when no rule fires.
pub const INSUFFICIENT_DATA_SUMMARY: &str = "Insufficient data to determine specific reasons.";

/// Tenure (years) from which low pay reads as a stalled career.
const STAGNANT_TENURE_YEARS: u32 = 8;

/// Previous employers from which a history reads as high mobility.
const HIGH_MOBILITY_COMPANIES: u32 = 5;

/// Commute (km) above which a divorce is treated as a relocation pressure.
const RELOCATION_COMMUTE_KM: u32 = 15;

/// Education level from which pay is compared against the overqualified line.
const ADVANCED_EDUCATION: i32 = 4;

/// Age below which a short tenure reads as early-career exploration.
const EARLY_CAREER_AGE: u32 = 25;

/// Number of categories named in the summary.
const SUMMARY_CATEGORIES: usize = 3;

/// Departure actions in output order, keyed by the categories that unlock them.
const DEPARTURE_ACTIONS: [(&[LeaveCategory], &str); 6] = [
    (
        &[LeaveCategory::Compensation],
        "Review and adjust compensation to market standards",
    ),
    (
        &[LeaveCategory::CareerGrowth],
        "Implement clear career progression pathways and regular promotion reviews",
    ),
    (
        &[LeaveCategory::WorkLifeBalance, LeaveCategory::Workload],
        "Reduce overtime requirements and improve work-life balance policies",
    ),
    (
        &[LeaveCategory::JobSatisfaction],
        "Conduct role satisfaction surveys and adjust responsibilities",
    ),
    (
        &[LeaveCategory::WorkEnvironment],
        "Improve workplace culture and environment based on employee feedback",
    ),
    (
        &[LeaveCategory::ProfessionalDevelopment],
        "Increase training opportunities and professional development programs",
    ),
];

fn leave_reason(
    category: LeaveCategory,
    reason: String,
    severity: ReasonSeverity,
    impact: u32,
    description: impl Into<String>,
    icon: &str,
) -> LeaveReason {
    LeaveReason {
        category,
        reason,
        severity,
        impact,
        description: description.into(),
        icon: icon.to_string(),
    }
}

/// Critical on the lowest survey score, major otherwise.
fn survey_severity(score: i32) -> ReasonSeverity {
    if score == 1 {
        ReasonSeverity::Critical
    } else {
        ReasonSeverity::Major
    }
}

/// Evaluates every leave rule, in rule order (unsorted, untruncated).
pub fn evaluate_leave_reasons(record: &EmployeeRecord, policy: &RiskPolicy) -> Vec<LeaveReason> {
    let income = &policy.income;
    let mut reasons = Vec::new();

    if scale_at_most(record.job_satisfaction, DISSATISFIED_CEILING) {
        reasons.push(leave_reason(
            LeaveCategory::JobSatisfaction,
            format!("Low Job Satisfaction ({}/4)", record.job_satisfaction),
            survey_severity(record.job_satisfaction),
            25,
            "Employee expressed significant dissatisfaction with their role and responsibilities.",
            "frown",
        ));
    }

    if scale_at_most(record.work_life_balance, DISSATISFIED_CEILING) {
        reasons.push(leave_reason(
            LeaveCategory::WorkLifeBalance,
            format!("Poor Work-Life Balance ({}/4)", record.work_life_balance),
            survey_severity(record.work_life_balance),
            20,
            "Employee struggled to maintain healthy work-life balance, leading to burnout.",
            "scale",
        ));
    }

    if record.over_time {
        reasons.push(leave_reason(
            LeaveCategory::Workload,
            "Excessive Overtime Required".to_string(),
            ReasonSeverity::Major,
            18,
            "Consistently required to work overtime, contributing to stress and dissatisfaction.",
            "clock",
        ));
    }

    if scale_at_most(record.environment_satisfaction, DISSATISFIED_CEILING) {
        reasons.push(leave_reason(
            LeaveCategory::WorkEnvironment,
            format!(
                "Unsatisfactory Work Environment ({}/4)",
                record.environment_satisfaction
            ),
            ReasonSeverity::Moderate,
            15,
            "Issues with workplace culture, tools, or physical environment.",
            "building",
        ));
    }

    let below_market = (record.monthly_income < income.below_market_line())
        .then(|| percent_below_market(record.monthly_income, income.market_average))
        .flatten();
    if let Some(percent_below) = below_market {
        reasons.push(leave_reason(
            LeaveCategory::Compensation,
            format!("Below Market Salary ({}% below average)", percent_below),
            ReasonSeverity::Major,
            22,
            format!(
                "Monthly income of ${} is significantly below market average.",
                format_amount(record.monthly_income)
            ),
            "dollar-sign",
        ));
    }

    if record.years_at_company >= STAGNANT_TENURE_YEARS
        && record.monthly_income < income.market_average
    {
        reasons.push(leave_reason(
            LeaveCategory::CareerGrowth,
            format!(
                "Stagnant Career ({} years with low progression)",
                record.years_at_company
            ),
            ReasonSeverity::Major,
            20,
            "Long tenure without corresponding career advancement or salary growth.",
            "trending-up",
        ));
    }

    if record.distance_from_home > LONG_COMMUTE_KM {
        reasons.push(leave_reason(
            LeaveCategory::Commute,
            format!("Long Commute ({} km)", record.distance_from_home),
            ReasonSeverity::Moderate,
            12,
            "Lengthy daily commute impacting quality of life and work-life balance.",
            "car",
        ));
    }

    if record.num_companies_worked >= HIGH_MOBILITY_COMPANIES {
        reasons.push(leave_reason(
            LeaveCategory::CareerProgression,
            format!(
                "High Job Mobility ({} previous employers)",
                record.num_companies_worked
            ),
            ReasonSeverity::Moderate,
            12,
            "Pattern of frequent job changes may indicate ongoing career exploration.",
            "target",
        ));
    }

    if scale_at_most(record.relationship_satisfaction, DISSATISFIED_CEILING) {
        reasons.push(leave_reason(
            LeaveCategory::WorkplaceRelationships,
            format!(
                "Poor Workplace Relationships ({}/4)",
                record.relationship_satisfaction
            ),
            ReasonSeverity::Moderate,
            14,
            "Difficulty with team dynamics or manager relationships.",
            "users",
        ));
    }

    if record.training_times_last_year == 0 {
        reasons.push(leave_reason(
            LeaveCategory::ProfessionalDevelopment,
            "No Training Opportunities".to_string(),
            ReasonSeverity::Moderate,
            13,
            "Lack of professional development and skill enhancement opportunities.",
            "book-open",
        ));
    }

    if scale_at_most(record.performance_rating, DISSATISFIED_CEILING) {
        reasons.push(leave_reason(
            LeaveCategory::Performance,
            format!("Low Performance Rating ({}/4)", record.performance_rating),
            ReasonSeverity::Moderate,
            15,
            "Performance concerns may indicate job-role mismatch or lack of support.",
            "gauge",
        ));
    }

    if record.is_divorced() && record.distance_from_home > RELOCATION_COMMUTE_KM {
        reasons.push(leave_reason(
            LeaveCategory::PersonalCircumstances,
            "Life Changes Affecting Work".to_string(),
            ReasonSeverity::Moderate,
            10,
            "Personal life changes may have necessitated career transition.",
            "home",
        ));
    }

    if (ADVANCED_EDUCATION..=EDUCATION_MAX).contains(&record.education)
        && record.monthly_income < income.overqualified_line()
    {
        reasons.push(leave_reason(
            LeaveCategory::EducationMismatch,
            "Overqualified for Position".to_string(),
            ReasonSeverity::Moderate,
            14,
            "High education level not reflected in compensation or role.",
            "graduation-cap",
        ));
    }

    if record.age < EARLY_CAREER_AGE && record.years_at_company < LOW_TENURE_YEARS {
        reasons.push(leave_reason(
            LeaveCategory::EarlyCareerExploration,
            "Early Career Stage".to_string(),
            ReasonSeverity::Minor,
            10,
            "Young professional exploring career options and opportunities.",
            "sprout",
        ));
    }

    reasons
}

/// Percentage by which `monthly_income` falls short of `market_average`,
/// rounded to a whole percent.
///
/// `None` when the reference is not positive or the arithmetic overflows; the
/// compensation rule then does not trigger.
fn percent_below_market(monthly_income: Decimal, market_average: Decimal) -> Option<Decimal> {
    if market_average <= Decimal::ZERO {
        return None;
    }
    let shortfall = market_average.checked_sub(monthly_income)?;
    let percent = shortfall
        .checked_div(market_average)?
        .checked_mul(Decimal::ONE_HUNDRED)?;
    Some(percent.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
}

/// Derives the aggregate severity from the counts of critical and major reasons.
///
/// - critical: two criticals, or one critical with two majors
/// - high: two majors, or one critical
/// - medium: three or more reasons of any severity
/// - low: otherwise
pub fn overall_severity(reasons: &[LeaveReason]) -> OverallSeverity {
    let critical = reasons
        .iter()
        .filter(|r| r.severity == ReasonSeverity::Critical)
        .count();
    let major = reasons
        .iter()
        .filter(|r| r.severity == ReasonSeverity::Major)
        .count();

    if critical >= 2 || (critical >= 1 && major >= 2) {
        OverallSeverity::Critical
    } else if major >= 2 || critical >= 1 {
        OverallSeverity::High
    } else if reasons.len() >= 3 {
        OverallSeverity::Medium
    } else {
        OverallSeverity::Low
    }
}

/// Builds the ordered, deduplicated departure actions.
pub fn departure_recommendations(reasons: &[LeaveReason]) -> Vec<String> {
    DEPARTURE_ACTIONS
        .iter()
        .filter(|(categories, _)| reasons.iter().any(|r| categories.contains(&r.category)))
        .map(|(_, action)| action.to_string())
        .collect()
}

/// Analyzes why an employee left.
///
/// Reasons are ranked by impact (stable, so ties keep rule order) and capped
/// at the policy's reason limit. Severity, preventability and recommendations
/// are computed over every triggered reason, before the cap.
///
/// # Examples
///
/// ```
/// use attrition_engine::analysis::analyze_departure;
/// use attrition_engine::config::RiskPolicy;
/// use attrition_engine::models::{EmployeeRecord, OverallSeverity};
///
/// let record: EmployeeRecord = serde_json::from_value(serde_json::json!({
///     "id": "EMP0042", "age": 45, "yearsAtCompany": 9, "monthlyIncome": 3000,
///     "distanceFromHome": 3, "jobSatisfaction": 1, "workLifeBalance": 3,
///     "environmentSatisfaction": 3, "relationshipSatisfaction": 3, "overTime": false,
///     "education": 2, "attrition": true, "performanceRating": 3,
///     "numCompaniesWorked": 1, "trainingTimesLastYear": 2
/// })).unwrap();
///
/// let analysis = analyze_departure(&record, &RiskPolicy::default());
/// assert_eq!(analysis.overall_severity, OverallSeverity::Critical);
/// assert!(analysis.preventable);
/// ```
pub fn analyze_departure(record: &EmployeeRecord, policy: &RiskPolicy) -> LeaveAnalysis {
    let mut reasons = evaluate_leave_reasons(record, policy);
    reasons.sort_by(|a, b| b.impact.cmp(&a.impact));

    let overall_severity = overall_severity(&reasons);
    let preventable = reasons.iter().any(|r| r.category.is_preventable());
    let recommendations = departure_recommendations(&reasons);

    let primary_reason = reasons
        .first()
        .map(|r| r.reason.clone())
        .unwrap_or_else(|| FALLBACK_PRIMARY_REASON.to_string());

    let summary = if reasons.is_empty() {
        INSUFFICIENT_DATA_SUMMARY.to_string()
    } else {
        let leading: Vec<&str> = reasons
            .iter()
            .take(SUMMARY_CATEGORIES)
            .map(|r| r.category.label())
            .collect();
        let outlook = if preventable {
            "This was preventable with proper intervention."
        } else {
            "Some factors were beyond organizational control."
        };
        format!(
            "Employee left primarily due to {}. {}",
            leading.join(", "),
            outlook
        )
    };

    debug!(
        employee_id = %record.id,
        triggered = reasons.len(),
        preventable,
        "Analyzed departure"
    );

    reasons.truncate(policy.limits.leave_reasons);

    LeaveAnalysis {
        employee_id: record.id.clone(),
        primary_reason,
        reasons,
        overall_severity,
        preventable,
        recommendations,
        summary,
    }
}

/// Formats an amount with thousands separators, e.g. `12,500` or `3,250.5`.
fn format_amount(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string();
    let (sign, unsigned) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::content_employee;

    fn departed(record: EmployeeRecord) -> EmployeeRecord {
        EmployeeRecord {
            attrition: true,
            ..record
        }
    }

    fn categories(reasons: &[LeaveReason]) -> Vec<LeaveCategory> {
        reasons.iter().map(|r| r.category).collect()
    }

    #[test]
    fn test_no_reasons_uses_fallbacks() {
        let analysis = analyze_departure(&departed(content_employee()), &RiskPolicy::default());

        assert!(analysis.reasons.is_empty());
        assert_eq!(analysis.primary_reason, FALLBACK_PRIMARY_REASON);
        assert_eq!(analysis.summary, INSUFFICIENT_DATA_SUMMARY);
        assert_eq!(analysis.overall_severity, OverallSeverity::Low);
        assert!(!analysis.preventable);
        assert!(analysis.recommendations.is_empty());
    }

    /// Job satisfaction 1, income 3000, nine years: rules 1, 5 and 6.
    #[test]
    fn test_critical_with_two_majors_is_critical() {
        let record = departed(EmployeeRecord {
            job_satisfaction: 1,
            monthly_income: Decimal::new(3000, 0),
            years_at_company: 9,
            ..content_employee()
        });

        let analysis = analyze_departure(&record, &RiskPolicy::default());

        assert_eq!(
            categories(&analysis.reasons),
            vec![
                LeaveCategory::JobSatisfaction,
                LeaveCategory::Compensation,
                LeaveCategory::CareerGrowth,
            ]
        );
        let impacts: Vec<u32> = analysis.reasons.iter().map(|r| r.impact).collect();
        assert_eq!(impacts, vec![25, 22, 20]);
        assert_eq!(analysis.reasons[0].severity, ReasonSeverity::Critical);
        assert_eq!(analysis.overall_severity, OverallSeverity::Critical);
        assert_eq!(analysis.primary_reason, "Low Job Satisfaction (1/4)");
        assert!(analysis.preventable);
    }

    #[test]
    fn test_compensation_reason_text() {
        let record = departed(EmployeeRecord {
            monthly_income: Decimal::new(3000, 0),
            ..content_employee()
        });

        let reasons = evaluate_leave_reasons(&record, &RiskPolicy::default());
        let compensation = reasons
            .iter()
            .find(|r| r.category == LeaveCategory::Compensation)
            .unwrap();

        // (6500 - 3000) / 6500 = 53.8%
        assert_eq!(compensation.reason, "Below Market Salary (54% below average)");
        assert_eq!(
            compensation.description,
            "Monthly income of $3,000 is significantly below market average."
        );
        assert_eq!(compensation.severity, ReasonSeverity::Major);
    }

    #[test]
    fn test_compensation_boundary_is_exclusive() {
        let policy = RiskPolicy::default();
        let mut record = departed(content_employee());

        record.monthly_income = Decimal::new(5200, 0);
        let reasons = evaluate_leave_reasons(&record, &policy);
        assert!(!categories(&reasons).contains(&LeaveCategory::Compensation));

        record.monthly_income = Decimal::new(5199, 0);
        let reasons = evaluate_leave_reasons(&record, &policy);
        assert!(categories(&reasons).contains(&LeaveCategory::Compensation));
    }

    #[test]
    fn test_extreme_income_does_not_panic() {
        let record = departed(EmployeeRecord {
            monthly_income: Decimal::MIN,
            ..content_employee()
        });

        let reasons = evaluate_leave_reasons(&record, &RiskPolicy::default());
        assert!(!categories(&reasons).contains(&LeaveCategory::Compensation));
    }

    #[test]
    fn test_zero_market_average_skips_compensation() {
        let mut policy = RiskPolicy::default();
        policy.income.market_average = Decimal::ZERO;
        let record = departed(EmployeeRecord {
            monthly_income: Decimal::new(-500, 0),
            ..content_employee()
        });

        let reasons = evaluate_leave_reasons(&record, &policy);
        assert!(!categories(&reasons).contains(&LeaveCategory::Compensation));
    }

    #[test]
    fn test_percent_below_market() {
        let average = Decimal::new(6500, 0);
        assert_eq!(
            percent_below_market(Decimal::new(3000, 0), average),
            Some(Decimal::new(54, 0))
        );
        assert_eq!(percent_below_market(Decimal::MIN, average), None);
        assert_eq!(percent_below_market(Decimal::new(3000, 0), Decimal::ZERO), None);
    }

    #[test]
    fn test_survey_severity_depends_on_score() {
        let policy = RiskPolicy::default();
        let record = departed(EmployeeRecord {
            work_life_balance: 2,
            ..content_employee()
        });

        let reasons = evaluate_leave_reasons(&record, &policy);
        assert_eq!(reasons[0].severity, ReasonSeverity::Major);
        assert_eq!(reasons[0].reason, "Poor Work-Life Balance (2/4)");
    }

    #[test]
    fn test_two_majors_is_high() {
        let record = departed(EmployeeRecord {
            job_satisfaction: 2,
            over_time: true,
            ..content_employee()
        });

        let analysis = analyze_departure(&record, &RiskPolicy::default());
        assert_eq!(analysis.overall_severity, OverallSeverity::High);
    }

    #[test]
    fn test_single_critical_is_high() {
        let record = departed(EmployeeRecord {
            work_life_balance: 1,
            ..content_employee()
        });

        let analysis = analyze_departure(&record, &RiskPolicy::default());
        assert_eq!(analysis.overall_severity, OverallSeverity::High);
    }

    #[test]
    fn test_three_moderates_is_medium_and_not_preventable() {
        let record = departed(EmployeeRecord {
            distance_from_home: 25,
            num_companies_worked: 6,
            relationship_satisfaction: 2,
            ..content_employee()
        });

        let analysis = analyze_departure(&record, &RiskPolicy::default());
        assert_eq!(analysis.overall_severity, OverallSeverity::Medium);
        assert!(!analysis.preventable);
        assert_eq!(
            analysis.summary,
            "Employee left primarily due to Workplace Relationships, Commute, Career Progression. \
             Some factors were beyond organizational control."
        );
    }

    #[test]
    fn test_single_minor_is_low() {
        let record = departed(EmployeeRecord {
            age: 22,
            years_at_company: 1,
            ..content_employee()
        });

        let analysis = analyze_departure(&record, &RiskPolicy::default());
        assert_eq!(
            categories(&analysis.reasons),
            vec![LeaveCategory::EarlyCareerExploration]
        );
        assert_eq!(analysis.reasons[0].severity, ReasonSeverity::Minor);
        assert_eq!(analysis.overall_severity, OverallSeverity::Low);
    }

    #[test]
    fn test_reasons_capped_at_ten_and_sorted() {
        let record = departed(EmployeeRecord {
            job_satisfaction: 1,
            work_life_balance: 1,
            over_time: true,
            environment_satisfaction: 1,
            monthly_income: Decimal::new(2000, 0),
            years_at_company: 1,
            distance_from_home: 25,
            num_companies_worked: 7,
            relationship_satisfaction: 1,
            training_times_last_year: 0,
            performance_rating: 1,
            marital_status: "Divorced".to_string(),
            education: 5,
            age: 23,
            ..content_employee()
        });
        let policy = RiskPolicy::default();

        // Career growth needs long tenure, so 13 of 14 rules fire.
        assert_eq!(evaluate_leave_reasons(&record, &policy).len(), 13);

        let analysis = analyze_departure(&record, &policy);
        assert_eq!(analysis.reasons.len(), 10);
        assert!(
            analysis
                .reasons
                .windows(2)
                .all(|pair| pair[0].impact >= pair[1].impact)
        );
        assert_eq!(analysis.overall_severity, OverallSeverity::Critical);
    }

    #[test]
    fn test_ties_keep_rule_order() {
        // Environment (15) is evaluated before performance (15).
        let record = departed(EmployeeRecord {
            environment_satisfaction: 2,
            performance_rating: 2,
            ..content_employee()
        });

        let analysis = analyze_departure(&record, &RiskPolicy::default());
        assert_eq!(
            categories(&analysis.reasons),
            vec![LeaveCategory::WorkEnvironment, LeaveCategory::Performance]
        );
    }

    #[test]
    fn test_recommendations_follow_priority_order() {
        let record = departed(EmployeeRecord {
            training_times_last_year: 0,
            job_satisfaction: 2,
            over_time: true,
            monthly_income: Decimal::new(4000, 0),
            ..content_employee()
        });

        let analysis = analyze_departure(&record, &RiskPolicy::default());
        assert_eq!(
            analysis.recommendations,
            vec![
                "Review and adjust compensation to market standards",
                "Reduce overtime requirements and improve work-life balance policies",
                "Conduct role satisfaction surveys and adjust responsibilities",
                "Increase training opportunities and professional development programs",
            ]
        );
    }

    #[test]
    fn test_workload_and_balance_share_one_action() {
        let record = departed(EmployeeRecord {
            work_life_balance: 2,
            over_time: true,
            ..content_employee()
        });

        let recommendations = analyze_departure(&record, &RiskPolicy::default()).recommendations;
        assert_eq!(
            recommendations,
            vec!["Reduce overtime requirements and improve work-life balance policies"]
        );
    }

    #[test]
    fn test_preventable_summary() {
        let record = departed(EmployeeRecord {
            environment_satisfaction: 1,
            ..content_employee()
        });

        let analysis = analyze_departure(&record, &RiskPolicy::default());
        assert_eq!(
            analysis.summary,
            "Employee left primarily due to Work Environment. \
             This was preventable with proper intervention."
        );
    }

    #[test]
    fn test_personal_circumstances_need_divorce_and_distance() {
        let policy = RiskPolicy::default();
        let mut record = departed(EmployeeRecord {
            marital_status: "Divorced".to_string(),
            distance_from_home: 15,
            ..content_employee()
        });
        assert!(evaluate_leave_reasons(&record, &policy).is_empty());

        record.distance_from_home = 16;
        assert_eq!(
            categories(&evaluate_leave_reasons(&record, &policy)),
            vec![LeaveCategory::PersonalCircumstances]
        );
    }

    #[test]
    fn test_overqualified_uses_ninety_percent_line() {
        let policy = RiskPolicy::default();
        let mut record = departed(EmployeeRecord {
            education: 4,
            monthly_income: Decimal::new(5850, 0),
            ..content_employee()
        });
        assert!(evaluate_leave_reasons(&record, &policy).is_empty());

        record.monthly_income = Decimal::new(5849, 0);
        assert_eq!(
            categories(&evaluate_leave_reasons(&record, &policy)),
            vec![LeaveCategory::EducationMismatch]
        );
    }

    #[test]
    fn test_analysis_runs_without_attrition_flag() {
        let record = EmployeeRecord {
            over_time: true,
            ..content_employee()
        };
        let analysis = analyze_departure(&record, &RiskPolicy::default());
        assert_eq!(analysis.primary_reason, "Excessive Overtime Required");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Decimal::new(3000, 0)), "3,000");
        assert_eq!(format_amount(Decimal::new(950, 0)), "950");
        assert_eq!(format_amount(Decimal::new(1234567, 0)), "1,234,567");
        assert_eq!(format_amount(Decimal::new(325050, 2)), "3,250.5");
        assert_eq!(format_amount(Decimal::ZERO), "0");
    }
}
