//! Analysis logic for the attrition engine.
//!
//! This module contains the pure evaluation functions: factor rules, risk
//! scoring, tier and priority classification, factor ranking, recommended
//! actions, departure analysis, retention planning and alert construction.
//! None of them perform I/O or fail; out-of-range inputs simply do not trigger
//! the rule that reads them.

mod factor_ranking;
mod factors;
mod leave_reasons;
mod recommendations;
mod retention_plan;
mod risk_alerts;
mod risk_score;
mod risk_tier;

pub use factor_ranking::rank_factors;
pub use factors::{DISSATISFIED_CEILING, LONG_COMMUTE_KM, LOW_TENURE_YEARS, evaluate_factors};
pub use leave_reasons::{
    FALLBACK_PRIMARY_REASON, INSUFFICIENT_DATA_SUMMARY, analyze_departure,
    departure_recommendations, evaluate_leave_reasons, overall_severity,
};
pub use recommendations::{RISK_ACTIONS, recommend_actions};
pub use retention_plan::{candidate_strategies, estimate_effectiveness, plan_retention};
pub use risk_alerts::build_alert;
pub use risk_score::{MAX_RISK_SCORE, assess_risk, score_risk};
pub use risk_tier::{classify_priority, classify_tier};
