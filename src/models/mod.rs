//! Core data models for the attrition engine.
//!
//! Every type here is a plain serializable value: the employee record the
//! engine reads and the artifacts it computes from it.

mod alert;
mod assessment;
mod departure;
mod employee;
mod retention;

pub use alert::{AlertStatus, RiskAlert};
pub use assessment::{FactorCategory, FactorContribution, RiskAssessment, RiskTier};
pub use departure::{LeaveAnalysis, LeaveCategory, LeaveReason, OverallSeverity, ReasonSeverity};
pub use employee::{EDUCATION_MAX, EmployeeRecord, SCALE_MAX, SCALE_MIN, scale_at_most};
pub use retention::{Level, Priority, RetentionPlan, RetentionStrategy, StrategyCategory};
