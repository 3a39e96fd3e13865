//! Employee record model.
//!
//! An [`EmployeeRecord`] is the only input the engine consumes. It mirrors the
//! HR dataset columns the scoring rules read and is immutable once built.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Lowest value on the 1-4 survey scales.
pub const SCALE_MIN: i32 = 1;

/// Highest value on the 1-4 survey scales.
pub const SCALE_MAX: i32 = 4;

/// Highest education level in the dataset (1 = below college, 5 = doctor).
pub const EDUCATION_MAX: i32 = 5;

/// Represents one employee as supplied by the record source.
///
/// Survey scores (`job_satisfaction`, `work_life_balance`, ...) are kept as
/// plain integers so that out-of-range values still deserialize; the rules
/// treat them as not triggering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    /// Unique identifier for the employee (e.g. `EMP0001`).
    pub id: String,
    /// Age in years.
    pub age: u32,
    /// Department name.
    #[serde(default)]
    pub department: String,
    /// Job role within the department.
    #[serde(default)]
    pub job_role: String,
    /// Whole years at the company.
    pub years_at_company: u32,
    /// Gross monthly income.
    pub monthly_income: Decimal,
    /// Commute distance in kilometres.
    pub distance_from_home: u32,
    /// Job satisfaction survey score, 1-4.
    pub job_satisfaction: i32,
    /// Work-life balance survey score, 1-4.
    pub work_life_balance: i32,
    /// Environment satisfaction survey score, 1-4.
    pub environment_satisfaction: i32,
    /// Relationship satisfaction survey score, 1-4.
    pub relationship_satisfaction: i32,
    /// Whether the employee regularly works overtime.
    pub over_time: bool,
    /// Education level, 1-5.
    pub education: i32,
    /// Whether the employee has left the organisation.
    pub attrition: bool,
    /// Latest performance rating, 1-4.
    pub performance_rating: i32,
    /// Marital status (`Single`, `Married`, `Divorced`).
    #[serde(default)]
    pub marital_status: String,
    /// Gender as recorded in the dataset.
    #[serde(default)]
    pub gender: String,
    /// Number of previous employers.
    pub num_companies_worked: u32,
    /// Training sessions attended in the last year.
    pub training_times_last_year: u32,
}

impl EmployeeRecord {
    /// Builds a record from untyped JSON, rejecting structurally invalid input.
    ///
    /// This is the only place a [`EngineError::Validation`] originates: the
    /// payload must be an object, carry every required key with the right
    /// type, and have a non-empty identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use attrition_engine::models::EmployeeRecord;
    ///
    /// let result = EmployeeRecord::from_json(&serde_json::json!([1, 2, 3]));
    /// assert!(result.is_err());
    /// ```
    pub fn from_json(value: &serde_json::Value) -> EngineResult<Self> {
        if !value.is_object() {
            return Err(EngineError::Validation {
                field: "record".to_string(),
                message: "expected a JSON object".to_string(),
            });
        }

        let record: EmployeeRecord =
            serde_json::from_value(value.clone()).map_err(|e| EngineError::Validation {
                field: "record".to_string(),
                message: e.to_string(),
            })?;

        record.validate()?;
        Ok(record)
    }

    /// Checks the invariants serde cannot express.
    pub fn validate(&self) -> EngineResult<()> {
        if self.id.trim().is_empty() {
            return Err(EngineError::Validation {
                field: "id".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.monthly_income < Decimal::ZERO {
            return Err(EngineError::Validation {
                field: "monthlyIncome".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        Ok(())
    }

    /// Returns true if the employee's marital status is `Divorced`.
    pub fn is_divorced(&self) -> bool {
        self.marital_status.eq_ignore_ascii_case("divorced")
    }
}

/// Returns true if `score` lies on the survey scale and is at most `ceiling`.
///
/// Scores outside `SCALE_MIN..=SCALE_MAX` never satisfy a rule.
pub fn scale_at_most(score: i32, ceiling: i32) -> bool {
    (SCALE_MIN..=SCALE_MAX).contains(&score) && score <= ceiling
}
