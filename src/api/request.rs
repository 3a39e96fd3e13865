//! Request types for the attrition engine API.
//!
//! Single-record endpoints take an [`EmployeeRecord`] as the whole body; the
//! batch endpoints wrap a list of them. The employee listing takes its
//! criteria from the query string.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::EmployeeRecord;
use crate::repository::EmployeeFilter;

/// Request body for the `/assess/batch` and `/retention/batch` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    /// The records to evaluate.
    pub employees: Vec<EmployeeRecord>,
}

impl BatchRequest {
    /// Validates every record, naming the first offender by position.
    pub fn validate(&self) -> EngineResult<()> {
        for (index, record) in self.employees.iter().enumerate() {
            record.validate().map_err(|err| match err {
                EngineError::Validation { field, message } => EngineError::Validation {
                    field: format!("employees[{}].{}", index, field),
                    message,
                },
                other => other,
            })?;
        }
        Ok(())
    }
}

/// Query string of `GET /employees`.
///
/// Blank values and a department of `all` place no restriction.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EmployeeQuery {
    /// Department to list.
    pub department: Option<String>,
    /// `true` for employees who left, `false` for active ones.
    pub attrition: Option<bool>,
    /// Fragment of the identifier or job role.
    pub search: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl EmployeeQuery {
    /// Converts the query into repository criteria.
    pub fn into_filter(self) -> EmployeeFilter {
        EmployeeFilter {
            department: non_blank(self.department).filter(|d| !d.eq_ignore_ascii_case("all")),
            attrition: self.attrition,
            search: non_blank(self.search).map(|term| term.trim().to_string()),
        }
    }
}
