//! Error types for the attrition engine.
//!
//! Rule evaluation itself never fails: a field that is out of range simply
//! does not trigger its rule. The errors here cover the edges of the engine:
//! policy configuration, invalid employee records and failed lookups.

use thiserror::Error;

/// The main error type for the attrition engine.
///
/// # Example
///
/// ```
/// use attrition_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/risk_policy.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/risk_policy.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A policy value was loaded but is inconsistent with the others.
    #[error("Invalid policy field '{field}': {message}")]
    InvalidPolicy {
        /// The policy field that failed validation.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An employee record was structurally invalid.
    #[error("Invalid employee record field '{field}': {message}")]
    Validation {
        /// The offending field, or `record` when the whole payload is wrong.
        field: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// No employee matched the requested identifier.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The identifier that was looked up.
        id: String,
    },
    /// No open alert exists for the identifier: the employee is unknown or
    /// scores below the alert threshold.
    #[error("Alert not found: {id}")]
    AlertNotFound {
        /// The alert identifier that was looked up.
        id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
