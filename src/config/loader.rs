//! Policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading a
//! [`RiskPolicy`] from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::RiskPolicy;

/// Loads and validates risk policies.
///
/// Fields absent from the file keep their built-in defaults, so a policy file
/// only needs to list the values it overrides.
///
/// # Example
///
/// ```no_run
/// use attrition_engine::config::PolicyLoader;
///
/// let policy = PolicyLoader::load("./config/risk_policy.yaml")?;
/// println!("High risk from {}", policy.tiers.high_from);
/// # Ok::<(), attrition_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyLoader;

impl PolicyLoader {
    /// Loads a policy from the given YAML file.
    ///
    /// # Returns
    ///
    /// Returns the validated policy, or an error if:
    /// - The file does not exist or cannot be read
    /// - The file contains invalid YAML
    /// - The resulting thresholds are inconsistent
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<RiskPolicy> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let policy = Self::parse(&content, &path_str)?;
        debug!(path = %path_str, "Loaded risk policy");
        Ok(policy)
    }

    /// Parses and validates a policy from YAML text.
    ///
    /// `origin` names the source in error messages.
    pub fn parse(content: &str, origin: &str) -> EngineResult<RiskPolicy> {
        // An empty document deserializes to unit, not to the defaults.
        if content.trim().is_empty() {
            return Ok(RiskPolicy::default());
        }

        let policy: RiskPolicy =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        policy.validate()?;
        Ok(policy)
    }

    /// Loads the policy at `path`, falling back to the defaults when the file is absent.
    ///
    /// Parse and validation errors are still returned.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> EngineResult<RiskPolicy> {
        match Self::load(path) {
            Err(EngineError::ConfigNotFound { .. }) => Ok(RiskPolicy::default()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn config_path() -> &'static str {
        "./config/risk_policy.yaml"
    }

    #[test]
    fn test_load_shipped_policy_matches_defaults() {
        let result = PolicyLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load policy: {:?}", result.err());
        assert_eq!(result.unwrap(), RiskPolicy::default());
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        match PolicyLoader::load("/nonexistent/risk_policy.yaml") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("risk_policy.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let policy = PolicyLoader::load_or_default("/nonexistent/risk_policy.yaml").unwrap();
        assert_eq!(policy, RiskPolicy::default());
    }

    #[test]
    fn test_parse_invalid_yaml_returns_parse_error() {
        match PolicyLoader::parse("tiers: [unclosed", "inline") {
            Err(EngineError::ConfigParseError { path, .. }) => assert_eq!(path, "inline"),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_overrides_selected_fields() {
        let yaml = "tiers:\n  medium_from: 25\nincome:\n  market_average: 7000\n";
        let policy = PolicyLoader::parse(yaml, "inline").unwrap();

        assert_eq!(policy.tiers.medium_from, 25);
        assert_eq!(policy.tiers.high_from, 60);
        assert_eq!(policy.income.market_average, Decimal::new(7000, 0));
        assert_eq!(policy.income.expected_per_year_of_age, Decimal::new(400, 0));
    }

    #[test]
    fn test_parse_rejects_inconsistent_policy() {
        let yaml = "priority:\n  high_from: 90\n  urgent_from: 80\n";
        assert!(matches!(
            PolicyLoader::parse(yaml, "inline"),
            Err(EngineError::InvalidPolicy { .. })
        ));
    }

    #[test]
    fn test_parse_empty_document_yields_defaults() {
        assert_eq!(
            PolicyLoader::parse("  \n", "inline").unwrap(),
            RiskPolicy::default()
        );
    }
}
