//! Policy configuration for the attrition engine.
//!
//! This module provides the [`RiskPolicy`] value object shared by every
//! analyzer and the loader that reads it from YAML.
//!
//! # Example
//!
//! ```no_run
//! use attrition_engine::config::PolicyLoader;
//!
//! let policy = PolicyLoader::load("./config/risk_policy.yaml").unwrap();
//! println!("Plans start at score {}", policy.plan_threshold);
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{IncomeReference, OutputLimits, PriorityThresholds, RiskPolicy, TierThresholds};
