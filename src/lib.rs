//! Employee attrition risk scoring and explanation engine.
//!
//! Given an employee record, this crate computes a bounded risk score,
//! breaks it down into weighted contributing factors, explains departures,
//! and proposes retention strategies for employees at risk. All scoring is
//! pure and driven by a single [`config::RiskPolicy`].

#![warn(missing_docs)]

pub mod analysis;
pub mod api;
pub mod batch;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod logging;
pub mod models;
pub mod repository;
pub mod stats;

#[cfg(test)]
pub(crate) mod test_support;
