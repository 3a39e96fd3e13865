//! Application state for the attrition engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::RiskPolicy;
use crate::repository::{AlertStatusRepository, EmployeeRepository, InMemoryAlertStatusRepository};

/// Shared application state.
///
/// Holds the loaded risk policy, the employee record source and the alert
/// workflow state.
#[derive(Clone)]
pub struct AppState {
    /// The loaded risk policy.
    policy: Arc<RiskPolicy>,
    /// Where stored employees are looked up.
    employees: Arc<dyn EmployeeRepository>,
    /// Statuses managers have set on alerts.
    alert_statuses: Arc<dyn AlertStatusRepository>,
}

impl AppState {
    /// Creates a new application state in which every alert starts out new.
    pub fn new(policy: RiskPolicy, employees: Arc<dyn EmployeeRepository>) -> Self {
        Self {
            policy: Arc::new(policy),
            employees,
            alert_statuses: Arc::new(InMemoryAlertStatusRepository::new()),
        }
    }

    /// Returns the risk policy.
    pub fn policy(&self) -> &RiskPolicy {
        &self.policy
    }

    /// Returns a shared handle to the risk policy, for work moved off the
    /// request task.
    pub fn shared_policy(&self) -> Arc<RiskPolicy> {
        Arc::clone(&self.policy)
    }

    /// Returns the employee repository.
    pub fn employees(&self) -> &dyn EmployeeRepository {
        self.employees.as_ref()
    }

    /// Returns the alert status store.
    pub fn alert_statuses(&self) -> &dyn AlertStatusRepository {
        self.alert_statuses.as_ref()
    }

    /// Returns a shared handle to the alert status store.
    pub fn shared_alert_statuses(&self) -> Arc<dyn AlertStatusRepository> {
        Arc::clone(&self.alert_statuses)
    }
}
