//! Alert workflow state.
//!
//! Alerts themselves are recomputed from the current records on every read;
//! only the status a manager set on them is stored.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::models::AlertStatus;

/// Read and write access to the status of risk alerts, keyed by alert id.
pub trait AlertStatusRepository: Send + Sync {
    /// Returns the recorded status, ignoring ASCII case in `alert_id`.
    ///
    /// Alerts nobody has touched yield `None` and read as new.
    fn status(&self, alert_id: &str) -> Option<AlertStatus>;

    /// Records `status` for `alert_id`, returning the previous one.
    fn set_status(&self, alert_id: &str, status: AlertStatus) -> Option<AlertStatus>;
}

/// Keeps alert statuses in a map behind a read-write lock.
#[derive(Debug, Default)]
pub struct InMemoryAlertStatusRepository {
    statuses: RwLock<HashMap<String, AlertStatus>>,
}

impl InMemoryAlertStatusRepository {
    /// Creates a store in which every alert is new.
    pub fn new() -> Self {
        Self::default()
    }
}

fn key(alert_id: &str) -> String {
    alert_id.to_ascii_uppercase()
}

impl AlertStatusRepository for InMemoryAlertStatusRepository {
    fn status(&self, alert_id: &str) -> Option<AlertStatus> {
        self.statuses
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key(alert_id))
            .copied()
    }

    fn set_status(&self, alert_id: &str, status: AlertStatus) -> Option<AlertStatus> {
        self.statuses
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key(alert_id), status)
    }
}
