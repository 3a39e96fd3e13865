//! Employee record sources and alert workflow state.
//!
//! The engine only ever reads records; where they come from (seeded fixture,
//! file import, remote store) sits behind [`EmployeeRepository`]. Repositories
//! hold data and lookups only, never scoring rules.

mod alert_status;
mod memory;

pub use alert_status::{AlertStatusRepository, InMemoryAlertStatusRepository};
pub use memory::InMemoryEmployeeRepository;

use crate::models::EmployeeRecord;

/// Criteria for [`EmployeeRepository::filter`]. `None` matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    /// Department name, compared case-insensitively.
    pub department: Option<String>,
    /// Attrition flag.
    pub attrition: Option<bool>,
    /// Case-insensitive fragment of the identifier or job role.
    pub search: Option<String>,
}

impl EmployeeFilter {
    /// Returns true if `record` satisfies every set criterion.
    pub fn matches(&self, record: &EmployeeRecord) -> bool {
        let department_ok = self
            .department
            .as_deref()
            .is_none_or(|department| record.department.eq_ignore_ascii_case(department));
        let attrition_ok = self.attrition.is_none_or(|flag| record.attrition == flag);
        let search_ok = self.search.as_deref().is_none_or(|term| {
            let term = term.to_lowercase();
            record.id.to_lowercase().contains(&term)
                || record.job_role.to_lowercase().contains(&term)
        });
        department_ok && attrition_ok && search_ok
    }
}

/// Read and write access to employee records.
pub trait EmployeeRepository: Send + Sync {
    /// Looks up a record by identifier, ignoring ASCII case.
    fn find_by_id(&self, id: &str) -> Option<EmployeeRecord>;

    /// Returns every record in insertion order.
    fn list(&self) -> Vec<EmployeeRecord>;

    /// Returns the records matching `filter`, in insertion order.
    fn filter(&self, filter: &EmployeeFilter) -> Vec<EmployeeRecord> {
        self.list()
            .into_iter()
            .filter(|record| filter.matches(record))
            .collect()
    }

    /// Looks up a record that has attrited; active employees yield `None`.
    fn find_departed(&self, id: &str) -> Option<EmployeeRecord> {
        self.find_by_id(id).filter(|record| record.attrition)
    }

    /// Inserts a record, replacing any with the same identifier.
    ///
    /// Returns the replaced record, if there was one.
    fn upsert(&self, record: EmployeeRecord) -> Option<EmployeeRecord>;

    /// Number of records held.
    fn len(&self) -> usize {
        self.list().len()
    }

    /// Returns true when no records are held.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
