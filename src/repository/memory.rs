//! In-memory repository backed by a vector.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::EmployeeRecord;

use super::EmployeeRepository;

/// Keeps records in insertion order behind a read-write lock.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    records: RwLock<Vec<EmployeeRecord>>,
}

impl InMemoryEmployeeRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with `records`.
    ///
    /// Later duplicates of an identifier replace earlier ones in place.
    pub fn with_records(records: impl IntoIterator<Item = EmployeeRecord>) -> Self {
        let repository = Self::new();
        for record in records {
            repository.upsert(record);
        }
        repository
    }

    // Writers replace whole records, so poisoned data is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, Vec<EmployeeRecord>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<EmployeeRecord>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn find_by_id(&self, id: &str) -> Option<EmployeeRecord> {
        self.read()
            .iter()
            .find(|record| record.id.eq_ignore_ascii_case(id))
            .cloned()
    }

    fn list(&self) -> Vec<EmployeeRecord> {
        self.read().clone()
    }

    fn upsert(&self, record: EmployeeRecord) -> Option<EmployeeRecord> {
        let mut records = self.write();
        match records
            .iter_mut()
            .find(|existing| existing.id.eq_ignore_ascii_case(&record.id))
        {
            Some(existing) => Some(std::mem::replace(existing, record)),
            None => {
                records.push(record);
                None
            }
        }
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::EmployeeFilter;
    use crate::test_support::{content_employee, overloaded_employee};

    fn seeded() -> InMemoryEmployeeRepository {
        InMemoryEmployeeRepository::with_records([
            content_employee(),
            EmployeeRecord {
                attrition: true,
                department: "Sales".to_string(),
                ..overloaded_employee()
            },
        ])
    }

    #[test]
    fn test_find_by_id_ignores_case() {
        let repository = seeded();

        let found = repository.find_by_id("emp0100").unwrap();
        assert_eq!(found.id, "EMP0100");
        assert!(repository.find_by_id("EMP9999").is_none());
    }

    #[test]
    fn test_find_departed_requires_attrition() {
        let repository = seeded();

        assert!(repository.find_departed("EMP0100").is_none());
        assert_eq!(repository.find_departed("emp0200").unwrap().id, "EMP0200");
        assert!(repository.find_departed("EMP9999").is_none());
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let repository = seeded();
        let updated = EmployeeRecord {
            over_time: true,
            ..content_employee()
        };

        let previous = repository.upsert(updated).unwrap();
        assert!(!previous.over_time);

        let ids: Vec<String> = repository.list().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["EMP0100", "EMP0200"]);
        assert!(repository.find_by_id("EMP0100").unwrap().over_time);
    }

    #[test]
    fn test_upsert_appends_new_ids() {
        let repository = InMemoryEmployeeRepository::new();
        assert!(repository.is_empty());

        assert!(repository.upsert(content_employee()).is_none());
        assert_eq!(repository.len(), 1);
    }

    #[test]
    fn test_filter_by_department_and_attrition() {
        let repository = seeded();

        let sales = repository.filter(&EmployeeFilter {
            department: Some("SALES".to_string()),
            ..EmployeeFilter::default()
        });
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].id, "EMP0200");

        let active = repository.filter(&EmployeeFilter {
            attrition: Some(false),
            ..EmployeeFilter::default()
        });
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "EMP0100");
    }
}
