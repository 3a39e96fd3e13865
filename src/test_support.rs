//! Shared fixtures for unit tests.

use rust_decimal::Decimal;

use crate::models::EmployeeRecord;

/// A record that triggers no risk rule and no leave rule.
pub(crate) fn content_employee() -> EmployeeRecord {
    EmployeeRecord {
        id: "EMP0100".to_string(),
        age: 40,
        department: "Research & Development".to_string(),
        job_role: "Research Scientist".to_string(),
        years_at_company: 6,
        monthly_income: Decimal::new(20000, 0),
        distance_from_home: 5,
        job_satisfaction: 4,
        work_life_balance: 4,
        environment_satisfaction: 4,
        relationship_satisfaction: 4,
        over_time: false,
        education: 3,
        attrition: false,
        performance_rating: 3,
        marital_status: "Married".to_string(),
        gender: "Female".to_string(),
        num_companies_worked: 1,
        training_times_last_year: 3,
    }
}

/// A record that triggers every risk rule (raw weight 129, score 100).
pub(crate) fn overloaded_employee() -> EmployeeRecord {
    EmployeeRecord {
        id: "EMP0200".to_string(),
        job_satisfaction: 1,
        work_life_balance: 1,
        over_time: true,
        distance_from_home: 25,
        years_at_company: 1,
        environment_satisfaction: 1,
        age: 30,
        monthly_income: Decimal::new(5000, 0),
        training_times_last_year: 0,
        ..content_employee()
    }
}
