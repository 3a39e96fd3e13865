//! Seeded synthetic workforce.
//!
//! Produces HR-dataset-shaped records for demos, benchmarks and tests. The
//! same `(count, seed)` pair always yields the same records.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use crate::models::{EDUCATION_MAX, EmployeeRecord, SCALE_MAX, SCALE_MIN};

/// Size of the reference HR dataset.
pub const DEFAULT_WORKFORCE_SIZE: usize = 1470;

/// Departments and the roles each one staffs.
pub const DEPARTMENT_ROLES: [(&str, &[&str]); 3] = [
    (
        "Sales",
        &["Sales Executive", "Sales Representative", "Manager"],
    ),
    (
        "Research & Development",
        &[
            "Laboratory Technician",
            "Research Scientist",
            "Research Director",
            "Manufacturing Director",
            "Healthcare Representative",
        ],
    ),
    ("Human Resources", &["Human Resources", "Manager"]),
];

const MARITAL_STATUSES: [&str; 3] = ["Single", "Married", "Divorced"];
const GENDERS: [&str; 2] = ["Male", "Female"];

const MIN_AGE: u32 = 18;
const MAX_AGE: u32 = 60;
const MAX_JOB_LEVEL: u32 = 5;
const OVERTIME_SHARE: f64 = 0.28;
const MAX_ATTRITION_PROBABILITY: f64 = 0.85;
const ATTRITION_DAMPING: f64 = 0.7;

fn pick<'a, R: Rng>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

fn survey_score<R: Rng>(rng: &mut R) -> i32 {
    rng.gen_range(SCALE_MIN..=SCALE_MAX)
}

/// Likelihood of leaving implied by a record's working conditions.
///
/// Additive over the same conditions the risk rules read, before damping.
fn attrition_probability(record: &EmployeeRecord) -> f64 {
    let weights = [
        (record.job_satisfaction <= 2, 0.25),
        (record.work_life_balance <= 2, 0.20),
        (record.over_time, 0.15),
        (record.environment_satisfaction <= 2, 0.15),
        (record.distance_from_home > 20, 0.10),
        (record.years_at_company < 2, 0.25),
        (record.monthly_income < Decimal::from(3000), 0.15),
    ];
    weights
        .iter()
        .filter(|(applies, _)| *applies)
        .map(|(_, weight)| weight)
        .sum()
}

fn generate_employee<R: Rng>(rng: &mut R, index: usize) -> EmployeeRecord {
    let (department, roles) = DEPARTMENT_ROLES[rng.gen_range(0..DEPARTMENT_ROLES.len())];
    let job_role = pick(rng, roles);

    let years_at_company = rng.gen_range(0..40u32);
    let age = (22 + years_at_company + rng.gen_range(0..15u32)).clamp(MIN_AGE, MAX_AGE);

    let job_satisfaction = survey_score(rng);
    let work_life_balance = survey_score(rng);
    let environment_satisfaction = survey_score(rng);
    let relationship_satisfaction = survey_score(rng);

    let over_time = rng.gen_bool(OVERTIME_SHARE);
    let distance_from_home = rng.gen_range(1..=29u32);
    let job_level = (years_at_company / 5 + 1).min(MAX_JOB_LEVEL);
    let monthly_income = Decimal::from(1000 + job_level * 2000 + rng.gen_range(0..5000u32));

    let mut record = EmployeeRecord {
        id: format!("EMP{:04}", index + 1),
        age,
        department: department.to_string(),
        job_role: job_role.to_string(),
        years_at_company,
        monthly_income,
        distance_from_home,
        job_satisfaction,
        work_life_balance,
        environment_satisfaction,
        relationship_satisfaction,
        over_time,
        education: rng.gen_range(1..=EDUCATION_MAX),
        attrition: false,
        performance_rating: rng.gen_range(3..=SCALE_MAX),
        marital_status: pick(rng, &MARITAL_STATUSES).to_string(),
        gender: pick(rng, &GENDERS).to_string(),
        num_companies_worked: rng.gen_range(0..=9u32),
        training_times_last_year: rng.gen_range(0..=6u32),
    };

    let leave_chance =
        (attrition_probability(&record) * ATTRITION_DAMPING).min(MAX_ATTRITION_PROBABILITY);
    record.attrition = rng.gen_bool(leave_chance);
    record
}

/// Generates `count` synthetic employees with identifiers `EMP0001` onwards.
///
/// # Examples
///
/// ```
/// use attrition_engine::fixtures::generate_employees;
///
/// let employees = generate_employees(3, 7);
/// assert_eq!(employees[0].id, "EMP0001");
/// assert_eq!(employees, generate_employees(3, 7));
/// ```
pub fn generate_employees(count: usize, seed: u64) -> Vec<EmployeeRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|index| generate_employee(&mut rng, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_workforce() {
        assert_eq!(generate_employees(50, 42), generate_employees(50, 42));
    }

    #[test]
    fn test_different_seeds_differ() {
        assert_ne!(generate_employees(50, 1), generate_employees(50, 2));
    }

    #[test]
    fn test_ids_are_sequential_and_padded() {
        let employees = generate_employees(12, 3);
        assert_eq!(employees[0].id, "EMP0001");
        assert_eq!(employees[11].id, "EMP0012");
    }

    #[test]
    fn test_generated_fields_stay_in_range() {
        for record in generate_employees(500, 11) {
            assert!(record.validate().is_ok());
            assert!((MIN_AGE..=MAX_AGE).contains(&record.age));
            assert!(record.years_at_company < 40);
            assert!((1..=29).contains(&record.distance_from_home));
            for score in [
                record.job_satisfaction,
                record.work_life_balance,
                record.environment_satisfaction,
                record.relationship_satisfaction,
            ] {
                assert!((SCALE_MIN..=SCALE_MAX).contains(&score));
            }
            assert!((1..=EDUCATION_MAX).contains(&record.education));
            assert!((3..=4).contains(&record.performance_rating));
            assert!(record.num_companies_worked <= 9);
            assert!(record.training_times_last_year <= 6);
            assert!(record.monthly_income >= Decimal::from(3000));
            assert!(record.monthly_income < Decimal::from(16000));
        }
    }

    #[test]
    fn test_roles_belong_to_their_department() {
        for record in generate_employees(200, 5) {
            let (_, roles) = DEPARTMENT_ROLES
                .iter()
                .find(|(department, _)| *department == record.department)
                .unwrap();
            assert!(roles.contains(&record.job_role.as_str()));
        }
    }

    #[test]
    fn test_workforce_has_some_attrition() {
        let employees = generate_employees(DEFAULT_WORKFORCE_SIZE, 2024);
        let departed = employees.iter().filter(|e| e.attrition).count();
        assert!(departed > 0);
        assert!(departed < employees.len());
    }

    #[test]
    fn test_attrition_probability_table() {
        let record = EmployeeRecord {
            id: "EMP0001".to_string(),
            age: 30,
            department: String::new(),
            job_role: String::new(),
            years_at_company: 1,
            monthly_income: Decimal::from(2500),
            distance_from_home: 5,
            job_satisfaction: 4,
            work_life_balance: 4,
            environment_satisfaction: 4,
            relationship_satisfaction: 4,
            over_time: true,
            education: 3,
            attrition: false,
            performance_rating: 3,
            marital_status: String::new(),
            gender: String::new(),
            num_companies_worked: 0,
            training_times_last_year: 2,
        };
        // tenure 0.25 + overtime 0.15 + income 0.15
        assert!((attrition_probability(&record) - 0.55).abs() < 1e-9);
    }
}
