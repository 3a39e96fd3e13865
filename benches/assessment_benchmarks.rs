//! Performance benchmarks for the attrition engine.
//!
//! Covers the pure scoring path for one record, the rayon batch paths over a
//! synthetic workforce, and a round trip through the HTTP router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use attrition_engine::analysis::{analyze_departure, assess_risk, plan_retention};
use attrition_engine::api::{AppState, create_router};
use attrition_engine::batch::{assess_batch, plan_retention_batch};
use attrition_engine::config::RiskPolicy;
use attrition_engine::fixtures::{DEFAULT_WORKFORCE_SIZE, generate_employees};
use attrition_engine::models::EmployeeRecord;
use attrition_engine::repository::InMemoryEmployeeRepository;
use attrition_engine::stats::summarize;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const SEED: u64 = 7;

/// Picks the highest-risk record of a small synthetic sample.
fn at_risk_employee(policy: &RiskPolicy) -> EmployeeRecord {
    generate_employees(200, SEED)
        .into_iter()
        .max_by_key(|record| assess_risk(record, policy).risk_score)
        .expect("sample is not empty")
}

fn bench_single_record(c: &mut Criterion) {
    let policy = RiskPolicy::default();
    let record = at_risk_employee(&policy);

    c.bench_function("assess_risk", |b| {
        b.iter(|| black_box(assess_risk(black_box(&record), &policy)))
    });

    c.bench_function("analyze_departure", |b| {
        b.iter(|| black_box(analyze_departure(black_box(&record), &policy)))
    });

    let assessment = assess_risk(&record, &policy);
    c.bench_function("plan_retention", |b| {
        b.iter(|| black_box(plan_retention(black_box(&record), &assessment, &policy)))
    });
}

fn bench_batches(c: &mut Criterion) {
    let policy = RiskPolicy::default();
    let mut group = c.benchmark_group("batch_processing");

    for size in [100usize, 1000, DEFAULT_WORKFORCE_SIZE] {
        let records = generate_employees(size, SEED);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("assess_batch", size), &records, |b, records| {
            b.iter(|| black_box(assess_batch(records, &policy)))
        });

        group.bench_with_input(
            BenchmarkId::new("plan_retention_batch", size),
            &records,
            |b, records| b.iter(|| black_box(plan_retention_batch(records, &policy))),
        );
    }

    group.finish();
}

fn bench_workforce_summary(c: &mut Criterion) {
    let policy = RiskPolicy::default();
    let records = generate_employees(DEFAULT_WORKFORCE_SIZE, SEED);

    c.bench_function("summarize_workforce", |b| {
        b.iter(|| black_box(summarize(&records, &policy)))
    });
}

fn bench_http_assess(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let policy = RiskPolicy::default();
    let body = serde_json::to_string(&at_risk_employee(&policy)).unwrap();
    let router = create_router(AppState::new(
        policy,
        Arc::new(InMemoryEmployeeRepository::new()),
    ));

    c.bench_function("http_assess", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/assess")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_single_record,
    bench_batches,
    bench_workforce_summary,
    bench_http_assess
);
criterion_main!(benches);
