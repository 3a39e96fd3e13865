//! Attrition engine HTTP server.
//!
//! Environment:
//! - `ATTRITION_POLICY`: risk policy YAML (default `./config/risk_policy.yaml`)
//! - `ATTRITION_ADDR`: listen address (default `0.0.0.0:3000`)
//! - `ATTRITION_SEED`: seed for the synthetic workforce (default `42`)
//! - `RUST_LOG`: log filter (default `info`)

use std::env;
use std::error::Error;
use std::sync::Arc;

use tracing::info;

use attrition_engine::api::{AppState, create_router};
use attrition_engine::config::PolicyLoader;
use attrition_engine::fixtures::{DEFAULT_WORKFORCE_SIZE, generate_employees};
use attrition_engine::logging;
use attrition_engine::repository::InMemoryEmployeeRepository;

const DEFAULT_POLICY_PATH: &str = "./config/risk_policy.yaml";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_SEED: u64 = 42;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    let policy_path =
        env::var("ATTRITION_POLICY").unwrap_or_else(|_| DEFAULT_POLICY_PATH.to_string());
    let policy = PolicyLoader::load_or_default(&policy_path)?;
    info!(
        path = %policy_path,
        plan_threshold = policy.plan_threshold,
        "Risk policy ready"
    );

    let seed = match env::var("ATTRITION_SEED") {
        Ok(raw) => raw.parse::<u64>()?,
        Err(_) => DEFAULT_SEED,
    };
    let employees = generate_employees(DEFAULT_WORKFORCE_SIZE, seed);
    info!(employees = employees.len(), seed, "Seeded employee repository");
    let repository = InMemoryEmployeeRepository::with_records(employees);

    let router = create_router(AppState::new(policy, Arc::new(repository)));

    let addr = env::var("ATTRITION_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Attrition engine listening");
    axum::serve(listener, router).await?;

    Ok(())
}
