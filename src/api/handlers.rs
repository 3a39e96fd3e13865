//! HTTP request handlers for the attrition engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::analysis::{analyze_departure, assess_risk, build_alert, plan_retention};
use crate::batch::{assess_batch, build_alerts, plan_retention_batch};
use crate::error::EngineError;
use crate::models::{AlertStatus, EmployeeRecord, RiskAlert};
use crate::stats::summarize;

use super::request::{BatchRequest, EmployeeQuery};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/assess", post(assess_handler))
        .route("/assess/batch", post(assess_batch_handler))
        .route("/departure", post(departure_handler))
        .route("/retention", post(retention_handler))
        .route("/retention/batch", post(retention_batch_handler))
        .route("/employees", get(list_employees_handler))
        .route("/employees/:id/assessment", get(employee_assessment_handler))
        .route("/employees/:id/departure", get(employee_departure_handler))
        .route("/alerts", get(alerts_handler))
        .route("/alerts/:id/viewed", post(alert_viewed_handler))
        .route("/alerts/:id/action-taken", post(alert_action_taken_handler))
        .route("/stats", get(stats_handler))
        .with_state(state)
}

/// Serializes a successful result as a 200 JSON response.
fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a body extraction failure to a 400 error.
///
/// Missing keys and wrong value types are validation errors; anything that is
/// not parseable JSON at all is malformed.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("invalid type") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::new(StatusCode::BAD_REQUEST, error)
}

/// Converts an engine error into a response, logging it first.
fn engine_error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request rejected"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Unwraps and validates a single-record body.
fn extract_record(
    payload: Result<Json<EmployeeRecord>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<EmployeeRecord, Response> {
    let Json(record) =
        payload.map_err(|rejection| rejection_response(rejection, correlation_id).into_response())?;
    record
        .validate()
        .map_err(|err| engine_error_response(err, correlation_id))?;
    Ok(record)
}

/// Unwraps and validates a batch body.
fn extract_batch(
    payload: Result<Json<BatchRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<BatchRequest, Response> {
    let Json(request) =
        payload.map_err(|rejection| rejection_response(rejection, correlation_id).into_response())?;
    request
        .validate()
        .map_err(|err| engine_error_response(err, correlation_id))?;
    Ok(request)
}

/// Runs CPU-bound evaluation on the blocking pool so the async workers stay free.
async fn run_blocking<T, F>(work: F, correlation_id: Uuid) -> Result<T, Response>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work).await.map_err(|err| {
        error!(
            correlation_id = %correlation_id,
            error = %err,
            "Evaluation task failed"
        );
        ApiErrorResponse::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::internal_error("Evaluation task failed"),
        )
        .into_response()
    })
}

/// Looks up a stored employee, answering 404 when absent.
fn lookup_employee(
    state: &AppState,
    id: &str,
    departed_only: bool,
    correlation_id: Uuid,
) -> Result<EmployeeRecord, Response> {
    let found = if departed_only {
        state.employees().find_departed(id)
    } else {
        state.employees().find_by_id(id)
    };
    found.ok_or_else(|| {
        engine_error_response(
            EngineError::EmployeeNotFound { id: id.to_string() },
            correlation_id,
        )
    })
}

/// Handler for POST /assess.
///
/// Scores one employee record.
async fn assess_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRecord>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing assessment request");

    let record = match extract_record(payload, correlation_id) {
        Ok(record) => record,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let assessment = assess_risk(&record, state.policy());
    info!(
        correlation_id = %correlation_id,
        employee_id = %record.id,
        risk_score = assessment.risk_score,
        risk_tier = %assessment.risk_tier,
        duration_us = start_time.elapsed().as_micros(),
        "Assessment completed successfully"
    );
    json_ok(assessment)
}

/// Handler for POST /assess/batch.
///
/// Returns one assessment per record, in request order.
async fn assess_batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch assessment request");

    let request = match extract_batch(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let policy = state.shared_policy();
    let work = move || assess_batch(&request.employees, &policy);
    let assessments = match run_blocking(work, correlation_id).await {
        Ok(assessments) => assessments,
        Err(response) => return response,
    };
    info!(
        correlation_id = %correlation_id,
        records = assessments.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Batch assessment completed successfully"
    );
    json_ok(assessments)
}

/// Handler for POST /departure.
///
/// Explains a departure. The record is analyzed whether or not its
/// `attrition` flag is set, so callers can run "what if they left" checks.
async fn departure_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRecord>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing departure analysis request");

    let record = match extract_record(payload, correlation_id) {
        Ok(record) => record,
        Err(response) => return response,
    };

    let analysis = analyze_departure(&record, state.policy());
    info!(
        correlation_id = %correlation_id,
        employee_id = %record.id,
        overall_severity = ?analysis.overall_severity,
        preventable = analysis.preventable,
        "Departure analysis completed successfully"
    );
    json_ok(analysis)
}

/// Handler for POST /retention.
///
/// Answers `null` when the employee's score is below the plan threshold.
async fn retention_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRecord>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing retention request");

    let record = match extract_record(payload, correlation_id) {
        Ok(record) => record,
        Err(response) => return response,
    };

    let policy = state.policy();
    let assessment = assess_risk(&record, policy);
    let plan = plan_retention(&record, &assessment, policy);
    info!(
        correlation_id = %correlation_id,
        employee_id = %record.id,
        risk_score = assessment.risk_score,
        planned = plan.is_some(),
        "Retention request completed successfully"
    );
    json_ok(plan)
}

/// Handler for POST /retention/batch.
///
/// Returns plans for the at-risk records only, highest risk first.
async fn retention_batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch retention request");

    let request = match extract_batch(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let records = request.employees.len();
    let policy = state.shared_policy();
    let plans = match run_blocking(
        move || plan_retention_batch(&request.employees, &policy),
        correlation_id,
    )
    .await
    {
        Ok(plans) => plans,
        Err(response) => return response,
    };
    info!(
        correlation_id = %correlation_id,
        records,
        plans = plans.len(),
        "Batch retention completed successfully"
    );
    json_ok(plans)
}

/// Handler for GET /employees/:id/assessment.
async fn employee_assessment_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Looking up assessment");

    match lookup_employee(&state, &id, false, correlation_id) {
        Ok(record) => json_ok(assess_risk(&record, state.policy())),
        Err(response) => response,
    }
}

/// Handler for GET /employees/:id/departure.
///
/// Only employees who have left are found here.
async fn employee_departure_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Looking up departure");

    match lookup_employee(&state, &id, true, correlation_id) {
        Ok(record) => json_ok(analyze_departure(&record, state.policy())),
        Err(response) => response,
    }
}

/// Handler for GET /employees.
///
/// Lists stored employees matching the optional `department`, `attrition`
/// and `search` query parameters, in storage order.
async fn list_employees_handler(
    State(state): State<AppState>,
    query: Result<Query<EmployeeQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection,
                "Invalid employee query"
            );
            return ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::validation_error(rejection.body_text()),
            )
            .into_response();
        }
    };

    let filter = query.into_filter();
    let employees = state.employees().filter(&filter);
    info!(
        correlation_id = %correlation_id,
        department = ?filter.department,
        attrition = ?filter.attrition,
        search = ?filter.search,
        employees = employees.len(),
        "Employees listed"
    );
    json_ok(employees)
}

/// Handler for GET /alerts.
///
/// Raises an alert for every stored employee at or above the plan threshold,
/// each carrying its recorded workflow status.
async fn alerts_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();

    let employees = state.employees().list();
    let records = employees.len();
    let policy = state.shared_policy();
    let statuses = state.shared_alert_statuses();
    let alerts = match run_blocking(
        move || build_alerts(&employees, &policy, statuses.as_ref(), Utc::now()),
        correlation_id,
    )
    .await
    {
        Ok(alerts) => alerts,
        Err(response) => return response,
    };
    info!(
        correlation_id = %correlation_id,
        employees = records,
        alerts = alerts.len(),
        "Alerts generated"
    );
    json_ok(alerts)
}

/// Records a workflow status on the open alert for `id`.
///
/// Answers 404 when the employee is unknown or below the alert threshold.
fn update_alert_status(
    state: &AppState,
    id: &str,
    status: AlertStatus,
    correlation_id: Uuid,
) -> Result<RiskAlert, Response> {
    let policy = state.policy();
    let alert = state.employees().find_by_id(id).and_then(|record| {
        let assessment = assess_risk(&record, policy);
        build_alert(&record, &assessment, policy, Utc::now())
    });
    let Some(mut alert) = alert else {
        return Err(engine_error_response(
            EngineError::AlertNotFound { id: id.to_string() },
            correlation_id,
        ));
    };

    let previous = state.alert_statuses().set_status(&alert.id, status);
    alert.status = status;
    info!(
        correlation_id = %correlation_id,
        alert_id = %alert.id,
        previous = ?previous,
        status = ?status,
        "Alert status updated"
    );
    Ok(alert)
}

/// Handler for POST /alerts/:id/viewed.
async fn alert_viewed_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();

    match update_alert_status(&state, &id, AlertStatus::Viewed, correlation_id) {
        Ok(alert) => json_ok(alert),
        Err(response) => response,
    }
}

/// Handler for POST /alerts/:id/action-taken.
async fn alert_action_taken_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    match update_alert_status(&state, &id, AlertStatus::ActionTaken, correlation_id) {
        Ok(alert) => json_ok(alert),
        Err(response) => response,
    }
}

/// Handler for GET /stats.
async fn stats_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();

    let employees = state.employees().list();
    let policy = state.shared_policy();
    let work = move || summarize(&employees, &policy);
    let summary = match run_blocking(work, correlation_id).await {
        Ok(summary) => summary,
        Err(response) => return response,
    };
    info!(
        correlation_id = %correlation_id,
        employees = summary.total_employees,
        attrition_rate = summary.attrition_rate,
        "Workforce summary generated"
    );
    json_ok(summary)
}
