//! HTTP API module for the attrition engine.
//!
//! This module exposes risk assessment, departure analysis, retention
//! planning, alerts and workforce statistics as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BatchRequest, EmployeeQuery};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
