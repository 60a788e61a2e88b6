//! HTTP API module for the finiquito engine.
//!
//! This module provides the REST endpoints for calculating a settlement,
//! downloading it as CSV and checking service health.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse, CalculationResponse, ENGINE_VERSION, HealthResponse};
pub use state::AppState;
