//! HTTP request handlers for the finiquito engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::generate_calculation;
use crate::error::{EngineError, EngineResult};
use crate::export::{CSV_CONTENT_TYPE, export_file_name, render_csv};
use crate::models::CalculationResult;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, HealthResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/export/csv", post(export_csv_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

fn json_error(status: StatusCode, error: ApiError) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Maps a body extraction failure to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("unknown variant") {
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

    json_error(StatusCode::BAD_REQUEST, error)
}

fn engine_error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_error(api_error.status, api_error.error)
}

/// Runs the engine for a parsed request, filling defaults from the loaded law.
fn run_calculation(state: &AppState, request: CalculationRequest) -> EngineResult<CalculationResult> {
    let config = state.engine_config();
    let input = request.into_input(config.benefit_floors());
    generate_calculation(&input, config)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the settlement wrapped in a
/// [`CalculationResponse`].
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match run_calculation(&state, request) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                cause = result.input.cause.code(),
                total_days = result.antiquity.total_days,
                total = %result.scenario_a.total,
                warnings = result.audit_trace.warnings.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            let law_code = state.engine_config().law().code.clone();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(CalculationResponse::new(correlation_id, law_code, result)),
            )
                .into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /export/csv endpoint.
///
/// Accepts the same body as `/calculate` and returns the CSV sheet as an
/// attachment.
async fn export_csv_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing CSV export request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let rendered = run_calculation(&state, request).and_then(|result| {
        let body = render_csv(&result)?;
        Ok((export_file_name(&result.input.worker_name), body))
    });

    match rendered {
        Ok((file_name, body)) => {
            info!(
                correlation_id = %correlation_id,
                file_name = %file_name,
                bytes = body.len(),
                "CSV export completed"
            );
            // Worker names may be non-ASCII; header values allow raw UTF-8 bytes.
            let disposition =
                HeaderValue::from_bytes(format!("attachment; filename=\"{}\"", file_name).as_bytes())
                    .unwrap_or_else(|_| {
                        HeaderValue::from_static("attachment; filename=\"calculo_finiquito.csv\"")
                    });
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, HeaderValue::from_static(CSV_CONTENT_TYPE)),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                body,
            )
                .into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for GET /health endpoint.
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        law_code: state.engine_config().law().code.clone(),
    })
}
