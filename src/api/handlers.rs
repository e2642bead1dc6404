//! HTTP request handlers for the Severance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::{Datelike, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    DurationSpec, apply_duration, calculate_settlement_with_limits, render_report,
};
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::{HolidayCalendar, TerminationInput, TerminationResult};

use super::request::{DueDateRequest, SettlementRequest};
use super::response::{ApiError, ApiErrorResponse, DueDateResponse, SettlementResponse};
use super::state::AppState;

/// Years past the start year covered by the configured holiday calendar.
const HOLIDAY_HORIZON_YEARS: i32 = 15;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/settlement", post(settlement_handler))
        .route("/settlement/report", post(settlement_report_handler))
        .route("/due-date", post(due_date_handler))
        .with_state(state)
}

/// Handler for POST /settlement.
///
/// Accepts a termination scenario and returns the calculated settlement.
async fn settlement_handler(
    State(state): State<AppState>,
    payload: Result<Json<SettlementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing settlement request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let config = state.config();
    let start_time = Instant::now();
    match prepare_settlement(config, request) {
        Ok((input, result)) => {
            info!(
                correlation_id = %correlation_id,
                cause = input.cause.as_str(),
                total_gross = %result.totals.total_gross,
                total_net = %result.totals.total_net,
                duration_us = start_time.elapsed().as_micros(),
                "Settlement completed successfully"
            );
            let response = SettlementResponse {
                calculation_id: correlation_id,
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                statute: config.statute().code.clone(),
                minimum_wage: input.minimum_wage,
                result,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Settlement failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /settlement/report.
///
/// Same body as /settlement; returns the printable report as plain text.
async fn settlement_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<SettlementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing settlement report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match prepare_settlement(state.config(), request) {
        Ok((input, result)) => {
            let report = render_report(&input, &result);
            info!(
                correlation_id = %correlation_id,
                lines = result.lines.len(),
                "Settlement report rendered"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                report,
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Settlement report failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /due-date.
async fn due_date_handler(
    State(state): State<AppState>,
    payload: Result<Json<DueDateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing due-date request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match compute_due_date(state.config(), request) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                start = %response.start,
                due = %response.due,
                "Due date computed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(api_error) => {
            warn!(
                correlation_id = %correlation_id,
                code = %api_error.error.code,
                error = %api_error.error.message,
                "Due-date request rejected"
            );
            error_response(api_error)
        }
    }
}

/// Resolves the minimum wage and runs the settlement calculation.
fn prepare_settlement(
    config: &ConfigLoader,
    request: SettlementRequest,
) -> EngineResult<(TerminationInput, TerminationResult)> {
    let minimum_wage = match request.minimum_wage {
        Some(wage) => wage,
        None => config.minimum_wage_on(request.termination_date)?,
    };

    let input = request.into_input(minimum_wage);
    let result = calculate_settlement_with_limits(&input, config.limits())?;
    Ok((input, result))
}

/// Parses the requested duration and applies it to the start instant.
fn compute_due_date(
    config: &ConfigLoader,
    request: DueDateRequest,
) -> Result<DueDateResponse, ApiErrorResponse> {
    let duration_text = request
        .resolved_duration_text()
        .ok_or_else(|| ApiErrorResponse::bad_request(ApiError::missing_duration()))?;
    let kind = request.resolved_kind();
    let duration = DurationSpec::parse_strict(&duration_text, config.limits().max_duration_amount)?;

    let holidays = match &request.holidays {
        Some(dates) => HolidayCalendar::from_dates(dates.iter().copied()),
        None => {
            let year = request.start.year();
            config.holiday_calendar(year, year + HOLIDAY_HORIZON_YEARS)
        }
    };

    let due = apply_duration(request.start, duration, kind, &holidays)?;

    Ok(DueDateResponse {
        start: request.start,
        due,
        duration_text,
        duration,
        kind,
    })
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
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
    error_response(ApiErrorResponse::bad_request(error))
}
