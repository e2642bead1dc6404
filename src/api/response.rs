//! Response types for the Severance Engine API.
//!
//! This module defines the success payloads, the error response structure
//! and the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::DurationSpec;
use crate::error::EngineError;
use crate::models::{DurationKind, TerminationResult};

/// Response body of the `/settlement` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// Code of the statute applied.
    pub statute: String,
    /// Minimum wage used for the family allowance.
    pub minimum_wage: Decimal,
    /// The settlement.
    pub result: TerminationResult,
}

/// Response body of the `/due-date` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct DueDateResponse {
    /// Instant the deadline started counting from.
    pub start: NaiveDateTime,
    /// The computed due instant.
    pub due: NaiveDateTime,
    /// The duration text that was parsed.
    pub duration_text: String,
    /// The parsed duration.
    pub duration: DurationSpec,
    /// Business or calendar days.
    pub kind: DurationKind,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a missing duration error response.
    pub fn missing_duration() -> Self {
        Self::with_details(
            "MISSING_DURATION",
            "missing field: duration_text",
            "Either 'duration_text' or 'template' must be provided",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidDateRange { .. } => {
                Self::bad_request(ApiError::new("INVALID_DATE_RANGE", message))
            }
            EngineError::MissingContractEndDate => Self::bad_request(ApiError::with_details(
                "MISSING_CONTRACT_END_DATE",
                message,
                "Set 'contract_end_date' for fixed_term contracts",
            )),
            EngineError::InvalidNumericInput { field, .. } => {
                Self::bad_request(ApiError::with_details(
                    "INVALID_NUMERIC_INPUT",
                    message,
                    format!("Field '{}' must be zero or positive", field),
                ))
            }
            EngineError::InvalidInput { .. } => {
                Self::bad_request(ApiError::validation_error(message))
            }
            EngineError::DegenerateDurationText { .. } => {
                Self::bad_request(ApiError::new("DEGENERATE_DURATION", message))
            }
            EngineError::DurationOutOfRange { .. } => {
                Self::bad_request(ApiError::new("DURATION_OUT_OF_RANGE", message))
            }
            EngineError::MinimumWageNotFound { .. } => Self::bad_request(ApiError::with_details(
                "MINIMUM_WAGE_NOT_FOUND",
                message,
                "Provide 'minimum_wage' in the request",
            )),
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}
