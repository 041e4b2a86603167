//! Response types for the attendance engine API.
//!
//! This module defines the error response structures, the mapping from
//! engine errors to HTTP statuses, and the composite response bodies
//! for the batch and report endpoints.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{BalanceReport, LatenessResult, TimeBuckets};
use crate::error::EngineError;
use crate::models::SessionKind;

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
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidInterval {
                check_in,
                check_out,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INTERVAL",
                    "Check-out precedes check-in",
                    format!("check_in {}, check_out {}", check_in, check_out),
                ),
            },
            EngineError::NoApplicableSchedule { employee_id, date } => ApiErrorResponse {
                // Lateness is unknown, not wrong: the request was
                // well-formed but no schedule covers it.
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "NO_APPLICABLE_SCHEDULE",
                    "Lateness unknown: no applicable schedule",
                    format!("employee {} on {}", employee_id, date),
                ),
            },
            EngineError::InvalidLeaveRecord { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_LEAVE_RECORD",
                    format!("Invalid leave record field '{}'", field),
                    message,
                ),
            },
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
        }
    }
}

/// One employee's row in a batch balance response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceRow {
    /// The employee reported on.
    pub employee_id: Uuid,
    /// The employee's display name.
    pub name: String,
    /// The computed balance.
    pub balance: BalanceReport,
}

/// Response body for the `/leave-balance/batch` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchLeaveBalanceResponse {
    /// One row per requested employee, in request order.
    pub results: Vec<BalanceRow>,
}

/// One enriched session in a sessions report.
///
/// `lateness` is `None` when it could not be evaluated — no applicable
/// schedule, or a non-work session — which callers must render as
/// "unknown", not "on time".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReportRow {
    /// The session reported on.
    pub session_id: Uuid,
    /// The kind of session.
    pub kind: SessionKind,
    /// The clock-in instant.
    pub check_in: NaiveDateTime,
    /// The clock-out instant.
    pub check_out: NaiveDateTime,
    /// The session's minute buckets.
    pub buckets: TimeBuckets,
    /// The lateness evaluation, when one applies.
    pub lateness: Option<LatenessResult>,
}

/// Response body for the `/sessions/report` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionsReportResponse {
    /// The employee reported on.
    pub employee_id: Uuid,
    /// One row per closed session, in request order.
    pub rows: Vec<SessionReportRow>,
    /// Open sessions skipped because they have no check-out yet.
    pub skipped_open_sessions: usize,
}
