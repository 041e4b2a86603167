//! HTTP request handlers for the attendance engine API.
//!
//! This module contains the handler functions for all API endpoints.
//! Handlers convert request DTOs into domain types, call the pure
//! calculation core, and map engine errors onto HTTP statuses. A
//! failure for one employee or one session never aborts the rest of a
//! batch; it degrades to an "unknown" marker in that row instead.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    EXPORT_GRACE_MINUTES, classify_interval, compute_leave_balance, evaluate_lateness,
};
use crate::error::EngineError;
use crate::models::{
    AttendanceSession, Employee, LeaveRecord, SessionKind, ShiftRoster,
};

use super::request::{
    BatchLeaveBalanceRequest, ClassifyRequest, LatenessRequest, LeaveBalanceRequest,
    SessionsReportRequest, ValidateLeaveRecordRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, BalanceRow, BatchLeaveBalanceResponse, SessionReportRow,
    SessionsReportResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/classify", post(classify_handler))
        .route("/lateness", post(lateness_handler))
        .route("/leave-balance", post(leave_balance_handler))
        .route("/leave-balance/batch", post(leave_balance_batch_handler))
        .route("/sessions/report", post(sessions_report_handler))
        .route("/leave-records/validate", post(validate_leave_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection onto an API error body.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
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
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Unwraps a JSON payload or produces the 400 response for it.
macro_rules! extract_json {
    ($correlation_id:expr, $payload:expr) => {
        match $payload {
            Ok(Json(request)) => request,
            Err(rejection) => {
                let error = rejection_to_error($correlation_id, rejection);
                return (StatusCode::BAD_REQUEST, Json(error)).into_response();
            }
        }
    };
}

/// Handler for the `POST /classify` endpoint.
///
/// Classifies one check-in/check-out interval into minute buckets.
async fn classify_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = extract_json!(correlation_id, payload);

    let rules = state.config().config().workday();
    match classify_interval(request.check_in, request.check_out, rules) {
        Ok(buckets) => {
            info!(
                correlation_id = %correlation_id,
                worked_minutes = buckets.worked_minutes,
                "Interval classified"
            );
            (StatusCode::OK, Json(buckets)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Classification failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for the `POST /lateness` endpoint.
async fn lateness_handler(
    State(state): State<AppState>,
    payload: Result<Json<LatenessRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = extract_json!(correlation_id, payload);

    let employee: Employee = request.employee.into();
    let roster: Option<ShiftRoster> = request.roster.map(Into::into);
    let grace = request.grace_minutes.unwrap_or_default();

    let shifts = state.config().config().shifts();
    match evaluate_lateness(&employee, request.check_in, roster.as_ref(), shifts, grace) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                late_minutes = result.late_minutes,
                "Lateness evaluated"
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                error = %err,
                "Lateness unknown"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for the `POST /leave-balance` endpoint.
async fn leave_balance_handler(
    State(state): State<AppState>,
    payload: Result<Json<LeaveBalanceRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = extract_json!(correlation_id, payload);

    let as_of = request.as_of_date.unwrap_or_else(|| state.today());
    let employee: Employee = request.employee.into();
    let sessions: Vec<AttendanceSession> = request.sessions.into_iter().map(Into::into).collect();
    let records: Vec<LeaveRecord> = request.leave_records.into_iter().map(Into::into).collect();

    let report = compute_leave_balance(
        &employee,
        &sessions,
        &records,
        as_of,
        state.config().config(),
    );
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        as_of = %as_of,
        remaining_hours = %report.remaining_hours,
        "Leave balance computed"
    );
    (StatusCode::OK, Json(report)).into_response()
}

/// Handler for the `POST /leave-balance/batch` endpoint.
///
/// Employees without a join date report a zero balance like everywhere
/// else; one employee's data never affects another's row.
async fn leave_balance_batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchLeaveBalanceRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = extract_json!(correlation_id, payload);

    let as_of = request.as_of_date.unwrap_or_else(|| state.today());
    let config = state.config().config();

    let results: Vec<BalanceRow> = request
        .employees
        .into_iter()
        .map(|entry| {
            let employee: Employee = entry.employee.into();
            let sessions: Vec<AttendanceSession> =
                entry.sessions.into_iter().map(Into::into).collect();
            let records: Vec<LeaveRecord> =
                entry.leave_records.into_iter().map(Into::into).collect();
            let balance = compute_leave_balance(&employee, &sessions, &records, as_of, config);
            BalanceRow {
                employee_id: employee.id,
                name: employee.name,
                balance,
            }
        })
        .collect();

    info!(
        correlation_id = %correlation_id,
        employees = results.len(),
        as_of = %as_of,
        "Batch leave balances computed"
    );
    (StatusCode::OK, Json(BatchLeaveBalanceResponse { results })).into_response()
}

/// Handler for the `POST /sessions/report` endpoint.
///
/// Enriches each closed session with its minute buckets and, for work
/// sessions, its lateness under the export grace. A session whose
/// lateness cannot be evaluated gets `lateness: null` — unknown, not on
/// time — without failing the rest of the report. Open sessions are
/// skipped and counted.
async fn sessions_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<SessionsReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = extract_json!(correlation_id, payload);

    let employee: Employee = request.employee.into();
    let roster: Option<ShiftRoster> = request.roster.map(Into::into);
    let grace = request.grace_minutes.unwrap_or(EXPORT_GRACE_MINUTES);
    let config = state.config().config();

    let mut rows = Vec::new();
    let mut skipped_open_sessions = 0usize;

    for session_request in request.sessions {
        let session: AttendanceSession = session_request.into();
        let Some((check_in, check_out)) = session.closed_interval() else {
            skipped_open_sessions += 1;
            continue;
        };

        let buckets = match classify_interval(check_in, check_out, config.workday()) {
            Ok(buckets) => buckets,
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    session_id = %session.id,
                    error = %err,
                    "Session rejected"
                );
                return ApiErrorResponse::from(err).into_response();
            }
        };

        let lateness = if session.kind == SessionKind::Work {
            match evaluate_lateness(&employee, check_in, roster.as_ref(), config.shifts(), grace) {
                Ok(result) => Some(result),
                Err(EngineError::NoApplicableSchedule { .. }) => {
                    warn!(
                        correlation_id = %correlation_id,
                        session_id = %session.id,
                        "Lateness unknown for session"
                    );
                    None
                }
                Err(err) => return ApiErrorResponse::from(err).into_response(),
            }
        } else {
            None
        };

        rows.push(SessionReportRow {
            session_id: session.id,
            kind: session.kind,
            check_in,
            check_out,
            buckets,
            lateness,
        });
    }

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        rows = rows.len(),
        skipped_open_sessions,
        "Sessions report generated"
    );
    (
        StatusCode::OK,
        Json(SessionsReportResponse {
            employee_id: employee.id,
            rows,
            skipped_open_sessions,
        }),
    )
        .into_response()
}

/// Handler for the `POST /leave-records/validate` endpoint.
///
/// Boundary validation for manual leave records: positive hours, the
/// July-September summer window, and the annual summer cap.
async fn validate_leave_handler(
    payload: Result<Json<ValidateLeaveRecordRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = extract_json!(correlation_id, payload);

    let record: LeaveRecord = request.record.into();
    let existing: Vec<LeaveRecord> = request.existing.into_iter().map(Into::into).collect();

    match record.validate(&existing) {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %record.employee_id,
                "Leave record accepted"
            );
            (StatusCode::OK, Json(serde_json::json!({ "valid": true }))).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Leave record rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}
