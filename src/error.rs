//! Error types for the attendance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during time and leave
//! accounting.
//!
//! A missing join date is deliberately *not* an error: entitlement
//! computations return zero hours for such employees so that legacy
//! records render as "0d 0h" instead of failing (see
//! [`crate::calculation::entitled_hours`]).

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the attendance engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A check-out instant preceded its check-in instant.
    ///
    /// Raised by interval classification; never silently clamped.
    #[error("Invalid interval: check-out {check_out} precedes check-in {check_in}")]
    InvalidInterval {
        /// The check-in instant of the offending interval.
        check_in: NaiveDateTime,
        /// The check-out instant of the offending interval.
        check_out: NaiveDateTime,
    },

    /// Lateness could not be evaluated for an employee.
    ///
    /// The employee has neither a default start time nor a resolvable
    /// shift code for the check-in day. Callers must treat this as
    /// "lateness unknown", not as "on time".
    #[error("No applicable schedule for employee {employee_id} on {date}")]
    NoApplicableSchedule {
        /// The employee whose schedule could not be resolved.
        employee_id: Uuid,
        /// The calendar date of the check-in being evaluated.
        date: NaiveDate,
    },

    /// A manual leave record failed boundary validation.
    #[error("Invalid leave record field '{field}': {message}")]
    InvalidLeaveRecord {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
