//! Attendance session model and related types.
//!
//! This module defines the AttendanceSession struct and SessionKind enum
//! for representing clock-in/clock-out records.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the kind of an attendance session.
///
/// Leave kinds other than paid/unpaid leave are recorded as manual
/// [`crate::models::LeaveRecord`] entries instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    /// A regular working session.
    #[default]
    Work,
    /// A session consuming statutory paid leave.
    PaidLeave,
    /// A session recording unpaid leave.
    UnpaidLeave,
}

/// Represents one clock-in/clock-out session for an employee.
///
/// A session is created open at clock-in (`check_out` absent) and closed
/// at clock-out. Open sessions are not eligible for time-bucket
/// classification or leave-consumption accounting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSession {
    /// Unique identifier for the session.
    pub id: Uuid,
    /// The employee this session belongs to.
    pub employee_id: Uuid,
    /// The kind of session.
    #[serde(default)]
    pub kind: SessionKind,
    /// The clock-in instant.
    pub check_in: NaiveDateTime,
    /// The clock-out instant, absent while the session is open.
    ///
    /// Invariant: when present, must be at or after `check_in`.
    #[serde(default)]
    pub check_out: Option<NaiveDateTime>,
    /// Whether the session has been closed out.
    #[serde(default)]
    pub completed: bool,
}

impl AttendanceSession {
    /// Returns the closed `(check_in, check_out)` interval, or `None`
    /// while the session is still open.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::{AttendanceSession, SessionKind};
    /// use chrono::NaiveDateTime;
    /// use uuid::Uuid;
    ///
    /// let open = AttendanceSession {
    ///     id: Uuid::nil(),
    ///     employee_id: Uuid::nil(),
    ///     kind: SessionKind::Work,
    ///     check_in: NaiveDateTime::parse_from_str("2025-04-01 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     check_out: None,
    ///     completed: false,
    /// };
    /// assert!(open.closed_interval().is_none());
    /// ```
    pub fn closed_interval(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        self.check_out.map(|out| (self.check_in, out))
    }

    /// Returns the session duration in whole minutes, or `None` while
    /// the session is open.
    pub fn duration_minutes(&self) -> Option<i64> {
        self.closed_interval()
            .map(|(check_in, check_out)| (check_out - check_in).num_minutes())
    }
}
