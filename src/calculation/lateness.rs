//! Lateness evaluation against a fixed start time or a shift roster.
//!
//! Non-shift workers are measured against their daily default start
//! time. Shift workers are measured against the start time of the shift
//! code rostered for the check-in weekday, with two overnight
//! corrections: an early-morning check-in with no code for its own
//! weekday falls back to the previous weekday's code, and a negative
//! minute-of-day difference is shifted by one day so arrivals past
//! midnight compare against the night shift that started the evening
//! before.

use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::config::ShiftTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, ShiftRoster};

/// Default lateness grace in minutes: any late arrival is flagged.
pub const DEFAULT_GRACE_MINUTES: i64 = 0;

/// Grace in minutes used by export reporting: arrivals up to five
/// minutes late are not flagged.
pub const EXPORT_GRACE_MINUTES: i64 = 5;

/// Check-ins earlier than this hour may belong to the previous day's
/// overnight shift.
const OVERNIGHT_CUTOFF_HOUR: u32 = 5;

/// Minutes in one day.
const MINUTES_PER_DAY: i64 = 1440;

/// The outcome of a lateness evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatenessResult {
    /// Whether the arrival counts as late under the applied grace.
    pub is_late: bool,
    /// Minutes past the expected start; zero when on time or early.
    /// Reported in full even when the grace keeps `is_late` down.
    pub late_minutes: i64,
}

/// Evaluates whether a check-in was late.
///
/// Non-shift workers require a `default_start_time`; shift workers
/// require a roster covering the check-in's weekday (or the previous
/// weekday for early-morning arrivals) plus a shift table resolving the
/// rostered code.
///
/// # Arguments
///
/// * `employee` - The employee whose schedule applies
/// * `check_in` - The clock-in instant being evaluated
/// * `roster` - The employee's roster for the check-in month, when one exists
/// * `shifts` - The shift-code start-time table
/// * `grace_minutes` - Tolerance below which a late arrival is not flagged
///
/// # Errors
///
/// Returns [`EngineError::NoApplicableSchedule`] when neither a default
/// start time nor a resolvable shift code exists. Callers must surface
/// this as "lateness unknown", never as "on time".
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::{evaluate_lateness, DEFAULT_GRACE_MINUTES};
/// use attendance_engine::config::ShiftTable;
/// use attendance_engine::models::{Employee, EmploymentCategory};
/// use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
/// use uuid::Uuid;
///
/// let employee = Employee {
///     id: Uuid::nil(),
///     name: "Sato Kenji".to_string(),
///     department: None,
///     join_date: Some(NaiveDate::from_ymd_opt(2020, 4, 1).unwrap()),
///     category: EmploymentCategory::FullTime,
///     is_shift_worker: false,
///     default_start_time: Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
///     resigned: false,
/// };
/// let check_in = NaiveDateTime::parse_from_str("2025-04-01 09:07:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let result = evaluate_lateness(
///     &employee,
///     check_in,
///     None,
///     &ShiftTable::statutory(),
///     DEFAULT_GRACE_MINUTES,
/// ).unwrap();
/// assert!(result.is_late);
/// assert_eq!(result.late_minutes, 7);
/// ```
pub fn evaluate_lateness(
    employee: &Employee,
    check_in: NaiveDateTime,
    roster: Option<&ShiftRoster>,
    shifts: &ShiftTable,
    grace_minutes: i64,
) -> EngineResult<LatenessResult> {
    let late_minutes = if employee.is_shift_worker {
        shift_late_minutes(employee, check_in, roster, shifts)?
    } else {
        fixed_late_minutes(employee, check_in)?
    };

    Ok(LatenessResult {
        is_late: late_minutes > grace_minutes,
        late_minutes,
    })
}

/// Fixed-start lateness: minute-of-day difference, floored at zero.
fn fixed_late_minutes(employee: &Employee, check_in: NaiveDateTime) -> EngineResult<i64> {
    let start = employee
        .default_start_time
        .ok_or(EngineError::NoApplicableSchedule {
            employee_id: employee.id,
            date: check_in.date(),
        })?;
    Ok((minute_of_day(check_in.time()) - minute_of_day(start)).max(0))
}

/// Shift-roster lateness.
///
/// The rostered code is looked up by the check-in weekday; an
/// early-morning check-in (before 05:00) with no code of its own
/// belongs to the previous weekday's overnight shift. A negative
/// minute-of-day difference means the expected start was on the
/// previous calendar day, so one day is added back.
fn shift_late_minutes(
    employee: &Employee,
    check_in: NaiveDateTime,
    roster: Option<&ShiftRoster>,
    shifts: &ShiftTable,
) -> EngineResult<i64> {
    let no_schedule = || EngineError::NoApplicableSchedule {
        employee_id: employee.id,
        date: check_in.date(),
    };

    let roster = roster.ok_or_else(no_schedule)?;
    let weekday = check_in.weekday();
    let early_morning = check_in.hour() < OVERNIGHT_CUTOFF_HOUR;

    let code = match roster.code_for(weekday) {
        Some(code) => Some(code),
        None if early_morning => roster.code_for(weekday.pred()),
        None => None,
    };
    let code = code.ok_or_else(no_schedule)?;
    let start = shifts.start_for(code).ok_or_else(no_schedule)?;

    let mut diff = minute_of_day(check_in.time()) - minute_of_day(start);
    if diff < 0 {
        diff += MINUTES_PER_DAY;
    }
    Ok(diff)
}

fn minute_of_day(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}
