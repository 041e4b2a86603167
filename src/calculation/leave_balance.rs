//! The combined leave-balance report.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::models::{AttendanceSession, Employee, LeaveRecord};

use super::grant_ledger::entitled_hours;
use super::leave_consumption::consumed_hours;

/// An employee's paid-leave balance as of a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceReport {
    /// Hours granted and currently in force, after the statutory cap.
    pub entitlement_hours: u32,
    /// The entitlement expressed in whole days.
    pub entitlement_days: u32,
    /// Hours consumed, rounded to the nearest half hour.
    pub used_hours: Decimal,
    /// Hours remaining; never negative.
    pub remaining_hours: Decimal,
    /// The remaining balance formatted as `"{days}d {hours}h"`.
    pub formatted: String,
}

/// Computes an employee's remaining paid-leave balance.
///
/// Combines the grant ledger's in-force entitlement with the consumed
/// hours from the employee's sessions and manual records. An employee
/// without a join date reports an all-zero balance (`"0d 0h"`), never
/// an error.
///
/// The function is pure: identical inputs and `as_of` produce identical
/// reports.
///
/// # Arguments
///
/// * `employee` - The employee to report on
/// * `sessions` - The employee's attendance sessions
/// * `leave_records` - The employee's manual leave records
/// * `as_of` - The date the balance is evaluated at
/// * `config` - The engine configuration in force
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::compute_leave_balance;
/// use attendance_engine::config::EngineConfig;
/// use attendance_engine::models::{Employee, EmploymentCategory};
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let employee = Employee {
///     id: Uuid::nil(),
///     name: "Sato Kenji".to_string(),
///     department: None,
///     join_date: Some(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()),
///     category: EmploymentCategory::FullTime,
///     is_shift_worker: false,
///     default_start_time: None,
///     resigned: false,
/// };
///
/// let report = compute_leave_balance(
///     &employee,
///     &[],
///     &[],
///     NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
///     &EngineConfig::statutory(),
/// );
/// assert_eq!(report.entitlement_hours, 80);
/// assert_eq!(report.formatted, "10d 0h");
/// ```
pub fn compute_leave_balance(
    employee: &Employee,
    sessions: &[AttendanceSession],
    leave_records: &[LeaveRecord],
    as_of: NaiveDate,
    config: &EngineConfig,
) -> BalanceReport {
    let entitlement_hours = entitled_hours(employee, as_of, config.entitlements(), config.leave());
    let used_hours = consumed_hours(sessions, leave_records, config.leave());

    let remaining_hours = (Decimal::from(entitlement_hours) - used_hours).max(Decimal::ZERO);

    let hours_per_day = config.leave().hours_per_day;
    let per_day = Decimal::from(hours_per_day);
    let whole_days = (remaining_hours / per_day).floor();
    let leftover_hours = remaining_hours - whole_days * per_day;

    BalanceReport {
        entitlement_hours,
        entitlement_days: entitlement_hours / hours_per_day,
        used_hours,
        remaining_hours,
        formatted: format!(
            "{}d {}h",
            whole_days.normalize(),
            leftover_hours.normalize()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmploymentCategory, LeaveType, SessionKind};
    use chrono::NaiveDateTime;
    use uuid::Uuid;

    fn employee(join_date: Option<&str>) -> Employee {
        Employee {
            id: Uuid::nil(),
            name: "Sato Kenji".to_string(),
            department: None,
            join_date: join_date.map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap()),
            category: EmploymentCategory::FullTime,
            is_shift_worker: false,
            default_start_time: None,
            resigned: false,
        }
    }

    fn paid_session(check_in: &str, check_out: &str) -> AttendanceSession {
        AttendanceSession {
            id: Uuid::nil(),
            employee_id: Uuid::nil(),
            kind: SessionKind::PaidLeave,
            check_in: NaiveDateTime::parse_from_str(check_in, "%Y-%m-%d %H:%M:%S").unwrap(),
            check_out: Some(NaiveDateTime::parse_from_str(check_out, "%Y-%m-%d %H:%M:%S").unwrap()),
            completed: true,
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn config() -> EngineConfig {
        EngineConfig::statutory()
    }

    // =========================================================================
    // LB-001: untouched entitlement reports in full
    // =========================================================================
    #[test]
    fn test_lb_001_untouched_entitlement() {
        let report =
            compute_leave_balance(&employee(Some("2020-01-01")), &[], &[], date("2021-06-01"), &config());
        assert_eq!(report.entitlement_hours, 80);
        assert_eq!(report.entitlement_days, 10);
        assert_eq!(report.used_hours, Decimal::ZERO);
        assert_eq!(report.remaining_hours, Decimal::from(80));
        assert_eq!(report.formatted, "10d 0h");
    }

    // =========================================================================
    // LB-002: consumption with a fractional remainder
    // =========================================================================
    #[test]
    fn test_lb_002_fractional_remainder_formatting() {
        // One 3.5-hour paid-leave session against 80 hours leaves 76.5,
        // formatted as nine days and four and a half hours.
        let sessions = [paid_session("2021-03-01 09:00:00", "2021-03-01 12:30:00")];
        let report = compute_leave_balance(
            &employee(Some("2020-01-01")),
            &sessions,
            &[],
            date("2021-06-01"),
            &config(),
        );
        assert_eq!(report.used_hours, Decimal::new(35, 1));
        assert_eq!(report.remaining_hours, Decimal::new(765, 1));
        assert_eq!(report.formatted, "9d 4.5h");
    }

    #[test]
    fn test_missing_join_date_reports_zero_balance() {
        let report = compute_leave_balance(&employee(None), &[], &[], date("2024-06-01"), &config());
        assert_eq!(report.entitlement_hours, 0);
        assert_eq!(report.entitlement_days, 0);
        assert_eq!(report.remaining_hours, Decimal::ZERO);
        assert_eq!(report.formatted, "0d 0h");
    }

    #[test]
    fn test_overconsumption_clamps_remaining_to_zero() {
        let records = [LeaveRecord {
            id: Uuid::nil(),
            employee_id: Uuid::nil(),
            leave_type: LeaveType::Paid,
            date: date("2021-03-01"),
            hours: Decimal::from(500),
            notes: None,
        }];
        let report = compute_leave_balance(
            &employee(Some("2020-01-01")),
            &[],
            &records,
            date("2021-06-01"),
            &config(),
        );
        assert_eq!(report.remaining_hours, Decimal::ZERO);
        assert_eq!(report.formatted, "0d 0h");
        assert_eq!(report.used_hours, Decimal::from(500));
    }

    #[test]
    fn test_report_is_idempotent() {
        let sessions = [paid_session("2021-03-01 09:00:00", "2021-03-01 17:00:00")];
        let first = compute_leave_balance(
            &employee(Some("2020-01-01")),
            &sessions,
            &[],
            date("2021-06-01"),
            &config(),
        );
        let second = compute_leave_balance(
            &employee(Some("2020-01-01")),
            &sessions,
            &[],
            date("2021-06-01"),
            &config(),
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_report_serialization_round_trip() {
        let report =
            compute_leave_balance(&employee(Some("2020-01-01")), &[], &[], date("2021-06-01"), &config());
        let json = serde_json::to_string(&report).unwrap();
        let deserialized: BalanceReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, deserialized);
    }
}
