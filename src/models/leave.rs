//! Manual leave record model and boundary validation.
//!
//! Manual leave records are admin entries distinct from attendance
//! sessions. Only records of type [`LeaveType::Paid`] feed paid-leave
//! consumption; the other kinds are tracked for reporting only.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Annual cap on summer leave per employee, in hours.
pub const SUMMER_ANNUAL_CAP_HOURS: u32 = 24;

/// The closed set of manual leave kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Statutory paid leave; the only kind that feeds consumption accounting.
    Paid,
    /// Unpaid absence.
    Unpaid,
    /// Substitute day off.
    Substitute,
    /// Child nursing leave.
    Childcare,
    /// Maternity leave.
    Maternity,
    /// Bereavement leave.
    Bereavement,
    /// Summer leave, restricted to July through September.
    Summer,
    /// Family care leave.
    Care,
    /// Work-injury leave.
    Injury,
    /// Any other kind.
    Other,
}

/// A manually entered leave record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The employee this record belongs to.
    pub employee_id: Uuid,
    /// The kind of leave taken.
    pub leave_type: LeaveType,
    /// The calendar date the leave applies to.
    pub date: NaiveDate,
    /// Hours of leave taken; must be positive. Supports hourly or
    /// full-day granularity.
    pub hours: Decimal,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl LeaveRecord {
    /// Validates a record at the input boundary before it is accepted.
    ///
    /// The pure accounting core assumes well-formed records; this is the
    /// rejection point for malformed ones. Checks:
    ///
    /// - `hours` must be positive;
    /// - summer leave must fall in July through September;
    /// - summer leave is capped at [`SUMMER_ANNUAL_CAP_HOURS`] per
    ///   employee per calendar year, counting `existing` records.
    ///
    /// `existing` should hold the employee's already-accepted records;
    /// records for other employees or other years are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidLeaveRecord`] naming the offending
    /// field.
    pub fn validate(&self, existing: &[LeaveRecord]) -> EngineResult<()> {
        if self.hours <= Decimal::ZERO {
            return Err(EngineError::InvalidLeaveRecord {
                field: "hours".to_string(),
                message: "must be positive".to_string(),
            });
        }

        if self.leave_type == LeaveType::Summer {
            let month = self.date.month();
            if !(7..=9).contains(&month) {
                return Err(EngineError::InvalidLeaveRecord {
                    field: "date".to_string(),
                    message: "summer leave is restricted to July through September".to_string(),
                });
            }

            let already_taken: Decimal = existing
                .iter()
                .filter(|r| {
                    r.employee_id == self.employee_id
                        && r.leave_type == LeaveType::Summer
                        && r.date.year() == self.date.year()
                })
                .map(|r| r.hours)
                .sum();
            let cap = Decimal::from(SUMMER_ANNUAL_CAP_HOURS);
            if already_taken + self.hours > cap {
                return Err(EngineError::InvalidLeaveRecord {
                    field: "hours".to_string(),
                    message: format!(
                        "summer leave is capped at {} hours per year ({} already taken)",
                        cap, already_taken
                    ),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(leave_type: LeaveType, date: &str, hours: i64) -> LeaveRecord {
        LeaveRecord {
            id: Uuid::nil(),
            employee_id: Uuid::nil(),
            leave_type,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            hours: Decimal::from(hours),
            notes: None,
        }
    }

    #[test]
    fn test_paid_record_with_positive_hours_is_valid() {
        let r = record(LeaveType::Paid, "2025-04-10", 8);
        assert!(r.validate(&[]).is_ok());
    }

    #[test]
    fn test_zero_hours_rejected() {
        let r = record(LeaveType::Paid, "2025-04-10", 0);
        let err = r.validate(&[]).unwrap_err();
        assert!(err.to_string().contains("hours"));
    }

    #[test]
    fn test_negative_hours_rejected() {
        let mut r = record(LeaveType::Unpaid, "2025-04-10", 4);
        r.hours = Decimal::from(-4);
        assert!(r.validate(&[]).is_err());
    }

    #[test]
    fn test_summer_leave_inside_window_is_valid() {
        let r = record(LeaveType::Summer, "2025-08-12", 8);
        assert!(r.validate(&[]).is_ok());
    }

    #[test]
    fn test_summer_leave_outside_window_rejected() {
        let r = record(LeaveType::Summer, "2025-06-30", 8);
        let err = r.validate(&[]).unwrap_err();
        assert!(err.to_string().contains("July through September"));
    }

    #[test]
    fn test_summer_leave_annual_cap_enforced() {
        let existing = vec![
            record(LeaveType::Summer, "2025-07-01", 8),
            record(LeaveType::Summer, "2025-08-01", 8),
        ];
        // 16 taken; 8 more is exactly at the cap.
        let at_cap = record(LeaveType::Summer, "2025-09-01", 8);
        assert!(at_cap.validate(&existing).is_ok());

        // One more hour breaches it.
        let over_cap = record(LeaveType::Summer, "2025-09-01", 9);
        assert!(over_cap.validate(&existing).is_err());
    }

    #[test]
    fn test_summer_cap_ignores_other_years_and_employees() {
        let mut other_employee = record(LeaveType::Summer, "2025-07-01", 24);
        other_employee.employee_id = Uuid::new_v4();
        let last_year = record(LeaveType::Summer, "2024-08-01", 24);

        let r = record(LeaveType::Summer, "2025-08-12", 24);
        assert!(r.validate(&[other_employee, last_year]).is_ok());
    }

    #[test]
    fn test_leave_type_serialization() {
        assert_eq!(serde_json::to_string(&LeaveType::Paid).unwrap(), "\"paid\"");
        assert_eq!(
            serde_json::to_string(&LeaveType::Bereavement).unwrap(),
            "\"bereavement\""
        );
        assert_eq!(
            serde_json::from_str::<LeaveType>("\"substitute\"").unwrap(),
            LeaveType::Substitute
        );
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let r = LeaveRecord {
            id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            leave_type: LeaveType::Childcare,
            date: NaiveDate::from_ymd_opt(2025, 5, 7).unwrap(),
            hours: Decimal::new(45, 1), // 4.5
            notes: Some("half day".to_string()),
        };
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: LeaveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }
}
