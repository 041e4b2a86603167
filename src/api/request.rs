//! Request types for the attendance engine API.
//!
//! This module defines the JSON request structures for every endpoint,
//! with `From` conversions into the domain types.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{
    AttendanceSession, Employee, EmploymentCategory, LeaveRecord, LeaveType, SessionKind,
    ShiftCode, ShiftRoster,
};

/// Request body for the `/classify` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// The clock-in instant.
    pub check_in: NaiveDateTime,
    /// The clock-out instant.
    pub check_out: NaiveDateTime,
}

/// Employee information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: Uuid,
    /// The employee's display name.
    pub name: String,
    /// The department the employee belongs to.
    #[serde(default)]
    pub department: Option<String>,
    /// The date the employee joined, when known.
    #[serde(default)]
    pub join_date: Option<NaiveDate>,
    /// The category of employment arrangement.
    pub category: EmploymentCategory,
    /// Whether the employee works from a monthly shift roster.
    #[serde(default)]
    pub is_shift_worker: bool,
    /// Expected daily start time for non-shift workers.
    #[serde(default)]
    pub default_start_time: Option<NaiveTime>,
    /// Soft resignation marker.
    #[serde(default)]
    pub resigned: bool,
}

/// Attendance session information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRequest {
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
    #[serde(default)]
    pub check_out: Option<NaiveDateTime>,
    /// Whether the session has been closed out.
    #[serde(default)]
    pub completed: bool,
}

/// Manual leave record information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRecordRequest {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The employee this record belongs to.
    pub employee_id: Uuid,
    /// The kind of leave taken.
    pub leave_type: LeaveType,
    /// The calendar date the leave applies to.
    pub date: NaiveDate,
    /// Hours of leave taken.
    pub hours: Decimal,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Monthly shift roster information in a request.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ShiftRosterRequest {
    /// The month this roster covers, formatted `YYYY-MM`.
    pub month: String,
    /// Monday's shift code, if any.
    #[serde(default)]
    pub mon: Option<ShiftCode>,
    /// Tuesday's shift code, if any.
    #[serde(default)]
    pub tue: Option<ShiftCode>,
    /// Wednesday's shift code, if any.
    #[serde(default)]
    pub wed: Option<ShiftCode>,
    /// Thursday's shift code, if any.
    #[serde(default)]
    pub thu: Option<ShiftCode>,
    /// Friday's shift code, if any.
    #[serde(default)]
    pub fri: Option<ShiftCode>,
    /// Saturday's shift code, if any.
    #[serde(default)]
    pub sat: Option<ShiftCode>,
    /// Sunday's shift code, if any.
    #[serde(default)]
    pub sun: Option<ShiftCode>,
}

/// Request body for the `/lateness` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatenessRequest {
    /// The employee whose schedule applies.
    pub employee: EmployeeRequest,
    /// The clock-in instant being evaluated.
    pub check_in: NaiveDateTime,
    /// The employee's roster for the check-in month, for shift workers.
    #[serde(default)]
    pub roster: Option<ShiftRosterRequest>,
    /// Lateness grace in minutes; zero when absent.
    #[serde(default)]
    pub grace_minutes: Option<i64>,
}

/// Request body for the `/leave-balance` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveBalanceRequest {
    /// The employee to report on.
    pub employee: EmployeeRequest,
    /// The employee's attendance sessions.
    #[serde(default)]
    pub sessions: Vec<SessionRequest>,
    /// The employee's manual leave records.
    #[serde(default)]
    pub leave_records: Vec<LeaveRecordRequest>,
    /// The date the balance is evaluated at; today when absent.
    #[serde(default)]
    pub as_of_date: Option<NaiveDate>,
}

/// One employee's data in a batch balance request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceEntryRequest {
    /// The employee to report on.
    pub employee: EmployeeRequest,
    /// The employee's attendance sessions.
    #[serde(default)]
    pub sessions: Vec<SessionRequest>,
    /// The employee's manual leave records.
    #[serde(default)]
    pub leave_records: Vec<LeaveRecordRequest>,
}

/// Request body for the `/leave-balance/batch` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchLeaveBalanceRequest {
    /// The employees to report on.
    pub employees: Vec<BalanceEntryRequest>,
    /// The date the balances are evaluated at; today when absent.
    #[serde(default)]
    pub as_of_date: Option<NaiveDate>,
}

/// Request body for the `/sessions/report` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionsReportRequest {
    /// The employee the sessions belong to.
    pub employee: EmployeeRequest,
    /// The employee's roster for the reported month, for shift workers.
    #[serde(default)]
    pub roster: Option<ShiftRosterRequest>,
    /// The sessions to enrich.
    pub sessions: Vec<SessionRequest>,
    /// Lateness grace in minutes; the five-minute export grace when
    /// absent.
    #[serde(default)]
    pub grace_minutes: Option<i64>,
}

/// Request body for the `/leave-records/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateLeaveRecordRequest {
    /// The record being submitted.
    pub record: LeaveRecordRequest,
    /// The employee's already-accepted records, for annual-cap checks.
    #[serde(default)]
    pub existing: Vec<LeaveRecordRequest>,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            name: req.name,
            department: req.department,
            join_date: req.join_date,
            category: req.category,
            is_shift_worker: req.is_shift_worker,
            default_start_time: req.default_start_time,
            resigned: req.resigned,
        }
    }
}

impl From<SessionRequest> for AttendanceSession {
    fn from(req: SessionRequest) -> Self {
        AttendanceSession {
            id: req.id,
            employee_id: req.employee_id,
            kind: req.kind,
            check_in: req.check_in,
            check_out: req.check_out,
            completed: req.completed,
        }
    }
}

impl From<LeaveRecordRequest> for LeaveRecord {
    fn from(req: LeaveRecordRequest) -> Self {
        LeaveRecord {
            id: req.id,
            employee_id: req.employee_id,
            leave_type: req.leave_type,
            date: req.date,
            hours: req.hours,
            notes: req.notes,
        }
    }
}

impl From<ShiftRosterRequest> for ShiftRoster {
    fn from(req: ShiftRosterRequest) -> Self {
        ShiftRoster {
            month: req.month,
            mon: req.mon,
            tue: req.tue,
            wed: req.wed,
            thu: req.thu,
            fri: req.fri,
            sat: req.sat,
            sun: req.sun,
        }
    }
}
