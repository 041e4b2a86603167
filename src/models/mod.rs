//! Core data models for the attendance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod leave;
mod session;
mod shift_roster;

pub use employee::{Employee, EmploymentCategory};
pub use leave::{LeaveRecord, LeaveType, SUMMER_ANNUAL_CAP_HOURS};
pub use session::{AttendanceSession, SessionKind};
pub use shift_roster::{ShiftCode, ShiftRoster};
