//! HTTP API module for the attendance engine.
//!
//! This module provides the REST endpoints for interval classification,
//! lateness evaluation, leave-balance reporting and leave-record
//! validation. Wire format aside, every endpoint is a thin shell over
//! the pure functions in [`crate::calculation`].

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BalanceEntryRequest, BatchLeaveBalanceRequest, ClassifyRequest, EmployeeRequest,
    LatenessRequest, LeaveBalanceRequest, LeaveRecordRequest, SessionRequest,
    SessionsReportRequest, ShiftRosterRequest, ValidateLeaveRecordRequest,
};
pub use response::{
    ApiError, BalanceRow, BatchLeaveBalanceResponse, SessionReportRow, SessionsReportResponse,
};
pub use state::{AppState, Clock, FixedClock, SystemClock};
