//! Calculation logic for the attendance engine.
//!
//! This module contains the pure accounting functions: time-bucket
//! classification of check-in/check-out intervals, shift-aware lateness
//! evaluation, entitlement table lookup, the anniversary grant ledger,
//! paid-leave consumption aggregation, and the combined leave-balance
//! report. Every function here is total over well-formed domain values,
//! takes its dependencies (tables, rules, dates) as explicit parameters,
//! and holds no state.

mod entitlement;
mod grant_ledger;
mod lateness;
mod leave_balance;
mod leave_consumption;
mod time_buckets;

pub use entitlement::entitlement_days;
pub use grant_ledger::{EntitlementGrant, entitled_hours, entitlement_grants};
pub use lateness::{
    DEFAULT_GRACE_MINUTES, EXPORT_GRACE_MINUTES, LatenessResult, evaluate_lateness,
};
pub use leave_balance::{BalanceReport, compute_leave_balance};
pub use leave_consumption::consumed_hours;
pub use time_buckets::{TimeBuckets, classify_interval};
