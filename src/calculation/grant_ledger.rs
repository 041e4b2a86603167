//! The anniversary grant ledger.
//!
//! Statutory paid leave vests as one grant per join-date anniversary,
//! each valid for a fixed number of calendar years. Near an anniversary
//! two grants are concurrently in force, so the entitlement at an
//! instant is the sum over the in-force grants, capped at the statutory
//! maximum — a single table lookup would undercount.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::{EntitlementTables, LeaveRules};
use crate::models::Employee;

use super::entitlement::entitlement_days;

/// One year's paid-leave allotment, issued on a join-date anniversary.
///
/// Grants are derived on demand from the join date and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementGrant {
    /// The anniversary the grant was issued on.
    pub issue_date: NaiveDate,
    /// The date the grant lapses (exclusive).
    pub expiry_date: NaiveDate,
    /// Granted days per the entitlement table at issue.
    pub days: u32,
    /// Granted hours (`days` times the configured day length).
    pub hours: u32,
}

impl EntitlementGrant {
    /// Whether the grant is in force on the given date.
    pub fn in_force(&self, date: NaiveDate) -> bool {
        self.issue_date <= date && date < self.expiry_date
    }
}

/// Expands an employee's join date into the grant sequence issued up to
/// `as_of`.
///
/// Grant `i` is issued on the `i`-th join anniversary with the
/// entitlement-table days for `i` completed tenure years, and expires
/// [`LeaveRules::grant_expiry_years`] later. A February 29 join date
/// rolls forward to March 1 in non-leap years.
///
/// Returns an empty sequence when the employee has no join date or
/// joined after `as_of`.
pub fn entitlement_grants(
    employee: &Employee,
    as_of: NaiveDate,
    tables: &EntitlementTables,
    rules: &LeaveRules,
) -> Vec<EntitlementGrant> {
    let Some(join_date) = employee.join_date else {
        return Vec::new();
    };

    let span_years = as_of.year() - join_date.year();
    if span_years < 0 {
        return Vec::new();
    }

    let mut grants = Vec::new();
    for i in 0..=span_years {
        let issue_date = anniversary(join_date.year() + i, join_date.month(), join_date.day());
        if issue_date > as_of {
            continue;
        }
        let expiry_date = anniversary(
            issue_date.year() + rules.grant_expiry_years,
            issue_date.month(),
            issue_date.day(),
        );
        let days = entitlement_days(tables, employee.effective_category(), i);
        grants.push(EntitlementGrant {
            issue_date,
            expiry_date,
            days,
            hours: days * rules.hours_per_day,
        });
    }
    grants
}

/// Sums the hours of the grants in force on `as_of`, capped at
/// [`LeaveRules::max_balance_hours`].
///
/// Returns zero — not an error — when the employee has no join date, so
/// legacy records render as an empty balance instead of failing.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::entitled_hours;
/// use attendance_engine::config::{EntitlementTables, LeaveRules};
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
/// // One grant in force: issued 2020-01-01 (10 days), expires 2022-01-01.
/// let hours = entitled_hours(
///     &employee,
///     NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
///     &EntitlementTables::statutory(),
///     &LeaveRules::statutory(),
/// );
/// assert_eq!(hours, 80);
/// ```
pub fn entitled_hours(
    employee: &Employee,
    as_of: NaiveDate,
    tables: &EntitlementTables,
    rules: &LeaveRules,
) -> u32 {
    let total: u32 = entitlement_grants(employee, as_of, tables, rules)
        .iter()
        .filter(|grant| grant.in_force(as_of))
        .map(|grant| grant.hours)
        .sum();
    total.min(rules.max_balance_hours)
}

/// Builds the anniversary date for a year, rolling February 29 forward
/// to March 1 in non-leap years.
fn anniversary(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(year, 3, 1).expect("March 1 exists in every year")
    })
}
