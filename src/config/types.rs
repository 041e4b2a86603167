//! Configuration types for attendance and leave accounting.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Entitlement tables and
//! time thresholds are immutable configuration data, not code.

use std::collections::BTreeMap;

use chrono::NaiveTime;
use serde::Deserialize;

use crate::models::{EmploymentCategory, ShiftCode};

/// Statutory paid-leave entitlement tables, in days.
///
/// Rows are indexed by completed tenure years at a grant's issue date;
/// an index past the end of a row clamps to the last entry, a negative
/// tenure clamps to the first.
#[derive(Debug, Clone, Deserialize)]
pub struct EntitlementTables {
    /// Entitlement days for full-time employees by tenure year.
    pub full_time: Vec<u32>,
    /// Entitlement rows for part-time employees, keyed by contracted
    /// working days per week (1 through 4).
    pub part_time: BTreeMap<u8, Vec<u32>>,
}

impl EntitlementTables {
    /// The statutory tables.
    pub fn statutory() -> Self {
        Self {
            full_time: vec![10, 11, 12, 14, 16, 18, 20],
            part_time: BTreeMap::from([
                (4, vec![7, 8, 9, 10, 12, 13, 15]),
                (3, vec![5, 6, 6, 8, 9, 10, 11]),
                (2, vec![3, 4, 4, 5, 6, 6, 7]),
                (1, vec![1, 2, 2, 2, 3, 3, 3]),
            ]),
        }
    }

    /// Returns the table row for the given (already normalized)
    /// employment category, or `None` when no row exists for the
    /// category's weekly days.
    pub fn row_for(&self, category: EmploymentCategory) -> Option<&[u32]> {
        match category.effective() {
            EmploymentCategory::FullTime => Some(&self.full_time),
            EmploymentCategory::PartTime { weekly_days } => {
                self.part_time.get(&weekly_days).map(Vec::as_slice)
            }
        }
    }
}

/// Start times for each shift code.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftTable {
    /// Map of shift code to shift start time. Codes whose start time is
    /// 22:00 or later are night-start shifts running past midnight.
    pub starts: BTreeMap<ShiftCode, NaiveTime>,
}

impl ShiftTable {
    /// The fixed shift-code table: codes 1 through 5 starting at
    /// 08:30, 12:00, 13:30, 22:30 and 23:50 respectively.
    pub fn statutory() -> Self {
        let time = |h, m| NaiveTime::from_hms_opt(h, m, 0).expect("valid shift start time");
        Self {
            starts: BTreeMap::from([
                (ShiftCode(1), time(8, 30)),
                (ShiftCode(2), time(12, 0)),
                (ShiftCode(3), time(13, 30)),
                (ShiftCode(4), time(22, 30)),
                (ShiftCode(5), time(23, 50)),
            ]),
        }
    }

    /// Resolves the start time for a shift code, or `None` for an
    /// unknown code.
    pub fn start_for(&self, code: ShiftCode) -> Option<NaiveTime> {
        self.starts.get(&code).copied()
    }
}

/// Minute-level thresholds for classifying one attendance session.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkdayRules {
    /// A session longer than this (raw minutes) has a break deducted.
    pub break_threshold_minutes: i64,
    /// Length of the deducted break in minutes.
    pub break_deduction_minutes: i64,
    /// Worked minutes past this accrue as overtime quantity.
    pub standard_day_minutes: i64,
    /// A session with more raw minutes than this is *flagged* as an
    /// overtime session. Deliberately distinct from
    /// `standard_day_minutes`: the flag threshold counts the raw span
    /// (work plus break), the quantity threshold counts worked minutes
    /// after break deduction, and reports use both.
    pub overtime_flag_minutes: i64,
    /// Start of the night-work window (inclusive).
    pub night_window_start: NaiveTime,
    /// End of the night-work window (exclusive). An end at or before
    /// the start means the window wraps past midnight.
    pub night_window_end: NaiveTime,
}

impl WorkdayRules {
    /// The statutory rules: one-hour break past six hours, eight-hour
    /// standard day, nine-hour session flag, night window 22:00-05:00.
    pub fn statutory() -> Self {
        let time = |h, m| NaiveTime::from_hms_opt(h, m, 0).expect("valid window bound");
        Self {
            break_threshold_minutes: 360,
            break_deduction_minutes: 60,
            standard_day_minutes: 480,
            overtime_flag_minutes: 540,
            night_window_start: time(22, 0),
            night_window_end: time(5, 0),
        }
    }
}

/// Rules for paid-leave grant and consumption accounting.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveRules {
    /// Hours in one leave day; also the per-session consumption cap.
    pub hours_per_day: u32,
    /// Cap on the total hours in force at any instant.
    pub max_balance_hours: u32,
    /// Calendar years after which an unused grant expires.
    pub grant_expiry_years: i32,
}

impl LeaveRules {
    /// The statutory rules: 8-hour days, 320-hour (40-day) cap,
    /// 2-year grant expiry.
    pub fn statutory() -> Self {
        Self {
            hours_per_day: 8,
            max_balance_hours: 320,
            grant_expiry_years: 2,
        }
    }
}

/// File shape of `rules.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RulesConfig {
    pub workday: WorkdayRules,
    pub leave: LeaveRules,
}

/// The complete engine configuration.
///
/// Aggregates the workday rules, leave rules, entitlement tables and
/// shift table, whether loaded from YAML or built from the statutory
/// defaults.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    workday: WorkdayRules,
    leave: LeaveRules,
    entitlements: EntitlementTables,
    shifts: ShiftTable,
}

impl EngineConfig {
    /// Creates a configuration from its component parts.
    pub fn new(
        workday: WorkdayRules,
        leave: LeaveRules,
        entitlements: EntitlementTables,
        shifts: ShiftTable,
    ) -> Self {
        Self {
            workday,
            leave,
            entitlements,
            shifts,
        }
    }

    /// The built-in statutory configuration, mirroring
    /// `config/statutory/*.yaml`.
    pub fn statutory() -> Self {
        Self::new(
            WorkdayRules::statutory(),
            LeaveRules::statutory(),
            EntitlementTables::statutory(),
            ShiftTable::statutory(),
        )
    }

    /// Returns the workday classification rules.
    pub fn workday(&self) -> &WorkdayRules {
        &self.workday
    }

    /// Returns the leave accounting rules.
    pub fn leave(&self) -> &LeaveRules {
        &self.leave
    }

    /// Returns the entitlement tables.
    pub fn entitlements(&self) -> &EntitlementTables {
        &self.entitlements
    }

    /// Returns the shift-code table.
    pub fn shifts(&self) -> &ShiftTable {
        &self.shifts
    }
}
