//! Monthly shift roster model for shift-working employees.
//!
//! A roster assigns at most one shift code to each weekday of a month.
//! The start time behind each code lives in the engine configuration
//! ([`crate::config::ShiftTable`]), not in the roster itself.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// A small-integer shift code referencing a configured start time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ShiftCode(pub u8);

/// One employee's shift assignments for one month.
///
/// Weekdays without an assignment are days off (or unknown); lateness
/// evaluation falls back to the previous weekday for early-morning
/// check-ins that belong to an overnight shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ShiftRoster {
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

impl ShiftRoster {
    /// Returns the shift code assigned to the given weekday, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::{ShiftCode, ShiftRoster};
    /// use chrono::Weekday;
    ///
    /// let roster = ShiftRoster {
    ///     month: "2025-04".to_string(),
    ///     fri: Some(ShiftCode(5)),
    ///     ..ShiftRoster::default()
    /// };
    /// assert_eq!(roster.code_for(Weekday::Fri), Some(ShiftCode(5)));
    /// assert_eq!(roster.code_for(Weekday::Sat), None);
    /// ```
    pub fn code_for(&self, weekday: Weekday) -> Option<ShiftCode> {
        match weekday {
            Weekday::Mon => self.mon,
            Weekday::Tue => self.tue,
            Weekday::Wed => self.wed,
            Weekday::Thu => self.thu,
            Weekday::Fri => self.fri,
            Weekday::Sat => self.sat,
            Weekday::Sun => self.sun,
        }
    }
}
