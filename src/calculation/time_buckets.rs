//! Time-bucket classification of a check-in/check-out interval.
//!
//! This module splits one closed attendance interval into worked,
//! overtime and night-work minutes, applying the standard break
//! deduction. Night minutes are counted against the wraparound
//! night window with closed-form interval intersection; the result is
//! identical to walking the interval minute by minute.

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::config::WorkdayRules;
use crate::error::{EngineError, EngineResult};

/// Minutes in one day.
const MINUTES_PER_DAY: i64 = 1440;

/// The minute buckets derived from one closed attendance interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBuckets {
    /// The interval length rounded to the nearest whole minute.
    pub raw_minutes: i64,
    /// Break minutes deducted from the raw span.
    pub break_deduction: i64,
    /// Worked minutes after break deduction.
    pub worked_minutes: i64,
    /// Worked minutes past the standard day.
    pub overtime_minutes: i64,
    /// Whole minutes of the interval falling inside the night window.
    pub night_minutes: i64,
    /// Whether the session is flagged as an overtime session.
    ///
    /// The flag compares the *raw* span against the session-flag
    /// threshold (9 hours by default) and is independent of
    /// `overtime_minutes`, which accrues past the standard day after
    /// break deduction. Reports use both.
    pub is_overtime: bool,
}

/// Classifies a closed check-in/check-out interval into minute buckets.
///
/// # Arguments
///
/// * `check_in` - The clock-in instant
/// * `check_out` - The clock-out instant; must be at or after `check_in`
/// * `rules` - The workday thresholds and night window to classify against
///
/// # Errors
///
/// Returns [`EngineError::InvalidInterval`] when `check_out` precedes
/// `check_in`. The interval is never silently clamped.
///
/// # Examples
///
/// A nine-hour day loses its one-hour break and lands exactly on the
/// standard day, with no overtime quantity:
///
/// ```
/// use attendance_engine::calculation::classify_interval;
/// use attendance_engine::config::WorkdayRules;
/// use chrono::NaiveDateTime;
///
/// let check_in = NaiveDateTime::parse_from_str("2025-04-01 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let check_out = NaiveDateTime::parse_from_str("2025-04-01 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let buckets = classify_interval(check_in, check_out, &WorkdayRules::statutory()).unwrap();
/// assert_eq!(buckets.raw_minutes, 540);
/// assert_eq!(buckets.break_deduction, 60);
/// assert_eq!(buckets.worked_minutes, 480);
/// assert_eq!(buckets.overtime_minutes, 0);
/// assert_eq!(buckets.night_minutes, 0);
/// ```
pub fn classify_interval(
    check_in: NaiveDateTime,
    check_out: NaiveDateTime,
    rules: &WorkdayRules,
) -> EngineResult<TimeBuckets> {
    if check_out < check_in {
        return Err(EngineError::InvalidInterval {
            check_in,
            check_out,
        });
    }

    let seconds = (check_out - check_in).num_seconds();
    let raw_minutes = (seconds + 30) / 60;

    let break_deduction = if raw_minutes > rules.break_threshold_minutes {
        rules.break_deduction_minutes
    } else {
        0
    };
    let worked_minutes = raw_minutes - break_deduction;
    let overtime_minutes = (worked_minutes - rules.standard_day_minutes).max(0);
    let night_minutes = night_minutes(check_in, check_out, rules);
    let is_overtime = raw_minutes > rules.overtime_flag_minutes;

    Ok(TimeBuckets {
        raw_minutes,
        break_deduction,
        worked_minutes,
        overtime_minutes,
        night_minutes,
        is_overtime,
    })
}

/// Counts the whole minutes of `[check_in, check_out)` whose clock time
/// falls inside the night window.
///
/// Samples one stamp per minute anchored at `check_in` (seconds
/// preserved), the same population a minute-by-minute walk visits. The
/// count is closed-form: full days contribute the whole window, the
/// remainder is a circular-arc intersection.
fn night_minutes(check_in: NaiveDateTime, check_out: NaiveDateTime, rules: &WorkdayRules) -> i64 {
    let seconds = (check_out - check_in).num_seconds();
    if seconds <= 0 {
        return 0;
    }
    // One sample per started minute: stamps check_in + k while strictly
    // before check_out.
    let samples = (seconds + 59) / 60;

    let window_start = minute_of_day(rules.night_window_start);
    let window_end = minute_of_day(rules.night_window_end);
    let window_len = if window_start < window_end {
        window_end - window_start
    } else {
        MINUTES_PER_DAY - window_start + window_end
    };

    let full_days = samples / MINUTES_PER_DAY;
    let remainder = samples % MINUTES_PER_DAY;
    let arc_start = minute_of_day(check_in.time());

    full_days * window_len + arc_window_overlap(arc_start, remainder, window_start, window_end)
}

/// Counts the minutes of the circular arc `[from, from + len)` (mod one
/// day) that fall inside the window `[window_start, window_end)`, where
/// the window wraps midnight when `window_start >= window_end`.
fn arc_window_overlap(from: i64, len: i64, window_start: i64, window_end: i64) -> i64 {
    // A wrapped window splits into an evening and a morning segment; an
    // unwrapped one keeps a single segment and an empty morning.
    let (evening, morning) = if window_start < window_end {
        ((window_start, window_end), (0, 0))
    } else {
        ((window_start, MINUTES_PER_DAY), (0, window_end))
    };

    // len is at most one day, so the arc wraps at most once.
    let head = (from, (from + len).min(MINUTES_PER_DAY));
    let tail = (0, (from + len - MINUTES_PER_DAY).max(0));

    segment_overlap(head, evening)
        + segment_overlap(head, morning)
        + segment_overlap(tail, evening)
        + segment_overlap(tail, morning)
}

fn segment_overlap((a_start, a_end): (i64, i64), (b_start, b_end): (i64, i64)) -> i64 {
    (a_end.min(b_end) - a_start.max(b_start)).max(0)
}

fn minute_of_day(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}
