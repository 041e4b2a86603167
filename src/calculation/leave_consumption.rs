//! Paid-leave consumption aggregation.
//!
//! Consumption comes from two sources: attendance sessions recorded as
//! paid leave, and manual paid-leave records. A session consumes at most
//! one day's worth of hours no matter how long its wall-clock span —
//! an overnight or forgotten-checkout session still burns a single day.
//! Manual records are entered in hours already and count as-is.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::LeaveRules;
use crate::models::{AttendanceSession, LeaveRecord, LeaveType, SessionKind};

/// Sums the paid-leave hours consumed by the given sessions and manual
/// records, rounded to the nearest half hour (half-up).
///
/// Only *closed* sessions of kind [`SessionKind::PaidLeave`] and manual
/// records of type [`LeaveType::Paid`] qualify; everything else is
/// ignored. Each qualifying session contributes its duration capped at
/// [`LeaveRules::hours_per_day`]; manual records are uncapped.
///
/// The caller supplies one employee's sessions and records; no
/// filtering by employee happens here.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::consumed_hours;
/// use attendance_engine::config::LeaveRules;
/// use attendance_engine::models::{AttendanceSession, SessionKind};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// // A 7h20m paid-leave session: raw 7.33 hours rounds to 7.5.
/// let session = AttendanceSession {
///     id: Uuid::nil(),
///     employee_id: Uuid::nil(),
///     kind: SessionKind::PaidLeave,
///     check_in: NaiveDateTime::parse_from_str("2025-04-01 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     check_out: Some(NaiveDateTime::parse_from_str("2025-04-01 16:20:00", "%Y-%m-%d %H:%M:%S").unwrap()),
///     completed: true,
/// };
///
/// let hours = consumed_hours(&[session], &[], &LeaveRules::statutory());
/// assert_eq!(hours, Decimal::new(75, 1));
/// ```
pub fn consumed_hours(
    sessions: &[AttendanceSession],
    leave_records: &[LeaveRecord],
    rules: &LeaveRules,
) -> Decimal {
    let day_cap = Decimal::from(rules.hours_per_day);
    let minutes_per_hour = Decimal::from(60);

    let session_hours: Decimal = sessions
        .iter()
        .filter(|session| session.kind == SessionKind::PaidLeave)
        .filter_map(AttendanceSession::duration_minutes)
        .map(|minutes| (Decimal::from(minutes) / minutes_per_hour).min(day_cap))
        .sum();

    let manual_hours: Decimal = leave_records
        .iter()
        .filter(|record| record.leave_type == LeaveType::Paid)
        .map(|record| record.hours)
        .sum();

    round_to_half_hour(session_hours + manual_hours)
}

/// Rounds to the nearest 0.5, half-up.
fn round_to_half_hour(hours: Decimal) -> Decimal {
    let doubled = hours * Decimal::from(2);
    doubled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero) / Decimal::from(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use proptest::prelude::*;
    use uuid::Uuid;

    fn session(kind: SessionKind, check_in: &str, check_out: Option<&str>) -> AttendanceSession {
        AttendanceSession {
            id: Uuid::nil(),
            employee_id: Uuid::nil(),
            kind,
            check_in: NaiveDateTime::parse_from_str(check_in, "%Y-%m-%d %H:%M:%S").unwrap(),
            check_out: check_out
                .map(|s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()),
            completed: check_out.is_some(),
        }
    }

    fn paid_record(hours: Decimal) -> LeaveRecord {
        LeaveRecord {
            id: Uuid::nil(),
            employee_id: Uuid::nil(),
            leave_type: LeaveType::Paid,
            date: chrono::NaiveDate::from_ymd_opt(2025, 4, 10).unwrap(),
            hours,
            notes: None,
        }
    }

    fn rules() -> LeaveRules {
        LeaveRules::statutory()
    }

    // =========================================================================
    // LC-001: raw 7.33 hours rounds up to 7.5
    // =========================================================================
    #[test]
    fn test_lc_001_rounding_to_half_hour() {
        let sessions = [session(
            SessionKind::PaidLeave,
            "2025-04-01 09:00:00",
            Some("2025-04-01 16:20:00"),
        )];
        assert_eq!(
            consumed_hours(&sessions, &[], &rules()),
            Decimal::new(75, 1)
        );
    }

    // =========================================================================
    // LC-002: a multi-day session caps at one day's hours
    // =========================================================================
    #[test]
    fn test_lc_002_multi_day_session_caps_at_eight_hours() {
        // Two full days of wall clock. The rejected calendar-day
        // decomposition would charge 16 hours; the per-session cap
        // charges 8.
        let sessions = [session(
            SessionKind::PaidLeave,
            "2025-04-01 09:00:00",
            Some("2025-04-03 09:00:00"),
        )];
        assert_eq!(consumed_hours(&sessions, &[], &rules()), Decimal::from(8));
    }

    #[test]
    fn test_open_sessions_are_ignored() {
        let sessions = [session(SessionKind::PaidLeave, "2025-04-01 09:00:00", None)];
        assert_eq!(consumed_hours(&sessions, &[], &rules()), Decimal::ZERO);
    }

    #[test]
    fn test_work_and_unpaid_sessions_are_ignored() {
        let sessions = [
            session(
                SessionKind::Work,
                "2025-04-01 09:00:00",
                Some("2025-04-01 18:00:00"),
            ),
            session(
                SessionKind::UnpaidLeave,
                "2025-04-02 09:00:00",
                Some("2025-04-02 18:00:00"),
            ),
        ];
        assert_eq!(consumed_hours(&sessions, &[], &rules()), Decimal::ZERO);
    }

    #[test]
    fn test_manual_records_are_uncapped() {
        // A 16-hour manual entry counts in full; manual entries are
        // assumed already day-correct.
        let records = [paid_record(Decimal::from(16))];
        assert_eq!(consumed_hours(&[], &records, &rules()), Decimal::from(16));
    }

    #[test]
    fn test_non_paid_records_are_ignored() {
        let mut record = paid_record(Decimal::from(8));
        record.leave_type = LeaveType::Summer;
        assert_eq!(consumed_hours(&[], &[record], &rules()), Decimal::ZERO);
    }

    #[test]
    fn test_sessions_and_records_sum_before_rounding() {
        // 3h40m session (3.666...) plus a 0.6-hour manual record sums
        // to 4.266..., which rounds to 4.5 — rounding happens once on
        // the sum, not per source.
        let sessions = [session(
            SessionKind::PaidLeave,
            "2025-04-01 09:00:00",
            Some("2025-04-01 12:40:00"),
        )];
        let records = [paid_record(Decimal::new(6, 1))];
        assert_eq!(
            consumed_hours(&sessions, &records, &rules()),
            Decimal::new(45, 1)
        );
    }

    #[test]
    fn test_midpoint_rounds_up() {
        // 7.25 raw doubles to 14.5, which rounds away from zero to 15,
        // landing on 7.5.
        let sessions = [session(
            SessionKind::PaidLeave,
            "2025-04-01 09:00:00",
            Some("2025-04-01 16:15:00"),
        )];
        assert_eq!(
            consumed_hours(&sessions, &[], &rules()),
            Decimal::new(75, 1)
        );
    }

    #[test]
    fn test_empty_inputs_consume_nothing() {
        assert_eq!(consumed_hours(&[], &[], &rules()), Decimal::ZERO);
    }

    proptest! {
        /// The total is always a non-negative multiple of 0.5.
        #[test]
        fn prop_total_is_half_hour_granular(
            duration_minutes in prop::collection::vec(0i64..4000, 0..6),
            manual_quarter_hours in prop::collection::vec(0u32..80, 0..6),
        ) {
            let base = NaiveDateTime::parse_from_str(
                "2025-04-01 08:00:00",
                "%Y-%m-%d %H:%M:%S",
            ).unwrap();
            let sessions: Vec<AttendanceSession> = duration_minutes
                .iter()
                .map(|&minutes| AttendanceSession {
                    id: Uuid::nil(),
                    employee_id: Uuid::nil(),
                    kind: SessionKind::PaidLeave,
                    check_in: base,
                    check_out: Some(base + chrono::Duration::minutes(minutes)),
                    completed: true,
                })
                .collect();
            let records: Vec<LeaveRecord> = manual_quarter_hours
                .iter()
                .map(|&quarters| paid_record(Decimal::from(quarters) / Decimal::from(4)))
                .collect();

            let total = consumed_hours(&sessions, &records, &rules());
            let doubled = total * Decimal::from(2);
            prop_assert!(total >= Decimal::ZERO);
            prop_assert_eq!(doubled, doubled.trunc());
        }
    }
}
