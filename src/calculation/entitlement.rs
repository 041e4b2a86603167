//! Entitlement table lookup.

use crate::config::EntitlementTables;
use crate::models::EmploymentCategory;

/// Looks up the paid-leave entitlement in days for an employment
/// category at a given tenure.
///
/// The lookup cannot fail: tenure past the end of a table clamps to the
/// last entry, negative tenure clamps to the first, and a category with
/// no table row (part-time with an unconfigured weekly-day count)
/// yields zero days. Part-time with five or more weekly days routes to
/// the full-time table.
///
/// # Arguments
///
/// * `tables` - The entitlement tables in force
/// * `category` - The employment category to look up
/// * `tenure_years` - Completed years of tenure at the grant's issue date
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::entitlement_days;
/// use attendance_engine::config::EntitlementTables;
/// use attendance_engine::models::EmploymentCategory;
///
/// let tables = EntitlementTables::statutory();
/// assert_eq!(entitlement_days(&tables, EmploymentCategory::FullTime, 0), 10);
/// assert_eq!(entitlement_days(&tables, EmploymentCategory::FullTime, 99), 20);
/// assert_eq!(
///     entitlement_days(&tables, EmploymentCategory::PartTime { weekly_days: 3 }, 2),
///     6
/// );
/// ```
pub fn entitlement_days(
    tables: &EntitlementTables,
    category: EmploymentCategory,
    tenure_years: i32,
) -> u32 {
    let Some(row) = tables.row_for(category) else {
        return 0;
    };
    if row.is_empty() {
        return 0;
    }
    let last = row.len() - 1;
    let index = usize::try_from(tenure_years.max(0)).unwrap_or(last).min(last);
    row[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tables() -> EntitlementTables {
        EntitlementTables::statutory()
    }

    #[test]
    fn test_full_time_progression() {
        let expected = [10, 11, 12, 14, 16, 18, 20];
        for (years, days) in expected.iter().enumerate() {
            assert_eq!(
                entitlement_days(&tables(), EmploymentCategory::FullTime, years as i32),
                *days
            );
        }
    }

    #[test]
    fn test_negative_tenure_clamps_to_first_entry() {
        assert_eq!(
            entitlement_days(&tables(), EmploymentCategory::FullTime, -3),
            entitlement_days(&tables(), EmploymentCategory::FullTime, 0)
        );
    }

    #[test]
    fn test_long_tenure_clamps_to_last_entry() {
        assert_eq!(
            entitlement_days(&tables(), EmploymentCategory::FullTime, 40),
            20
        );
        assert_eq!(
            entitlement_days(
                &tables(),
                EmploymentCategory::PartTime { weekly_days: 1 },
                40
            ),
            3
        );
    }

    #[test]
    fn test_part_time_rows() {
        assert_eq!(
            entitlement_days(&tables(), EmploymentCategory::PartTime { weekly_days: 4 }, 0),
            7
        );
        assert_eq!(
            entitlement_days(&tables(), EmploymentCategory::PartTime { weekly_days: 2 }, 3),
            5
        );
        assert_eq!(
            entitlement_days(&tables(), EmploymentCategory::PartTime { weekly_days: 1 }, 6),
            3
        );
    }

    #[test]
    fn test_five_weekly_days_uses_full_time_table() {
        assert_eq!(
            entitlement_days(&tables(), EmploymentCategory::PartTime { weekly_days: 5 }, 2),
            12
        );
        assert_eq!(
            entitlement_days(&tables(), EmploymentCategory::PartTime { weekly_days: 6 }, 0),
            10
        );
    }

    #[test]
    fn test_unconfigured_weekly_days_yields_zero() {
        assert_eq!(
            entitlement_days(&tables(), EmploymentCategory::PartTime { weekly_days: 0 }, 2),
            0
        );
    }

    proptest! {
        /// Clamping holds for any tenure input.
        #[test]
        fn prop_lookup_is_clamped(tenure in -100i32..100) {
            let days = entitlement_days(&tables(), EmploymentCategory::FullTime, tenure);
            prop_assert!((10..=20).contains(&days));
            if tenure <= 0 {
                prop_assert_eq!(days, 10);
            }
            if tenure >= 6 {
                prop_assert_eq!(days, 20);
            }
        }
    }
}
