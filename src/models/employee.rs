//! Employee model and related types.
//!
//! This module defines the Employee struct and EmploymentCategory enum
//! for representing workers in the attendance system.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the category of employment arrangement.
///
/// Part-time employees carry the number of contracted working days per
/// week, which selects their entitlement row. Five or more weekly days
/// is accounted as full-time regardless of the part-time flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentCategory {
    /// Full-time employment.
    FullTime,
    /// Part-time employment with a contracted number of working days per week.
    PartTime {
        /// Contracted working days per week (1 through 4 select a
        /// part-time entitlement row; 5 and above route to full-time).
        weekly_days: u8,
    },
}

/// Represents an employee subject to attendance and leave accounting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: Uuid,
    /// The employee's display name (unique across the system).
    pub name: String,
    /// The department the employee belongs to, if assigned.
    #[serde(default)]
    pub department: Option<String>,
    /// The date the employee joined.
    ///
    /// Legacy records may lack one; all entitlement computations return
    /// zero hours in that case rather than failing.
    #[serde(default)]
    pub join_date: Option<NaiveDate>,
    /// The category of employment arrangement.
    pub category: EmploymentCategory,
    /// Whether the employee works from a monthly shift roster instead of
    /// a fixed daily start time.
    #[serde(default)]
    pub is_shift_worker: bool,
    /// Expected daily start time for non-shift workers.
    #[serde(default)]
    pub default_start_time: Option<NaiveTime>,
    /// Soft resignation marker. Resigned employees keep their records;
    /// the engine never hard-deletes.
    #[serde(default)]
    pub resigned: bool,
}

impl Employee {
    /// Returns the category used for entitlement accounting.
    ///
    /// Part-time employees contracted for five or more days per week are
    /// accounted as full-time.
    pub fn effective_category(&self) -> EmploymentCategory {
        self.category.effective()
    }
}

impl EmploymentCategory {
    /// Normalizes the category for entitlement lookup.
    ///
    /// `PartTime` with `weekly_days >= 5` collapses to `FullTime`.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::EmploymentCategory;
    ///
    /// let five_days = EmploymentCategory::PartTime { weekly_days: 5 };
    /// assert_eq!(five_days.effective(), EmploymentCategory::FullTime);
    ///
    /// let three_days = EmploymentCategory::PartTime { weekly_days: 3 };
    /// assert_eq!(three_days.effective(), three_days);
    /// ```
    pub fn effective(self) -> EmploymentCategory {
        match self {
            EmploymentCategory::PartTime { weekly_days } if weekly_days >= 5 => {
                EmploymentCategory::FullTime
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee(category: EmploymentCategory) -> Employee {
        Employee {
            id: Uuid::nil(),
            name: "Sato Kenji".to_string(),
            department: Some("FIELD".to_string()),
            join_date: Some(NaiveDate::from_ymd_opt(2020, 4, 1).unwrap()),
            category,
            is_shift_worker: false,
            default_start_time: Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
            resigned: false,
        }
    }

    #[test]
    fn test_deserialize_full_time_employee() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000000",
            "name": "Sato Kenji",
            "department": "FIELD",
            "join_date": "2020-04-01",
            "category": "full_time",
            "is_shift_worker": false,
            "default_start_time": "09:00:00"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.name, "Sato Kenji");
        assert_eq!(employee.category, EmploymentCategory::FullTime);
        assert_eq!(
            employee.join_date,
            Some(NaiveDate::from_ymd_opt(2020, 4, 1).unwrap())
        );
        assert_eq!(
            employee.default_start_time,
            Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap())
        );
        assert!(!employee.resigned);
    }

    #[test]
    fn test_deserialize_part_time_employee() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000000",
            "name": "Mori Aiko",
            "category": {"part_time": {"weekly_days": 3}},
            "is_shift_worker": true
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(
            employee.category,
            EmploymentCategory::PartTime { weekly_days: 3 }
        );
        assert!(employee.is_shift_worker);
        assert_eq!(employee.join_date, None);
        assert_eq!(employee.default_start_time, None);
    }

    #[test]
    fn test_serialize_employee_round_trip() {
        let employee = create_test_employee(EmploymentCategory::PartTime { weekly_days: 2 });
        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }

    #[test]
    fn test_effective_category_full_time_stays_full_time() {
        assert_eq!(
            EmploymentCategory::FullTime.effective(),
            EmploymentCategory::FullTime
        );
    }

    #[test]
    fn test_effective_category_part_time_five_days_routes_to_full_time() {
        let employee = create_test_employee(EmploymentCategory::PartTime { weekly_days: 5 });
        assert_eq!(employee.effective_category(), EmploymentCategory::FullTime);
    }

    #[test]
    fn test_effective_category_part_time_four_days_stays_part_time() {
        let employee = create_test_employee(EmploymentCategory::PartTime { weekly_days: 4 });
        assert_eq!(
            employee.effective_category(),
            EmploymentCategory::PartTime { weekly_days: 4 }
        );
    }

    #[test]
    fn test_category_serialization() {
        assert_eq!(
            serde_json::to_string(&EmploymentCategory::FullTime).unwrap(),
            "\"full_time\""
        );
        assert_eq!(
            serde_json::to_string(&EmploymentCategory::PartTime { weekly_days: 4 }).unwrap(),
            "{\"part_time\":{\"weekly_days\":4}}"
        );
    }
}
