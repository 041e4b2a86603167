//! Configuration loading and management for the attendance engine.
//!
//! This module provides the typed engine configuration — entitlement
//! tables, shift-code start times, and workday/leave accounting rules —
//! and a loader that reads them from YAML files. The statutory defaults
//! are also available in code so the pure calculation core can be used
//! without any file I/O.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/statutory").unwrap();
//! println!("Leave day is {} hours", loader.config().leave().hours_per_day);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, EntitlementTables, LeaveRules, ShiftTable, WorkdayRules};
