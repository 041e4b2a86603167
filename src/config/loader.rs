//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, EntitlementTables, RulesConfig, ShiftTable};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory.
///
/// # Directory Structure
///
/// ```text
/// config/statutory/
/// ├── rules.yaml         # Workday thresholds and leave accounting rules
/// ├── entitlements.yaml  # Entitlement tables in days
/// └── shifts.yaml        # Shift-code start times
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/statutory")?;
/// assert_eq!(loader.config().leave().max_balance_hours, 320);
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if a required file is
    /// missing and [`EngineError::ConfigParseError`] if a file contains
    /// invalid YAML or is missing required fields.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rules: RulesConfig = Self::load_yaml(&path.join("rules.yaml"))?;
        let entitlements: EntitlementTables = Self::load_yaml(&path.join("entitlements.yaml"))?;
        let shifts: ShiftTable = Self::load_yaml(&path.join("shifts.yaml"))?;

        Ok(Self {
            config: EngineConfig::new(rules.workday, rules.leave, entitlements, shifts),
        })
    }

    /// Creates a loader backed by the built-in statutory configuration,
    /// without touching the filesystem.
    pub fn statutory() -> Self {
        Self {
            config: EngineConfig::statutory(),
        }
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftCode;
    use chrono::NaiveTime;

    #[test]
    fn test_load_statutory_directory() {
        let loader = ConfigLoader::load("./config/statutory").unwrap();
        let config = loader.config();
        assert_eq!(config.leave().hours_per_day, 8);
        assert_eq!(config.workday().break_threshold_minutes, 360);
        assert_eq!(
            config.shifts().start_for(ShiftCode(4)),
            Some(NaiveTime::from_hms_opt(22, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_loaded_files_match_builtin_statutory_config() {
        let loaded = ConfigLoader::load("./config/statutory").unwrap();
        let builtin = EngineConfig::statutory();

        assert_eq!(
            loaded.config().entitlements().full_time,
            builtin.entitlements().full_time
        );
        assert_eq!(
            loaded.config().entitlements().part_time,
            builtin.entitlements().part_time
        );
        assert_eq!(
            loaded.config().shifts().starts,
            builtin.shifts().starts
        );
        assert_eq!(
            loaded.config().workday().overtime_flag_minutes,
            builtin.workday().overtime_flag_minutes
        );
        assert_eq!(
            loaded.config().leave().max_balance_hours,
            builtin.leave().max_balance_hours
        );
    }

    #[test]
    fn test_missing_directory_reports_config_not_found() {
        let err = ConfigLoader::load("./config/does-not-exist").unwrap_err();
        assert!(matches!(err, EngineError::ConfigNotFound { .. }));
    }
}
