//! Application state for the attendance engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers, including the injectable wall-clock used to
//! default `as_of_date` when a request omits it.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::config::ConfigLoader;

/// A wall-clock "today" provider.
///
/// Injectable so reports that default to "now" stay deterministic in
/// tests.
pub trait Clock: Send + Sync {
    /// The current calendar date.
    fn today(&self) -> NaiveDate;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock pinned to a fixed date, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Shared application state.
///
/// Contains resources shared across all request handlers: the loaded
/// engine configuration and the clock.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates application state with the given configuration and the
    /// system clock.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates application state with an explicit clock.
    pub fn with_clock(config: ConfigLoader, clock: Arc<dyn Clock>) -> Self {
        Self {
            config: Arc::new(config),
            clock,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns today's date per the configured clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}
