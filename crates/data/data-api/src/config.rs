//! History store and generator configuration types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default location of the history file.
pub const DEFAULT_HISTORY_PATH: &str = "data/history.csv";

/// Configuration for the CSV history store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the CSV file
    pub path: PathBuf,
    /// Rows written when the store is (re)created (default: 20)
    pub bootstrap_rows: usize,
    /// Minutes between consecutive generated rows (default: 30)
    pub step_minutes: i64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_HISTORY_PATH),
            bootstrap_rows: 20,
            step_minutes: 30,
        }
    }
}

impl StoreConfig {
    /// Create a configuration for `path` with default row settings.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Start a builder.
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::default()
    }
}

/// Builder for StoreConfig.
#[derive(Debug, Default)]
pub struct StoreConfigBuilder {
    path: Option<PathBuf>,
    bootstrap_rows: Option<usize>,
    step_minutes: Option<i64>,
}

impl StoreConfigBuilder {
    /// Set the file path.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the bootstrap row count.
    pub fn bootstrap_rows(mut self, rows: usize) -> Self {
        self.bootstrap_rows = Some(rows);
        self
    }

    /// Set the step between rows, in minutes.
    pub fn step_minutes(mut self, minutes: i64) -> Self {
        self.step_minutes = Some(minutes);
        self
    }

    /// Build the configuration, filling unset values with defaults.
    pub fn build(self) -> StoreConfig {
        let defaults = StoreConfig::default();
        StoreConfig {
            path: self.path.unwrap_or(defaults.path),
            bootstrap_rows: self.bootstrap_rows.unwrap_or(defaults.bootstrap_rows),
            step_minutes: self.step_minutes.unwrap_or(defaults.step_minutes).max(1),
        }
    }
}

/// Base ranges and safety bounds for synthetic rows.
///
/// Ranges are inclusive `(low, high)` pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub sorting_capacity: (u32, u32),
    pub staff_available: (u32, u32),
    pub vehicles_ready: (u32, u32),
    pub congestion_level: (f64, f64),
    /// Lower bound applied after time-of-day adjustments
    pub min_sorting_capacity: u32,
    pub min_staff_available: u32,
    pub min_vehicles_ready: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sorting_capacity: (60, 100),
            staff_available: (30, 60),
            vehicles_ready: (10, 20),
            congestion_level: (0.1, 0.9),
            min_sorting_capacity: 10,
            min_staff_available: 3,
            min_vehicles_ready: 2,
        }
    }
}
