//! KPI row type.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::KpiField;

/// CSV header of the history file, in order.
pub const COLUMNS: [&str; 5] = [
    "timestamp",
    "sorting_capacity",
    "staff_available",
    "vehicles_ready",
    "congestion_level",
];

/// A single KPI sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiRow {
    /// Sample time (naive local time)
    #[serde(with = "crate::model::timestamp")]
    pub timestamp: NaiveDateTime,
    /// Parcels the sorting lines can process
    pub sorting_capacity: u32,
    /// Staff on shift
    pub staff_available: u32,
    /// Vehicles ready for dispatch
    pub vehicles_ready: u32,
    /// Congestion as a fraction in [0, 1]
    pub congestion_level: f64,
}

impl KpiRow {
    /// Create a new row. Congestion is clamped to [0, 1].
    pub fn new(
        timestamp: NaiveDateTime,
        sorting_capacity: u32,
        staff_available: u32,
        vehicles_ready: u32,
        congestion_level: f64,
    ) -> Self {
        Self {
            timestamp,
            sorting_capacity,
            staff_available,
            vehicles_ready,
            congestion_level: congestion_level.clamp(0.0, 1.0),
        }
    }

    /// Read a field as `f64`.
    pub fn get(&self, field: KpiField) -> f64 {
        field.value_of(self)
    }

    /// The four KPI values in schema order.
    pub fn values(&self) -> [f64; 4] {
        KpiField::ALL.map(|field| field.value_of(self))
    }

    /// Whether every numeric field is finite and within bounds.
    pub fn is_valid(&self) -> bool {
        self.congestion_level.is_finite() && (0.0..=1.0).contains(&self.congestion_level)
    }
}

/// The newest `limit` rows of `history`, newest last.
pub fn tail(history: &[KpiRow], limit: usize) -> &[KpiRow] {
    let start = history.len().saturating_sub(limit);
    &history[start..]
}
