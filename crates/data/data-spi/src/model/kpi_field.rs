//! The four tracked KPI columns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::KpiRow;
use crate::error::DataError;

/// A KPI column of the history schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KpiField {
    SortingCapacity,
    StaffAvailable,
    VehiclesReady,
    CongestionLevel,
}

impl KpiField {
    /// All fields in schema order.
    pub const ALL: [KpiField; 4] = [
        KpiField::SortingCapacity,
        KpiField::StaffAvailable,
        KpiField::VehiclesReady,
        KpiField::CongestionLevel,
    ];

    /// Column name as stored in the CSV header.
    pub fn name(self) -> &'static str {
        match self {
            KpiField::SortingCapacity => "sorting_capacity",
            KpiField::StaffAvailable => "staff_available",
            KpiField::VehiclesReady => "vehicles_ready",
            KpiField::CongestionLevel => "congestion_level",
        }
    }

    /// Human readable label, e.g. `Sorting Capacity`.
    pub fn label(self) -> &'static str {
        match self {
            KpiField::SortingCapacity => "Sorting Capacity",
            KpiField::StaffAvailable => "Staff Available",
            KpiField::VehiclesReady => "Vehicles Ready",
            KpiField::CongestionLevel => "Congestion Level",
        }
    }

    /// Count-like fields are stored as non-negative integers.
    pub fn is_count(self) -> bool {
        !matches!(self, KpiField::CongestionLevel)
    }

    /// Read this field from a row as `f64`.
    pub fn value_of(self, row: &KpiRow) -> f64 {
        match self {
            KpiField::SortingCapacity => f64::from(row.sorting_capacity),
            KpiField::StaffAvailable => f64::from(row.staff_available),
            KpiField::VehiclesReady => f64::from(row.vehicles_ready),
            KpiField::CongestionLevel => row.congestion_level,
        }
    }
}

impl fmt::Display for KpiField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KpiField {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KpiField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| DataError::UnknownField(s.to_string()))
    }
}
