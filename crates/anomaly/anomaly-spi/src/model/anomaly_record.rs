//! Anomaly record type.

use chrono::NaiveDateTime;
use data_spi::{KpiField, KpiRow};
use serde::{Deserialize, Serialize};

/// A KPI row flagged as anomalous for one column.
///
/// The row's fields are flattened into the record, so the serialized shape
/// is the KPI row plus `variable` and `z_score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyRecord {
    /// The flagged row
    #[serde(flatten)]
    pub row: KpiRow,
    /// Column whose z-score crossed the threshold
    pub variable: KpiField,
    /// Rolling z-score of that column at this row (always finite)
    pub z_score: f64,
}

impl AnomalyRecord {
    /// Create a new record.
    pub fn new(row: KpiRow, variable: KpiField, z_score: f64) -> Self {
        Self {
            row,
            variable,
            z_score,
        }
    }

    /// Timestamp of the flagged row.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.row.timestamp
    }

    /// Value of the flagged column.
    pub fn value(&self) -> f64 {
        self.row.get(self.variable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_serialized_shape_is_flat() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        let record = AnomalyRecord::new(
            KpiRow::new(ts, 140, 40, 12, 0.3),
            KpiField::SortingCapacity,
            2.85,
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["timestamp"], "2024-01-01 08:30:00");
        assert_eq!(json["sorting_capacity"], 140);
        assert_eq!(json["variable"], "sorting_capacity");
        assert_eq!(json["z_score"], 2.85);
        assert_eq!(record.value(), 140.0);
    }
}
