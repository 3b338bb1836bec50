//! Row generator trait definition.

use chrono::NaiveDateTime;

use crate::model::KpiRow;

/// Produces one KPI row for a reference timestamp.
///
/// Only the value bounds are contractual; values themselves are random.
pub trait RowGenerator: Send + Sync {
    /// Generate a row stamped with `timestamp`.
    fn generate(&self, timestamp: NaiveDateTime) -> KpiRow;

    /// Generate `n` rows ending one step before `end`, spaced by `step_minutes`.
    fn bootstrap(&self, n: usize, end: NaiveDateTime, step_minutes: i64) -> Vec<KpiRow> {
        (0..n)
            .map(|i| {
                let offset = step_minutes * (n - i) as i64;
                self.generate(end - chrono::Duration::minutes(offset))
            })
            .collect()
    }
}
