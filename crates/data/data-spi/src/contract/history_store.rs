//! History store trait definition.

use crate::error::Result;
use crate::model::KpiRow;

/// Durable, append-only sequence of KPI rows.
///
/// Implementations recover from corrupted persisted state by regenerating
/// it; that recovery is never reported to the caller.
pub trait HistoryStore: Send + Sync {
    /// Create the store with bootstrap rows if it is missing, empty or
    /// malformed. Leaves valid existing data untouched.
    fn init(&self) -> Result<()>;

    /// Load every row, ordered by timestamp ascending.
    fn load(&self) -> Result<Vec<KpiRow>>;

    /// Generate the next row (last timestamp plus one step, or now when the
    /// store is empty), persist it and return it.
    fn append(&self) -> Result<KpiRow>;

    /// The most recent row, if any.
    fn latest(&self) -> Result<Option<KpiRow>> {
        Ok(self.load()?.pop())
    }
}
