use serde::{Deserialize, Serialize};

/// Statistics of a completed fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitSummary {
    /// Valid rows used for training
    pub rows: usize,
    /// Consecutive (t, t+1) pairs, i.e. `rows - 1`
    pub pairs: usize,
    /// Input features per pair, excluding the intercept
    pub features: usize,
    /// In-sample root mean squared error per KPI, schema order
    pub rmse: [f64; 4],
}
