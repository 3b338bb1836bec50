use std::collections::BTreeMap;

use data_facade::KpiRow;
use optimizer_facade::{OptimizationStatus, UrgentAlert};
use serde::{Deserialize, Serialize};

/// Combined view of the latest state, the next-step forecast and the advice
/// derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationReport {
    pub status: OptimizationStatus,
    pub latest: Option<KpiRow>,
    pub forecast_next: Option<KpiRow>,
    pub suggestions: BTreeMap<String, String>,
    pub urgent_alerts: Vec<UrgentAlert>,
}
