//! Background task appending one generated row per interval.

use std::time::Duration;

use data_facade::KpiRow;
use serde::Serialize;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::{error, info};

use crate::state::AppState;

/// Counters exposed by the readiness probe. Reset on restart.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SchedulerState {
    pub ticks: u64,
    pub failures: u64,
    pub last_row: Option<KpiRow>,
}

/// Append one row and record the outcome.
pub async fn tick(state: &AppState) {
    let result = state.with_service(|service| service.append()).await;
    let mut scheduler = state.scheduler.write().await;
    scheduler.ticks += 1;

    match result {
        Ok(row) => {
            info!(
                timestamp = %row.timestamp,
                sorting_capacity = row.sorting_capacity,
                staff_available = row.staff_available,
                vehicles_ready = row.vehicles_ready,
                congestion_level = row.congestion_level,
                "generated row"
            );
            scheduler.last_row = Some(row);
        }
        Err(err) => {
            scheduler.failures += 1;
            error!(error = %err, "scheduled append failed");
        }
    }
}

/// Spawn the generation loop. The first append happens one `period` after
/// start; the loop runs until the runtime shuts down.
pub fn spawn(state: AppState, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        loop {
            ticker.tick().await;
            tick(&state).await;
        }
    })
}
