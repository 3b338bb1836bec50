use std::sync::Arc;

use monitor::MonitorService;
use optimizer_facade::AlertLedger;
use tokio::sync::RwLock;

use crate::error::ApiError;
use crate::scheduler::SchedulerState;

/// Application state shared across handlers and the scheduler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<MonitorService>,
    pub ledger: Arc<RwLock<AlertLedger>>,
    pub scheduler: Arc<RwLock<SchedulerState>>,
}

impl AppState {
    pub fn new(service: MonitorService) -> Self {
        Self {
            service: Arc::new(service),
            ledger: Arc::new(RwLock::new(AlertLedger::new())),
            scheduler: Arc::new(RwLock::new(SchedulerState::default())),
        }
    }

    /// Run a service call on the blocking pool. Every service operation
    /// reads or rewrites the history file.
    pub async fn with_service<T, F>(&self, call: F) -> Result<T, ApiError>
    where
        F: FnOnce(&MonitorService) -> monitor::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let service = Arc::clone(&self.service);
        Ok(tokio::task::spawn_blocking(move || call(&service)).await??)
    }
}
