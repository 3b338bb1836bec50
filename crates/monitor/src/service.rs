//! The monitor service: every read-side KPI operation over one history store.

use anomaly_facade::{
    AnomalyReport, KpiAnomalyDetector, RollingZScoreConfig, RollingZScoreDetector,
};
use data_facade::{tail, CsvHistoryStore, HistoryStore, KpiRow};
use forecast_facade::{ForecastConfig, KpiForecaster, LinearForecaster};
use optimizer_facade::{
    AdvisorConfig, Advisor, AlertLedger, OptimizerError, RuleAdvisor, UrgentAlert,
};
use tracing::debug;

use crate::error::{MonitorError, Result};
use crate::report::OptimizationReport;

/// Rows returned by [`MonitorService::history`] when no limit is given.
pub const DEFAULT_HISTORY_LIMIT: usize = 500;

/// Runs analyses on demand against the current contents of a history store.
///
/// Every call reloads the history and refits the forecaster, so results
/// always reflect the latest appended row.
#[derive(Debug)]
pub struct MonitorService<S: HistoryStore = CsvHistoryStore> {
    store: S,
    detector: RollingZScoreConfig,
    forecast: ForecastConfig,
    advisor: RuleAdvisor,
}

impl<S: HistoryStore> MonitorService<S> {
    /// Create a service with default analysis settings.
    pub fn new(store: S) -> Self {
        Self {
            store,
            detector: RollingZScoreConfig::default(),
            forecast: ForecastConfig::default(),
            advisor: RuleAdvisor::default(),
        }
    }

    /// Use `config` for every forecast.
    pub fn with_forecast_config(mut self, config: ForecastConfig) -> Result<Self> {
        config.validate()?;
        self.forecast = config;
        Ok(self)
    }

    /// Use `config` for the detector run by [`optimize`](Self::optimize).
    ///
    /// The advisor's alert levels follow the new window and threshold.
    pub fn with_detector_config(mut self, config: RollingZScoreConfig) -> Result<Self> {
        config.validate()?;
        self.detector = config;
        let advisor = *self.advisor.config();
        self.with_advisor_config(advisor)
    }

    /// Use `config` for suggestions and alert levels. Its anomaly window and
    /// threshold are taken from the detector settings.
    pub fn with_advisor_config(mut self, config: AdvisorConfig) -> Result<Self> {
        let config = config
            .with_anomaly_window(self.detector.window)
            .with_anomaly_threshold(self.detector.threshold);
        self.advisor = RuleAdvisor::new(config)?;
        Ok(self)
    }

    pub fn advisor_config(&self) -> &AdvisorConfig {
        self.advisor.config()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn forecast_config(&self) -> &ForecastConfig {
        &self.forecast
    }

    /// Create the store if needed.
    pub fn init(&self) -> Result<()> {
        self.store.init()?;
        Ok(())
    }

    /// Newest `limit` rows, oldest first.
    pub fn history(&self, limit: usize) -> Result<Vec<KpiRow>> {
        let history = self.store.load()?;
        Ok(tail(&history, limit).to_vec())
    }

    /// Number of rows currently stored.
    pub fn row_count(&self) -> Result<usize> {
        Ok(self.store.load()?.len())
    }

    /// Generate and persist one row.
    pub fn append(&self) -> Result<KpiRow> {
        let row = self.store.append()?;
        debug!(timestamp = %row.timestamp, "row appended");
        Ok(row)
    }

    /// Rolling z-score anomalies over the whole history.
    pub fn anomalies(&self, threshold: f64, window: usize) -> Result<AnomalyReport> {
        let detector = RollingZScoreDetector::new(window, threshold)?;
        let history = self.store.load()?;
        Ok(AnomalyReport::new(detector.compute(&history)?))
    }

    /// Autoregressive forecast of `hours` steps past the last row.
    ///
    /// Horizons beyond the configured maximum are rejected before any work.
    pub fn forecast(&self, hours: usize) -> Result<Vec<KpiRow>> {
        self.forecast.check_horizon(hours)?;
        let history = self.store.load()?;
        let model = self.fit(&history)?;
        Ok(model.forecast_period(&history, hours)?)
    }

    /// Forecast one step past the last row.
    pub fn forecast_next(&self) -> Result<KpiRow> {
        let history = self.store.load()?;
        let model = self.fit(&history)?;
        Ok(model.forecast_one_hour(&history)?)
    }

    /// Latest state, next-step forecast, suggestions and active alerts.
    ///
    /// Too little history for a forecast is not an error: the report carries
    /// no forecast and only anomaly-driven alerts.
    pub fn optimize(&self, ledger: &AlertLedger) -> Result<OptimizationReport> {
        let history = self.store.load()?;
        let latest = history.last().cloned();

        let forecast_next = match self
            .fit(&history)
            .and_then(|model| Ok(model.forecast_one_hour(&history)?))
        {
            Ok(row) => Some(row),
            Err(err) if err.is_insufficient_data() => {
                debug!(rows = history.len(), "skipping forecast: {}", err);
                None
            }
            Err(err) => return Err(err),
        };

        let anomalies = self.detector()?.compute(&history)?;
        let mut advice = self
            .advisor
            .advise(latest.as_ref(), forecast_next.as_ref(), &anomalies);
        advice.retain_alerts(|alert| !ledger.is_dismissed(&alert.id));

        let status = advice.status();
        debug!(
            ?status,
            suggestions = advice.suggestions.len(),
            alerts = advice.urgent_alerts.len(),
            "optimization report ready"
        );

        Ok(OptimizationReport {
            status,
            latest,
            forecast_next,
            suggestions: advice.suggestions,
            urgent_alerts: advice.urgent_alerts,
        })
    }

    /// Urgent alerts that have not been dismissed.
    pub fn alerts(&self, ledger: &AlertLedger) -> Result<Vec<UrgentAlert>> {
        let history = self.store.load()?;
        let anomalies = self.detector()?.compute(&history)?;
        let advice = self.advisor.advise(None, None, &anomalies);
        Ok(ledger.filter_active(advice.urgent_alerts))
    }

    /// Dismiss the alert `id`. Returns `false` if it was already dismissed.
    ///
    /// Ids that match no current alert are rejected with
    /// [`OptimizerError::UnknownAlert`].
    pub fn dismiss(&self, ledger: &mut AlertLedger, id: &str) -> Result<bool> {
        if ledger.is_dismissed(id) {
            return Ok(false);
        }
        let known = self
            .alerts(&AlertLedger::new())?
            .iter()
            .any(|alert| alert.id == id);
        if !known {
            return Err(OptimizerError::UnknownAlert(id.to_string()).into());
        }
        Ok(ledger.dismiss(id))
    }

    fn detector(&self) -> Result<RollingZScoreDetector> {
        Ok(RollingZScoreDetector::from_config(self.detector)?)
    }

    fn fit(&self, history: &[KpiRow]) -> Result<LinearForecaster> {
        let mut model = LinearForecaster::new(self.forecast)?;
        model.fit(history).map_err(MonitorError::from)?;
        Ok(model)
    }
}
