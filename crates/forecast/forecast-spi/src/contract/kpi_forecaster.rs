//! KPI forecaster trait definition.

use data_spi::KpiRow;

use crate::error::{ForecastError, Result};

/// One-step KPI forecaster with an autoregressive multi-step rollout.
///
/// Multi-step forecasts feed each prediction back as the next input, so
/// error compounds with the horizon. The model is never refit between steps.
pub trait KpiForecaster: Send + Sync {
    /// Train on the full history.
    fn fit(&mut self, history: &[KpiRow]) -> Result<()>;

    /// Whether a fit has succeeded.
    fn is_fitted(&self) -> bool;

    /// Predict the row one step after `row`.
    fn predict_next(&self, row: &KpiRow) -> Result<KpiRow>;

    /// Longest horizon [`forecast_period`](Self::forecast_period) accepts.
    fn max_horizon(&self) -> usize {
        usize::MAX
    }

    /// Predict one step past the last row of `history`.
    fn forecast_one_hour(&self, history: &[KpiRow]) -> Result<KpiRow> {
        if !self.is_fitted() {
            return Err(ForecastError::NotFitted);
        }
        let last = history.last().ok_or(ForecastError::InsufficientData {
            required: 1,
            actual: 0,
        })?;
        self.predict_next(last)
    }

    /// Roll the one-step prediction forward `hours` times.
    fn forecast_period(&self, history: &[KpiRow], hours: usize) -> Result<Vec<KpiRow>> {
        let max = self.max_horizon();
        if hours > max {
            return Err(ForecastError::InvalidParameter {
                name: "hours".to_string(),
                reason: format!("must be at most {}", max),
            });
        }
        if hours == 0 {
            return Ok(Vec::new());
        }

        let mut current = self.forecast_one_hour(history)?;
        let mut out = Vec::new();
        for _ in 1..hours {
            let next = self.predict_next(&current)?;
            out.push(current);
            current = next;
        }
        out.push(current);
        Ok(out)
    }
}
