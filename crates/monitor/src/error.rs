//! Errors surfaced by the monitor service.

use anomaly_facade::AnomalyError;
use data_facade::DataError;
use forecast_facade::ForecastError;
use optimizer_facade::OptimizerError;
use thiserror::Error;

/// Error type for monitor operations
#[derive(Error, Debug)]
pub enum MonitorError {
    /// Not enough history for the requested analysis
    #[error("{0}")]
    InsufficientData(String),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Anomaly(#[from] AnomalyError),

    #[error(transparent)]
    Forecast(ForecastError),

    #[error(transparent)]
    Optimizer(#[from] OptimizerError),
}

impl From<ForecastError> for MonitorError {
    fn from(err: ForecastError) -> Self {
        if err.is_insufficient_data() {
            MonitorError::InsufficientData(err.to_string())
        } else {
            MonitorError::Forecast(err)
        }
    }
}

impl MonitorError {
    /// Whether the caller should answer with a structured "not enough data"
    /// response instead of a failure.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, MonitorError::InsufficientData(_))
    }

    /// Whether the error comes from invalid caller input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            MonitorError::Anomaly(AnomalyError::InvalidParameter { .. })
                | MonitorError::Forecast(ForecastError::InvalidParameter { .. })
                | MonitorError::Optimizer(OptimizerError::InvalidParameter { .. })
        )
    }

    /// Whether the error names something that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, MonitorError::Optimizer(OptimizerError::UnknownAlert(_)))
    }
}

/// Result type for monitor operations
pub type Result<T> = std::result::Result<T, MonitorError>;
