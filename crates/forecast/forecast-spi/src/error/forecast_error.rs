//! Forecast error types

use thiserror::Error;

/// Errors that can occur during forecasting operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Insufficient valid rows for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Forecast requested before a successful fit
    #[error("Model not trained: call fit() before forecasting")]
    NotFitted,

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    NumericalError(String),
}

impl ForecastError {
    /// Whether the error only means "not enough history yet".
    pub fn is_insufficient_data(&self) -> bool {
        matches!(
            self,
            ForecastError::InsufficientData { .. } | ForecastError::NotFitted
        )
    }
}
