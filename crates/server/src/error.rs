//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use monitor::MonitorError;
use serde::Serialize;
use thiserror::Error;
use tokio::task::JoinError;
use tracing::error;

use crate::config::ConfigError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Handler error. Insufficient data is a normal 200 response carrying
/// `{error}` so dashboards can render it without special casing.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Monitor(#[from] MonitorError),

    #[error("background task failed: {0}")]
    Task(#[from] JoinError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Monitor(err) if err.is_insufficient_data() => StatusCode::OK,
            ApiError::Monitor(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            ApiError::Monitor(err) if err.is_invalid_input() => StatusCode::BAD_REQUEST,
            ApiError::Monitor(_) | ApiError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Fatal startup or serve failure.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("history store error: {0}")]
    Monitor(#[from] MonitorError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use optimizer_facade::OptimizerError;

    #[test]
    fn test_insufficient_data_is_ok() {
        let err = ApiError::from(MonitorError::InsufficientData("not enough".to_string()));
        assert_eq!(err.status_code(), StatusCode::OK);
        assert_eq!(err.to_string(), "not enough");
    }

    #[test]
    fn test_unknown_alert_is_not_found() {
        let err = ApiError::from(MonitorError::from(OptimizerError::UnknownAlert(
            "x@1".to_string(),
        )));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_failure_is_server_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ApiError::from(MonitorError::Data(io.into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
