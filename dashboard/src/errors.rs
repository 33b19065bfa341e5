use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cache::FetchFailure;
use serde_json::json;
use thiserror::Error;
use upstream::UpstreamError;

#[derive(Debug, Clone, Error)]
pub enum DashboardError {
    #[error("Rate limited: {message}")]
    RateLimited { message: String },

    #[error("Upstream unavailable: {message}")]
    UpstreamUnavailable {
        status: Option<u16>,
        message: String,
    },

    #[error("Insufficient data: {message}")]
    InsufficientData { message: String },

    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DashboardError {
    pub fn invalid(message: impl Into<String>) -> Self {
        DashboardError::InvalidParameter {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            DashboardError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<UpstreamError> for DashboardError {
    fn from(e: UpstreamError) -> Self {
        match e {
            UpstreamError::RateLimited { message } => DashboardError::RateLimited { message },
            other => DashboardError::UpstreamUnavailable {
                status: other.status(),
                message: other.to_string(),
            },
        }
    }
}

impl FetchFailure for DashboardError {
    fn is_rate_limited(&self) -> bool {
        matches!(self, DashboardError::RateLimited { .. })
    }

    // 数据不足或参数错误，重试也不会变
    fn is_retryable(&self) -> bool {
        matches!(
            self,
            DashboardError::RateLimited { .. } | DashboardError::UpstreamUnavailable { .. }
        )
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
