use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Parameters invalid: {message}")]
    ParametersInvalid { message: String },

    #[error("Network error: {message}")]
    NetworkError { message: String },

    #[error("Request timeout: {message}")]
    Timeout { message: String },

    #[error("Rate limited: {message}")]
    RateLimited { message: String },

    #[error("Http status {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Parse result error: {message}")]
    ParseResultError { message: String },

    #[error("Client error: {message}")]
    ClientError { message: String },
}

impl UpstreamError {
    pub fn parse(message: impl Into<String>) -> Self {
        UpstreamError::ParseResultError {
            message: message.into(),
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, UpstreamError::RateLimited { .. })
    }

    /// HTTP status reported by the upstream, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            UpstreamError::RateLimited { .. } => Some(429),
            UpstreamError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<json::JsonError> for UpstreamError {
    fn from(e: json::JsonError) -> Self {
        UpstreamError::parse(e.to_string())
    }
}

impl From<csv::Error> for UpstreamError {
    fn from(e: csv::Error) -> Self {
        UpstreamError::parse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, UpstreamError>;
