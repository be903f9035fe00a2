use http::StatusCode;
use thiserror::Error;

/// Errors that can occur while proxying a chat request
#[derive(Debug, Error)]
pub enum LlmError {
    /// Client sent a malformed or invalid request
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Upstream provider returned a non-success status before streaming began
    #[error("upstream provider returned {status}")]
    Upstream {
        /// HTTP status from the provider
        status: StatusCode,
        /// Raw provider error body, kept for diagnostics
        body: String,
    },

    /// Failure while reading the upstream response mid-stream
    #[error("streaming error: {0}")]
    Streaming(String),

    /// Unexpected internal error
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl LlmError {
    /// HTTP status code for this error at the inbound boundary
    ///
    /// Upstream errors pass the provider's status through unchanged.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream { status, .. } => *status,
            Self::Streaming(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to expose to API consumers
    ///
    /// Internal details (and anything that could carry credentials) stay in
    /// the logs.
    pub fn client_message(&self) -> String {
        match self {
            Self::Internal(_) => "Internal Server Error".to_owned(),
            other => other.to_string(),
        }
    }
}
