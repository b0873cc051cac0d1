//! Global error types for the linebot client.
//!
//! Every failure surfaced by the client is a variant of `LbError`. Failed
//! API exchanges are split three ways: `Timeout` when the exchange never
//! completed, `Api` when the server explained itself with a structured body,
//! and `Status` when it did not.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience type alias for Results using LbError.
pub type LbResult<T> = Result<T, LbError>;

/// Unified error type covering all error categories in linebot.
#[derive(Error, Debug)]
pub enum LbError {
    // -- Configuration errors --
    /// Invalid client or application configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required configuration value is missing.
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    // -- API errors --
    /// The HTTP exchange did not complete within the request timeout.
    #[error("request timeout: {path}")]
    Timeout {
        /// Request path that timed out.
        path: String,
    },

    /// The server rejected the request and returned a structured error body.
    #[error("api error at {path}: {error}")]
    Api {
        /// Request path.
        path: String,
        /// Error body returned by the server.
        error: ErrorResponse,
    },

    /// The server rejected the request without a structured error body.
    #[error("api error at {path}: {status} {reason}")]
    Status {
        /// Request path.
        path: String,
        /// HTTP status code.
        status: u16,
        /// Reason phrase for the status code.
        reason: String,
    },

    /// Image upload requested with a format other than jpeg or png.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// A resource id that cannot be used as a single path segment.
    #[error("invalid resource id: {0:?}")]
    InvalidId(String),

    // -- Transport errors --
    /// HTTP request failed before a response was received.
    #[error("http error: {0}")]
    Http(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapping anyhow errors for interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LbError {
    /// Whether this error is a request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, LbError::Timeout { .. })
    }

    /// The structured error body, if the server returned one.
    pub fn api_error(&self) -> Option<&ErrorResponse> {
        match self {
            LbError::Api { error, .. } => Some(error),
            _ => None,
        }
    }

    /// The HTTP status code of a generic API failure.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            LbError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LbError {
    fn from(e: serde_json::Error) -> Self {
        LbError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for LbError {
    fn from(e: toml::de::Error) -> Self {
        LbError::Config(e.to_string())
    }
}

/// Error body returned by the API on a failed request.
///
/// ```json
/// { "message": "The request body has 1 error(s)",
///   "details": [{ "message": "May not be empty", "property": "messages[0].text" }] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Summary of the failure.
    pub message: String,
    /// Per-field details, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ErrorDetail>,
}

/// One entry of `ErrorResponse::details`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
}

impl ErrorResponse {
    /// Parse a response body as an error response.
    ///
    /// Returns `None` for anything that is not a JSON object with a string
    /// `message`, including empty bodies and a literal `null`.
    pub fn parse(body: &[u8]) -> Option<Self> {
        serde_json::from_slice::<Option<ErrorResponse>>(body)
            .ok()
            .flatten()
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        for detail in &self.details {
            match (&detail.property, &detail.message) {
                (Some(p), Some(m)) => write!(f, "; {p}: {m}")?,
                (None, Some(m)) => write!(f, "; {m}")?,
                (Some(p), None) => write!(f, "; {p}")?,
                (None, None) => {}
            }
        }
        Ok(())
    }
}
