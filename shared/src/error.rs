//! Failures surfaced by the article gateway.

use serde::Deserialize;
use thiserror::Error;

/// Why a request against the article API did not produce a result.
///
/// `Display` is the message shown to the operator next to the triggering
/// action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response arrived (offline, DNS, CORS, aborted).
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx status.
    #[error("{message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Server-provided or synthesized description.
        message: String,
    },
    /// The requested article does not exist.
    #[error("Article not found")]
    NotFound,
    /// 2xx answer with `success: false`.
    #[error("{0}")]
    Rejected(String),
    /// The body could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),
    /// The request body could not be encoded.
    #[error("Serialize error: {0}")]
    Serialize(String),
}

/// Error fields a failing response may carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    /// Human-readable note.
    #[serde(default)]
    pub message: Option<String>,
    /// Human-readable failure reason.
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiError {
    /// Build the error for a non-2xx response.
    ///
    /// Prefers the body's `error`, then `message`, then a generic status line.
    pub fn from_status(status: u16, body: Option<ErrorBody>) -> Self {
        let message = body
            .and_then(|body| body.error.or(body.message))
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| format!("HTTP error: {status}"));
        ApiError::Server {
            status,
            message,
        }
    }

    /// True for a 404 coming from a single-article endpoint.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ApiError::NotFound
                | ApiError::Server {
                    status: 404,
                    ..
                }
        )
    }
}
