//! Error types for the portfolio API client.
//!
//! # Design
//! Every failed call surfaces as one of four kinds. `Transport` covers both a
//! non-2xx status (with the status code and its reason phrase) and network
//! failures (no status). `Parse` means a 2xx body that was not JSON; callers
//! treat it the same as `Transport`. `Validation` is raised only at the page
//! loader boundary, when a JSON payload does not match the typed schema.

use thiserror::Error;

/// Errors returned by the API client, the transports and the page loaders.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx status, or the request never got a response.
    #[error("API Error: {message}")]
    Transport { status: Option<u16>, message: String },

    /// The response body of a 2xx response is not valid JSON.
    #[error("failed to parse response body: {0}")]
    Parse(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// A JSON payload does not have the shape of the expected entity.
    #[error("invalid {resource} payload: {message}")]
    Validation {
        resource: &'static str,
        message: String,
    },
}

impl ApiError {
    /// `true` for HTTP-status and network failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport { .. })
    }

    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport { status, .. } => *status,
            _ => None,
        }
    }

    /// A failure where no HTTP response was received.
    pub fn network(message: impl Into<String>) -> Self {
        ApiError::Transport {
            status: None,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

/// Errors raised while reading client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a whole number of milliseconds, got {value:?}")]
    InvalidTimeout { key: &'static str, value: String },
}
