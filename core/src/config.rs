//! Client configuration.
//!
//! Resolved once at startup and handed to `PortfolioApi::new`; nothing in
//! the crate reads the environment on its own.

use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";

pub const BASE_URL_VAR: &str = "PORTFOLIO_API_URL";
pub const TIMEOUT_VAR: &str = "PORTFOLIO_API_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Prefix for every endpoint path, e.g. `http://host/api/v1`.
    pub base_url: String,
    /// Applied to requests that do not carry their own timeout. `None` means
    /// no timeout at all.
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Read `PORTFOLIO_API_URL` and `PORTFOLIO_API_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` with an injectable variable source. Empty values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = get(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout = match get(TIMEOUT_VAR) {
            Some(raw) => {
                let millis: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidTimeout {
                    key: TIMEOUT_VAR,
                    value: raw.clone(),
                })?;
                Some(Duration::from_millis(millis))
            }
            None => None,
        };

        Ok(Self { base_url, timeout })
    }
}
