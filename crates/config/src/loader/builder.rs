//! Configuration loader builder implementation.
//!
//! Invariants / Assumptions:
//! - Unset values fall back to the constants in [`crate::constants`].
//! - `build()` is the only place values are validated.

use std::time::Duration;
use tracing::debug;

use super::error::ConfigError;
use crate::constants::{DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use crate::types::{Config, ConnectionConfig};

/// Configuration loader that builds a [`Config`] from explicit values.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    api_version: Option<String>,
    timeout: Option<Duration>,
}

impl ConfigLoader {
    /// Create a new loader with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API version prefix.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate the collected values and fill in defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] for a malformed base URL and
    /// [`ConfigError::InvalidTimeout`] for a zero or excessive timeout.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = validate_base_url(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;

        let api_version = self
            .api_version
            .map(|v| v.trim().trim_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        validate_timeout(timeout)?;

        debug!(%base_url, %api_version, ?timeout, "Built QMK connection config");

        Ok(Config {
            connection: ConnectionConfig {
                base_url,
                api_version,
                timeout,
            },
        })
    }
}

/// Check that a request timeout is non-zero and at most [`MAX_TIMEOUT_SECS`].
pub fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
    if timeout.is_zero() {
        return Err(ConfigError::InvalidTimeout {
            message: "timeout must be greater than zero".to_string(),
        });
    }
    if timeout.as_secs() > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout {
            message: format!(
                "timeout of {}s exceeds the maximum of {}s",
                timeout.as_secs(),
                MAX_TIMEOUT_SECS
            ),
        });
    }
    Ok(())
}

/// Validate and normalize a service base URL.
///
/// - Parse as an absolute URL
/// - Require scheme is http or https
/// - Require host is present
/// - Normalize by stripping trailing slash
pub fn validate_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::InvalidBaseUrl {
            message: "base URL is empty".to_string(),
        });
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl {
        message: format!("must be an absolute http(s) URL with a host (e.g. https://api.qmk.fm): {e}"),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidBaseUrl {
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidBaseUrl {
            message: "host is required (e.g. https://api.qmk.fm)".to_string(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
