//! Client builder for constructing [`QmkClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating and normalizing the base URL
//! - Composing the versioned API root exactly once
//! - Configuring the underlying HTTP client (timeout, redirects, user agent)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`QmkClient`] methods in the sibling modules)
//! - Loading stored settings (see [`qmk_config::ConfigLoader`])
//!
//! # Invariants
//! - The API root never ends with a slash
//! - An injected HTTP client is used as-is; builder timeout and user agent do not apply to it

use std::time::Duration;

use crate::client::QmkClient;
use crate::error::{ClientError, Result};
use qmk_config::{
    Config, ConnectionConfig,
    constants::{
        DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS,
        DEFAULT_USER_AGENT,
    },
    validate_base_url, validate_timeout,
};

/// Builder for creating a new [`QmkClient`].
///
/// Every option has a default, so `QmkClient::builder().build()` talks to
/// the public service.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use qmk_client::QmkClient;
///
/// # fn main() -> qmk_client::Result<()> {
/// let client = QmkClient::builder()
///     .base_url("http://localhost:5001".to_string())
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// assert_eq!(client.api_root(), "http://localhost:5001/v1");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct QmkClientBuilder {
    base_url: String,
    api_version: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http_client: Option<reqwest::Client>,
}

impl Default for QmkClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: None,
            user_agent: None,
            http_client: None,
        }
    }
}

impl QmkClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the service host, e.g. `https://api.qmk.fm`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Set the API version prefix. Default is `v1`.
    pub fn api_version(mut self, version: String) -> Self {
        self.api_version = version;
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 2 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    /// Use a preconfigured HTTP client instead of building one.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Create a client builder from configuration.
    ///
    /// ```rust,ignore
    /// use qmk_client::QmkClient;
    /// use qmk_config::ConfigLoader;
    ///
    /// let config = ConfigLoader::new().with_base_url("http://localhost:5001").build()?;
    /// let client = QmkClient::builder().from_config(&config).build()?;
    /// ```
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = config.connection.base_url.clone();
        self.api_version = config.connection.api_version.clone();
        self.timeout = Some(config.connection.timeout);
        self
    }

    /// Build the [`QmkClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the base URL is not an absolute
    /// http(s) URL with a host.
    /// Returns [`ClientError::Validation`] if the timeout is zero or longer
    /// than the configured maximum.
    /// Returns [`ClientError::Transport`] if the HTTP client fails to build.
    pub fn build(self) -> Result<QmkClient> {
        let base_url =
            validate_base_url(&self.base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if let Some(timeout) = self.timeout {
            validate_timeout(timeout).map_err(|e| ClientError::Validation(e.to_string()))?;
        }

        let api_root = ConnectionConfig {
            base_url,
            api_version: self.api_version,
            ..ConnectionConfig::default()
        }
        .api_root();

        let http = match self.http_client {
            Some(client) => {
                if self.timeout.is_some() || self.user_agent.is_some() {
                    tracing::warn!(
                        "timeout/user_agent have no effect when an HTTP client is injected; configure the injected client instead"
                    );
                }
                client
            }
            None => reqwest::Client::builder()
                .timeout(
                    self.timeout
                        .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
                )
                .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
                .user_agent(
                    self.user_agent
                        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
                )
                .build()?,
        };

        tracing::debug!(%api_root, "Built QMK API client");

        Ok(QmkClient { http, api_root })
    }
}
