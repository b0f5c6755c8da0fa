//! Connection settings for the QMK API.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Serde helper that stores a [`Duration`] as whole seconds.
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Where and how to reach the QMK API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Service host, without a trailing slash (e.g. `https://api.qmk.fm`).
    pub base_url: String,
    /// Version prefix inserted between host and endpoint path (e.g. `v1`).
    pub api_version: String,
    /// Per-request timeout.
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ConnectionConfig {
    /// The versioned API root every endpoint path is appended to.
    pub fn api_root(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let version = self.api_version.trim_matches('/');
        if version.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, version)
        }
    }
}

/// Top-level client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub connection: ConnectionConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_connection() {
        let config = ConnectionConfig::default();
        assert_eq!(config.base_url, "https://api.qmk.fm");
        assert_eq!(config.api_version, "v1");
        assert_eq!(config.timeout, Duration::from_secs(2));
        assert_eq!(config.api_root(), "https://api.qmk.fm/v1");
    }

    #[test]
    fn test_api_root_without_version() {
        let config = ConnectionConfig {
            api_version: String::new(),
            ..ConnectionConfig::default()
        };
        assert_eq!(config.api_root(), "https://api.qmk.fm");
    }

    #[test]
    fn test_api_root_trims_separators() {
        let config = ConnectionConfig {
            base_url: "http://localhost:5001/".to_string(),
            api_version: "/v2/".to_string(),
            ..ConnectionConfig::default()
        };
        assert_eq!(config.api_root(), "http://localhost:5001/v2");
    }

    #[test]
    fn test_timeout_serialized_as_seconds() {
        let value = serde_json::to_value(Config::default()).unwrap();
        assert_eq!(value["connection"]["timeout"], 2);

        let parsed: Config = serde_json::from_str(r#"{"connection": {"timeout": 30}}"#).unwrap();
        assert_eq!(parsed.connection.timeout, Duration::from_secs(30));
        assert_eq!(parsed.connection.base_url, "https://api.qmk.fm");
    }
}
