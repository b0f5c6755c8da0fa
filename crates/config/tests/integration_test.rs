//! Public API tests for `qmk-config`.
//!
//! Exercises the crate the way a host application does: build a config,
//! embed it in its own settings file, read it back.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use qmk_config::constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_USER_AGENT, MAX_TIMEOUT_SECS};
use qmk_config::{Config, ConfigError, ConfigLoader};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct HostSettings {
    theme: String,
    qmk: Config,
}

#[test]
fn test_config_embeds_in_host_settings() {
    let qmk = ConfigLoader::new()
        .with_base_url("http://localhost:5001/")
        .with_timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    let settings = HostSettings {
        theme: "dark".to_string(),
        qmk,
    };

    let text = serde_json::to_string(&settings).unwrap();
    assert!(text.contains(r#""base_url":"http://localhost:5001""#));
    assert!(text.contains(r#""timeout":5"#));

    let parsed: HostSettings = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, settings);
    assert_eq!(parsed.qmk.connection.api_root(), "http://localhost:5001/v1");
}

#[test]
fn test_partial_settings_fill_defaults() {
    let parsed: HostSettings =
        serde_json::from_str(r#"{"theme": "light", "qmk": {"connection": {"api_version": "v2"}}}"#)
            .unwrap();

    assert_eq!(parsed.qmk.connection.base_url, "https://api.qmk.fm");
    assert_eq!(parsed.qmk.connection.api_root(), "https://api.qmk.fm/v2");
    assert_eq!(parsed.qmk.connection.timeout, Duration::from_secs(2));
}

#[test]
fn test_error_messages_name_the_problem() {
    let err = ConfigLoader::new()
        .with_timeout(Duration::from_secs(MAX_TIMEOUT_SECS + 1))
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTimeout { .. }));
    assert!(err.to_string().starts_with("invalid timeout"));

    let err = ConfigLoader::new()
        .with_base_url("not a url")
        .build()
        .unwrap_err();
    assert!(err.to_string().starts_with("invalid base URL"));
}

#[test]
fn test_constants() {
    assert_eq!(DEFAULT_MAX_REDIRECTS, 5);
    assert!(DEFAULT_USER_AGENT.starts_with("qmk-client/"));
}
