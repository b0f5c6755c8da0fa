//! Error types for configuration loading.
//!
//! Invariants:
//! - Every variant names the offending setting.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid base URL: {message}")]
    InvalidBaseUrl { message: String },

    #[error("invalid timeout: {message}")]
    InvalidTimeout { message: String },
}
