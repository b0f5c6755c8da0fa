//! Configuration management for the QMK API client.
//!
//! This crate provides the connection settings type and an explicit loader
//! that validates builder values and fills in defaults. Nothing here reads
//! the process environment.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, validate_base_url, validate_timeout};
pub use types::{Config, ConnectionConfig};

