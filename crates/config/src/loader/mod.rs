//! Configuration loader for explicitly supplied connection settings.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that fills in defaults.
//! - Validate the base URL and timeout before handing out a `Config`.
//!
//! Does NOT handle:
//! - Building HTTP clients (see the client crate).
//! - Reading the process environment or `.env` files.
//!
//! Invariants / Assumptions:
//! - Every value comes from a `with_*` call or a default constant.

mod builder;
mod error;

#[cfg(test)]
mod tests;

pub use builder::{ConfigLoader, validate_base_url, validate_timeout};
pub use error::ConfigError;
