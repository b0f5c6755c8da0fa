//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define the connection settings consumed by the client builder.
//! - Provide serialization helpers for durations.
//!
//! Does NOT handle:
//! - Validating and defaulting values (see `loader` module).
//! - Actual network connections (see client crate).

pub(crate) mod connection;

pub use connection::{Config, ConnectionConfig};
