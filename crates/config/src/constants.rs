//! Centralized constants for the QMK API workspace.
//!
//! Default values used across crates, kept here to avoid magic number
//! duplication.

// =============================================================================
// Connection Defaults
// =============================================================================

/// Public QMK API host.
pub const DEFAULT_BASE_URL: &str = "https://api.qmk.fm";

/// API version prefix appended to the base URL.
pub const DEFAULT_API_VERSION: &str = "v1";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 2;

/// Maximum allowed request timeout in seconds (10 minutes).
pub const MAX_TIMEOUT_SECS: u64 = 600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// `User-Agent` sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("qmk-client/", env!("CARGO_PKG_VERSION"));

