//! Testing utilities for QMK client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use qmk_client::testing::load_fixture;
//!
//! let fixture = load_fixture("keyboards/plaid.json");
//! ```

use std::path::Path;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "status/status.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let content = load_fixture_bytes(fixture_path);
    serde_json::from_slice(&content).expect("Invalid JSON in fixture")
}

/// Load a fixture file byte-for-byte, for raw-text endpoints.
///
/// # Panics
/// - If the fixture file cannot be read
pub fn load_fixture_bytes(fixture_path: &str) -> Vec<u8> {
    let full_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path);
    std::fs::read(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_fixture() {
        let status = load_fixture("status/status.json");
        assert_eq!(status["status"], "running");
    }
}
