//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use qmk_client::testing::{load_fixture, load_fixture_bytes};
#[allow(unused_imports)]
pub use qmk_client::{ClientError, DecodeErrorKind, QmkClient, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a client whose API root is `{server}/v1`.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> QmkClient {
    QmkClient::builder()
        .base_url(server.uri())
        .build()
        .expect("mock server URI is a valid base URL")
}

/// Route `tracing` output through the test harness. Safe to call repeatedly.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
