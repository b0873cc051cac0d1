//! Shared test utilities for integration tests.

#![allow(dead_code)]

use linebot_api::ApiClient;
use linebot_core::config::ApiConfig;
use wiremock::MockServer;

/// Bearer token used by every test client.
pub const TEST_TOKEN: &str = "test-channel-token";

/// Create a client pointed at the mock server with the default timeout.
pub fn create_test_client(server: &MockServer) -> ApiClient {
    create_test_client_with_timeout(server, 10_000)
}

/// Create a client pointed at the mock server with a custom timeout.
pub fn create_test_client_with_timeout(server: &MockServer, timeout_ms: u64) -> ApiClient {
    let config = ApiConfig {
        base_url: server.uri(),
        channel_access_token: TEST_TOKEN.into(),
        timeout_ms,
    };
    ApiClient::new(&config).expect("failed to build test client")
}

/// Expected value of the Authorization header.
pub fn bearer() -> String {
    format!("Bearer {TEST_TOKEN}")
}
