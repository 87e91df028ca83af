//! Common test utilities and helpers

use std::path::Path;
use zadarma::Client;

/// Key used by every test client.
pub const TEST_KEY: &str = "testkey";

/// Secret used by every test client.
pub const TEST_SECRET: &str = "testsecret";

/// Expected `Authorization` value for `/v1/info/balance/` with `format=json`.
#[allow(dead_code)]
pub const BALANCE_JSON_AUTH: &str =
    "testkey:ODEyZGUyNzU3Y2YyYTkwYWJjNjdhNmE4ZGY0NTM3YzZkZDZmYTdlYw==";

/// Load a response fixture, e.g. `balance_success.json`.
#[allow(dead_code)]
pub fn load_response_fixture(name: &str) -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = Path::new(manifest_dir)
        .join("tests")
        .join("fixtures")
        .join("responses")
        .join(name);

    std::fs::read_to_string(&path).unwrap_or_else(|e| {
        panic!(
            "Failed to load response fixture '{}' from {:?}: {}",
            name, path, e
        )
    })
}

/// Client with the test credentials pointed at `base_url`.
#[allow(dead_code)]
pub fn test_client(base_url: impl Into<String>) -> Client {
    Client::builder()
        .api_key(TEST_KEY)
        .api_secret(TEST_SECRET)
        .base_url(base_url)
        .build()
        .expect("Failed to build client")
}
