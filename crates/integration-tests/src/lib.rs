//! Integration tests for Voltura.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations
//! cargo run -p voltura-cli -- migrate
//!
//! # Start the storage gateway
//! cargo run -p voltura-server
//!
//! # Run integration tests
//! cargo test -p voltura-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `auth_flow` - Wire-level signup/signin/profile assertions
//! - `setup_lifecycle` - End-to-end lifecycle controller against a live
//!   gateway
//!
//! All tests are `#[ignore]`d by default because they need a running
//! gateway; the base URL is configurable via `GATEWAY_BASE_URL`.

/// Base URL for the storage gateway (configurable via environment).
#[must_use]
pub fn gateway_base_url() -> String {
    std::env::var("GATEWAY_BASE_URL").unwrap_or_else(|_| "http://localhost:8787".to_owned())
}
