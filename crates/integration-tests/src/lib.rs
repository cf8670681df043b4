//! Integration tests for Rustmart.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the API server
//! cargo run -p rustmart-api
//!
//! # Run integration tests
//! cargo test -p rustmart-integration-tests -- --ignored
//! ```
//!
//! Tests talk to a live server over HTTP (`RUSTMART_BASE_URL`, default
//! `http://localhost:3000`) and are `#[ignore]`d so that a plain
//! `cargo test` of the workspace stays self-contained.
//!
//! Each test uses a fresh random user ID, so tests do not interfere with
//! each other even against a shared server. Products are created per test
//! and live for the rest of the server's lifetime; nothing assumes an
//! empty catalog.
