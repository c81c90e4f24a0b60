// tests/common.rs
//! Shared test utilities — logging setup and fixtures

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const KEY_128: &str = "0123456789abcdef";
pub const KEY_192: &str = "0123456789abcdef01234567";
pub const KEY_256: &str = "0123456789abcdef0123456789abcdef";
pub const IV: &str = "abcdef9876543210";

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer()) // works in `cargo test`
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent — safe to call multiple times
}
