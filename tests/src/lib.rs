//! # SHA-1 Bloom Test Suite
//!
//! Unified test crate exercising the public API end to end.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── scenarios.rs     # Sizing, write/read, collisions, false positive rate
//!     └── concurrency.rs   # Shared filters, racing readers and writers
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sha1-bloom-tests
//!
//! # With filter logs
//! RUST_LOG=sha1_bloom=trace cargo test -p sha1-bloom-tests -- --nocapture
//! ```

pub mod integration;

/// Install a test subscriber once; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
