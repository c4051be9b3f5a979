//! # CRT Challenge Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── integration/      # Issue → client → verify flows
//! │   ├── flows.rs
//! │   └── concurrency.rs
//! │
//! └── exploits/         # Attack simulations
//!     ├── tampering.rs  # Bit flips, forged headers, splicing
//!     └── framing.rs    # Length bombs, truncation, trailing data
//!
//! tests/benches/        # Criterion benchmarks
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p crt-tests
//!
//! # By category
//! cargo test -p crt-tests integration::
//! cargo test -p crt-tests exploits::
//!
//! # Benchmarks
//! cargo bench -p crt-tests
//! ```

use std::sync::Once;

use crt_challenge::{Challenge, ChallengeConfig};

pub mod exploits;
pub mod integration;

/// Shared secret used across the suite.
pub const TEST_SECRET: &[u8] = b"crt-suite-shared-secret";

/// Server name used across the suite.
pub const TEST_SERVER: &str = "auth.example.net";

/// Install a `tracing` subscriber honoring `RUST_LOG`, once per process.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Production-shaped configuration with the suite secret.
pub fn test_config() -> ChallengeConfig {
    ChallengeConfig::default()
        .with_server_name(TEST_SERVER)
        .with_secret(TEST_SECRET.to_vec())
}

/// A fixed challenge valid for the whole 32-bit timestamp range.
pub fn sample_challenge() -> Challenge {
    Challenge::new(
        &[0x5a; 20],
        1,
        u32::MAX,
        &[1, 2, 3, 4, 5, 6],
        TEST_SERVER,
        "alice",
    )
    .expect("sample challenge is valid")
}
