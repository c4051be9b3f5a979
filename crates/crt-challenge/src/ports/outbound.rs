//! Outbound Ports (Driven Ports)
//!
//! Dependencies injected into the challenge service so that expiry and
//! nonce generation stay deterministic under test.

use crate::domain::UNIQUE_DATA_LEN;

/// Seconds since the Unix epoch.
pub type Timestamp = u64;

/// Abstract interface for time operations.
///
/// Implementations must be safe to read concurrently.
pub trait TimeSource: Send + Sync {
    /// Get current timestamp in seconds since epoch.
    fn now(&self) -> Timestamp;
}

/// Source of the per-challenge random `unique_data`.
///
/// SECURITY: production implementations must draw from a cryptographically
/// secure generator; the nonce is what makes each challenge unpredictable.
pub trait NonceSource: Send + Sync {
    /// Produce fresh unique data for one challenge.
    fn unique_data(&self) -> [u8; UNIQUE_DATA_LEN];
}

impl<T: TimeSource + ?Sized> TimeSource for std::sync::Arc<T> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

impl<T: NonceSource + ?Sized> NonceSource for std::sync::Arc<T> {
    fn unique_data(&self) -> [u8; UNIQUE_DATA_LEN] {
        (**self).unique_data()
    }
}
