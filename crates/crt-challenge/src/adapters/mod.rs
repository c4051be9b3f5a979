//! Infrastructure Adapters
//!
//! Implementations of the outbound ports (time, nonce generation).

mod nonce;
mod time;

pub use nonce::{FixedNonceSource, OsNonceSource};
pub use time::{ManualTimeSource, SystemTimeSource};
