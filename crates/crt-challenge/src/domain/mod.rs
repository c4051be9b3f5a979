//! Domain Layer - Pure challenge logic
//!
//! This layer contains:
//! - The `Challenge` entity and its wire form
//! - `ChallengeBuilder` for staged construction
//! - Keyed digest (HMAC-SHA256) and constant-time comparison
//! - Validity window checks
//!
//! RULES:
//! - No I/O operations
//! - No clock reads (time arrives through `TimeSource`)
//! - No logging

pub mod builder;
pub mod challenge;
pub mod digest;
pub mod validity;
pub mod value_objects;


pub use builder::ChallengeBuilder;
pub use challenge::{Challenge, CHALLENGE_MAGIC, PROTOCOL_VERSION};
pub use digest::{compute_tag, constant_time_eq, verify_tag, SharedSecret, Tag, TAG_LEN};
pub use validity::is_expired;
pub use value_objects::{Fingerprint, FINGERPRINT_LEN, UNIQUE_DATA_LEN};
