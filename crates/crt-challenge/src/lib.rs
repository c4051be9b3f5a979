//! # CRT Challenge - Authenticated Challenge Codec
//!
//! Server side of a challenge-response login: the server issues a
//! challenge, the client signs it with its private key and sends it back,
//! and the server checks that the returned challenge is one it issued, is
//! still current, and names this server.
//!
//! ## Architecture
//!
//! | Module | Role |
//! |--------|------|
//! | `codec` | MessagePack-subset wire reader/writer |
//! | `domain` | `Challenge`, builder, HMAC tag, validity window |
//! | `ports` | `TimeSource`, `NonceSource` |
//! | `adapters` | System clock, OS RNG, test doubles |
//! | `config` | `ChallengeConfig` (env / serde) |
//! | `service` | `ChallengeService` issue/verify |
//!
//! ## Security Properties
//!
//! - **HMAC-SHA256** over every encoded byte before the tag
//! - **Constant-time** tag comparison (`subtle`)
//! - Field values are interpreted only after the tag matches
//! - Shared secrets are zeroized on drop and redacted from `Debug`
//!
//! ## Usage
//!
//! ```ignore
//! use crt_challenge::{ChallengeConfig, ChallengeService};
//!
//! let service = ChallengeService::new(ChallengeConfig::from_env()?)?;
//! let issued = service.issue("alice", &key_fingerprint)?;
//! // ... send issued.wire to the client, receive it back signed ...
//! let challenge = service.verify(&returned_wire)?;
//! ```

#![warn(clippy::all)]

pub mod adapters;
pub mod codec;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{FixedNonceSource, ManualTimeSource, OsNonceSource, SystemTimeSource};
pub use codec::{WireReader, WireWriter};
pub use config::ChallengeConfig;
pub use domain::{
    Challenge, ChallengeBuilder, Fingerprint, SharedSecret, CHALLENGE_MAGIC, FINGERPRINT_LEN,
    PROTOCOL_VERSION, TAG_LEN, UNIQUE_DATA_LEN,
};
pub use error::{ChallengeError, CodecError, ConfigError, MalformedReason};
pub use ports::{NonceSource, TimeSource};
pub use service::{ChallengeService, IssuedChallenge};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
