//! Staged construction of a [`Challenge`].
//!
//! # Example
//!
//! ```ignore
//! use crt_challenge::Challenge;
//!
//! let challenge = Challenge::builder()
//!     .unique_data(&nonce)
//!     .valid_from(now - 2)
//!     .valid_to(now + 20)
//!     .fingerprint(&key_fingerprint)
//!     .server_name("auth.example.net")
//!     .user_name("alice")
//!     .build()?;
//! ```

use super::challenge::Challenge;
use super::value_objects::FINGERPRINT_LEN;
use crate::error::ChallengeError;

/// Accumulates challenge fields without validating them.
///
/// All invariants are checked once, in [`ChallengeBuilder::build`], with
/// the same rules as [`Challenge::new`].
#[derive(Debug, Clone, Default)]
pub struct ChallengeBuilder {
    unique_data: Option<Vec<u8>>,
    valid_from: Option<u32>,
    valid_to: Option<u32>,
    fingerprint: Option<Vec<u8>>,
    server_name: Option<String>,
    user_name: Option<String>,
}

impl ChallengeBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the 20 bytes of random unique data (copied).
    pub fn unique_data(mut self, data: &[u8]) -> Self {
        self.unique_data = Some(data.to_vec());
        self
    }

    pub fn valid_from(mut self, timestamp: u32) -> Self {
        self.valid_from = Some(timestamp);
        self
    }

    pub fn valid_to(mut self, timestamp: u32) -> Self {
        self.valid_to = Some(timestamp);
        self
    }

    /// Set the key fingerprint from key material (copied).
    ///
    /// Material longer than six bytes is truncated to its first six bytes.
    /// Shorter material is kept as is and rejected by `build()`. It is never
    /// zero-padded, which is stricter than crtauth builders that pad a short
    /// fingerprint to six bytes.
    pub fn fingerprint(mut self, material: &[u8]) -> Self {
        let len = material.len().min(FINGERPRINT_LEN);
        self.fingerprint = Some(material[..len].to_vec());
        self
    }

    pub fn server_name(mut self, name: impl Into<String>) -> Self {
        self.server_name = Some(name.into());
        self
    }

    pub fn user_name(mut self, name: impl Into<String>) -> Self {
        self.user_name = Some(name.into());
        self
    }

    /// Validate the accumulated fields and produce the challenge.
    pub fn build(self) -> Result<Challenge, ChallengeError> {
        let unique_data = self.unique_data.ok_or_else(|| missing("unique_data"))?;
        let valid_from = self.valid_from.ok_or_else(|| missing("valid_from"))?;
        let valid_to = self.valid_to.ok_or_else(|| missing("valid_to"))?;
        let fingerprint = self.fingerprint.ok_or_else(|| missing("fingerprint"))?;
        let server_name = self.server_name.ok_or_else(|| missing("server_name"))?;
        let user_name = self.user_name.ok_or_else(|| missing("user_name"))?;

        Challenge::new(
            &unique_data,
            valid_from,
            valid_to,
            &fingerprint,
            server_name,
            user_name,
        )
    }
}

fn missing(field: &'static str) -> ChallengeError {
    ChallengeError::invalid_field(field, "must be set")
}
