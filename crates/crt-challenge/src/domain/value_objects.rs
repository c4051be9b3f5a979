//! # Value Objects
//!
//! Fixed-size identifiers carried inside a challenge.

use crate::error::ChallengeError;

/// Length of the per-challenge random data.
pub const UNIQUE_DATA_LEN: usize = 20;

/// Length of a public key fingerprint.
pub const FINGERPRINT_LEN: usize = 6;

/// Short identifier of the client public key a challenge expects.
///
/// Key lookup by fingerprint happens outside this crate; here it is an
/// opaque 6-byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fingerprint([u8; FINGERPRINT_LEN]);

impl Fingerprint {
    pub const fn new(bytes: [u8; FINGERPRINT_LEN]) -> Self {
        Self(bytes)
    }

    /// Derive a fingerprint from longer key material by keeping its first
    /// six bytes.
    ///
    /// Material shorter than six bytes is rejected.
    pub fn from_key_material(material: &[u8]) -> Result<Self, ChallengeError> {
        let prefix = material.get(..FINGERPRINT_LEN).ok_or_else(|| {
            ChallengeError::invalid_field(
                "fingerprint",
                format!(
                    "need at least {} bytes of key material, got {}",
                    FINGERPRINT_LEN,
                    material.len()
                ),
            )
        })?;
        Self::try_from(prefix)
    }

    /// Copy of the fingerprint bytes.
    pub fn to_bytes(&self) -> [u8; FINGERPRINT_LEN] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; FINGERPRINT_LEN] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Fingerprint {
    type Error = ChallengeError;

    /// Exact-length conversion.
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; FINGERPRINT_LEN]>::try_from(bytes)
            .map(Self)
            .map_err(|_| {
                ChallengeError::invalid_field(
                    "fingerprint",
                    format!("expected {} bytes, got {}", FINGERPRINT_LEN, bytes.len()),
                )
            })
    }
}

impl From<[u8; FINGERPRINT_LEN]> for Fingerprint {
    fn from(bytes: [u8; FINGERPRINT_LEN]) -> Self {
        Self(bytes)
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}
