//! # Challenge Service
//!
//! Server-side orchestration around the challenge codec.
//!
//! ## Flow
//!
//! ```text
//! issue(user, key)   ──→ nonce + window from config ──→ Challenge ──→ wire bytes
//! verify(wire bytes) ──→ tag check ──→ expiry check ──→ server-name check ──→ Challenge
//! ```
//!
//! Signing the challenge with the client key and checking that signature
//! happen outside this crate.

use tracing::{debug, warn};

use crate::adapters::{OsNonceSource, SystemTimeSource};
use crate::config::ChallengeConfig;
use crate::domain::Challenge;
use crate::error::{ChallengeError, ConfigError};
use crate::ports::{NonceSource, TimeSource};

/// A freshly issued challenge and its authenticated wire form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedChallenge {
    pub challenge: Challenge,
    pub wire: Vec<u8>,
}

/// Issues and verifies challenges for one server identity.
pub struct ChallengeService<T: TimeSource = SystemTimeSource, N: NonceSource = OsNonceSource> {
    config: ChallengeConfig,
    time: T,
    nonces: N,
}

impl ChallengeService {
    /// Create a service using the system clock and the OS RNG.
    pub fn new(config: ChallengeConfig) -> Result<Self, ConfigError> {
        Self::with_sources(config, SystemTimeSource, OsNonceSource)
    }
}

impl<T: TimeSource, N: NonceSource> ChallengeService<T, N> {
    /// Create a service with injected time and nonce sources.
    pub fn with_sources(config: ChallengeConfig, time: T, nonces: N) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            time,
            nonces,
        })
    }

    pub fn config(&self) -> &ChallengeConfig {
        &self.config
    }

    /// Issue a challenge for `user_name`, bound to the client key identified
    /// by `key_material` (only its first six bytes are used).
    pub fn issue(
        &self,
        user_name: &str,
        key_material: &[u8],
    ) -> Result<IssuedChallenge, ChallengeError> {
        let now = self.time.now();
        let valid_from = to_timestamp(
            "valid_from",
            now.saturating_sub(u64::from(self.config.clock_skew_secs)),
        )?;
        let valid_to = to_timestamp(
            "valid_to",
            now.saturating_add(u64::from(self.config.challenge_ttl_secs)),
        )?;

        let challenge = Challenge::builder()
            .unique_data(&self.nonces.unique_data())
            .valid_from(valid_from)
            .valid_to(valid_to)
            .fingerprint(key_material)
            .server_name(self.config.server_name.as_str())
            .user_name(user_name)
            .build()?;

        let wire = challenge.serialize(self.config.hmac_secret.as_bytes())?;

        debug!(
            user = %challenge.user_name(),
            fingerprint = %challenge.fingerprint(),
            valid_from,
            valid_to,
            "Issued challenge"
        );

        Ok(IssuedChallenge { challenge, wire })
    }

    /// Authenticate a challenge returned by a client and check that it is
    /// current and was issued by this server.
    pub fn verify(&self, wire: &[u8]) -> Result<Challenge, ChallengeError> {
        let result = self.check(wire);
        match &result {
            Ok(challenge) => debug!(
                user = %challenge.user_name(),
                fingerprint = %challenge.fingerprint(),
                "Verified challenge"
            ),
            Err(e) => warn!(error = %e, len = wire.len(), "Rejected challenge"),
        }
        result
    }

    fn check(&self, wire: &[u8]) -> Result<Challenge, ChallengeError> {
        let challenge =
            Challenge::deserialize_authenticated(wire, self.config.hmac_secret.as_bytes())?;

        let now = self.time.now();
        if challenge.is_expired_at(now) {
            return Err(ChallengeError::Expired {
                now,
                valid_from: challenge.valid_from(),
                valid_to: challenge.valid_to(),
            });
        }

        if challenge.server_name() != self.config.server_name {
            return Err(ChallengeError::ServerMismatch {
                expected: self.config.server_name.clone(),
                actual: challenge.server_name().to_string(),
            });
        }

        Ok(challenge)
    }
}

fn to_timestamp(field: &'static str, secs: u64) -> Result<u32, ChallengeError> {
    u32::try_from(secs).map_err(|_| {
        ChallengeError::invalid_field(field, format!("timestamp {} exceeds 32 bits", secs))
    })
}
