//! # Challenge Configuration
//!
//! Server-side settings for issuing and verifying challenges.
//!
//! ## Security Requirements
//!
//! - `hmac_secret` MUST NOT be empty or all zeros outside tests
//! - The validity window must be long enough to cover clock skew

use std::env;

use serde::{Deserialize, Serialize};

use crate::domain::SharedSecret;
use crate::error::ConfigError;

/// Default lifetime of an issued challenge.
pub const DEFAULT_CHALLENGE_TTL_SECS: u32 = 20;

/// Default allowance for clients whose clock runs behind the server's.
pub const DEFAULT_CLOCK_SKEW_SECS: u32 = 2;

/// Challenge issuing and verification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChallengeConfig {
    /// Name this server embeds in, and expects back from, every challenge.
    pub server_name: String,
    /// Seconds a challenge stays valid after issue.
    pub challenge_ttl_secs: u32,
    /// Seconds `valid_from` is backdated to tolerate clock skew.
    pub clock_skew_secs: u32,
    /// Shared secret authenticating challenges (hex in config files).
    #[serde(skip_serializing)]
    pub hmac_secret: SharedSecret,
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self {
            server_name: "localhost".to_string(),
            challenge_ttl_secs: DEFAULT_CHALLENGE_TTL_SECS,
            clock_skew_secs: DEFAULT_CLOCK_SKEW_SECS,
            hmac_secret: SharedSecret::default(),
        }
    }
}

impl ChallengeConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `CRT_SERVER_NAME`: Server name (default: localhost)
    /// - `CRT_CHALLENGE_TTL_SECS`: Challenge lifetime (default: 20)
    /// - `CRT_CLOCK_SKEW_SECS`: Clock skew allowance (default: 2)
    /// - `CRT_HMAC_SECRET`: Hex-encoded shared secret (no default)
    ///
    /// Unset variables keep their defaults; malformed values, including
    /// values that are not valid Unicode, are errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            server_name: read_env("CRT_SERVER_NAME")?.unwrap_or(defaults.server_name),

            challenge_ttl_secs: parse_env("CRT_CHALLENGE_TTL_SECS")?
                .unwrap_or(defaults.challenge_ttl_secs),

            clock_skew_secs: parse_env("CRT_CLOCK_SKEW_SECS")?
                .unwrap_or(defaults.clock_skew_secs),

            hmac_secret: match read_env("CRT_HMAC_SECRET")? {
                Some(encoded) => {
                    SharedSecret::from_hex(&encoded).map_err(|e| ConfigError::InvalidEnv {
                        var: "CRT_HMAC_SECRET",
                        reason: e.to_string(),
                    })?
                }
                None => defaults.hmac_secret.clone(),
            },
        })
    }

    /// Validate configuration for production readiness.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server_name.is_empty() {
            return Err(ConfigError::EmptyServerName);
        }

        if self.challenge_ttl_secs == 0 {
            return Err(ConfigError::ZeroTtl);
        }

        if self.clock_skew_secs >= self.challenge_ttl_secs {
            return Err(ConfigError::SkewExceedsTtl {
                skew: self.clock_skew_secs,
                ttl: self.challenge_ttl_secs,
            });
        }

        if self.hmac_secret.is_insecure() {
            return Err(ConfigError::InsecureSecret);
        }

        Ok(())
    }

    /// Builder-style method to set the server name
    pub fn with_server_name(mut self, name: impl Into<String>) -> Self {
        self.server_name = name.into();
        self
    }

    /// Builder-style method to set the challenge TTL
    pub fn with_ttl(mut self, secs: u32) -> Self {
        self.challenge_ttl_secs = secs;
        self
    }

    /// Builder-style method to set the clock skew allowance
    pub fn with_clock_skew(mut self, secs: u32) -> Self {
        self.clock_skew_secs = secs;
        self
    }

    /// Builder-style method to set the shared secret
    pub fn with_secret(mut self, secret: impl Into<Vec<u8>>) -> Self {
        self.hmac_secret = SharedSecret::new(secret);
        self
    }
}

/// `None` only when the variable is unset.
fn read_env(var: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(var) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnv {
            var,
            reason: "value is not valid Unicode".to_string(),
        }),
    }
}

fn parse_env(var: &'static str) -> Result<Option<u32>, ConfigError> {
    read_env(var)?
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|e: std::num::ParseIntError| ConfigError::InvalidEnv {
                    var,
                    reason: e.to_string(),
                })
        })
        .transpose()
}
