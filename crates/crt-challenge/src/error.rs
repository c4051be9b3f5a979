//! Error types for the challenge codec

use thiserror::Error;

/// Errors raised by the wire codec.
///
/// Every variant means the input does not parse as the expected
/// tag/length/type sequence. The entity layer surfaces them as
/// [`ChallengeError::MalformedEncoding`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("Unexpected end of input: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof { needed: usize, remaining: usize },

    #[error("Unexpected tag 0x{tag:02x} at offset {offset}, expected {expected}")]
    UnexpectedTag {
        tag: u8,
        offset: usize,
        expected: &'static str,
    },

    #[error("Length prefix {length} exceeds remaining input {remaining}")]
    LengthOutOfBounds { length: u64, remaining: usize },

    #[error("Integer {value} out of range for {target}")]
    IntegerOutOfRange { value: i128, target: &'static str },

    #[error("String payload at offset {offset} is not valid UTF-8")]
    InvalidUtf8 { offset: usize },

    #[error("Payload of {length} bytes cannot be length-prefixed")]
    TooLong { length: usize },
}

/// Why a byte sequence was rejected as a challenge encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("unsupported header: version {version}, marker 0x{marker:02x}")]
    UnsupportedHeader { version: u8, marker: u8 },

    #[error("{count} bytes of trailing data after authentication tag")]
    TrailingData { count: usize },
}

/// Errors raised while constructing, encoding or decoding a challenge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChallengeError {
    /// Wire bytes do not form a challenge message.
    #[error("Malformed encoding: {0}")]
    MalformedEncoding(#[from] MalformedReason),

    /// A field value violates the challenge invariants.
    #[error("Invalid field '{field}': {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },

    /// The recomputed tag does not match the transmitted tag.
    #[error("Authentication failed: challenge tag mismatch")]
    AuthenticationFailure,

    /// A validated field could not be encoded.
    #[error("Serialization failed: {0}")]
    SerializationFailure(String),

    /// The challenge is outside its validity window.
    #[error("Challenge expired: now={now}, valid=[{valid_from}, {valid_to})")]
    Expired {
        now: u64,
        valid_from: u32,
        valid_to: u32,
    },

    /// The challenge was issued for another server.
    #[error("Server name mismatch: expected '{expected}', got '{actual}'")]
    ServerMismatch { expected: String, actual: String },
}

impl From<CodecError> for ChallengeError {
    fn from(err: CodecError) -> Self {
        Self::MalformedEncoding(MalformedReason::Codec(err))
    }
}

impl ChallengeError {
    pub(crate) fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Server name must be set and non-empty")]
    EmptyServerName,

    #[error("Challenge TTL must be greater than zero")]
    ZeroTtl,

    #[error("Clock skew {skew}s must be smaller than challenge TTL {ttl}s")]
    SkewExceedsTtl { skew: u32, ttl: u32 },

    #[error("HMAC secret is empty or all zeros. Set CRT_HMAC_SECRET or provide one in config.")]
    InsecureSecret,

    #[error("Invalid value for {var}: {reason}")]
    InvalidEnv { var: &'static str, reason: String },
}
