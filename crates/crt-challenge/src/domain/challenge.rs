//! # Challenge
//!
//! The server-issued challenge and its authenticated wire form.
//!
//! ## Wire Layout
//!
//! ```text
//! version(1) | marker('c') | unique_data(bin 20) | valid_from(uint)
//!   | valid_to(uint) | fingerprint(bin 6) | server_name(str) | user_name(str)
//!   | tag(bin 32) = HMAC-SHA256(secret, all preceding bytes)
//! ```
//!
//! ## Authenticated Decoding
//!
//! `deserialize_authenticated` frames every field first, authenticates the
//! exact prefix the reader consumed, and only then interprets the field
//! values. Tampering with any value therefore surfaces as
//! `AuthenticationFailure`; only damage to the framing itself (type tags,
//! length prefixes) surfaces as `MalformedEncoding`.

use super::digest;
use super::validity;
use super::value_objects::{Fingerprint, UNIQUE_DATA_LEN};
use crate::codec::{WireReader, WireWriter};
use crate::error::{ChallengeError, CodecError, MalformedReason};
use crate::ports::TimeSource;

/// Wire format version.
pub const PROTOCOL_VERSION: u8 = 1;

/// Message-type marker identifying a challenge.
pub const CHALLENGE_MAGIC: u8 = b'c';

/// Encoded size of a challenge with short names; used to pre-size buffers.
const TYPICAL_ENCODED_LEN: usize = 128;

/// Server-issued challenge binding a nonce, a validity window, the expected
/// client key, the server identity and the user.
///
/// Immutable once built. Equality and hashing cover all six fields, with
/// byte fields compared by content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Challenge {
    unique_data: [u8; UNIQUE_DATA_LEN],
    valid_from: u32,
    valid_to: u32,
    fingerprint: Fingerprint,
    server_name: String,
    user_name: String,
}

impl Challenge {
    /// Construct a challenge, enforcing every field invariant.
    ///
    /// Byte fields are copied out of the caller's buffers.
    pub fn new(
        unique_data: &[u8],
        valid_from: u32,
        valid_to: u32,
        fingerprint: &[u8],
        server_name: impl Into<String>,
        user_name: impl Into<String>,
    ) -> Result<Self, ChallengeError> {
        let unique_data = <[u8; UNIQUE_DATA_LEN]>::try_from(unique_data).map_err(|_| {
            ChallengeError::invalid_field(
                "unique_data",
                format!(
                    "expected {} bytes, got {}",
                    UNIQUE_DATA_LEN,
                    unique_data.len()
                ),
            )
        })?;
        let fingerprint = Fingerprint::try_from(fingerprint)?;

        if valid_from >= valid_to {
            return Err(ChallengeError::invalid_field(
                "valid_from",
                format!(
                    "must be smaller than valid_to ({} >= {})",
                    valid_from, valid_to
                ),
            ));
        }

        let server_name = server_name.into();
        if server_name.is_empty() {
            return Err(ChallengeError::invalid_field(
                "server_name",
                "must be set and non-empty",
            ));
        }

        let user_name = user_name.into();
        if user_name.is_empty() {
            return Err(ChallengeError::invalid_field(
                "user_name",
                "must be set and non-empty",
            ));
        }

        Ok(Self {
            unique_data,
            valid_from,
            valid_to,
            fingerprint,
            server_name,
            user_name,
        })
    }

    /// Start building a challenge field by field.
    pub fn builder() -> super::ChallengeBuilder {
        super::ChallengeBuilder::new()
    }

    /// Copy of the random unique data.
    pub fn unique_data(&self) -> [u8; UNIQUE_DATA_LEN] {
        self.unique_data
    }

    pub fn valid_from(&self) -> u32 {
        self.valid_from
    }

    pub fn valid_to(&self) -> u32 {
        self.valid_to
    }

    /// Copy of the expected client key fingerprint.
    pub fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }

    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// True if the time source reports a time outside the validity window.
    pub fn is_expired(&self, time: &dyn TimeSource) -> bool {
        self.is_expired_at(time.now())
    }

    /// True if `now` is outside `[valid_from, valid_to)`.
    pub fn is_expired_at(&self, now: u64) -> bool {
        validity::is_expired(self.valid_from, self.valid_to, now)
    }

    // =========================================================================
    // WIRE FORM
    // =========================================================================

    /// Encode the challenge and append an authentication tag computed with
    /// `secret` over every preceding byte.
    pub fn serialize(&self, secret: &[u8]) -> Result<Vec<u8>, ChallengeError> {
        let mut writer = WireWriter::with_capacity(TYPICAL_ENCODED_LEN);
        self.write_fields(&mut writer)
            .map_err(|e| ChallengeError::SerializationFailure(e.to_string()))?;

        let tag = digest::compute_tag(secret, writer.as_bytes());
        writer
            .write_bytes(&tag)
            .map_err(|e| ChallengeError::SerializationFailure(e.to_string()))?;

        Ok(writer.into_bytes())
    }

    /// Decode a challenge without checking its authentication tag.
    ///
    /// The tag must still be present and framed correctly. Use this only for
    /// messages whose authenticity was established some other way.
    pub fn deserialize(data: &[u8]) -> Result<Self, ChallengeError> {
        let mut reader = WireReader::new(data);
        let fields = WireFields::read(&mut reader)?;
        reader.read_bytes()?;
        ensure_exhausted(&reader)?;
        fields.into_challenge()
    }

    /// Decode a challenge and verify its tag against `secret`.
    ///
    /// The tag is recomputed over exactly the bytes the reader consumed for
    /// the header and the six fields, then compared in constant time with the
    /// transmitted tag. Field values are interpreted only after the tag
    /// matches.
    pub fn deserialize_authenticated(data: &[u8], secret: &[u8]) -> Result<Self, ChallengeError> {
        let mut reader = WireReader::new(data);
        let fields = WireFields::read(&mut reader)?;

        let signed_len = reader.bytes_consumed();
        let expected = digest::compute_tag(secret, &data[..signed_len]);

        let claimed = reader.read_bytes()?;
        if !digest::constant_time_eq(&expected, claimed) {
            return Err(ChallengeError::AuthenticationFailure);
        }

        ensure_exhausted(&reader)?;
        fields.into_challenge()
    }

    fn write_fields(&self, writer: &mut WireWriter) -> Result<(), CodecError> {
        writer.write_byte(PROTOCOL_VERSION);
        writer.write_byte(CHALLENGE_MAGIC);
        writer.write_bytes(&self.unique_data)?;
        writer.write_u32(self.valid_from);
        writer.write_u32(self.valid_to);
        writer.write_bytes(self.fingerprint.as_bytes())?;
        writer.write_str(&self.server_name)?;
        writer.write_str(&self.user_name)?;
        Ok(())
    }
}

/// Framed but not yet interpreted challenge fields.
///
/// Borrowed from the input; nothing here has been validated beyond the
/// tag/length structure.
struct WireFields<'a> {
    version: u8,
    marker: u8,
    unique_data: &'a [u8],
    valid_from: u32,
    valid_to: u32,
    fingerprint: &'a [u8],
    server_name: &'a [u8],
    server_name_offset: usize,
    user_name: &'a [u8],
    user_name_offset: usize,
}

impl<'a> WireFields<'a> {
    fn read(reader: &mut WireReader<'a>) -> Result<Self, CodecError> {
        let version = reader.read_byte()?;
        let marker = reader.read_byte()?;
        let unique_data = reader.read_bytes()?;
        let valid_from = reader.read_u32()?;
        let valid_to = reader.read_u32()?;
        let fingerprint = reader.read_bytes()?;
        let (server_name, server_name_offset) = read_str_payload(reader)?;
        let (user_name, user_name_offset) = read_str_payload(reader)?;

        Ok(Self {
            version,
            marker,
            unique_data,
            valid_from,
            valid_to,
            fingerprint,
            server_name,
            server_name_offset,
            user_name,
            user_name_offset,
        })
    }

    fn into_challenge(self) -> Result<Challenge, ChallengeError> {
        if self.version != PROTOCOL_VERSION || self.marker != CHALLENGE_MAGIC {
            return Err(MalformedReason::UnsupportedHeader {
                version: self.version,
                marker: self.marker,
            }
            .into());
        }

        let server_name = utf8(self.server_name, self.server_name_offset)?;
        let user_name = utf8(self.user_name, self.user_name_offset)?;

        Challenge::new(
            self.unique_data,
            self.valid_from,
            self.valid_to,
            self.fingerprint,
            server_name,
            user_name,
        )
    }
}

/// Frame a string payload, returning it with its input offset.
fn read_str_payload<'a>(reader: &mut WireReader<'a>) -> Result<(&'a [u8], usize), CodecError> {
    let bytes = reader.read_str_bytes()?;
    Ok((bytes, reader.bytes_consumed() - bytes.len()))
}

/// `offset` is where the payload starts in the input, matching
/// `WireReader::read_str`.
fn utf8(bytes: &[u8], offset: usize) -> Result<&str, ChallengeError> {
    std::str::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8 { offset }.into())
}

fn ensure_exhausted(reader: &WireReader<'_>) -> Result<(), ChallengeError> {
    match reader.remaining() {
        0 => Ok(()),
        count => Err(MalformedReason::TrailingData { count }.into()),
    }
}
