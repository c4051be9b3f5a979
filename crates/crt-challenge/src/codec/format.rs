//! # Wire Format Tags
//!
//! Tag bytes of the MessagePack subset. Multi-byte payloads and length
//! prefixes are big-endian.

// =============================================================================
// INTEGERS
// =============================================================================

/// Largest value stored directly in a positive fixint tag.
pub const POSITIVE_FIXINT_MAX: u8 = 0x7f;
/// Lowest tag of the negative fixint range (-32).
pub const NEGATIVE_FIXINT_MIN: u8 = 0xe0;

pub const UINT8: u8 = 0xcc;
pub const UINT16: u8 = 0xcd;
pub const UINT32: u8 = 0xce;
pub const UINT64: u8 = 0xcf;

pub const INT8: u8 = 0xd0;
pub const INT16: u8 = 0xd1;
pub const INT32: u8 = 0xd2;
pub const INT64: u8 = 0xd3;

// =============================================================================
// BYTE STRINGS
// =============================================================================

pub const BIN8: u8 = 0xc4;
pub const BIN16: u8 = 0xc5;
pub const BIN32: u8 = 0xc6;

// =============================================================================
// UTF-8 STRINGS
// =============================================================================

/// fixstr tags are `0xa0 | len` for `len < 32`.
pub const FIXSTR_PREFIX: u8 = 0xa0;
pub const FIXSTR_MASK: u8 = 0xe0;
pub const FIXSTR_MAX_LEN: usize = 31;

pub const STR8: u8 = 0xd9;
pub const STR16: u8 = 0xda;
pub const STR32: u8 = 0xdb;

