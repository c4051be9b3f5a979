//! # Wire Writer
//!
//! Append-only encoder. Every value is written with the smallest tag able
//! to represent it, so two implementations encoding the same fields produce
//! identical bytes.

use super::format;
use crate::error::CodecError;

/// Encoder for the challenge wire format.
#[derive(Debug, Clone, Default)]
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty writer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Write a single byte as an unsigned integer.
    pub fn write_byte(&mut self, value: u8) {
        self.write_uint(u64::from(value));
    }

    /// Write an unsigned 32-bit integer.
    pub fn write_u32(&mut self, value: u32) {
        self.write_uint(u64::from(value));
    }

    /// Write a signed 32-bit integer.
    ///
    /// Non-negative values use the unsigned tags, as MessagePack requires
    /// for canonical output.
    pub fn write_i32(&mut self, value: i32) {
        match u64::try_from(value) {
            Ok(unsigned) => self.write_uint(unsigned),
            Err(_) => self.write_negative(value),
        }
    }

    /// Write a length-prefixed byte string.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<(), CodecError> {
        let len = data.len();
        if len <= usize::from(u8::MAX) {
            self.buf.push(format::BIN8);
            self.buf.push(len as u8);
        } else if len <= usize::from(u16::MAX) {
            self.buf.push(format::BIN16);
            self.buf.extend_from_slice(&(len as u16).to_be_bytes());
        } else {
            let len32 = u32::try_from(len).map_err(|_| CodecError::TooLong { length: len })?;
            self.buf.push(format::BIN32);
            self.buf.extend_from_slice(&len32.to_be_bytes());
        }
        self.buf.extend_from_slice(data);
        Ok(())
    }

    /// Write a length-prefixed UTF-8 string.
    pub fn write_str(&mut self, value: &str) -> Result<(), CodecError> {
        let bytes = value.as_bytes();
        let len = bytes.len();
        if len <= format::FIXSTR_MAX_LEN {
            self.buf.push(format::FIXSTR_PREFIX | len as u8);
        } else if len <= usize::from(u8::MAX) {
            self.buf.push(format::STR8);
            self.buf.push(len as u8);
        } else if len <= usize::from(u16::MAX) {
            self.buf.push(format::STR16);
            self.buf.extend_from_slice(&(len as u16).to_be_bytes());
        } else {
            let len32 = u32::try_from(len).map_err(|_| CodecError::TooLong { length: len })?;
            self.buf.push(format::STR32);
            self.buf.extend_from_slice(&len32.to_be_bytes());
        }
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the writer and return the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    fn write_uint(&mut self, value: u64) {
        if value <= u64::from(format::POSITIVE_FIXINT_MAX) {
            self.buf.push(value as u8);
        } else if value <= u64::from(u8::MAX) {
            self.buf.push(format::UINT8);
            self.buf.push(value as u8);
        } else if value <= u64::from(u16::MAX) {
            self.buf.push(format::UINT16);
            self.buf.extend_from_slice(&(value as u16).to_be_bytes());
        } else if value <= u64::from(u32::MAX) {
            self.buf.push(format::UINT32);
            self.buf.extend_from_slice(&(value as u32).to_be_bytes());
        } else {
            self.buf.push(format::UINT64);
            self.buf.extend_from_slice(&value.to_be_bytes());
        }
    }

    fn write_negative(&mut self, value: i32) {
        if value >= -32 {
            self.buf.push(value as u8);
        } else if value >= i32::from(i8::MIN) {
            self.buf.push(format::INT8);
            self.buf.push(value as i8 as u8);
        } else if value >= i32::from(i16::MIN) {
            self.buf.push(format::INT16);
            self.buf.extend_from_slice(&(value as i16).to_be_bytes());
        } else {
            self.buf.push(format::INT32);
            self.buf.extend_from_slice(&value.to_be_bytes());
        }
    }
}
