//! # Wire Reader
//!
//! Forward-only decoder over a borrowed buffer. A read either succeeds and
//! advances the cursor, or fails and leaves the cursor untouched.

use super::format;
use crate::error::CodecError;

/// Decoder for the challenge wire format.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    /// Create a reader positioned at the start of `input`.
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Number of bytes consumed by successful reads.
    pub fn bytes_consumed(&self) -> usize {
        self.pos
    }

    /// Number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    /// True once every input byte has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Read an integer in `0..=255`.
    pub fn read_byte(&mut self) -> Result<u8, CodecError> {
        self.transact(|r| {
            let value = r.read_integer()?;
            u8::try_from(value).map_err(|_| CodecError::IntegerOutOfRange {
                value,
                target: "u8",
            })
        })
    }

    /// Read an integer in `0..=u32::MAX`.
    pub fn read_u32(&mut self) -> Result<u32, CodecError> {
        self.transact(|r| {
            let value = r.read_integer()?;
            u32::try_from(value).map_err(|_| CodecError::IntegerOutOfRange {
                value,
                target: "u32",
            })
        })
    }

    /// Read an integer in `i32::MIN..=i32::MAX`.
    pub fn read_i32(&mut self) -> Result<i32, CodecError> {
        self.transact(|r| {
            let value = r.read_integer()?;
            i32::try_from(value).map_err(|_| CodecError::IntegerOutOfRange {
                value,
                target: "i32",
            })
        })
    }

    /// Read a byte string. The returned slice borrows from the input.
    pub fn read_bytes(&mut self) -> Result<&'a [u8], CodecError> {
        self.transact(|r| {
            let offset = r.pos;
            let tag = r.take_u8()?;
            let len = match tag {
                format::BIN8 => u64::from(r.take_u8()?),
                format::BIN16 => u64::from(r.take_u16()?),
                format::BIN32 => u64::from(r.take_u32()?),
                _ => {
                    return Err(CodecError::UnexpectedTag {
                        tag,
                        offset,
                        expected: "byte string",
                    })
                }
            };
            r.take_prefixed(len)
        })
    }

    /// Read a UTF-8 string.
    pub fn read_str(&mut self) -> Result<&'a str, CodecError> {
        self.transact(|r| {
            let bytes = r.read_str_bytes()?;
            let offset = r.pos - bytes.len();
            std::str::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8 { offset })
        })
    }

    /// Read the payload of a string without validating its UTF-8.
    ///
    /// Used when the payload must be authenticated before it is interpreted.
    pub fn read_str_bytes(&mut self) -> Result<&'a [u8], CodecError> {
        self.transact(|r| {
            let offset = r.pos;
            let tag = r.take_u8()?;
            let len = match tag {
                t if (t & format::FIXSTR_MASK) == format::FIXSTR_PREFIX => {
                    u64::from(t & !format::FIXSTR_MASK)
                }
                format::STR8 => u64::from(r.take_u8()?),
                format::STR16 => u64::from(r.take_u16()?),
                format::STR32 => u64::from(r.take_u32()?),
                _ => {
                    return Err(CodecError::UnexpectedTag {
                        tag,
                        offset,
                        expected: "string",
                    })
                }
            };
            r.take_prefixed(len)
        })
    }

    fn read_integer(&mut self) -> Result<i128, CodecError> {
        let offset = self.pos;
        let tag = self.take_u8()?;
        let value = match tag {
            t if t <= format::POSITIVE_FIXINT_MAX => i128::from(t),
            t if t >= format::NEGATIVE_FIXINT_MIN => i128::from(t as i8),
            format::UINT8 => i128::from(self.take_u8()?),
            format::UINT16 => i128::from(self.take_u16()?),
            format::UINT32 => i128::from(self.take_u32()?),
            format::UINT64 => i128::from(u64::from_be_bytes(self.take_array()?)),
            format::INT8 => i128::from(self.take_u8()? as i8),
            format::INT16 => i128::from(i16::from_be_bytes(self.take_array()?)),
            format::INT32 => i128::from(i32::from_be_bytes(self.take_array()?)),
            format::INT64 => i128::from(i64::from_be_bytes(self.take_array()?)),
            _ => {
                return Err(CodecError::UnexpectedTag {
                    tag,
                    offset,
                    expected: "integer",
                })
            }
        };
        Ok(value)
    }

    /// Run `f`, rewinding the cursor if it fails.
    fn transact<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, CodecError>,
    ) -> Result<T, CodecError> {
        let start = self.pos;
        let result = f(self);
        if result.is_err() {
            self.pos = start;
        }
        result
    }

    /// Take a payload whose length came off the wire.
    fn take_prefixed(&mut self, len: u64) -> Result<&'a [u8], CodecError> {
        let remaining = self.remaining();
        match usize::try_from(len) {
            Ok(n) if n <= remaining => self.take(n),
            _ => Err(CodecError::LengthOutOfBounds {
                length: len,
                remaining,
            }),
        }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(CodecError::UnexpectedEof {
                needed: n,
                remaining,
            });
        }
        let slice = &self.input[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    fn take_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.take_array::<1>()?[0])
    }

    fn take_u16(&mut self) -> Result<u16, CodecError> {
        Ok(u16::from_be_bytes(self.take_array()?))
    }

    fn take_u32(&mut self) -> Result<u32, CodecError> {
        Ok(u32::from_be_bytes(self.take_array()?))
    }
}
