//! # Wire Codec
//!
//! Minimal tagged binary format shared by every implementation of the
//! challenge protocol. It is the MessagePack subset covering integers,
//! byte strings and UTF-8 strings, always written in canonical (smallest)
//! form.
//!
//! ## Modules
//!
//! - `format`: tag bytes and width thresholds
//! - `writer`: `WireWriter`, an append-only encoder
//! - `reader`: `WireReader`, a forward-only bounds-checked decoder
//!
//! ## Security Invariants
//!
//! - The reader never indexes past the end of its input
//! - Every length prefix is checked against the remaining input before use
//! - `bytes_consumed()` is exact, so callers can authenticate a prefix

pub mod format;
mod reader;
mod writer;

pub use reader::WireReader;
pub use writer::WireWriter;
