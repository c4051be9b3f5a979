//! # Time Validity
//!
//! Half-open validity windows: a challenge is valid exactly on
//! `[valid_from, valid_to)`.

/// Returns true if `now` falls outside `[valid_from, valid_to)`.
///
/// `now` is wider than the window bounds so that clocks past the end of the
/// 32-bit range compare correctly (they are always expired).
pub fn is_expired(valid_from: u32, valid_to: u32, now: u64) -> bool {
    now < u64::from(valid_from) || now >= u64::from(valid_to)
}
