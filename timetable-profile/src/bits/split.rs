//! The 24/8 split of a 32-bit word.
//!
//! The upper 24 bits hold one value and the lower 8 bits another. Callers
//! validate their inputs; these functions only truncate to width.

/// Largest value representable in the 24-bit half.
pub const MAX_24: u32 = (1 << 24) - 1;

/// Combine a 24-bit value and an 8-bit value into one word.
///
/// Bits of `high` above the 24th are discarded.
///
/// # Examples
///
/// ```
/// use timetable_profile::bits::{pack_24_8, unpack_8, unpack_24};
///
/// let word = pack_24_8(0xABCDEF, 0x12);
/// assert_eq!(word, 0xABCDEF12);
/// assert_eq!(unpack_24(word), 0xABCDEF);
/// assert_eq!(unpack_8(word), 0x12);
/// ```
pub const fn pack_24_8(high: u32, low: u8) -> u32 {
    (high << 8) | low as u32
}

/// Extract the 24-bit half of a packed word.
pub const fn unpack_24(word: u32) -> u32 {
    word >> 8
}

/// Extract the 8-bit half of a packed word.
pub const fn unpack_8(word: u32) -> u8 {
    (word & 0xFF) as u8
}
