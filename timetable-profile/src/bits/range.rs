//! Integer intervals packed into one word.

use std::fmt;
use std::ops::Range;

use super::error::PackError;
use super::split::{MAX_24, pack_24_8, unpack_8, unpack_24};

/// A half-open interval `start..start + len` packed as a 24/8 word.
///
/// Used wherever a collection hands out "the block of ids belonging to key
/// K" without allocating, e.g. the transfers arriving at a station.
///
/// # Examples
///
/// ```
/// use timetable_profile::bits::PackedRange;
///
/// let range = PackedRange::pack(10, 14).unwrap();
/// assert_eq!(range.start_inclusive(), 10);
/// assert_eq!(range.end_exclusive(), 14);
/// assert_eq!(range.len(), 4);
///
/// // The length field is 8 bits wide
/// assert!(PackedRange::pack(0, 256).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PackedRange(u32);

impl PackedRange {
    /// Longest representable range.
    pub const MAX_LEN: usize = 0xFF;

    /// The empty range starting at 0.
    pub const EMPTY: PackedRange = PackedRange(0);

    /// Pack the interval `start_inclusive..end_exclusive`.
    pub fn pack(start_inclusive: usize, end_exclusive: usize) -> Result<Self, PackError> {
        if end_exclusive < start_inclusive {
            return Err(PackError::ReversedRange {
                start: start_inclusive,
                end: end_exclusive,
            });
        }
        let len = end_exclusive - start_inclusive;
        if len > Self::MAX_LEN {
            return Err(PackError::RangeTooLong {
                start: start_inclusive,
                end: end_exclusive,
                max: Self::MAX_LEN,
            });
        }
        if start_inclusive > MAX_24 as usize {
            return Err(PackError::RangeStartTooLarge(start_inclusive));
        }
        Ok(Self(pack_24_8(start_inclusive as u32, len as u8)))
    }

    /// Reinterpret a raw packed word.
    pub const fn from_raw(word: u32) -> Self {
        Self(word)
    }

    /// The raw packed word.
    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn start_inclusive(self) -> usize {
        unpack_24(self.0) as usize
    }

    pub const fn len(self) -> usize {
        unpack_8(self.0) as usize
    }

    pub const fn end_exclusive(self) -> usize {
        self.start_inclusive() + self.len()
    }

    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// The interval as a standard range, for iteration and slicing.
    pub fn as_range(self) -> Range<usize> {
        self.start_inclusive()..self.end_exclusive()
    }
}

impl fmt::Debug for PackedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PackedRange({}..{})",
            self.start_inclusive(),
            self.end_exclusive()
        )
    }
}

impl From<PackedRange> for Range<usize> {
    fn from(range: PackedRange) -> Self {
        range.as_range()
    }
}
