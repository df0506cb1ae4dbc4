//! Journey criteria packed into one 64-bit word.
//!
//! Layout, most significant bit first:
//!
//! | bits  | field                               |
//! |-------|-------------------------------------|
//! | 52-63 | arrival minutes + 240               |
//! | 45-51 | changes                             |
//! | 44    | departure present                   |
//! | 32-43 | departure minutes + 240             |
//! | 0-31  | payload                             |
//!
//! Arrival sits above changes, so comparing two raw words orders them by
//! arrival, then changes.

use std::fmt;

use crate::bits::PackError;

const PAYLOAD_MASK: u64 = 0xFFFF_FFFF;

const DEP_SHIFT: u32 = 32;
const DEP_FLAG_SHIFT: u32 = 44;
const CHANGES_SHIFT: u32 = 45;
const ARR_SHIFT: u32 = 52;

const MINS_MASK: u64 = 0xFFF;
const CHANGES_MASK: u64 = 0x7F;
const DEP_FLAG: u64 = 1 << DEP_FLAG_SHIFT;

/// Offset added to minutes so that times before midnight stay unsigned.
const MINS_OFFSET: i32 = 240;

/// The comparable attributes of a journey candidate.
///
/// Dominance only looks at arrival minutes and changes; the payload and the
/// optional departure minutes are carried along untouched.
///
/// # Examples
///
/// ```
/// use timetable_profile::pareto::PackedCriteria;
///
/// let fast = PackedCriteria::pack(480, 2, 7).unwrap();
/// let direct = PackedCriteria::pack(495, 0, 9).unwrap();
///
/// assert_eq!(fast.arr_mins(), 480);
/// assert_eq!(fast.changes(), 2);
/// assert_eq!(fast.payload(), 7);
///
/// // Neither is better on both criteria
/// assert!(!fast.dominates_or_is_equal(direct));
/// assert!(!direct.dominates_or_is_equal(fast));
///
/// // Sorting orders by arrival, then changes
/// assert!(fast < direct);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackedCriteria(u64);

impl PackedCriteria {
    /// Earliest representable time, four hours before midnight.
    pub const MIN_MINS: i32 = -MINS_OFFSET;

    /// Latest representable time.
    pub const MAX_MINS: i32 = MINS_MASK as i32 - MINS_OFFSET;

    /// Largest representable number of changes.
    pub const MAX_CHANGES: u32 = CHANGES_MASK as u32;

    /// Pack criteria without departure minutes.
    pub fn pack(arr_mins: i32, changes: u32, payload: u32) -> Result<Self, PackError> {
        let arr = encode_mins("arrival minutes", arr_mins)?;
        if changes > Self::MAX_CHANGES {
            return Err(PackError::FieldOverflow {
                field: "changes",
                value: i64::from(changes),
                min: 0,
                max: i64::from(Self::MAX_CHANGES),
            });
        }
        Ok(Self(
            (arr << ARR_SHIFT) | (u64::from(changes) << CHANGES_SHIFT) | u64::from(payload),
        ))
    }

    /// Reinterpret a raw packed word.
    pub const fn from_raw(word: u64) -> Self {
        Self(word)
    }

    /// The raw packed word.
    pub const fn raw(self) -> u64 {
        self.0
    }

    pub const fn arr_mins(self) -> i32 {
        ((self.0 >> ARR_SHIFT) & MINS_MASK) as i32 - MINS_OFFSET
    }

    pub const fn changes(self) -> u32 {
        ((self.0 >> CHANGES_SHIFT) & CHANGES_MASK) as u32
    }

    pub const fn payload(self) -> u32 {
        (self.0 & PAYLOAD_MASK) as u32
    }

    pub const fn has_dep_mins(self) -> bool {
        self.0 & DEP_FLAG != 0
    }

    /// Departure minutes, if set.
    pub const fn dep_mins(self) -> Option<i32> {
        if self.has_dep_mins() {
            Some(((self.0 >> DEP_SHIFT) & MINS_MASK) as i32 - MINS_OFFSET)
        } else {
            None
        }
    }

    /// Set the departure minutes, replacing any previous value.
    pub fn with_dep_mins(self, dep_mins: i32) -> Result<Self, PackError> {
        let dep = encode_mins("departure minutes", dep_mins)?;
        Ok(Self(self.without_dep_mins().0 | DEP_FLAG | (dep << DEP_SHIFT)))
    }

    /// Clear the departure minutes.
    pub const fn without_dep_mins(self) -> Self {
        Self(self.0 & !(DEP_FLAG | (MINS_MASK << DEP_SHIFT)))
    }

    /// The same criteria with one more change.
    ///
    /// Fails instead of saturating once the change counter is full.
    pub fn with_additional_change(self) -> Result<Self, PackError> {
        let changes = self.changes();
        if changes >= Self::MAX_CHANGES {
            return Err(PackError::FieldOverflow {
                field: "changes",
                value: i64::from(changes) + 1,
                min: 0,
                max: i64::from(Self::MAX_CHANGES),
            });
        }
        Ok(Self(self.0 + (1 << CHANGES_SHIFT)))
    }

    /// Replace the payload, keeping every criterion.
    pub const fn with_payload(self, payload: u32) -> Self {
        Self((self.0 & !PAYLOAD_MASK) | payload as u64)
    }

    /// Whether `self` is at least as good as `other` on arrival time and
    /// changes.
    pub const fn dominates_or_is_equal(self, other: Self) -> bool {
        self.arr_bits() <= other.arr_bits() && self.changes_bits() <= other.changes_bits()
    }

    /// Arrival and changes as one integer, ordered like the criteria.
    pub(crate) const fn criteria_key(self) -> u64 {
        self.0 >> CHANGES_SHIFT
    }

    const fn arr_bits(self) -> u64 {
        self.0 >> ARR_SHIFT
    }

    const fn changes_bits(self) -> u64 {
        self.0 & (CHANGES_MASK << CHANGES_SHIFT)
    }
}

fn encode_mins(field: &'static str, mins: i32) -> Result<u64, PackError> {
    if !(PackedCriteria::MIN_MINS..=PackedCriteria::MAX_MINS).contains(&mins) {
        return Err(PackError::FieldOverflow {
            field,
            value: i64::from(mins),
            min: i64::from(PackedCriteria::MIN_MINS),
            max: i64::from(PackedCriteria::MAX_MINS),
        });
    }
    Ok((mins + MINS_OFFSET) as u64)
}

impl fmt::Debug for PackedCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("PackedCriteria");
        s.field("arr_mins", &self.arr_mins())
            .field("changes", &self.changes());
        if let Some(dep_mins) = self.dep_mins() {
            s.field("dep_mins", &dep_mins);
        }
        s.field("payload", &self.payload()).finish()
    }
}
