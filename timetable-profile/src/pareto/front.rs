//! Immutable Pareto front snapshots.

use super::criteria::PackedCriteria;
use super::error::FrontError;

/// A sorted set of mutually non-dominated criteria.
///
/// Built by [`ParetoFrontBuilder::build`](super::ParetoFrontBuilder::build).
/// Entries ascend by arrival minutes while their change counts strictly
/// descend.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParetoFront {
    packed: Vec<PackedCriteria>,
}

impl ParetoFront {
    /// The front of a station no journey reaches.
    pub const EMPTY: ParetoFront = ParetoFront { packed: Vec::new() };

    pub(super) fn from_sorted(packed: Vec<PackedCriteria>) -> Self {
        Self { packed }
    }

    pub fn size(&self) -> usize {
        self.packed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packed.is_empty()
    }

    /// The entry with exactly these criteria.
    ///
    /// This is a payload lookup, not a dominance query: an entry that
    /// dominates the pair does not match.
    pub fn get(&self, arr_mins: i32, changes: u32) -> Result<PackedCriteria, FrontError> {
        find(&self.packed, arr_mins, changes)
    }

    /// Entries in ascending order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = PackedCriteria> + '_ {
        self.packed.iter().copied()
    }

    /// Visit every entry in ascending order.
    pub fn for_each(&self, f: impl FnMut(PackedCriteria)) {
        self.iter().for_each(f);
    }

    pub fn as_slice(&self) -> &[PackedCriteria] {
        &self.packed
    }
}

impl<'a> IntoIterator for &'a ParetoFront {
    type Item = PackedCriteria;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, PackedCriteria>>;

    fn into_iter(self) -> Self::IntoIter {
        self.packed.iter().copied()
    }
}

/// Exact-pair lookup in a sorted skyline.
pub(super) fn find(
    packed: &[PackedCriteria],
    arr_mins: i32,
    changes: u32,
) -> Result<PackedCriteria, FrontError> {
    let not_found = FrontError::NotFound { arr_mins, changes };
    // Pairs outside the packable bounds can't be stored
    let key = PackedCriteria::pack(arr_mins, changes, 0)
        .map_err(|_| not_found.clone())?
        .criteria_key();
    packed
        .binary_search_by_key(&key, |e| e.criteria_key())
        .map(|i| packed[i])
        .map_err(|_| not_found)
}
