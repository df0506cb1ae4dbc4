//! Incremental construction of Pareto fronts.

use super::criteria::PackedCriteria;
use super::error::FrontError;
use super::front::{ParetoFront, find};
use crate::bits::PackError;

/// Mutable accumulator keeping a sorted, non-dominated set of criteria.
///
/// `build` snapshots the current entries without consuming the builder, so
/// one builder may be extended and rebuilt, or [`clear`](Self::clear)ed and
/// reused for another station.
///
/// # Examples
///
/// ```
/// use timetable_profile::pareto::ParetoFrontBuilder;
///
/// let mut builder = ParetoFrontBuilder::new();
/// builder.add(480, 2, 0).unwrap();
/// builder.add(495, 0, 1).unwrap();
/// // Dominated by (480, 2)
/// builder.add(500, 2, 2).unwrap();
///
/// let front = builder.build();
/// assert_eq!(front.size(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParetoFrontBuilder {
    packed: Vec<PackedCriteria>,
}

impl ParetoFrontBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        self.packed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packed.is_empty()
    }

    /// Pack and insert a candidate.
    ///
    /// Packing fails before the builder is touched, so an error leaves it
    /// unchanged.
    pub fn add(
        &mut self,
        arr_mins: i32,
        changes: u32,
        payload: u32,
    ) -> Result<&mut Self, PackError> {
        let criteria = PackedCriteria::pack(arr_mins, changes, payload)?;
        Ok(self.add_packed(criteria))
    }

    /// Insert a candidate unless an existing entry dominates or equals it,
    /// removing every entry it dominates.
    pub fn add_packed(&mut self, criteria: PackedCriteria) -> &mut Self {
        let key = criteria.criteria_key();
        let changes = criteria.changes();

        // Everything that could dominate the candidate sorts at or before it,
        // and the last of those has the fewest changes.
        let pos = self.packed.partition_point(|e| e.criteria_key() <= key);
        if pos > 0 && self.packed[pos - 1].changes() <= changes {
            return self;
        }

        // Later entries arrive no earlier, so the candidate dominates the
        // leading run that doesn't have fewer changes.
        let dominated = self.packed[pos..]
            .iter()
            .take_while(|e| e.changes() >= changes)
            .count();
        self.packed
            .splice(pos..pos + dominated, std::iter::once(criteria));
        self
    }

    /// Merge every entry of `other` into this builder.
    pub fn add_all(&mut self, other: &ParetoFrontBuilder) -> &mut Self {
        for &criteria in &other.packed {
            self.add_packed(criteria);
        }
        self
    }

    /// Whether every entry of `other`, arriving `extra_minutes` later, is
    /// dominated or equalled by an entry of this builder.
    ///
    /// Only arrival minutes shift; change counts compare unchanged. An empty
    /// `other` is always dominated.
    pub fn fully_dominates(&self, other: &ParetoFrontBuilder, extra_minutes: i32) -> bool {
        other.packed.iter().all(|o| {
            let arr_mins = o.arr_mins() + extra_minutes;
            let pos = self.packed.partition_point(|e| e.arr_mins() <= arr_mins);
            pos > 0 && self.packed[pos - 1].changes() <= o.changes()
        })
    }

    /// Remove every entry, keeping the allocation.
    pub fn clear(&mut self) {
        self.packed.clear();
    }

    /// Snapshot the current entries.
    pub fn build(&self) -> ParetoFront {
        ParetoFront::from_sorted(self.packed.clone())
    }

    /// The entry with exactly these criteria.
    pub fn get(&self, arr_mins: i32, changes: u32) -> Result<PackedCriteria, FrontError> {
        find(&self.packed, arr_mins, changes)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = PackedCriteria> + '_ {
        self.packed.iter().copied()
    }

    pub fn for_each(&self, f: impl FnMut(PackedCriteria)) {
        self.iter().for_each(f);
    }

    pub fn as_slice(&self) -> &[PackedCriteria] {
        &self.packed
    }
}

impl From<&ParetoFront> for ParetoFrontBuilder {
    fn from(front: &ParetoFront) -> Self {
        Self {
            packed: front.as_slice().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded(builder: &ParetoFrontBuilder) -> Vec<(i32, u32)> {
        builder.iter().map(|c| (c.arr_mins(), c.changes())).collect()
    }

    fn builder_of(entries: &[(i32, u32)]) -> ParetoFrontBuilder {
        let mut builder = ParetoFrontBuilder::new();
        for (i, &(arr, changes)) in entries.iter().enumerate() {
            builder.add(arr, changes, i as u32).unwrap();
        }
        builder
    }

    #[test]
    fn starts_empty() {
        let builder = ParetoFrontBuilder::new();
        assert!(builder.is_empty());
        assert_eq!(builder.size(), 0);
        assert!(builder.build().is_empty());
    }

    #[test]
    fn keeps_incomparable_entries_sorted() {
        let builder = builder_of(&[(520, 0), (480, 3), (490, 1)]);
        assert_eq!(decoded(&builder), vec![(480, 3), (490, 1), (520, 0)]);
    }

    #[test]
    fn dominated_candidate_is_ignored() {
        let mut builder = builder_of(&[(480, 1)]);
        builder.add(490, 1, 9).unwrap();
        builder.add(480, 2, 9).unwrap();
        builder.add(600, 5, 9).unwrap();
        assert_eq!(decoded(&builder), vec![(480, 1)]);
    }

    #[test]
    fn duplicate_keeps_first_payload() {
        let mut builder = builder_of(&[(480, 1)]);
        builder.add(480, 1, 99).unwrap();
        assert_eq!(builder.size(), 1);
        assert_eq!(builder.get(480, 1).unwrap().payload(), 0);
    }

    #[test]
    fn candidate_removes_dominated_entries() {
        let mut builder = builder_of(&[(480, 4), (490, 3), (500, 2), (510, 0)]);
        builder.add(485, 2, 9).unwrap();
        assert_eq!(decoded(&builder), vec![(480, 4), (485, 2), (510, 0)]);

        // Same arrival, fewer changes
        builder.add(480, 3, 9).unwrap();
        assert_eq!(decoded(&builder), vec![(480, 3), (485, 2), (510, 0)]);

        builder.add(400, 0, 9).unwrap();
        assert_eq!(decoded(&builder), vec![(400, 0)]);
    }

    #[test]
    fn failed_add_leaves_builder_unchanged() {
        let mut builder = builder_of(&[(480, 1)]);
        let before = builder.clone();
        assert!(builder.add(-300, 0, 0).is_err());
        assert!(builder.add(480, 200, 0).is_err());
        assert_eq!(builder, before);
    }

    #[test]
    fn add_all_merges() {
        let mut a = builder_of(&[(480, 3), (520, 0)]);
        let b = builder_of(&[(470, 4), (490, 1), (530, 0)]);
        a.add_all(&b);
        assert_eq!(decoded(&a), vec![(470, 4), (480, 3), (490, 1), (520, 0)]);
    }

    #[test]
    fn build_does_not_consume() {
        let mut builder = builder_of(&[(480, 3)]);
        let first = builder.build();
        builder.add(470, 5, 0).unwrap();
        let second = builder.build();
        assert_eq!(first.size(), 1);
        assert_eq!(second.size(), 2);
    }

    #[test]
    fn clear_resets() {
        let mut builder = builder_of(&[(480, 3), (490, 1)]);
        builder.clear();
        assert!(builder.is_empty());
        builder.add(500, 0, 0).unwrap();
        assert_eq!(decoded(&builder), vec![(500, 0)]);
    }

    #[test]
    fn from_front() {
        let front = builder_of(&[(480, 3), (490, 1)]).build();
        let mut builder = ParetoFrontBuilder::from(&front);
        builder.add(485, 0, 0).unwrap();
        assert_eq!(decoded(&builder), vec![(480, 3), (485, 0)]);
        // Snapshot unaffected
        assert_eq!(front.size(), 2);
    }

    #[test]
    fn get_lookup() {
        let builder = builder_of(&[(480, 3), (490, 1)]);
        assert_eq!(builder.get(490, 1).unwrap().payload(), 1);
        assert_eq!(
            builder.get(490, 3),
            Err(FrontError::NotFound {
                arr_mins: 490,
                changes: 3
            })
        );
    }

    #[test]
    fn fully_dominates_shifts_arrival_only() {
        let this = builder_of(&[(480, 2), (500, 1)]);

        // Arrives too early to be covered without a shift
        let other = builder_of(&[(470, 2)]);
        assert!(!this.fully_dominates(&other, 0));
        assert!(!this.fully_dominates(&other, 9));
        assert!(this.fully_dominates(&other, 10));

        // Changes are not incremented by the shift
        let other = builder_of(&[(495, 1)]);
        assert!(!this.fully_dominates(&other, 4));
        assert!(this.fully_dominates(&other, 5));

        // Fewer changes than anything here can never be covered
        let other = builder_of(&[(300, 0)]);
        assert!(!this.fully_dominates(&other, 1000));
    }

    #[test]
    fn fully_dominates_needs_every_entry() {
        let this = builder_of(&[(480, 2), (500, 1)]);
        let other = builder_of(&[(490, 2), (495, 1)]);
        assert!(!this.fully_dominates(&other, 0));
        assert!(this.fully_dominates(&other, 5));
    }

    #[test]
    fn fully_dominates_empty() {
        let this = builder_of(&[(480, 2)]);
        let empty = ParetoFrontBuilder::new();
        assert!(this.fully_dominates(&empty, 0));
        assert!(empty.fully_dominates(&empty, 0));
        assert!(!empty.fully_dominates(&this, 0));
        assert!(this.fully_dominates(&this, 0));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_entries() -> impl Strategy<Value = Vec<(i32, u32, u32)>> {
        prop::collection::vec((400..=520i32, 0..=6u32, any::<u32>()), 0..40)
    }

    fn build(entries: &[(i32, u32, u32)]) -> ParetoFrontBuilder {
        let mut builder = ParetoFrontBuilder::new();
        for &(arr, changes, payload) in entries {
            builder.add(arr, changes, payload).unwrap();
        }
        builder
    }

    fn criteria(builder: &ParetoFrontBuilder) -> Vec<(i32, u32)> {
        builder.iter().map(|c| (c.arr_mins(), c.changes())).collect()
    }

    proptest! {
        /// Entries are sorted and no two dominate each other
        #[test]
        fn skyline_invariant(entries in any_entries()) {
            let builder = build(&entries);
            let packed = builder.as_slice();
            for pair in packed.windows(2) {
                prop_assert!(pair[0].arr_mins() < pair[1].arr_mins());
                prop_assert!(pair[0].changes() > pair[1].changes());
            }
            for (i, x) in packed.iter().enumerate() {
                for (j, y) in packed.iter().enumerate() {
                    if i != j {
                        prop_assert!(!x.dominates_or_is_equal(*y));
                    }
                }
            }
        }

        /// Every input is dominated or equalled by some kept entry
        #[test]
        fn covers_all_inputs(entries in any_entries()) {
            let builder = build(&entries);
            for &(arr, changes, payload) in &entries {
                let c = PackedCriteria::pack(arr, changes, payload).unwrap();
                prop_assert!(builder.iter().any(|e| e.dominates_or_is_equal(c)));
            }
        }

        /// Re-adding any existing or dominated entry changes nothing
        #[test]
        fn idempotent_insertion(entries in any_entries(), extra in 0..30i32) {
            let mut builder = build(&entries);
            let before = builder.clone();
            let existing: Vec<_> = builder.iter().collect();
            for c in existing {
                builder.add_packed(c.with_payload(7));
                let later = (c.arr_mins() + extra).min(PackedCriteria::MAX_MINS);
                builder.add(later, c.changes(), 7).unwrap();
            }
            prop_assert_eq!(builder, before);
        }

        /// The resulting criteria don't depend on insertion order
        #[test]
        fn order_independent(entries in any_entries()) {
            let forward = build(&entries);
            let mut reversed_entries = entries.clone();
            reversed_entries.reverse();
            let reversed = build(&reversed_entries);
            prop_assert_eq!(criteria(&forward), criteria(&reversed));
        }

        /// Merging matches adding everything to one builder
        #[test]
        fn merge_matches_single_builder(a in any_entries(), b in any_entries()) {
            let mut merged = build(&a);
            merged.add_all(&build(&b));
            let mut swapped = build(&b);
            swapped.add_all(&build(&a));
            let all: Vec<_> = a.iter().chain(&b).copied().collect();
            let single = build(&all);
            prop_assert_eq!(criteria(&merged), criteria(&single));
            prop_assert_eq!(criteria(&swapped), criteria(&single));
        }

        /// A builder always fully dominates its own subsets
        #[test]
        fn dominates_own_entries(entries in any_entries(), extra in 0..60i32) {
            let builder = build(&entries);
            prop_assert!(builder.fully_dominates(&builder, extra));
            let subset = build(&entries[..entries.len() / 2]);
            prop_assert!(builder.fully_dominates(&subset, 0));
        }

        /// Full dominance agrees with a pairwise check
        #[test]
        fn fully_dominates_matches_pairwise(a in any_entries(), b in any_entries(), extra in -20..60i32) {
            let this = build(&a);
            let other = build(&b);
            let expected = other.iter().all(|o| {
                this.iter().any(|e| {
                    e.arr_mins() <= o.arr_mins() + extra && e.changes() <= o.changes()
                })
            });
            prop_assert_eq!(this.fully_dominates(&other, extra), expected);
        }
    }
}
