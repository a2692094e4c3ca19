//! The frontier: a binary min-heap with lazy deletion.
//!
//! Entries carry the `(f, h)` key captured when they were pushed. When a
//! node's cost improves the engine pushes a fresh entry and leaves the old
//! one in place; the old entry surfaces later, finds its node closed, and is
//! discarded by the caller.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use trek_arena::SlotHandle;

/// `f` values closer than this are treated as tied.
pub const F_EPSILON: f32 = 1e-4;

/// One frontier entry.
#[derive(Clone, Copy, Debug)]
pub struct OpenEntry {
    /// Node this entry refers to.
    pub handle: SlotHandle,
    /// `f` at push time.
    pub f: f32,
    /// `h` at push time.
    pub h: f32,
    seq: u64,
}

impl OpenEntry {
    /// `Less` means `self` should be popped before `other`.
    ///
    /// Near-equal `f` falls back to smaller `h`, then to earlier insertion.
    /// The epsilon band makes this non-transitive across chains of entries
    /// each within `F_EPSILON` of the next; the heap tolerates that.
    fn priority_cmp(&self, other: &Self) -> Ordering {
        if (self.f - other.f).abs() >= F_EPSILON {
            return self.f.total_cmp(&other.f);
        }
        self.h
            .total_cmp(&other.h)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap.
        self.priority_cmp(other).reverse()
    }
}

/// Priority queue of frontier entries.
#[derive(Clone, Debug, Default)]
pub struct OpenSet {
    heap: BinaryHeap<OpenEntry>,
    next_seq: u64,
}

impl OpenSet {
    /// An empty open set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `handle` with the given key.
    pub fn push(&mut self, handle: SlotHandle, f: f32, h: f32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(OpenEntry { handle, f, h, seq });
    }

    /// Remove and return the best entry.
    pub fn pop(&mut self) -> Option<OpenEntry> {
        self.heap.pop()
    }

    /// The best entry without removing it.
    pub fn peek(&self) -> Option<&OpenEntry> {
        self.heap.peek()
    }

    /// Number of entries, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no entries remain.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop all entries and restart insertion numbering.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }

    /// All entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &OpenEntry> + '_ {
        self.heap.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use trek_arena::{ArenaConfig, NodePool};

    fn drain_f(set: &mut OpenSet) -> Vec<f32> {
        std::iter::from_fn(|| set.pop()).map(|e| e.f).collect()
    }

    #[test]
    fn pops_in_ascending_f() {
        let mut set = OpenSet::new();
        for f in [5.0, 1.0, 3.0, 2.0, 4.0] {
            set.push(SlotHandle::NULL, f, 0.0);
        }
        assert_eq!(drain_f(&mut set), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn near_equal_f_prefers_smaller_h() {
        let mut set = OpenSet::new();
        set.push(SlotHandle::NULL, 4.00005, 3.0);
        set.push(SlotHandle::NULL, 4.0, 1.0);
        let first = set.pop().unwrap();
        assert_eq!(first.h, 1.0);
    }

    #[test]
    fn smaller_h_wins_even_with_slightly_larger_f() {
        let mut set = OpenSet::new();
        set.push(SlotHandle::NULL, 4.0, 3.0);
        set.push(SlotHandle::NULL, 4.00005, 1.0);
        assert_eq!(set.pop().unwrap().h, 1.0);
    }

    #[test]
    fn distinct_f_ignores_h() {
        let mut set = OpenSet::new();
        set.push(SlotHandle::NULL, 4.5, 0.0);
        set.push(SlotHandle::NULL, 4.0, 9.0);
        assert_eq!(set.pop().unwrap().f, 4.0);
    }

    #[test]
    fn full_ties_pop_in_insertion_order() {
        let mut pool = NodePool::new(ArenaConfig::default()).unwrap();
        let mut set = OpenSet::new();
        let mut pushed = Vec::new();
        for i in 0..5u32 {
            let h = pool.alloc(i);
            pushed.push(h);
            set.push(h, 2.0, 1.0);
        }
        let popped: Vec<_> = std::iter::from_fn(|| set.pop()).map(|e| e.handle).collect();
        assert_eq!(popped, pushed);
    }

    #[test]
    fn clear_empties_the_heap() {
        let mut set = OpenSet::new();
        set.push(SlotHandle::NULL, 1.0, 1.0);
        set.push(SlotHandle::NULL, 2.0, 1.0);
        assert_eq!(set.len(), 2);
        assert!(set.peek().is_some());
        set.clear();
        assert!(set.is_empty());
        assert!(set.pop().is_none());
    }

    proptest! {
        #[test]
        fn popped_f_never_drops_by_more_than_epsilon(
            keys in prop::collection::vec((0u16..200, 0u16..50), 1..64)
        ) {
            let mut set = OpenSet::new();
            for (f, h) in &keys {
                set.push(SlotHandle::NULL, *f as f32 * 0.5, *h as f32);
            }
            let order = drain_f(&mut set);
            prop_assert_eq!(order.len(), keys.len());
            for pair in order.windows(2) {
                prop_assert!(pair[1] >= pair[0] - F_EPSILON);
            }
        }
    }
}
