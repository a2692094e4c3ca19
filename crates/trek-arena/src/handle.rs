//! Slot handles.
//!
//! A [`SlotHandle`] names one slot of a [`NodePool`](crate::NodePool). It is
//! generation-scoped: the `generation` field allows O(1) staleness checks
//! without a lookup table. Handles do not own the value they name and are
//! freely copyable; the pool is the sole owner.

use std::fmt;

/// Non-owning reference to a pooled value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct SlotHandle {
    /// Index into the pool's slot storage.
    pub(crate) index: u32,
    /// Slot generation at the time of allocation.
    pub(crate) generation: u32,
}

impl SlotHandle {
    /// A handle that never refers to a live slot.
    ///
    /// Freeing it is a no-op that reports failure.
    pub const NULL: SlotHandle = SlotHandle {
        index: u32::MAX,
        generation: u32::MAX,
    };

    /// Create a new handle.
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index within the pool.
    ///
    /// Stable for the lifetime of the allocation.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Generation this handle was issued in.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Whether this is [`SlotHandle::NULL`].
    pub fn is_null(&self) -> bool {
        self.index == u32::MAX
    }
}

impl fmt::Display for SlotHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "SlotHandle(null)");
        }
        write!(f, "SlotHandle(idx={}, gen={})", self.index, self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_report_fields() {
        let h = SlotHandle::new(42, 3);
        assert_eq!(h.index(), 42);
        assert_eq!(h.generation(), 3);
        assert!(!h.is_null());
    }

    #[test]
    fn null_handle_is_null() {
        assert!(SlotHandle::NULL.is_null());
        assert_eq!(SlotHandle::NULL.to_string(), "SlotHandle(null)");
    }

    #[test]
    fn display_shows_index_and_generation() {
        assert_eq!(SlotHandle::new(5, 1).to_string(), "SlotHandle(idx=5, gen=1)");
    }
}
