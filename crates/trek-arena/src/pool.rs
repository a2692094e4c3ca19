//! Batch-grown slot storage with an intrusive LIFO free list.
//!
//! A [`NodePool`] is a contiguous `Vec` of equally sized slots. Vacant slots
//! store the index of the next vacant slot, so the free list is threaded
//! through the unused storage itself and costs nothing extra. When the list
//! runs dry, one more batch of `batch_size` slots is appended; storage is
//! never shrunk or compacted while the pool lives.

use std::fmt;

use crate::config::{ArenaConfig, Placement};
use crate::error::ArenaError;
use crate::handle::SlotHandle;

/// Largest slot count a pool may reach. `u32::MAX` is reserved for the null handle.
const MAX_SLOTS: usize = u32::MAX as usize;

enum SlotState<T> {
    Occupied(T),
    Vacant {
        /// Next vacant slot, or `None` at the tail of the free list.
        next_free: Option<u32>,
        /// Value left behind by `free` in [`Placement::Retain`] mode.
        retained: Option<T>,
    },
}

struct Slot<T> {
    /// Bumped on every free; handles from earlier generations are stale.
    generation: u32,
    state: SlotState<T>,
}

/// Typed fixed-block object pool.
///
/// `alloc` and `free` are O(1). Handles stay valid until their own `free`,
/// regardless of how many other allocations happen in between.
///
/// # Example
///
/// ```
/// use trek_arena::{ArenaConfig, NodePool};
///
/// let mut pool = NodePool::new(ArenaConfig::new(4)).unwrap();
/// let a = pool.alloc("a");
/// let b = pool.alloc("b");
/// assert_eq!(pool.get(a), Some(&"a"));
/// assert!(pool.free(b));
/// assert!(!pool.free(b)); // already freed
/// assert_eq!(pool.in_use(), 1);
/// ```
pub struct NodePool<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<u32>,
    in_use: usize,
    batch_count: u32,
    config: ArenaConfig,
}

impl<T> NodePool<T> {
    /// Create a pool and pre-allocate its first batch.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::InvalidConfig`] if the configuration is invalid.
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        let mut pool = Self {
            slots: Vec::new(),
            free_head: None,
            in_use: 0,
            batch_count: 0,
            config,
        };
        pool.grow();
        Ok(pool)
    }

    /// Allocate a slot and move `value` into it.
    ///
    /// Pops the free-list head, growing by one batch first if the list is
    /// empty. In [`Placement::Retain`] mode any value retained in the slot is
    /// dropped here.
    ///
    /// # Panics
    ///
    /// Panics if the pool would exceed `u32::MAX - 1` slots.
    pub fn alloc(&mut self, value: T) -> SlotHandle {
        let (index, _retained) = self.take_free_slot();
        self.occupy(index, value)
    }

    /// Allocate a slot, handing the initializer whatever value the slot
    /// retained from its previous life.
    ///
    /// In [`Placement::Construct`] mode, or for a never-used slot, `init`
    /// receives `None`.
    ///
    /// # Panics
    ///
    /// Panics if the pool would exceed `u32::MAX - 1` slots.
    pub fn recycle(&mut self, init: impl FnOnce(Option<T>) -> T) -> SlotHandle {
        let (index, retained) = self.take_free_slot();
        let value = init(retained);
        self.occupy(index, value)
    }

    /// Release a slot back to the free list.
    ///
    /// Returns `false` (and does nothing) for the null handle, a handle from
    /// another pool's index range, or a handle that was already freed.
    pub fn free(&mut self, handle: SlotHandle) -> bool {
        self.try_free(handle).is_ok()
    }

    /// Release a slot back to the free list, reporting why a release failed.
    ///
    /// # Errors
    ///
    /// - [`ArenaError::NullHandle`] for [`SlotHandle::NULL`].
    /// - [`ArenaError::OutOfRange`] if the index is past the pool's storage.
    /// - [`ArenaError::StaleHandle`] if the slot was already freed.
    pub fn try_free(&mut self, handle: SlotHandle) -> Result<(), ArenaError> {
        self.check(handle)?;
        let free_head = self.free_head;
        let placement = self.config.placement;
        let slot = &mut self.slots[handle.index as usize];

        let previous = std::mem::replace(
            &mut slot.state,
            SlotState::Vacant {
                next_free: free_head,
                retained: None,
            },
        );
        if let (SlotState::Occupied(value), Placement::Retain) = (previous, placement) {
            if let SlotState::Vacant { retained, .. } = &mut slot.state {
                *retained = Some(value);
            }
        }
        slot.generation = slot.generation.wrapping_add(1);

        self.free_head = Some(handle.index);
        self.in_use -= 1;
        Ok(())
    }

    /// Shared access to a live value.
    pub fn get(&self, handle: SlotHandle) -> Option<&T> {
        let slot = self.slots.get(handle.index as usize)?;
        match &slot.state {
            SlotState::Occupied(value) if slot.generation == handle.generation => Some(value),
            _ => None,
        }
    }

    /// Mutable access to a live value.
    pub fn get_mut(&mut self, handle: SlotHandle) -> Option<&mut T> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        match &mut slot.state {
            SlotState::Occupied(value) if slot.generation == handle.generation => Some(value),
            _ => None,
        }
    }

    /// Whether `handle` refers to a live value.
    pub fn contains(&self, handle: SlotHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Iterate over live values in slot-index order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotHandle, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| match &slot.state {
                SlotState::Occupied(value) => {
                    Some((SlotHandle::new(index as u32, slot.generation), value))
                }
                SlotState::Vacant { .. } => None,
            })
    }

    /// Total number of slots across all batches.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of live values.
    pub fn in_use(&self) -> usize {
        self.in_use
    }

    /// Number of vacant slots on the free list.
    pub fn available(&self) -> usize {
        self.slots.len() - self.in_use
    }

    /// Number of batches allocated so far (at least 1).
    pub fn batch_count(&self) -> u32 {
        self.batch_count
    }

    /// The configuration this pool was built with.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Size of one slot in bytes: the larger of the payload and the free-list
    /// link, plus the generation counter and state tag.
    pub fn block_bytes(&self) -> usize {
        std::mem::size_of::<Slot<T>>()
    }

    /// Bytes reserved for slot storage.
    pub fn memory_bytes(&self) -> usize {
        self.slots.capacity() * self.block_bytes()
    }

    /// Reject handles that do not name a live slot.
    fn check(&self, handle: SlotHandle) -> Result<(), ArenaError> {
        if handle.is_null() {
            return Err(ArenaError::NullHandle);
        }
        let slot = self
            .slots
            .get(handle.index as usize)
            .ok_or(ArenaError::OutOfRange {
                index: handle.index,
                capacity: self.slots.len(),
            })?;
        match slot.state {
            SlotState::Occupied(_) if slot.generation == handle.generation => Ok(()),
            _ => Err(ArenaError::StaleHandle {
                index: handle.index,
                handle_generation: handle.generation,
                slot_generation: slot.generation,
            }),
        }
    }

    /// Pop the free-list head, growing first if the list is empty.
    ///
    /// The slot is left vacant with no link; the caller must occupy it.
    fn take_free_slot(&mut self) -> (u32, Option<T>) {
        let index = match self.free_head {
            Some(index) => index,
            None => self.grow(),
        };
        let slot = &mut self.slots[index as usize];
        let SlotState::Vacant {
            next_free,
            retained,
        } = &mut slot.state
        else {
            unreachable!("free list head {index} points at an occupied slot");
        };
        let next = next_free.take();
        let retained = retained.take();
        self.free_head = next;
        (index, retained)
    }

    fn occupy(&mut self, index: u32, value: T) -> SlotHandle {
        let slot = &mut self.slots[index as usize];
        slot.state = SlotState::Occupied(value);
        self.in_use += 1;
        SlotHandle::new(index, slot.generation)
    }

    /// Append one batch of vacant slots and make its first slot the head.
    ///
    /// The new slots are linked in ascending index order; the last one links
    /// to the previous head so no vacant slot is ever orphaned.
    fn grow(&mut self) -> u32 {
        let start = self.slots.len();
        let batch = self.config.batch_size as usize;
        let end = start + batch;
        assert!(
            end < MAX_SLOTS,
            "node pool exhausted: {end} slots exceeds the u32 index space"
        );

        self.slots.reserve_exact(batch);
        for index in start..end {
            let next_free = if index + 1 < end {
                Some((index + 1) as u32)
            } else {
                self.free_head
            };
            self.slots.push(Slot {
                generation: 0,
                state: SlotState::Vacant {
                    next_free,
                    retained: None,
                },
            });
        }
        self.free_head = Some(start as u32);
        self.batch_count += 1;

        log::debug!(
            "node pool grew to {} slots ({} batches of {})",
            end,
            self.batch_count,
            batch
        );
        start as u32
    }
}

impl<T> fmt::Debug for NodePool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodePool")
            .field("capacity", &self.capacity())
            .field("in_use", &self.in_use)
            .field("batch_count", &self.batch_count)
            .field("config", &self.config)
            .finish()
    }
}
