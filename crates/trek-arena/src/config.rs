//! Pool configuration parameters.

use crate::error::ArenaError;

/// What a pool does with a value when its slot is freed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Placement {
    /// `free` drops the value immediately; `alloc` moves a fresh value in.
    #[default]
    Construct,
    /// `free` leaves the value inert in its slot. The next allocation of that
    /// slot through [`NodePool::recycle`](crate::NodePool::recycle) receives
    /// it back, so buffers inside `T` can be reused without reallocating.
    Retain,
}

/// Configuration for a [`NodePool`](crate::NodePool).
///
/// Validated at construction; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Number of slots added each time the free list runs dry.
    ///
    /// Default: 1000. Must be at least 1. The first batch is allocated when
    /// the pool is created.
    pub batch_size: u32,

    /// Drop-on-free behaviour. Default: [`Placement::Construct`].
    pub placement: Placement,
}

impl ArenaConfig {
    /// Default number of slots per batch.
    pub const DEFAULT_BATCH_SIZE: u32 = 1000;

    /// Create a config with the given batch size and construct-on-alloc placement.
    pub fn new(batch_size: u32) -> Self {
        Self {
            batch_size,
            placement: Placement::Construct,
        }
    }

    /// Switch the placement mode.
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::InvalidConfig`] if `batch_size` is zero.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.batch_size == 0 {
            return Err(ArenaError::InvalidConfig {
                reason: "batch_size must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BATCH_SIZE)
    }
}
