//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during pool operations.
///
/// None of these are fatal: [`NodePool::free`](crate::NodePool::free)
/// collapses them to `false`, and [`NodePool::try_free`](crate::NodePool::try_free)
/// reports them for callers that want the reason.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The pool configuration is unusable.
    InvalidConfig {
        /// What went wrong.
        reason: String,
    },
    /// The null handle was passed where a live handle was expected.
    NullHandle,
    /// A handle whose slot has since been freed (and possibly reused).
    StaleHandle {
        /// Slot index encoded in the handle.
        index: u32,
        /// Generation encoded in the handle.
        handle_generation: u32,
        /// Current generation of the slot.
        slot_generation: u32,
    },
    /// A handle pointing past the end of the pool's storage.
    OutOfRange {
        /// Slot index encoded in the handle.
        index: u32,
        /// Number of slots the pool currently holds.
        capacity: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => write!(f, "invalid arena config: {reason}"),
            Self::NullHandle => write!(f, "null slot handle"),
            Self::StaleHandle {
                index,
                handle_generation,
                slot_generation,
            } => {
                write!(
                    f,
                    "stale handle: slot {index} generation {handle_generation}, current {slot_generation}"
                )
            }
            Self::OutOfRange { index, capacity } => {
                write!(f, "slot {index} out of range for pool of {capacity} slots")
            }
        }
    }
}

impl Error for ArenaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_slot_and_generations() {
        let e = ArenaError::StaleHandle {
            index: 7,
            handle_generation: 2,
            slot_generation: 3,
        };
        let text = e.to_string();
        assert!(text.contains("slot 7"));
        assert!(text.contains("generation 2"));
        assert!(text.contains("current 3"));
    }

    #[test]
    fn out_of_range_display() {
        let e = ArenaError::OutOfRange {
            index: 12,
            capacity: 10,
        };
        assert_eq!(e.to_string(), "slot 12 out of range for pool of 10 slots");
    }
}
