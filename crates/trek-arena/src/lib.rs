//! Fixed-block node pool for Trek searches.
//!
//! Provides a typed, batch-grown object pool with an intrusive free list and
//! generation-checked handles. The search engine allocates every search node
//! from a [`NodePool`] and releases them in bulk at the end of an episode, so
//! steady-state searching performs no per-node heap allocation.
//!
//! # Architecture
//!
//! ```text
//! NodePool<T>
//! ├── Vec<Slot<T>>          contiguous slot storage, grown one batch at a time
//! │   ├── Occupied(T)       live value
//! │   └── Vacant { next }   free-list link (+ retained value in Retain mode)
//! ├── free_head             LIFO free-list head
//! └── ArenaConfig           batch size + placement mode
//! ```
//!
//! # Handle discipline
//!
//! - Handles are plain `(index, generation)` pairs and never own anything.
//! - A handle stays valid until its own `free`; later `alloc` calls never
//!   move it.
//! - `free` bumps the slot generation, so a second `free` (or any access)
//!   through the old handle is detected and rejected.
//! - Storage only grows. Batches are released when the pool is dropped.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod handle;
pub mod pool;

pub use config::{ArenaConfig, Placement};
pub use error::ArenaError;
pub use handle::SlotHandle;
pub use pool::NodePool;
