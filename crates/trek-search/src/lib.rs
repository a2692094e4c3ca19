//! Incremental A* search over an occupancy grid.
//!
//! [`SearchEngine`] runs one A* episode at a time and exposes it as an
//! explicit state machine. Each [`step()`](SearchEngine::step) pops one
//! frontier entry, so a caller can interleave search with rendering or other
//! work and observe the open and closed sets between steps through
//! [`draw()`](SearchEngine::draw) or [`nodes()`](SearchEngine::nodes).
//!
//! Nodes are allocated from a [`trek_arena::NodePool`] and addressed by
//! handle; the frontier is a binary heap with lazy deletion (see
//! [`open_set`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod node;
pub mod open_set;
pub mod render;
pub mod state;
pub mod stats;

pub use config::{ConfigError, HeuristicKind, SearchConfig};
pub use engine::SearchEngine;
pub use node::{NodeSnapshot, SearchNode};
pub use open_set::{OpenEntry, OpenSet, F_EPSILON};
pub use render::{CellCategory, DrawSink};
pub use state::{FailureReason, SearchState, StepOutcome};
pub use stats::SearchStats;
