//! Per-episode search counters.
//!
//! [`SearchStats`] is reset by every `start_search` and accumulates until
//! the next one, so it can be read after the episode finishes or fails.

/// Counters collected during one search episode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// `step()` calls made while searching, including stale pops.
    pub steps: u64,
    /// Nodes closed (popped while still open).
    pub expansions: u64,
    /// Popped entries whose node was already closed.
    pub stale_pops: u64,
    /// Nodes allocated from the pool, start node included.
    pub nodes_created: u64,
    /// Times an open node's cost was lowered and the node re-queued.
    pub reopened: u64,
}
