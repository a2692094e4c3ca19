//! Search nodes and their read-only snapshots.

use trek_arena::SlotHandle;
use trek_grid::Cell;

/// One discovered cell within a search episode.
///
/// Nodes live in the engine's [`NodePool`](trek_arena::NodePool); `parent` is
/// a non-owning handle into the same pool. Within an episode a parent is
/// always created before its children and released together with them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchNode {
    /// Grid cell this node represents.
    pub cell: Cell,
    /// Cost of the best known path from the start.
    pub g: f32,
    /// Weighted heuristic estimate to the goal.
    pub h: f32,
    /// `g + h`.
    pub f: f32,
    /// Predecessor on the best known path; `None` for the start node.
    pub parent: Option<SlotHandle>,
    /// Whether the node has been expanded.
    pub closed: bool,
}

impl SearchNode {
    pub(crate) fn new(cell: Cell, g: f32, h: f32, parent: Option<SlotHandle>) -> Self {
        Self {
            cell,
            g,
            h,
            f: g + h,
            parent,
            closed: false,
        }
    }

    /// Replace the path to this node with a cheaper one.
    pub(crate) fn relax(&mut self, g: f32, parent: SlotHandle) {
        self.g = g;
        self.f = g + self.h;
        self.parent = Some(parent);
    }
}

/// Owned copy of a node's visible state, with the parent resolved to a cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeSnapshot {
    /// Grid cell.
    pub cell: Cell,
    /// Cost from the start.
    pub g: f32,
    /// Weighted heuristic.
    pub h: f32,
    /// `g + h`.
    pub f: f32,
    /// Whether the node has been expanded.
    pub closed: bool,
    /// Cell of the predecessor, if any.
    pub parent: Option<Cell>,
}
