//! The incremental A* engine.
//!
//! [`SearchEngine`] owns the grid, the node pool and the frontier, and
//! advances one expansion per [`step()`](SearchEngine::step). The caller
//! decides the pacing: one step per frame for visualization,
//! [`step_many()`](SearchEngine::step_many) per tick, or
//! [`run()`](SearchEngine::run) to completion.
//!
//! # Ownership model
//!
//! Every node of the current episode lives in the engine's
//! [`NodePool`]. The engine holds only [`SlotHandle`]s: one per cell in the
//! node index, one per node in creation order, and one per frontier entry.
//! Starting a new episode (or [`reset()`](SearchEngine::reset)) frees every
//! node back to the pool, which keeps its capacity for reuse.

use log::{debug, trace};
use trek_arena::{NodePool, SlotHandle};
use trek_grid::{Cell, OccupancyGrid};

use crate::config::{validate_weight, ConfigError, HeuristicKind, SearchConfig};
use crate::node::{NodeSnapshot, SearchNode};
use crate::open_set::OpenSet;
use crate::render::{CellCategory, DrawSink};
use crate::state::{FailureReason, SearchState, StepOutcome};
use crate::stats::SearchStats;

// Compile-time assertion: SearchEngine owns all of its data and can be
// moved to another thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<SearchEngine>();
    }
};

/// Step-wise A* search over an [`OccupancyGrid`].
///
/// # Example
///
/// ```
/// use trek_grid::Cell;
/// use trek_search::{SearchConfig, SearchEngine, SearchState};
///
/// let mut engine = SearchEngine::new(5, 5, SearchConfig::default()).unwrap();
/// engine.edit_grid(|grid| grid.block_border());
/// engine.start_search(Cell::new(1, 1), Cell::new(3, 3));
/// while engine.state() == SearchState::Searching {
///     engine.step();
/// }
/// assert_eq!(engine.state(), SearchState::Finished);
/// assert_eq!(engine.path().first(), Some(&Cell::new(1, 1)));
/// assert_eq!(engine.path().last(), Some(&Cell::new(3, 3)));
/// ```
#[derive(Debug)]
pub struct SearchEngine {
    grid: OccupancyGrid,
    /// Edited by the setters; copied into `active` at episode start.
    config: SearchConfig,
    active: SearchConfig,
    pool: NodePool<SearchNode>,
    /// Parallel to the grid: the live node for each cell, if any.
    node_index: Vec<Option<SlotHandle>>,
    /// Every live node, in creation order.
    created: Vec<SlotHandle>,
    open: OpenSet,
    closed: Vec<SlotHandle>,
    path: Vec<Cell>,
    path_cost: f32,
    state: SearchState,
    failure: Option<FailureReason>,
    start: Option<Cell>,
    goal: Option<Cell>,
    stats: SearchStats,
}

impl SearchEngine {
    /// Create an engine over a fully walkable `width × height` grid.
    pub fn new(width: u32, height: u32, config: SearchConfig) -> Result<Self, ConfigError> {
        let grid = OccupancyGrid::new(width, height)?;
        Self::with_grid(grid, config)
    }

    /// Create an engine over an existing grid.
    pub fn with_grid(grid: OccupancyGrid, config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let pool = NodePool::new(config.arena.clone())?;
        let node_index = vec![None; grid.cell_count()];
        Ok(Self {
            grid,
            active: config.clone(),
            config,
            pool,
            node_index,
            created: Vec::new(),
            open: OpenSet::new(),
            closed: Vec::new(),
            path: Vec::new(),
            path_cost: 0.0,
            state: SearchState::Ready,
            failure: None,
            start: None,
            goal: None,
            stats: SearchStats::default(),
        })
    }

    /// Replace the grid with a fresh walkable `width × height` one and
    /// return to [`SearchState::Ready`].
    ///
    /// On error the engine is left unchanged.
    pub fn initialize(&mut self, width: u32, height: u32) -> Result<(), ConfigError> {
        let grid = OccupancyGrid::new(width, height)?;
        self.replace_grid(grid);
        Ok(())
    }

    /// Swap in `grid` and return to [`SearchState::Ready`].
    pub fn replace_grid(&mut self, grid: OccupancyGrid) {
        self.grid = grid;
        self.reset();
    }

    /// Release every node and return to [`SearchState::Ready`].
    ///
    /// The grid and configuration are kept.
    pub fn reset(&mut self) {
        self.clear_episode();
        self.start = None;
        self.goal = None;
        self.state = SearchState::Ready;
    }

    // ── Grid ────────────────────────────────────────────────────

    /// The grid being searched.
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// Edit the grid in place and return whatever `edit` returns.
    ///
    /// Edits made during an episode are seen by later expansions but do not
    /// revisit work already done. If `edit` leaves the grid with different
    /// dimensions the episode is dropped and the engine returns to
    /// [`SearchState::Ready`], as with [`replace_grid`](Self::replace_grid).
    pub fn edit_grid<R>(&mut self, edit: impl FnOnce(&mut OccupancyGrid) -> R) -> R {
        let (width, height) = (self.grid.width(), self.grid.height());
        let out = edit(&mut self.grid);
        if (self.grid.width(), self.grid.height()) != (width, height) {
            debug!(
                "grid resized {width}x{height} -> {}x{}, episode dropped",
                self.grid.width(),
                self.grid.height()
            );
            self.reset();
        }
        out
    }

    /// Block or unblock `cell`. Off-grid cells are ignored.
    pub fn set_obstacle(&mut self, cell: Cell, blocked: bool) {
        self.grid.set_obstacle(cell, blocked);
    }

    /// Make every cell walkable.
    pub fn clear_obstacles(&mut self) {
        self.grid.clear_obstacles();
    }

    /// Whether `cell` is on the grid and not blocked.
    pub fn is_walkable(&self, cell: Cell) -> bool {
        self.grid.is_walkable(cell)
    }

    // ── Configuration ───────────────────────────────────────────

    /// Configuration that the next episode will use.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Configuration captured by the current (or last) episode.
    pub fn active_config(&self) -> &SearchConfig {
        &self.active
    }

    /// Replace the pending configuration.
    ///
    /// The arena settings are only read at construction; changing them here
    /// has no effect on the existing pool.
    pub fn set_config(&mut self, config: SearchConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Select the heuristic for the next episode.
    pub fn set_heuristic(&mut self, heuristic: HeuristicKind) {
        self.config.heuristic = heuristic;
    }

    /// Set the heuristic weight for the next episode.
    pub fn set_weight(&mut self, weight: f32) -> Result<(), ConfigError> {
        validate_weight(weight)?;
        self.config.weight = weight;
        Ok(())
    }

    /// Enable or disable diagonal moves for the next episode.
    pub fn set_allow_diagonal(&mut self, allow_diagonal: bool) {
        self.config.allow_diagonal = allow_diagonal;
    }

    // ── Episode control ─────────────────────────────────────────

    /// Begin a new episode from `start` to `goal`.
    ///
    /// Always releases the previous episode's nodes first. If either
    /// endpoint is off the grid or blocked, the episode fails immediately
    /// without allocating any node.
    pub fn start_search(&mut self, start: Cell, goal: Cell) -> SearchState {
        self.clear_episode();
        self.active = self.config.clone();
        self.start = Some(start);
        self.goal = Some(goal);
        trace!(
            "search {start} -> {goal}: heuristic={} weight={} diagonal={}",
            self.active.heuristic,
            self.active.weight,
            self.active.allow_diagonal
        );

        if !self.grid.is_walkable(start) {
            self.fail(FailureReason::StartBlocked);
            return self.state;
        }
        if !self.grid.is_walkable(goal) {
            self.fail(FailureReason::GoalBlocked);
            return self.state;
        }

        let h = self.active.estimate(start, goal);
        self.create_node(SearchNode::new(start, 0.0, h, None));
        self.state = SearchState::Searching;
        self.state
    }

    /// Advance the search by one frontier pop.
    ///
    /// Does nothing (and returns [`StepOutcome::Idle`]) unless the engine is
    /// [`SearchState::Searching`].
    pub fn step(&mut self) -> StepOutcome {
        if self.state != SearchState::Searching {
            return StepOutcome::Idle;
        }
        self.stats.steps += 1;

        let Some(entry) = self.open.pop() else {
            self.fail(FailureReason::NoPath);
            return StepOutcome::Exhausted;
        };
        let current = entry.handle;
        let Some(node) = self.pool.get_mut(current) else {
            self.stats.stale_pops += 1;
            return StepOutcome::Skipped;
        };
        if node.closed {
            self.stats.stale_pops += 1;
            return StepOutcome::Skipped;
        }
        node.closed = true;
        let (cell, g) = (node.cell, node.g);
        self.closed.push(current);
        self.stats.expansions += 1;

        if Some(cell) == self.goal {
            self.finish(current, g);
            return StepOutcome::Finished;
        }

        let discovered = self.expand(current, cell, g);
        StepOutcome::Expanded { discovered }
    }

    /// Take up to `max_steps` steps, stopping early once the episode ends.
    pub fn step_many(&mut self, max_steps: usize) -> SearchState {
        for _ in 0..max_steps {
            if self.state != SearchState::Searching {
                break;
            }
            self.step();
        }
        self.state
    }

    /// Step until the episode ends or `budget` steps have been taken.
    ///
    /// `None` means no budget.
    pub fn run(&mut self, budget: Option<usize>) -> SearchState {
        match budget {
            Some(n) => self.step_many(n),
            None => {
                while self.state == SearchState::Searching {
                    self.step();
                }
                self.state
            }
        }
    }

    // ── Results ─────────────────────────────────────────────────

    /// Current episode state.
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Why the episode failed, when [`state()`](Self::state) is `Failed`.
    pub fn failure(&self) -> Option<FailureReason> {
        self.failure
    }

    /// Cells from start to goal inclusive. Empty unless `Finished`.
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    /// Sum of move costs along [`path()`](Self::path); 0 when there is none.
    pub fn path_cost(&self) -> f32 {
        self.path_cost
    }

    /// Start cell of the current or last episode.
    pub fn start(&self) -> Option<Cell> {
        self.start
    }

    /// Goal cell of the current or last episode.
    pub fn goal(&self) -> Option<Cell> {
        self.goal
    }

    /// Counters for the current or last episode.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Frontier entries, stale ones included.
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    /// Nodes closed so far.
    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }

    /// All live nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeSnapshot> + '_ {
        self.created.iter().filter_map(|&h| self.snapshot(h))
    }

    /// The live node for `cell`, if one has been discovered.
    pub fn node_at(&self, cell: Cell) -> Option<NodeSnapshot> {
        let handle = self.handle_at(cell)?;
        self.snapshot(handle)
    }

    /// Total slots in the node pool.
    pub fn pool_capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Slots currently holding a node.
    pub fn pool_in_use(&self) -> usize {
        self.pool.in_use()
    }

    /// Bytes reserved by the node pool.
    pub fn pool_memory_bytes(&self) -> usize {
        self.pool.memory_bytes()
    }

    /// Report the current picture to `sink` in painter's order: walls,
    /// closed nodes, open nodes, path, start, end.
    pub fn draw<S: DrawSink + ?Sized>(&self, sink: &mut S) {
        for cell in self.grid.blocked_cells() {
            sink.draw(cell, CellCategory::Wall);
        }
        for node in self.closed.iter().filter_map(|&h| self.pool.get(h)) {
            sink.draw(node.cell, CellCategory::Closed);
        }
        // A created node that is not closed is on the frontier exactly once.
        for node in self.created.iter().filter_map(|&h| self.pool.get(h)) {
            if !node.closed {
                sink.draw(node.cell, CellCategory::Open);
            }
        }
        for &cell in &self.path {
            sink.draw(cell, CellCategory::Path);
        }
        // Endpoints of a failed start may lie off the grid.
        if let Some(start) = self.start.filter(|&c| self.grid.in_bounds(c)) {
            sink.draw(start, CellCategory::Start);
        }
        if let Some(goal) = self.goal.filter(|&c| self.grid.in_bounds(c)) {
            sink.draw(goal, CellCategory::End);
        }
    }

    // ── Internals ───────────────────────────────────────────────

    fn expand(&mut self, current: SlotHandle, cell: Cell, g: f32) -> u8 {
        let Some(goal) = self.goal else {
            return 0;
        };
        let mut discovered = 0;
        for step in self.grid.walkable_moves(cell, self.active.allow_diagonal) {
            let tentative = g + step.cost;
            match self.handle_at(step.to) {
                None => {
                    let h = self.active.estimate(step.to, goal);
                    self.create_node(SearchNode::new(step.to, tentative, h, Some(current)));
                    discovered += 1;
                }
                Some(existing) => {
                    let Some(node) = self.pool.get_mut(existing) else {
                        continue;
                    };
                    if node.closed || tentative >= node.g {
                        continue;
                    }
                    node.relax(tentative, current);
                    let (f, h) = (node.f, node.h);
                    self.open.push(existing, f, h);
                    self.stats.reopened += 1;
                }
            }
        }
        discovered
    }

    fn create_node(&mut self, node: SearchNode) {
        let (cell, f, h) = (node.cell, node.f, node.h);
        let handle = self.pool.alloc(node);
        if let Some(slot) = self
            .grid
            .index_of(cell)
            .and_then(|i| self.node_index.get_mut(i))
        {
            *slot = Some(handle);
        }
        self.created.push(handle);
        self.open.push(handle, f, h);
        self.stats.nodes_created += 1;
    }

    fn handle_at(&self, cell: Cell) -> Option<SlotHandle> {
        let i = self.grid.index_of(cell)?;
        self.node_index.get(i).copied().flatten()
    }

    fn snapshot(&self, handle: SlotHandle) -> Option<NodeSnapshot> {
        let node = self.pool.get(handle)?;
        Some(NodeSnapshot {
            cell: node.cell,
            g: node.g,
            h: node.h,
            f: node.f,
            closed: node.closed,
            parent: node
                .parent
                .and_then(|p| self.pool.get(p))
                .map(|p| p.cell),
        })
    }

    fn finish(&mut self, goal: SlotHandle, cost: f32) {
        let mut cursor = Some(goal);
        while let Some(handle) = cursor {
            let Some(node) = self.pool.get(handle) else {
                break;
            };
            self.path.push(node.cell);
            cursor = node.parent;
        }
        self.path.reverse();
        self.path_cost = cost;
        self.state = SearchState::Finished;
        trace!("path rebuilt: {} cells", self.path.len());
        debug!(
            "search finished: {} cells, cost {:.3}, {} expansions, {} nodes",
            self.path.len(),
            cost,
            self.stats.expansions,
            self.stats.nodes_created
        );
    }

    fn fail(&mut self, reason: FailureReason) {
        self.state = SearchState::Failed;
        self.failure = Some(reason);
        debug!(
            "search failed: {reason} after {} expansions",
            self.stats.expansions
        );
    }

    /// Free every node and wipe per-episode bookkeeping.
    fn clear_episode(&mut self) {
        for handle in self.created.drain(..) {
            self.pool.free(handle);
        }
        self.open.clear();
        self.closed.clear();
        self.path.clear();
        self.path_cost = 0.0;
        self.failure = None;
        self.stats = SearchStats::default();
        self.node_index.clear();
        self.node_index.resize(self.grid.cell_count(), None);
    }
}
