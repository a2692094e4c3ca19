//! The [`Pathfinder`] application-state object.
//!
//! One value owns everything an interactive pathfinding demo needs: the grid,
//! the search engine with its node pool, and a seeded cave generator. Create
//! as many as needed; they share nothing.

use log::debug;
use trek_cave::{smooth, CaveError, CaveGenerator};
use trek_grid::Cell;
use trek_search::{
    ConfigError, DrawSink, HeuristicKind, NodeSnapshot, SearchConfig, SearchEngine, SearchState,
    StepOutcome,
};

/// Grid, search engine and map generator in one place.
///
/// Methods that mirror [`SearchEngine`] delegate to it; anything not exposed
/// here is reachable through [`engine()`](Self::engine) and
/// [`engine_mut()`](Self::engine_mut).
#[derive(Debug)]
pub struct Pathfinder {
    engine: SearchEngine,
    cave: CaveGenerator,
}

impl Pathfinder {
    /// A walkable `width × height` grid with default search settings
    /// (Manhattan, weight 1.0, diagonals on) and generator seed 0.
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        Self::with_config(width, height, SearchConfig::default(), 0)
    }

    /// Like [`new`](Self::new) with explicit search settings and generator
    /// seed.
    pub fn with_config(
        width: u32,
        height: u32,
        config: SearchConfig,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let engine = SearchEngine::new(width, height, config)?;
        let mut cave = CaveGenerator::default();
        cave.reseed(seed);
        Ok(Self { engine, cave })
    }

    /// Replace the grid with a fresh walkable one and drop any search.
    ///
    /// Search settings and the generator stream are kept.
    pub fn initialize(&mut self, width: u32, height: u32) -> Result<(), ConfigError> {
        self.engine.initialize(width, height)?;
        debug!("pathfinder reinitialized to {width}x{height}");
        Ok(())
    }

    // ── Grid ────────────────────────────────────────────────────

    /// Block or unblock `cell`. Off-grid cells are ignored.
    pub fn set_obstacle(&mut self, cell: Cell, blocked: bool) {
        self.engine.set_obstacle(cell, blocked);
    }

    /// Make every cell walkable.
    pub fn clear_obstacles(&mut self) {
        self.engine.clear_obstacles();
    }

    /// Whether `cell` is on the grid and not blocked.
    pub fn is_walkable(&self, cell: Cell) -> bool {
        self.engine.is_walkable(cell)
    }

    /// Fill the grid with random walls (border always blocked) and return to
    /// [`SearchState::Ready`]. Returns the number of blocked cells.
    ///
    /// On error neither the grid nor the search is touched.
    pub fn generate_random_map(&mut self, fill_percent: u32) -> Result<usize, CaveError> {
        let cave = &mut self.cave;
        let blocked = self
            .engine
            .edit_grid(|grid| cave.generate(grid, fill_percent))?;
        self.engine.reset();
        Ok(blocked)
    }

    /// One cellular-automaton smoothing pass. Returns the cells changed.
    ///
    /// Any search in progress continues against the edited grid.
    pub fn smooth(&mut self) -> usize {
        self.engine.edit_grid(smooth)
    }

    // ── Search ──────────────────────────────────────────────────

    /// See [`SearchEngine::start_search`].
    pub fn start_search(&mut self, start: Cell, goal: Cell) -> SearchState {
        self.engine.start_search(start, goal)
    }

    /// See [`SearchEngine::step`].
    pub fn step(&mut self) -> StepOutcome {
        self.engine.step()
    }

    /// See [`SearchEngine::step_many`].
    pub fn step_many(&mut self, max_steps: usize) -> SearchState {
        self.engine.step_many(max_steps)
    }

    /// See [`SearchEngine::run`].
    pub fn run(&mut self, budget: Option<usize>) -> SearchState {
        self.engine.run(budget)
    }

    /// Current episode state.
    pub fn state(&self) -> SearchState {
        self.engine.state()
    }

    /// Start-to-goal cells; empty unless finished.
    pub fn path(&self) -> &[Cell] {
        self.engine.path()
    }

    /// Live nodes of the current episode in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeSnapshot> + '_ {
        self.engine.nodes()
    }

    /// See [`SearchEngine::draw`].
    pub fn draw<S: DrawSink + ?Sized>(&self, sink: &mut S) {
        self.engine.draw(sink);
    }

    // ── Settings ────────────────────────────────────────────────

    /// Heuristic for the next search.
    pub fn set_heuristic(&mut self, heuristic: HeuristicKind) {
        self.engine.set_heuristic(heuristic);
    }

    /// Heuristic weight for the next search; must be finite and `>= 0`.
    pub fn set_weight(&mut self, weight: f32) -> Result<(), ConfigError> {
        self.engine.set_weight(weight)
    }

    /// Diagonal moves on or off for the next search.
    pub fn set_allow_diagonal(&mut self, allow_diagonal: bool) {
        self.engine.set_allow_diagonal(allow_diagonal);
    }

    /// Heuristic the next search will use.
    pub fn heuristic(&self) -> HeuristicKind {
        self.engine.config().heuristic
    }

    /// Weight the next search will use.
    pub fn weight(&self) -> f32 {
        self.engine.config().weight
    }

    /// Whether the next search allows diagonal moves.
    pub fn allow_diagonal(&self) -> bool {
        self.engine.config().allow_diagonal
    }

    // ── Escape hatches ──────────────────────────────────────────

    /// The underlying engine.
    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    /// The underlying engine, mutably.
    pub fn engine_mut(&mut self) -> &mut SearchEngine {
        &mut self.engine
    }

    /// The map generator.
    pub fn generator_mut(&mut self) -> &mut CaveGenerator {
        &mut self.cave
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Cell {
        Cell::new(x, y)
    }

    #[test]
    fn defaults() {
        let pf = Pathfinder::new(10, 10).unwrap();
        assert_eq!(pf.heuristic(), HeuristicKind::Manhattan);
        assert_eq!(pf.weight(), 1.0);
        assert!(pf.allow_diagonal());
        assert_eq!(pf.state(), SearchState::Ready);
    }

    #[test]
    fn new_rejects_empty_grid() {
        assert!(matches!(
            Pathfinder::new(0, 10),
            Err(ConfigError::Grid(_))
        ));
    }

    #[test]
    fn generate_resets_search() {
        let mut pf = Pathfinder::new(20, 20).unwrap();
        pf.start_search(c(1, 1), c(18, 18));
        pf.step_many(3);
        assert_eq!(pf.state(), SearchState::Searching);
        pf.generate_random_map(30).unwrap();
        assert_eq!(pf.state(), SearchState::Ready);
        assert_eq!(pf.nodes().count(), 0);
        assert!(pf.path().is_empty());
    }

    #[test]
    fn generate_error_keeps_search() {
        let mut pf = Pathfinder::new(20, 20).unwrap();
        pf.start_search(c(1, 1), c(18, 18));
        pf.step();
        assert!(pf.generate_random_map(101).is_err());
        assert_eq!(pf.state(), SearchState::Searching);
        assert_eq!(pf.engine().grid().blocked_count(), 0);
    }

    #[test]
    fn seed_controls_maps() {
        let mut a = Pathfinder::with_config(30, 30, SearchConfig::default(), 5).unwrap();
        let mut b = Pathfinder::with_config(30, 30, SearchConfig::default(), 5).unwrap();
        a.generate_random_map(47).unwrap();
        b.generate_random_map(47).unwrap();
        assert_eq!(a.engine().grid(), b.engine().grid());
    }

    #[test]
    fn settings_take_effect_on_next_search() {
        let mut pf = Pathfinder::new(5, 5).unwrap();
        pf.generate_random_map(0).unwrap();
        pf.set_heuristic(HeuristicKind::Euclidean);
        pf.set_allow_diagonal(false);
        assert!(pf.set_weight(-1.0).is_err());
        pf.start_search(c(1, 1), c(3, 3));
        assert_eq!(pf.run(None), SearchState::Finished);
        assert_eq!(pf.path().len(), 5);
    }

    #[test]
    fn initialize_resizes() {
        let mut pf = Pathfinder::new(5, 5).unwrap();
        pf.set_obstacle(c(2, 2), true);
        pf.initialize(12, 7).unwrap();
        assert_eq!(pf.engine().grid().width(), 12);
        assert!(pf.is_walkable(c(2, 2)));
        assert!(pf.initialize(3, 0).is_err());
    }

    #[test]
    fn smooth_counts_changes() {
        let mut pf = Pathfinder::new(6, 6).unwrap();
        pf.set_obstacle(c(3, 3), true);
        assert!(pf.smooth() >= 1);
        assert!(pf.is_walkable(c(3, 3)));
        pf.clear_obstacles();
        assert_eq!(pf.engine().grid().blocked_count(), 0);
    }
}
