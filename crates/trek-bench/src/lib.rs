//! Benchmark maps for the Trek pathfinding crates.
//!
//! - [`open_field`]: bordered empty grid, corner to corner
//! - [`cave_maze`]: seeded, smoothed cave with a guaranteed corridor
//!   between the two corners

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use trek_cave::CaveGenerator;
use trek_grid::{Cell, OccupancyGrid};

/// A grid with the endpoints a benchmark should search between.
#[derive(Clone, Debug)]
pub struct BenchMap {
    /// The map.
    pub grid: OccupancyGrid,
    /// Top-left interior corner.
    pub start: Cell,
    /// Bottom-right interior corner.
    pub goal: Cell,
}

fn corners(width: u32, height: u32) -> (Cell, Cell) {
    let goal = Cell::new(width as i32 - 2, height as i32 - 2);
    (Cell::new(1, 1), goal)
}

/// Bordered, otherwise empty `width × height` grid.
///
/// # Panics
///
/// If either dimension is below 3.
pub fn open_field(width: u32, height: u32) -> BenchMap {
    assert!(width >= 3 && height >= 3, "bench maps need an interior");
    let mut grid = OccupancyGrid::new(width, height).unwrap();
    grid.block_border();
    let (start, goal) = corners(width, height);
    BenchMap { grid, start, goal }
}

/// Cave map carved with the default fill and smoothing from `seed`.
///
/// Row 1 and column `width - 2` are reopened afterwards so the goal is
/// always reachable.
///
/// # Panics
///
/// If either dimension is below 3.
pub fn cave_maze(width: u32, height: u32, seed: u64) -> BenchMap {
    assert!(width >= 3 && height >= 3, "bench maps need an interior");
    let mut grid = OccupancyGrid::new(width, height).unwrap();
    let mut cave = CaveGenerator::builder().seed(seed).build().unwrap();
    cave.carve(&mut grid).unwrap();

    let (start, goal) = corners(width, height);
    for x in start.x..=goal.x {
        grid.set_obstacle(Cell::new(x, start.y), false);
    }
    for y in start.y..=goal.y {
        grid.set_obstacle(Cell::new(goal.x, y), false);
    }
    BenchMap { grid, start, goal }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trek_search::{SearchConfig, SearchEngine, SearchState};

    fn solve(map: BenchMap) -> SearchState {
        let (start, goal) = (map.start, map.goal);
        let mut engine = SearchEngine::with_grid(map.grid, SearchConfig::default()).unwrap();
        engine.start_search(start, goal);
        engine.run(None)
    }

    #[test]
    fn open_field_is_solvable() {
        assert_eq!(solve(open_field(64, 48)), SearchState::Finished);
    }

    #[test]
    fn cave_maze_is_solvable() {
        for seed in 0..4 {
            assert_eq!(solve(cave_maze(80, 60, seed)), SearchState::Finished);
        }
    }

    #[test]
    fn cave_maze_is_deterministic() {
        assert_eq!(cave_maze(50, 40, 42).grid, cave_maze(50, 40, 42).grid);
    }
}
