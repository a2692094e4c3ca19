//! Test utilities for Trek development.
//!
//! Provides a [`RecordingSink`] that captures draw calls, path validators
//! ([`assert_valid_path`], [`path_cost`]), an exhaustive [`optimal_cost`]
//! reference and ASCII map fixtures (see [`fixtures`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashMap;

use trek_grid::{Cell, OccupancyGrid, AXIAL_COST, DIAGONAL_COST};
use trek_search::{CellCategory, DrawSink};

pub mod fixtures;

pub use fixtures::{parse_map, AsciiMap};

/// [`DrawSink`] that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<(Cell, CellCategory)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells drawn with `category`, in call order.
    pub fn cells(&self, category: CellCategory) -> Vec<Cell> {
        self.calls
            .iter()
            .filter(|(_, k)| *k == category)
            .map(|(c, _)| *c)
            .collect()
    }

    /// Final category per cell after painter's-order overwrites.
    pub fn canvas(&self) -> HashMap<Cell, CellCategory> {
        self.calls.iter().copied().collect()
    }
}

impl DrawSink for RecordingSink {
    fn draw(&mut self, cell: Cell, category: CellCategory) {
        self.calls.push((cell, category));
    }
}

/// Grid of the given size with every border cell blocked.
pub fn bordered_grid(width: u32, height: u32) -> OccupancyGrid {
    let mut grid = OccupancyGrid::new(width, height).unwrap();
    grid.block_border();
    grid
}

/// Sum of move costs along `path`.
pub fn path_cost(path: &[Cell]) -> f32 {
    path.windows(2)
        .map(|w| {
            if w[0].is_diagonal_to(w[1]) {
                DIAGONAL_COST
            } else {
                AXIAL_COST
            }
        })
        .sum()
}

/// Panics unless `path` runs from `start` to `goal` through walkable,
/// 8-adjacent cells without cutting corners. With `allow_diagonal == false`
/// every move must be axis-aligned.
pub fn assert_valid_path(
    grid: &OccupancyGrid,
    path: &[Cell],
    start: Cell,
    goal: Cell,
    allow_diagonal: bool,
) {
    assert_eq!(path.first(), Some(&start), "path must begin at start");
    assert_eq!(path.last(), Some(&goal), "path must end at goal");
    for &cell in path {
        assert!(grid.is_walkable(cell), "path crosses blocked cell {cell}");
    }
    for w in path.windows(2) {
        let (a, b) = (w[0], w[1]);
        assert!(a.is_adjacent(b), "{a} -> {b} is not a unit move");
        if a.is_diagonal_to(b) {
            assert!(allow_diagonal, "diagonal move {a} -> {b} while disabled");
            assert!(
                grid.is_walkable(Cell::new(b.x, a.y)) && grid.is_walkable(Cell::new(a.x, b.y)),
                "{a} -> {b} cuts a blocked corner"
            );
        }
    }
}

/// Cheapest start-to-goal cost by exhaustive Dijkstra, or `None` when
/// either endpoint is blocked or the goal is unreachable.
///
/// Applies the movement rules on its own: unit axial moves, diagonal moves
/// only when allowed and when neither orthogonal corner is blocked.
pub fn optimal_cost(
    grid: &OccupancyGrid,
    start: Cell,
    goal: Cell,
    allow_diagonal: bool,
) -> Option<f32> {
    if !grid.is_walkable(start) || !grid.is_walkable(goal) {
        return None;
    }
    let n = grid.cell_count();
    let mut dist = vec![f32::INFINITY; n];
    let mut done = vec![false; n];
    dist[grid.index_of(start)?] = 0.0;

    loop {
        let i = (0..n)
            .filter(|&i| !done[i] && dist[i].is_finite())
            .min_by(|&a, &b| dist[a].total_cmp(&dist[b]))?;
        let cell = grid.cell_of(i)?;
        if cell == goal {
            return Some(dist[i]);
        }
        done[i] = true;
        for dy in -1..=1 {
            for dx in -1..=1 {
                let diagonal = dx != 0 && dy != 0;
                if (dx == 0 && dy == 0) || (diagonal && !allow_diagonal) {
                    continue;
                }
                let to = Cell::new(cell.x + dx, cell.y + dy);
                if !grid.is_walkable(to) {
                    continue;
                }
                if diagonal
                    && !(grid.is_walkable(Cell::new(to.x, cell.y))
                        && grid.is_walkable(Cell::new(cell.x, to.y)))
                {
                    continue;
                }
                let cost = if diagonal { DIAGONAL_COST } else { AXIAL_COST };
                let j = grid.index_of(to)?;
                dist[j] = dist[j].min(dist[i] + cost);
            }
        }
    }
}
