//! The [`OccupancyGrid`]: a row-major bitmap of blocked cells.

use crate::cell::Cell;
use crate::error::GridError;
use crate::moves::{AXIAL_MOVE_COUNT, MOVES};
use smallvec::SmallVec;

/// A single legal move out of a cell, as produced by
/// [`OccupancyGrid::walkable_moves`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    /// Destination cell.
    pub to: Cell,
    /// Cost of the move.
    pub cost: f32,
    /// Whether the move is diagonal.
    pub diagonal: bool,
}

/// A `width × height` grid of walkable / blocked cells.
///
/// Cells outside the grid behave as permanently blocked: queries report them
/// as not walkable and edits to them are ignored. Every cell starts walkable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    width: u32,
    height: u32,
    blocked: Vec<bool>,
}

impl OccupancyGrid {
    /// Maximum dimension size: coordinates must fit in `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a fully walkable grid.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        for (name, value) in [("width", width), ("height", height)] {
            if value > Self::MAX_DIM {
                return Err(GridError::DimensionTooLarge {
                    name,
                    value,
                    max: Self::MAX_DIM,
                });
            }
        }
        Ok(Self {
            width,
            height,
            blocked: vec![false; width as usize * height as usize],
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.blocked.len()
    }

    /// Whether `cell` lies on the grid.
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.width && (cell.y as u32) < self.height
    }

    /// Row-major index of `cell`, or `None` if it is off the grid.
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        if self.in_bounds(cell) {
            Some(cell.y as usize * self.width as usize + cell.x as usize)
        } else {
            None
        }
    }

    /// Inverse of [`index_of`](Self::index_of).
    pub fn cell_of(&self, index: usize) -> Option<Cell> {
        if index >= self.blocked.len() {
            return None;
        }
        let w = self.width as usize;
        Some(Cell::new((index % w) as i32, (index / w) as i32))
    }

    /// Mark `cell` blocked (`true`) or walkable (`false`).
    ///
    /// Out-of-range cells are ignored.
    pub fn set_obstacle(&mut self, cell: Cell, blocked: bool) {
        if let Some(i) = self.index_of(cell) {
            self.blocked[i] = blocked;
        }
    }

    /// Make every cell walkable.
    pub fn clear_obstacles(&mut self) {
        self.fill(false);
    }

    /// Set every cell to the same state.
    pub fn fill(&mut self, blocked: bool) {
        self.blocked.fill(blocked);
    }

    /// Block every cell on the outermost ring.
    pub fn block_border(&mut self) {
        let (w, h) = (self.width as i32, self.height as i32);
        for x in 0..w {
            self.set_obstacle(Cell::new(x, 0), true);
            self.set_obstacle(Cell::new(x, h - 1), true);
        }
        for y in 0..h {
            self.set_obstacle(Cell::new(0, y), true);
            self.set_obstacle(Cell::new(w - 1, y), true);
        }
    }

    /// Whether `cell` is on the grid and not blocked.
    pub fn is_walkable(&self, cell: Cell) -> bool {
        self.index_of(cell).is_some_and(|i| !self.blocked[i])
    }

    /// Whether `cell` is blocked. Off-grid cells count as blocked.
    pub fn is_blocked(&self, cell: Cell) -> bool {
        !self.is_walkable(cell)
    }

    /// Whether `cell` lies on the outermost ring of the grid.
    pub fn is_border(&self, cell: Cell) -> bool {
        self.in_bounds(cell)
            && (cell.x == 0
                || cell.y == 0
                || cell.x as u32 == self.width - 1
                || cell.y as u32 == self.height - 1)
    }

    /// Number of blocked cells on the grid.
    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// Raw row-major blocked flags.
    pub fn as_slice(&self) -> &[bool] {
        &self.blocked
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.blocked.len()).filter_map(move |i| self.cell_of(i))
    }

    /// All blocked cells in row-major order.
    pub fn blocked_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.blocked
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b)
            .filter_map(move |(i, _)| self.cell_of(i))
    }

    /// The legal moves out of `cell`, in [`MOVES`] order.
    ///
    /// A move is legal when its destination is walkable. A diagonal move is
    /// additionally rejected when either orthogonal cell of the corner it
    /// cuts is blocked (no corner cutting). With `allow_diagonal == false`
    /// only the four axis-aligned moves are considered.
    pub fn walkable_moves(&self, cell: Cell, allow_diagonal: bool) -> SmallVec<[Step; 8]> {
        let table = if allow_diagonal {
            &MOVES[..]
        } else {
            &MOVES[..AXIAL_MOVE_COUNT]
        };
        let mut out = SmallVec::new();
        for m in table {
            let to = cell.offset(m.dx, m.dy);
            if !self.is_walkable(to) {
                continue;
            }
            let diagonal = m.is_diagonal();
            if diagonal
                && (self.is_blocked(cell.offset(m.dx, 0)) || self.is_blocked(cell.offset(0, m.dy)))
            {
                continue;
            }
            out.push(Step {
                to,
                cost: m.cost,
                diagonal,
            });
        }
        out
    }

    /// Number of blocked cells among the 8 surrounding `cell`.
    ///
    /// Off-grid neighbours count as blocked, so a corner cell always sees at
    /// least 5.
    pub fn blocked_neighbour_count(&self, cell: Cell) -> u8 {
        MOVES
            .iter()
            .filter(|m| self.is_blocked(cell.offset(m.dx, m.dy)))
            .count() as u8
    }
}
