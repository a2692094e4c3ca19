//! The [`Cell`] coordinate type.

use std::fmt;

/// A grid coordinate.
///
/// Signed so that neighbours of edge cells (and arbitrary caller input) can
/// be expressed without wrapping; whether a cell lies on a particular grid is
/// answered by [`OccupancyGrid::in_bounds`](crate::OccupancyGrid::in_bounds).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column, increasing to the right.
    pub x: i32,
    /// Row, increasing downwards.
    pub y: i32,
}

impl Cell {
    /// Create a cell at `(x, y)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell displaced by `(dx, dy)`, saturating at the `i32` limits.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Absolute per-axis distance to `other`.
    pub fn delta(self, other: Cell) -> (u32, u32) {
        (self.x.abs_diff(other.x), self.y.abs_diff(other.y))
    }

    /// Whether `other` is one of the 8 cells surrounding `self`.
    pub fn is_adjacent(self, other: Cell) -> bool {
        let (dx, dy) = self.delta(other);
        dx <= 1 && dy <= 1 && (dx, dy) != (0, 0)
    }

    /// Whether moving from `self` to `other` changes both coordinates.
    pub fn is_diagonal_to(self, other: Cell) -> bool {
        self.x != other.x && self.y != other.y
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
