//! The 8-connected move table (cardinal + diagonal).

/// Cost of a horizontal or vertical move.
pub const AXIAL_COST: f32 = 1.0;

/// Cost of a diagonal move: √2 truncated to a fixed constant so that path
/// costs are reproducible across platforms.
pub const DIAGONAL_COST: f32 = 1.414;

/// One unit move on the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Move {
    /// Column delta.
    pub dx: i32,
    /// Row delta.
    pub dy: i32,
    /// Cost charged for taking this move.
    pub cost: f32,
}

impl Move {
    const fn axial(dx: i32, dy: i32) -> Self {
        Self {
            dx,
            dy,
            cost: AXIAL_COST,
        }
    }

    const fn diagonal(dx: i32, dy: i32) -> Self {
        Self {
            dx,
            dy,
            cost: DIAGONAL_COST,
        }
    }

    /// Whether this move changes both coordinates.
    pub fn is_diagonal(&self) -> bool {
        self.dx != 0 && self.dy != 0
    }
}

/// All 8 moves: N, S, W, E, then NW, NE, SW, SE.
///
/// The four axis-aligned moves come first so that callers disabling diagonal
/// movement can simply take the first four. Expansion order follows this
/// table, which makes searches deterministic.
pub const MOVES: [Move; 8] = [
    Move::axial(0, -1),
    Move::axial(0, 1),
    Move::axial(-1, 0),
    Move::axial(1, 0),
    Move::diagonal(-1, -1),
    Move::diagonal(1, -1),
    Move::diagonal(-1, 1),
    Move::diagonal(1, 1),
];

/// Number of axis-aligned entries at the front of [`MOVES`].
pub const AXIAL_MOVE_COUNT: usize = 4;
