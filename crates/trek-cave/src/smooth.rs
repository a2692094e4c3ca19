//! Cellular-automaton smoothing.
//!
//! Every cell looks at its 8 neighbours in the grid as it was before the
//! pass (off-grid neighbours count as blocked):
//!
//! - more than 4 blocked: the cell becomes blocked;
//! - fewer than 4 blocked: the cell becomes open;
//! - exactly 4: unchanged.

use log::debug;
use trek_grid::OccupancyGrid;

/// Neighbour count at which a cell keeps its current state.
const KEEP_THRESHOLD: u8 = 4;

/// Apply one smoothing pass. Returns how many cells changed.
pub fn smooth(grid: &mut OccupancyGrid) -> usize {
    let before = grid.clone();
    let mut changed = 0;
    for cell in before.cells() {
        let walls = before.blocked_neighbour_count(cell);
        let was_blocked = before.is_blocked(cell);
        let blocked = match walls {
            n if n > KEEP_THRESHOLD => true,
            n if n < KEEP_THRESHOLD => false,
            _ => was_blocked,
        };
        if blocked != was_blocked {
            grid.set_obstacle(cell, blocked);
            changed += 1;
        }
    }
    changed
}

/// Apply up to `passes` smoothing passes, stopping early once a pass
/// changes nothing. Returns the total number of cell changes.
pub fn smooth_n(grid: &mut OccupancyGrid, passes: u32) -> usize {
    let mut total = 0;
    for pass in 0..passes {
        let changed = smooth(grid);
        total += changed;
        if changed == 0 {
            debug!("smoothing converged after {pass} passes");
            break;
        }
    }
    debug!(
        "smoothed {}x{} grid: {total} changes, {} blocked",
        grid.width(),
        grid.height(),
        grid.blocked_count()
    );
    total
}
