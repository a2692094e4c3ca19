//! Visualization callback.
//!
//! The engine never draws anything itself. [`SearchEngine::draw`] walks its
//! state and reports each interesting cell to a [`DrawSink`] together with a
//! [`CellCategory`]. Calls arrive in painter's order: walls, closed nodes,
//! open nodes, path, start, end. A sink that keeps only the last category
//! per cell reproduces the intended picture.
//!
//! [`SearchEngine::draw`]: crate::SearchEngine::draw

use trek_grid::Cell;

/// What a drawn cell represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellCategory {
    /// Blocked cell.
    Wall,
    /// Discovered, not yet expanded.
    Open,
    /// Expanded.
    Closed,
    /// On the final path.
    Path,
    /// Episode start.
    Start,
    /// Episode goal.
    End,
}

/// Receiver of draw calls.
pub trait DrawSink {
    /// Paint `cell` as `category`.
    fn draw(&mut self, cell: Cell, category: CellCategory);
}

impl<F> DrawSink for F
where
    F: FnMut(Cell, CellCategory),
{
    fn draw(&mut self, cell: Cell, category: CellCategory) {
        self(cell, category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_sinks() {
        let mut seen = Vec::new();
        {
            let mut sink = |c: Cell, k: CellCategory| seen.push((c, k));
            sink.draw(Cell::new(1, 2), CellCategory::Path);
            sink.draw(Cell::new(0, 0), CellCategory::Wall);
        }
        assert_eq!(
            seen,
            vec![
                (Cell::new(1, 2), CellCategory::Path),
                (Cell::new(0, 0), CellCategory::Wall)
            ]
        );
    }
}
