//! Trek: incremental, step-wise A* pathfinding on 2D occupancy grids.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Trek sub-crates and adds [`Pathfinder`], a single application-state object
//! that bundles a search engine with a cave generator.
//!
//! # Quick start
//!
//! ```rust
//! use trek::prelude::*;
//!
//! let mut pf = Pathfinder::new(32, 24).unwrap();
//! pf.generate_random_map(0).unwrap(); // border only
//! pf.set_obstacle(Cell::new(10, 5), true);
//!
//! pf.start_search(Cell::new(1, 1), Cell::new(30, 22));
//! while pf.state() == SearchState::Searching {
//!     pf.step_many(3);
//! }
//! assert_eq!(pf.state(), SearchState::Finished);
//! assert_eq!(pf.path().first(), Some(&Cell::new(1, 1)));
//!
//! let mut walls = 0;
//! pf.draw(&mut |_: Cell, category: CellCategory| {
//!     if category == CellCategory::Wall {
//!         walls += 1;
//!     }
//! });
//! assert_eq!(walls, 2 * 32 + 2 * 22 + 1);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `trek-arena` | Fixed-block node pool with generational handles |
//! | [`grid`] | `trek-grid` | Occupancy grid, cells, move table |
//! | [`search`] | `trek-search` | A* engine, open set, draw sink |
//! | [`cave`] | `trek-cave` | Seeded cave generator and smoother |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod pathfinder;

pub use pathfinder::Pathfinder;

/// Fixed-block node pool (`trek-arena`).
pub use trek_arena as arena;

/// Occupancy grid and movement rules (`trek-grid`).
///
/// [`grid::OccupancyGrid`] is shared by the search engine and the cave
/// generator.
pub use trek_grid as grid;

/// Incremental A* engine (`trek-search`).
///
/// [`search::SearchEngine`] is the full-featured engine that
/// [`Pathfinder`] wraps.
pub use trek_search as search;

/// Cave generation and smoothing (`trek-cave`).
pub use trek_cave as cave;

/// Common imports for typical Trek usage.
///
/// ```rust
/// use trek::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Pathfinder;

    // Grid
    pub use trek_grid::{Cell, OccupancyGrid};

    // Search
    pub use trek_search::{
        CellCategory, DrawSink, FailureReason, HeuristicKind, NodeSnapshot, SearchConfig,
        SearchEngine, SearchState, SearchStats, StepOutcome,
    };

    // Generation
    pub use trek_cave::CaveGenerator;

    // Errors
    pub use trek_arena::ArenaError;
    pub use trek_cave::CaveError;
    pub use trek_grid::GridError;
    pub use trek_search::ConfigError;
}
