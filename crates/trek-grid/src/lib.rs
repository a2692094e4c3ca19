//! Occupancy grid and movement rules for Trek.
//!
//! This crate defines the [`OccupancyGrid`], the single map representation
//! shared by the search engine and the cave generator, along with the
//! [`Cell`] coordinate type and the 8-connected [`MOVES`] table.
//!
//! # Conventions
//!
//! - Cells are addressed as `(x, y)` with `x` along the width and `y` along
//!   the height. Storage is row-major: `index = y * width + x`.
//! - `true` in the backing array means *blocked*.
//! - Coordinates are signed so callers can ask about cells off the map; such
//!   cells are never walkable, and edits to them are silently ignored.
//!
//! # Movement policy
//!
//! [`OccupancyGrid::walkable_moves`] applies the policy the search engine
//! relies on: axis-aligned moves cost 1.0, diagonal moves cost
//! [`DIAGONAL_COST`], and a diagonal move is rejected when either of the two
//! orthogonal cells forming its corner is blocked.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod grid;
pub mod moves;

pub use cell::Cell;
pub use error::GridError;
pub use grid::{OccupancyGrid, Step};
pub use moves::{Move, AXIAL_COST, AXIAL_MOVE_COUNT, DIAGONAL_COST, MOVES};
