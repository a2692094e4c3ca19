//! Cave-like map generation for Trek grids.
//!
//! Two stages, usable separately:
//!
//! 1. [`CaveGenerator::generate`] scatters walls: the border is always
//!    blocked and each interior cell is blocked with probability
//!    `fill_percent / 100`.
//! 2. [`smooth`] applies one cellular-automaton pass: cells with more than
//!    four blocked neighbours become blocked, fewer than four become open,
//!    exactly four stay as they are. A few passes turn noise into caverns.
//!
//! The generator owns a seeded `ChaCha8Rng`, so the same seed reproduces
//! the same sequence of maps.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod generator;
pub mod smooth;

pub use error::CaveError;
pub use generator::{CaveGenerator, CaveGeneratorBuilder};
pub use smooth::{smooth, smooth_n};
