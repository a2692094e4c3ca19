//! Seeded random wall scattering.
//!
//! Constructed via the builder pattern: [`CaveGenerator::builder`].

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use trek_grid::OccupancyGrid;

use crate::error::CaveError;
use crate::smooth::smooth_n;

/// Deterministic cave map generator.
///
/// Each call to [`generate`](Self::generate) draws from the same RNG
/// stream, so a generator built with a given seed always produces the same
/// sequence of maps for the same sequence of calls.
#[derive(Debug, Clone)]
pub struct CaveGenerator {
    rng: ChaCha8Rng,
    seed: u64,
    fill_percent: u32,
    smooth_passes: u32,
}

/// Builder for [`CaveGenerator`].
#[derive(Debug, Clone)]
pub struct CaveGeneratorBuilder {
    seed: u64,
    fill_percent: u32,
    smooth_passes: u32,
}

impl CaveGenerator {
    /// Default wall probability for [`carve`](Self::carve), in percent.
    pub const DEFAULT_FILL_PERCENT: u32 = 45;

    /// Default number of smoothing passes for [`carve`](Self::carve).
    pub const DEFAULT_SMOOTH_PASSES: u32 = 4;

    /// Create a new builder.
    pub fn builder() -> CaveGeneratorBuilder {
        CaveGeneratorBuilder {
            seed: 0,
            fill_percent: Self::DEFAULT_FILL_PERCENT,
            smooth_passes: Self::DEFAULT_SMOOTH_PASSES,
        }
    }

    /// Seed the generator was built (or last reseeded) with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Wall probability used by [`carve`](Self::carve).
    pub fn fill_percent(&self) -> u32 {
        self.fill_percent
    }

    /// Smoothing passes used by [`carve`](Self::carve).
    pub fn smooth_passes(&self) -> u32 {
        self.smooth_passes
    }

    /// Restart the RNG stream from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Overwrite `grid` with random walls.
    ///
    /// Border cells are always blocked; each interior cell is blocked when a
    /// uniform draw from `0..100` is below `fill_percent`. Returns the number
    /// of blocked cells.
    ///
    /// # Errors
    ///
    /// [`CaveError::FillPercentOutOfRange`] if `fill_percent > 100`. The grid
    /// is left untouched.
    pub fn generate(
        &mut self,
        grid: &mut OccupancyGrid,
        fill_percent: u32,
    ) -> Result<usize, CaveError> {
        validate_fill(fill_percent)?;
        grid.clear_obstacles();
        for i in 0..grid.cell_count() {
            let Some(cell) = grid.cell_of(i) else {
                continue;
            };
            let blocked = grid.is_border(cell) || self.rng.random_range(0..100) < fill_percent;
            grid.set_obstacle(cell, blocked);
        }
        let blocked = grid.blocked_count();
        debug!(
            "generated {}x{} map: fill {fill_percent}%, {blocked} blocked",
            grid.width(),
            grid.height()
        );
        Ok(blocked)
    }

    /// [`generate`](Self::generate) with the configured fill, then smooth
    /// with the configured number of passes. Returns the blocked count.
    pub fn carve(&mut self, grid: &mut OccupancyGrid) -> Result<usize, CaveError> {
        self.generate(grid, self.fill_percent)?;
        smooth_n(grid, self.smooth_passes);
        Ok(grid.blocked_count())
    }
}

impl Default for CaveGenerator {
    fn default() -> Self {
        let b = Self::builder();
        CaveGenerator {
            rng: ChaCha8Rng::seed_from_u64(b.seed),
            seed: b.seed,
            fill_percent: b.fill_percent,
            smooth_passes: b.smooth_passes,
        }
    }
}

impl CaveGeneratorBuilder {
    /// RNG seed (default: 0).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Wall probability for [`CaveGenerator::carve`], in percent
    /// (default: 45). Must be at most 100.
    pub fn fill_percent(mut self, fill_percent: u32) -> Self {
        self.fill_percent = fill_percent;
        self
    }

    /// Smoothing passes for [`CaveGenerator::carve`] (default: 4).
    pub fn smooth_passes(mut self, passes: u32) -> Self {
        self.smooth_passes = passes;
        self
    }

    /// Build the generator.
    ///
    /// # Errors
    ///
    /// [`CaveError::FillPercentOutOfRange`] if the fill exceeds 100.
    pub fn build(self) -> Result<CaveGenerator, CaveError> {
        validate_fill(self.fill_percent)?;
        Ok(CaveGenerator {
            rng: ChaCha8Rng::seed_from_u64(self.seed),
            seed: self.seed,
            fill_percent: self.fill_percent,
            smooth_passes: self.smooth_passes,
        })
    }
}

fn validate_fill(fill_percent: u32) -> Result<(), CaveError> {
    if fill_percent > 100 {
        return Err(CaveError::FillPercentOutOfRange {
            value: fill_percent,
        });
    }
    Ok(())
}
