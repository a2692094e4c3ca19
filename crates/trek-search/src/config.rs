//! Search configuration, validation, and error types.
//!
//! [`SearchConfig`] is the tunable input to a [`SearchEngine`](crate::SearchEngine).
//! The engine keeps a pending copy that setters mutate freely and captures
//! it at each `start_search`, so changes take effect on the next episode.

use std::error::Error;
use std::fmt;

use trek_arena::{ArenaConfig, ArenaError};
use trek_grid::{Cell, GridError};

// ── HeuristicKind ──────────────────────────────────────────────────

/// Distance estimate used for the `h` term.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HeuristicKind {
    /// `|dx| + |dy|`.
    #[default]
    Manhattan,
    /// `sqrt(dx² + dy²)`.
    Euclidean,
}

impl HeuristicKind {
    /// Unweighted distance from `from` to `to`.
    pub fn distance(self, from: Cell, to: Cell) -> f32 {
        let (dx, dy) = from.delta(to);
        let (dx, dy) = (dx as f32, dy as f32);
        match self {
            Self::Manhattan => dx + dy,
            Self::Euclidean => (dx * dx + dy * dy).sqrt(),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manhattan => write!(f, "manhattan"),
            Self::Euclidean => write!(f, "euclidean"),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while constructing or reconfiguring a search engine.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Heuristic weight is negative, NaN, or infinite.
    InvalidWeight {
        /// The rejected value.
        value: f32,
    },
    /// Arena configuration is invalid.
    Arena(ArenaError),
    /// Grid dimensions are invalid.
    Grid(GridError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWeight { value } => {
                write!(f, "heuristic weight must be finite and >= 0, got {value}")
            }
            Self::Arena(e) => write!(f, "arena: {e}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arena(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::InvalidWeight { .. } => None,
        }
    }
}

impl From<ArenaError> for ConfigError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── SearchConfig ───────────────────────────────────────────────────

/// Tunables for a search episode.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchConfig {
    /// Distance estimate. Default: [`HeuristicKind::Manhattan`].
    pub heuristic: HeuristicKind,
    /// Multiplier applied to the heuristic. Default: 1.0.
    ///
    /// 0 degrades to uniform-cost search (always optimal); values above 1
    /// trade optimality for fewer expansions.
    pub weight: f32,
    /// Whether diagonal moves are considered. Default: `true`.
    pub allow_diagonal: bool,
    /// Node pool sizing.
    pub arena: ArenaConfig,
}

impl SearchConfig {
    /// Default heuristic weight.
    pub const DEFAULT_WEIGHT: f32 = 1.0;

    /// Default configuration.
    pub fn new() -> Self {
        Self {
            heuristic: HeuristicKind::default(),
            weight: Self::DEFAULT_WEIGHT,
            allow_diagonal: true,
            arena: ArenaConfig::default(),
        }
    }

    /// Set the heuristic kind.
    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Set the heuristic weight.
    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    /// Enable or disable diagonal moves.
    pub fn with_diagonal(mut self, allow_diagonal: bool) -> Self {
        self.allow_diagonal = allow_diagonal;
        self
    }

    /// Set the node pool configuration.
    pub fn with_arena(mut self, arena: ArenaConfig) -> Self {
        self.arena = arena;
        self
    }

    /// Check all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_weight(self.weight)?;
        self.arena.validate()?;
        Ok(())
    }

    /// Weighted heuristic estimate from `from` to `to`.
    pub fn estimate(&self, from: Cell, to: Cell) -> f32 {
        self.heuristic.distance(from, to) * self.weight
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn validate_weight(weight: f32) -> Result<(), ConfigError> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(ConfigError::InvalidWeight { value: weight });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.heuristic, HeuristicKind::Manhattan);
        assert_eq!(cfg.weight, 1.0);
        assert!(cfg.allow_diagonal);
        assert_eq!(cfg.arena, ArenaConfig::default());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_weight_is_valid() {
        assert!(SearchConfig::new().with_weight(0.0).validate().is_ok());
    }

    #[test]
    fn negative_weight_rejected() {
        match SearchConfig::new().with_weight(-0.5).validate() {
            Err(ConfigError::InvalidWeight { value }) => assert_eq!(value, -0.5),
            other => panic!("expected InvalidWeight, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_weight_rejected() {
        for w in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert!(matches!(
                SearchConfig::new().with_weight(w).validate(),
                Err(ConfigError::InvalidWeight { .. })
            ));
        }
    }

    #[test]
    fn invalid_arena_surfaces_as_arena_error() {
        let cfg = SearchConfig::new().with_arena(ArenaConfig::new(0));
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Arena(ArenaError::InvalidConfig { .. })));
        assert!(err.source().is_some());
    }

    #[test]
    fn manhattan_and_euclidean_distances() {
        let a = Cell::new(1, 1);
        let b = Cell::new(4, 5);
        assert_eq!(HeuristicKind::Manhattan.distance(a, b), 7.0);
        assert_eq!(HeuristicKind::Euclidean.distance(a, b), 5.0);
        assert_eq!(HeuristicKind::Euclidean.distance(b, b), 0.0);
    }

    #[test]
    fn estimate_applies_weight() {
        let cfg = SearchConfig::new().with_weight(2.5);
        assert_eq!(cfg.estimate(Cell::new(0, 0), Cell::new(2, 0)), 5.0);
        let zero = SearchConfig::new().with_weight(0.0);
        assert_eq!(zero.estimate(Cell::new(0, 0), Cell::new(9, 9)), 0.0);
    }

    #[test]
    fn display_messages() {
        assert_eq!(HeuristicKind::Euclidean.to_string(), "euclidean");
        let e = ConfigError::InvalidWeight { value: -1.0 };
        assert!(e.to_string().contains("-1"));
        let g = ConfigError::from(GridError::EmptyGrid);
        assert_eq!(g.to_string(), "grid: grid must have at least one cell");
    }
}
