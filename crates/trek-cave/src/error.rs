//! Error types for map generation.

use std::error::Error;
use std::fmt;

/// Errors from configuring or running the cave generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaveError {
    /// Fill percentage above 100.
    FillPercentOutOfRange {
        /// The rejected value.
        value: u32,
    },
}

impl fmt::Display for CaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FillPercentOutOfRange { value } => {
                write!(f, "fill percent must be in 0..=100, got {value}")
            }
        }
    }
}

impl Error for CaveError {}
