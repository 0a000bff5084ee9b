//! City-model error type.

use thiserror::Error;

use gr_core::Coord;

/// Errors produced by `gr-city`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CityError {
    #[error("grid {width}x{height} is too small (both sides must be at least 4)")]
    InvalidDimension { width: u32, height: u32 },

    #[error("invalid node {node}: {reason}")]
    InvalidNode { node: Coord, reason: &'static str },

    #[error("no interior node with the default reward is left for traffic")]
    NoEligibleNode,
}

pub type CityResult<T> = Result<T, CityError>;
