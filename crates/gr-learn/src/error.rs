//! Learning error type.

use thiserror::Error;

use gr_city::CityError;
use gr_core::Coord;

/// Errors produced by `gr-learn`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LearnError {
    /// The greedy policy wandered for the whole move budget without reaching
    /// a terminal node (typically a two-node cycle in an undertrained table).
    #[error("greedy policy from {from} did not reach a terminal node within {steps} moves")]
    NoConvergedPath { from: Coord, steps: u32 },

    #[error("hyperparameter `{name}` = {value} is out of range")]
    InvalidHyperparameter { name: &'static str, value: f64 },

    #[error("Q-table is {table_width}x{table_height} but the grid is {grid_width}x{grid_height}")]
    ShapeMismatch {
        table_width:  u32,
        table_height: u32,
        grid_width:   u32,
        grid_height:  u32,
    },

    #[error(transparent)]
    City(#[from] CityError),
}

pub type LearnResult<T> = Result<T, LearnError>;
