//! Scenario error type.

use thiserror::Error;

use gr_city::CityError;
use gr_core::Coord;
use gr_learn::LearnError;
use gr_search::SearchError;

/// Errors produced by `gr-sim`.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("start and destination are both {0}")]
    SameStartAndDestination(Coord),

    #[error("scenario parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    City(#[from] CityError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Learn(#[from] LearnError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
