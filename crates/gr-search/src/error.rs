//! Search error type.

use thiserror::Error;

use gr_city::CityError;
use gr_core::Coord;

/// Errors produced by `gr-search`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("no path from {from} to {to}")]
    NoPathFound { from: Coord, to: Coord },

    #[error(transparent)]
    City(#[from] CityError),
}

pub type SearchResult<T> = Result<T, SearchError>;
