//! Grid intersection identity.
//!
//! A `Coord` is compared and hashed directly as an integer pair.  The
//! `I{x},{y}` text form exists only for serialization and logs, and parses
//! back to the same pair for any number of digits.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Integer `(x, y)` coordinate of an intersection.
///
/// `x` grows to the east (`Action::Right`), `y` grows to the north
/// (`Action::Up`).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: u32,
    pub y: u32,
}

impl Coord {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// L1 distance.  Admissible and consistent for unit 4-neighbor moves.
    #[inline]
    pub fn manhattan(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// `true` if `other` is one N/E/S/W step away.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(u32, u32)> for Coord {
    #[inline]
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "I{},{}", self.x, self.y)
    }
}

impl FromStr for Coord {
    type Err = CoreError;

    /// Parse `I{x},{y}`.  Surrounding whitespace is ignored; anything else
    /// (missing prefix, extra fields, negative numbers) is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .trim()
            .strip_prefix('I')
            .ok_or_else(|| CoreError::Parse(format!("node name {s:?} must start with 'I'")))?;
        let (x, y) = body
            .split_once(',')
            .ok_or_else(|| CoreError::Parse(format!("node name {s:?} is missing ','")))?;
        let parse = |part: &str| {
            part.parse::<u32>()
                .map_err(|e| CoreError::Parse(format!("node name {s:?}: {e}")))
        };
        Ok(Coord::new(parse(x)?, parse(y)?))
    }
}
