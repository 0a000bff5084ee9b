//! The four driving directions shared by the learner and the renderers.
//!
//! Index order is fixed (`Up`, `Right`, `Down`, `Left`) because it is the
//! third axis of the Q-table and the tie-break order of `argmax`.

use crate::{Coord, CoreError};

/// A single move between 4-neighbor intersections.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// `y + 1`.
    Up,
    /// `x + 1`.
    Right,
    /// `y - 1`.
    Down,
    /// `x - 1`.
    Left,
}

impl Action {
    /// Number of actions, the width of one Q-table row.
    pub const COUNT: usize = 4;

    /// All actions in index order.
    pub const ALL: [Action; Action::COUNT] = [Action::Up, Action::Right, Action::Down, Action::Left];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(i: usize) -> Result<Action, CoreError> {
        Action::ALL.get(i).copied().ok_or(CoreError::UnknownAction(i))
    }

    /// Apply this move inside a `width × height` lattice.
    ///
    /// A move that would leave the bounds returns `from` unchanged.
    #[inline]
    pub fn apply(self, from: Coord, width: u32, height: u32) -> Coord {
        let Coord { x, y } = from;
        match self {
            Action::Up    if y + 1 < height => Coord::new(x, y + 1),
            Action::Right if x + 1 < width  => Coord::new(x + 1, y),
            Action::Down  if y > 0          => Coord::new(x, y - 1),
            Action::Left  if x > 0          => Coord::new(x - 1, y),
            _ => from,
        }
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Up    => "up",
            Action::Right => "right",
            Action::Down  => "down",
            Action::Left  => "left",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
