//! Dense action-value table.

use gr_city::Grid;
use gr_core::{Action, Coord};

/// `Q[x, y, a]` for every node of a `width × height` grid, stored row-major
/// as one flat `Vec<f64>` with [`Action::COUNT`] values per node.
///
/// The table is zero-initialised and never resized.  All accessors index
/// directly and panic on coordinates outside the table; callers validate
/// coordinates against the grid first.
#[derive(Debug, Clone, PartialEq)]
pub struct QTable {
    width:  u32,
    height: u32,
    values: Vec<f64>,
}

impl QTable {
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * Action::COUNT;
        Self { width, height, values: vec![0.0; len] }
    }

    /// A zeroed table shaped like `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.width(), grid.height())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `true` if the table has one row per node of `grid`.
    pub fn matches(&self, grid: &Grid) -> bool {
        self.width == grid.width() && self.height == grid.height()
    }

    #[inline]
    fn offset(&self, c: Coord) -> usize {
        debug_assert!(c.x < self.width && c.y < self.height, "{c} outside Q-table");
        (c.y as usize * self.width as usize + c.x as usize) * Action::COUNT
    }

    #[inline]
    pub fn get(&self, c: Coord, action: Action) -> f64 {
        self.values[self.offset(c) + action.index()]
    }

    #[inline]
    pub fn set(&mut self, c: Coord, action: Action, value: f64) {
        let i = self.offset(c) + action.index();
        self.values[i] = value;
    }

    /// The four action values of `c`, in [`Action`] index order.
    #[inline]
    pub fn row(&self, c: Coord) -> &[f64] {
        let start = self.offset(c);
        &self.values[start..start + Action::COUNT]
    }

    /// `argmax_a Q[c, a]`; ties go to the lowest action index.
    pub fn best_action(&self, c: Coord) -> Action {
        let row = self.row(c);
        let mut best = 0;
        for (i, &v) in row.iter().enumerate().skip(1) {
            if v > row[best] {
                best = i;
            }
        }
        Action::ALL[best]
    }

    /// `max_a Q[c, a]`.
    pub fn max_value(&self, c: Coord) -> f64 {
        self.row(c).iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Temporal-difference update of `Q[from, action]` after observing
    /// `reward` on arrival at `to`:
    ///
    /// `Q[from,a] += α · (reward + γ · max Q[to] − Q[from,a])`
    ///
    /// Returns the updated value.
    pub fn td_update(
        &mut self,
        from:     Coord,
        action:   Action,
        reward:   f64,
        to:       Coord,
        alpha:    f64,
        gamma:    f64,
    ) -> f64 {
        let current = self.get(from, action);
        let target = reward + gamma * self.max_value(to);
        let updated = current + alpha * (target - current);
        self.set(from, action, updated);
        updated
    }
}
