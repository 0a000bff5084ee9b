//! Action-selection policies.

use gr_core::{Action, Coord, SimRng};

use crate::QTable;

/// Chooses the next action from the current table.
///
/// Policies are stateless with respect to the episode; all randomness comes
/// from the `SimRng` passed in, so a seeded run is reproducible.
pub trait Policy: Send + Sync {
    fn choose(&self, table: &QTable, at: Coord, rng: &mut SimRng) -> Action;
}

/// Epsilon-greedy selection with the exploitation-probability convention
/// described on [`Hyperparameters`](crate::Hyperparameters).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpsilonGreedy {
    pub epsilon: f64,
}

impl EpsilonGreedy {
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }
}

impl Policy for EpsilonGreedy {
    fn choose(&self, table: &QTable, at: Coord, rng: &mut SimRng) -> Action {
        let r: f64 = rng.random();
        if r < self.epsilon {
            table.best_action(at)
        } else {
            Action::ALL[rng.gen_range(0..Action::COUNT)]
        }
    }
}

/// Always takes the argmax.  Never consumes randomness.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

impl Policy for Greedy {
    fn choose(&self, table: &QTable, at: Coord, _rng: &mut SimRng) -> Action {
        table.best_action(at)
    }
}
