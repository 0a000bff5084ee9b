//! Training hyperparameters.

use gr_city::Grid;

use crate::{LearnError, LearnResult};

/// Q-learning hyperparameters.
///
/// # Epsilon convention
///
/// `epsilon` is the probability of **exploiting** (taking the current
/// argmax), not of exploring: each step draws `r ~ U(0, 1)` and acts greedily
/// when `r < epsilon`.  A value of `0.9` therefore explores 10% of the time.
/// Use [`exploration_rate`](Self::exploration_rate) when the conventional
/// reading is wanted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Hyperparameters {
    /// Number of training episodes (≥ 1).
    pub episodes:          u32,
    /// α in `(0, 1]`.
    pub learning_rate:     f64,
    /// γ in `(0, 1]`.
    pub discount_factor:   f64,
    /// Exploitation probability in `(0, 1]`; see the type-level docs.
    pub epsilon:           f64,
    /// Steps after which an episode is cut short.  `None` uses
    /// `10 × W × H` for the grid being trained on.
    pub max_episode_steps: Option<u32>,
    /// Add [`REVISIT_PENALTY`](gr_city::reward::REVISIT_PENALTY) to the
    /// reward of any node already visited in the current episode.
    pub revisit_penalty:   bool,
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            episodes:          1000,
            learning_rate:     0.9,
            discount_factor:   0.9,
            epsilon:           0.9,
            max_episode_steps: None,
            revisit_penalty:   false,
        }
    }
}

impl Hyperparameters {
    /// Check every field's range.
    pub fn validate(&self) -> LearnResult<()> {
        if self.episodes == 0 {
            return Err(LearnError::InvalidHyperparameter { name: "episodes", value: 0.0 });
        }
        for (name, value) in [
            ("learning_rate", self.learning_rate),
            ("discount_factor", self.discount_factor),
            ("epsilon", self.epsilon),
        ] {
            // Written so that NaN fails too.
            if !(value > 0.0 && value <= 1.0) {
                return Err(LearnError::InvalidHyperparameter { name, value });
            }
        }
        if self.max_episode_steps == Some(0) {
            return Err(LearnError::InvalidHyperparameter { name: "max_episode_steps", value: 0.0 });
        }
        Ok(())
    }

    /// Probability of taking a uniformly random action: `1 − epsilon`.
    pub fn exploration_rate(&self) -> f64 {
        1.0 - self.epsilon
    }

    /// Effective per-episode step budget on `grid`.
    pub fn step_budget(&self, grid: &Grid) -> u32 {
        self.max_episode_steps
            .unwrap_or_else(|| 10u32.saturating_mul(grid.width()).saturating_mul(grid.height()))
    }
}
