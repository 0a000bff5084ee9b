//! `gr-learn`: tabular Q-learning over the grid city.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`qtable`]   | `QTable`, dense `[W, H, 4]` action values                 |
//! | [`params`]   | `Hyperparameters` with validation and defaults            |
//! | [`policy`]   | `Policy` trait, `EpsilonGreedy`, `Greedy`                 |
//! | [`observer`] | `TrainingObserver`, `EpisodeStats`, `TrainingReport`      |
//! | [`trainer`]  | `Trainer` episodic loop and the `train` shorthand         |
//! | [`greedy`]   | `extract_greedy_path`: follow argmax from a start node    |
//! | [`error`]    | `LearnError`, `LearnResult<T>`                            |
//!
//! # Episode
//!
//! ```text
//! at = start
//! loop:
//!   a    = policy.choose(Q, at)            epsilon-greedy by default
//!   next = grid.step(at, a)                clamped to bounds
//!   r    = reward(next) [+ REVISIT_PENALTY]
//!   Q[at, a] += α (r + γ max Q[next] − Q[at, a])
//!   stop if next is terminal or the step budget is spent
//! ```
//!
//! The table is the only state carried between episodes.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on hyperparameters and     |
//! |         | episode statistics.                                          |

pub mod error;
pub mod greedy;
pub mod observer;
pub mod params;
pub mod policy;
pub mod qtable;
pub mod trainer;

#[cfg(test)]
mod tests;

pub use error::{LearnError, LearnResult};
pub use greedy::extract_greedy_path;
pub use observer::{EpisodeOutcome, EpisodeStats, NoopObserver, TrainingObserver, TrainingReport};
pub use params::Hyperparameters;
pub use policy::{EpsilonGreedy, Greedy, Policy};
pub use qtable::QTable;
pub use trainer::{Trainer, train};
