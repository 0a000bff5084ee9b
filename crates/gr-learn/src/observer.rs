//! Training observer trait and the statistics it receives.

use std::time::Duration;

/// How an episode ended.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EpisodeOutcome {
    /// Reached the destination.
    Goal,
    /// Drove onto the perimeter.
    Perimeter,
    /// Ran out of step budget on a non-terminal node.
    Truncated,
}

impl EpisodeOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            EpisodeOutcome::Goal      => "goal",
            EpisodeOutcome::Perimeter => "perimeter",
            EpisodeOutcome::Truncated => "truncated",
        }
    }
}

impl std::fmt::Display for EpisodeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-episode summary passed to [`TrainingObserver::on_episode_end`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpisodeStats {
    /// Zero-based episode index.
    pub episode:      u32,
    pub steps:        u32,
    /// Sum of observed rewards, revisit penalties included.
    pub total_reward: i64,
    pub outcome:      EpisodeOutcome,
}

/// Aggregate over a whole training run.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct TrainingReport {
    pub episodes:           u32,
    pub total_steps:        u64,
    pub goal_episodes:      u32,
    pub truncated_episodes: u32,
    pub elapsed:            Duration,
}

impl TrainingReport {
    /// Fraction of episodes that reached the destination.
    pub fn goal_rate(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            f64::from(self.goal_episodes) / f64::from(self.episodes)
        }
    }
}

/// Callbacks invoked by [`Trainer::train`][crate::Trainer::train].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: learning curve
///
/// ```rust,ignore
/// struct Curve(Vec<i64>);
///
/// impl TrainingObserver for Curve {
///     fn on_episode_end(&mut self, stats: &EpisodeStats) {
///         self.0.push(stats.total_reward);
///     }
/// }
/// ```
pub trait TrainingObserver {
    /// Called before the first step of each episode.
    fn on_episode_start(&mut self, _episode: u32) {}

    /// Called after the last step of each episode.
    fn on_episode_end(&mut self, _stats: &EpisodeStats) {}

    /// Called once after the final episode.
    fn on_training_end(&mut self, _report: &TrainingReport) {}
}

/// A [`TrainingObserver`] that does nothing.
pub struct NoopObserver;

impl TrainingObserver for NoopObserver {}
