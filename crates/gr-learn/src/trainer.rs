//! The episodic training loop.

use std::time::Instant;

use gr_city::{Grid, NodeKind, reward};
use gr_core::{Coord, SimRng};

use crate::{
    EpisodeOutcome, EpisodeStats, EpsilonGreedy, Hyperparameters, LearnError, LearnResult, Policy,
    QTable, TrainingObserver, TrainingReport,
};

/// Runs Q-learning episodes against a fixed grid.
///
/// Create with [`Trainer::new`] (epsilon-greedy with the hyperparameters'
/// `epsilon`) or [`Trainer::with_policy`].  Both validate the
/// hyperparameters up front, so `train` only fails on bad grid inputs.
pub struct Trainer<P: Policy> {
    params: Hyperparameters,
    policy: P,
}

impl Trainer<EpsilonGreedy> {
    pub fn new(params: Hyperparameters) -> LearnResult<Self> {
        let policy = EpsilonGreedy::new(params.epsilon);
        Self::with_policy(params, policy)
    }
}

impl<P: Policy> Trainer<P> {
    pub fn with_policy(params: Hyperparameters, policy: P) -> LearnResult<Self> {
        params.validate()?;
        Ok(Self { params, policy })
    }

    /// Train `table` for `params.episodes` episodes, each starting at
    /// `start`.
    ///
    /// `start` must be an interior node and `table` must be shaped like
    /// `grid`.  Starting on the destination yields zero-step `Goal` episodes
    /// and leaves `table` untouched.  Values already in `table` are the starting estimates, so
    /// calling this twice continues training.
    pub fn train<O: TrainingObserver>(
        &self,
        table:    &mut QTable,
        grid:     &Grid,
        start:    Coord,
        rng:      &mut SimRng,
        observer: &mut O,
    ) -> LearnResult<TrainingReport> {
        if !table.matches(grid) {
            return Err(LearnError::ShapeMismatch {
                table_width:  table.width(),
                table_height: table.height(),
                grid_width:   grid.width(),
                grid_height:  grid.height(),
            });
        }
        grid.require_interior(start)?;

        let started = Instant::now();
        let budget = self.params.step_budget(grid);
        let mut report = TrainingReport { episodes: self.params.episodes, ..Default::default() };
        let mut visited = vec![false; grid.node_count()];

        for episode in 0..self.params.episodes {
            observer.on_episode_start(episode);
            let stats = self.run_episode(episode, table, grid, start, budget, rng, &mut visited);

            report.total_steps += u64::from(stats.steps);
            match stats.outcome {
                EpisodeOutcome::Goal      => report.goal_episodes += 1,
                EpisodeOutcome::Truncated => report.truncated_episodes += 1,
                EpisodeOutcome::Perimeter => {}
            }
            log::debug!(
                "episode {episode}: {} steps, reward {}, {}",
                stats.steps,
                stats.total_reward,
                stats.outcome,
            );
            observer.on_episode_end(&stats);
        }

        report.elapsed = started.elapsed();
        if report.truncated_episodes > 0 {
            log::warn!(
                "{} of {} episodes hit the {budget}-step budget",
                report.truncated_episodes,
                report.episodes,
            );
        }
        log::info!(
            "trained {} episodes from {start} in {:?}: {} steps, {:.1}% reached the goal",
            report.episodes,
            report.elapsed,
            report.total_steps,
            report.goal_rate() * 100.0,
        );
        observer.on_training_end(&report);
        Ok(report)
    }

    #[allow(clippy::too_many_arguments)]
    fn run_episode(
        &self,
        episode: u32,
        table:   &mut QTable,
        grid:    &Grid,
        start:   Coord,
        budget:  u32,
        rng:     &mut SimRng,
        visited: &mut [bool],
    ) -> EpisodeStats {
        let alpha = self.params.learning_rate;
        let gamma = self.params.discount_factor;

        if self.params.revisit_penalty {
            visited.fill(false);
            visited[grid.node_id(start).index()] = true;
        }

        let mut at = start;
        let mut steps = 0u32;
        let mut total_reward = 0i64;

        // Terminal test first, so an episode starting on the goal takes no steps.
        let outcome = loop {
            match grid.kind(at) {
                NodeKind::Destination => break EpisodeOutcome::Goal,
                NodeKind::Perimeter   => break EpisodeOutcome::Perimeter,
                NodeKind::Interior | NodeKind::Traffic => {}
            }
            if steps == budget {
                break EpisodeOutcome::Truncated;
            }

            let action = self.policy.choose(table, at, rng);
            let next = grid.step(at, action);

            let mut observed = grid.reward(next);
            if self.params.revisit_penalty {
                let seen = &mut visited[grid.node_id(next).index()];
                if *seen {
                    observed += reward::REVISIT_PENALTY;
                }
                *seen = true;
            }

            table.td_update(at, action, f64::from(observed), next, alpha, gamma);
            total_reward += i64::from(observed);
            steps += 1;
            at = next;
        };

        EpisodeStats { episode, steps, total_reward, outcome }
    }
}

/// Validate `params`, then train with epsilon-greedy selection.
///
/// Shorthand for `Trainer::new(params.clone())?.train(..)`.
pub fn train<O: TrainingObserver>(
    table:    &mut QTable,
    grid:     &Grid,
    start:    Coord,
    params:   &Hyperparameters,
    rng:      &mut SimRng,
    observer: &mut O,
) -> LearnResult<TrainingReport> {
    Trainer::new(params.clone())?.train(table, grid, start, rng, observer)
}
