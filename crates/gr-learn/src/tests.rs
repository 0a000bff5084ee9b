//! Unit tests for gr-learn.

use gr_city::{Grid, set_destination};
use gr_core::{Action, Coord, SimRng};

use crate::{EpisodeStats, TrainingObserver, TrainingReport};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn city(w: u32, h: u32, dest: Coord) -> Grid {
    let mut g = Grid::build(w, h).unwrap();
    set_destination(&mut g, dest).unwrap();
    g
}

#[derive(Default)]
struct Recorder {
    starts: Vec<u32>,
    ends:   Vec<EpisodeStats>,
    report: Option<TrainingReport>,
}

impl TrainingObserver for Recorder {
    fn on_episode_start(&mut self, episode: u32) {
        self.starts.push(episode);
    }

    fn on_episode_end(&mut self, stats: &EpisodeStats) {
        self.ends.push(*stats);
    }

    fn on_training_end(&mut self, report: &TrainingReport) {
        self.report = Some(*report);
    }
}

// ── Q-table ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod qtable {
    use super::*;
    use crate::QTable;

    #[test]
    fn zero_initialised_with_first_index_ties() {
        let q = QTable::new(5, 4);
        assert_eq!(q.row(Coord::new(4, 3)), &[0.0; 4]);
        assert_eq!(q.best_action(Coord::new(2, 2)), Action::Up);
        assert_eq!(q.max_value(Coord::new(0, 0)), 0.0);
    }

    #[test]
    fn best_action_prefers_strictly_greater() {
        let mut q = QTable::new(4, 4);
        let c = Coord::new(1, 1);
        q.set(c, Action::Down, 3.0);
        q.set(c, Action::Left, 3.0);
        assert_eq!(q.best_action(c), Action::Down);
        q.set(c, Action::Left, 3.5);
        assert_eq!(q.best_action(c), Action::Left);
        assert_eq!(q.max_value(c), 3.5);
    }

    #[test]
    fn rows_are_independent() {
        let mut q = QTable::new(4, 4);
        q.set(Coord::new(1, 2), Action::Right, 7.0);
        assert_eq!(q.get(Coord::new(1, 2), Action::Right), 7.0);
        assert_eq!(q.row(Coord::new(2, 2)), &[0.0; 4]);
        assert_eq!(q.row(Coord::new(1, 1)), &[0.0; 4]);
    }

    #[test]
    fn td_update_formula() {
        let mut q = QTable::new(4, 4);
        let from = Coord::new(1, 1);
        let to = Coord::new(2, 1);
        q.set(to, Action::Up, 5.0);
        // 0 + 0.5 * (10 + 0.9 * 5 - 0) = 7.25
        let v = q.td_update(from, Action::Right, 10.0, to, 0.5, 0.9);
        assert!((v - 7.25).abs() < 1e-12);
        assert_eq!(q.get(from, Action::Right), v);
    }

    #[test]
    fn shaped_like_grid() {
        let g = Grid::build(6, 4).unwrap();
        let q = QTable::for_grid(&g);
        assert!(q.matches(&g));
        assert!(!QTable::new(4, 6).matches(&g));
    }
}

// ── Hyperparameters ───────────────────────────────────────────────────────────

#[cfg(test)]
mod params {
    use super::*;
    use crate::{Hyperparameters, LearnError};

    #[test]
    fn defaults_are_valid() {
        let p = Hyperparameters::default();
        assert_eq!(p.episodes, 1000);
        assert_eq!(p.learning_rate, 0.9);
        assert!(p.validate().is_ok());
        assert!((p.exploration_rate() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_values_rejected() {
        let cases = [
            Hyperparameters { episodes: 0, ..Default::default() },
            Hyperparameters { learning_rate: 0.0, ..Default::default() },
            Hyperparameters { discount_factor: 1.5, ..Default::default() },
            Hyperparameters { epsilon: -0.1, ..Default::default() },
            Hyperparameters { epsilon: f64::NAN, ..Default::default() },
            Hyperparameters { max_episode_steps: Some(0), ..Default::default() },
        ];
        for p in cases {
            assert!(
                matches!(p.validate(), Err(LearnError::InvalidHyperparameter { .. })),
                "{p:?}"
            );
        }
    }

    #[test]
    fn boundary_one_is_allowed() {
        let p = Hyperparameters {
            learning_rate:   1.0,
            discount_factor: 1.0,
            epsilon:         1.0,
            ..Default::default()
        };
        assert!(p.validate().is_ok());
    }

    #[test]
    fn step_budget_defaults_to_ten_times_area() {
        let g = Grid::build(5, 7).unwrap();
        assert_eq!(Hyperparameters::default().step_budget(&g), 350);
        let p = Hyperparameters { max_episode_steps: Some(12), ..Default::default() };
        assert_eq!(p.step_budget(&g), 12);
    }
}

// ── Policies ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod policy {
    use super::*;
    use crate::{EpsilonGreedy, Greedy, Policy, QTable};

    #[test]
    fn epsilon_one_always_exploits() {
        let mut q = QTable::new(4, 4);
        let c = Coord::new(1, 1);
        q.set(c, Action::Down, 1.0);
        let mut rng = SimRng::new(3);
        let p = EpsilonGreedy::new(1.0);
        for _ in 0..500 {
            assert_eq!(p.choose(&q, c, &mut rng), Action::Down);
        }
    }

    #[test]
    fn small_epsilon_explores_every_action() {
        let q = QTable::new(4, 4);
        let mut rng = SimRng::new(4);
        let p = EpsilonGreedy::new(0.01);
        let mut seen = [0usize; Action::COUNT];
        for _ in 0..2000 {
            seen[p.choose(&q, Coord::new(1, 1), &mut rng).index()] += 1;
        }
        assert!(seen.iter().all(|&n| n > 300), "{seen:?}");
    }

    #[test]
    fn greedy_follows_argmax() {
        let mut q = QTable::new(4, 4);
        let c = Coord::new(2, 1);
        q.set(c, Action::Left, 0.5);
        assert_eq!(Greedy.choose(&q, c, &mut SimRng::new(0)), Action::Left);
    }
}

// ── Training loop ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod trainer {
    use super::*;
    use crate::{
        EpisodeOutcome, Greedy, Hyperparameters, LearnError, NoopObserver, QTable, Trainer,
        extract_greedy_path, train,
    };

    #[test]
    fn adjacent_start_converges_to_one_step() {
        let dest = Coord::new(2, 2);
        let start = Coord::new(1, 2);
        let g = city(4, 4, dest);
        let mut q = QTable::for_grid(&g);
        let params = Hyperparameters { episodes: 500, ..Default::default() };

        train(&mut q, &g, start, &params, &mut SimRng::new(42), &mut NoopObserver).unwrap();

        assert_eq!(q.best_action(start), Action::Right);
        let route = extract_greedy_path(&q, &g, start, dest).unwrap();
        assert_eq!(route.nodes, vec![start, dest]);
        assert_eq!(route.metrics.nodes_examined, 1);
    }

    #[test]
    fn five_by_five_reaches_center() {
        let dest = Coord::new(2, 2);
        let start = Coord::new(1, 1);
        let g = city(5, 5, dest);
        let mut q = QTable::for_grid(&g);

        let report = train(
            &mut q,
            &g,
            start,
            &Hyperparameters::default(),
            &mut SimRng::new(7),
            &mut NoopObserver,
        )
        .unwrap();
        assert_eq!(report.episodes, 1000);
        assert!(report.goal_episodes > 500, "{report:?}");

        let route = extract_greedy_path(&q, &g, start, dest).unwrap();
        assert!(route.reaches(dest), "{:?}", route.nodes);
        assert!(route.edge_count() <= 4);
        assert!(route.is_contiguous());
    }

    #[test]
    fn same_seed_same_table() {
        let g = city(6, 6, Coord::new(3, 3));
        let params = Hyperparameters { episodes: 200, ..Default::default() };
        let run = |seed| {
            let mut q = QTable::for_grid(&g);
            let mut rng = SimRng::new(seed);
            let r = train(&mut q, &g, Coord::new(1, 1), &params, &mut rng, &mut NoopObserver)
                .unwrap();
            (q, r.total_steps, r.goal_episodes)
        };
        assert_eq!(run(5), run(5));
    }

    #[test]
    fn observer_sees_every_episode() {
        let g = city(5, 5, Coord::new(2, 2));
        let mut q = QTable::for_grid(&g);
        let params = Hyperparameters { episodes: 60, ..Default::default() };
        let mut rec = Recorder::default();

        let report = train(&mut q, &g, Coord::new(3, 3), &params, &mut SimRng::new(1), &mut rec)
            .unwrap();

        assert_eq!(rec.starts, (0..60).collect::<Vec<_>>());
        assert_eq!(rec.ends.len(), 60);
        assert!(rec.ends.iter().enumerate().all(|(i, s)| s.episode == i as u32));
        let steps: u64 = rec.ends.iter().map(|s| u64::from(s.steps)).sum();
        assert_eq!(steps, report.total_steps);
        assert_eq!(rec.report, Some(report));
    }

    #[test]
    fn budget_truncates_episodes() {
        // Every single move from (2,2) lands on a non-terminal interior node.
        let g = city(6, 6, Coord::new(4, 4));
        let mut q = QTable::for_grid(&g);
        let params = Hyperparameters {
            episodes:          20,
            max_episode_steps: Some(1),
            ..Default::default()
        };
        let mut rec = Recorder::default();

        let report = train(&mut q, &g, Coord::new(2, 2), &params, &mut SimRng::new(9), &mut rec)
            .unwrap();

        assert_eq!(report.truncated_episodes, 20);
        assert_eq!(report.goal_episodes, 0);
        assert_eq!(report.total_steps, 20);
        assert!(rec.ends.iter().all(|s| s.outcome == EpisodeOutcome::Truncated));
    }

    #[test]
    fn revisit_penalty_applies_to_repeated_nodes() {
        // Seed a two-node cycle (2,2) <-> (3,2) and walk it greedily for
        // three steps: (3,2) new, (2,2) revisit, (3,2) revisit.
        let g = city(6, 6, Coord::new(4, 4));
        let seeded = || {
            let mut q = QTable::for_grid(&g);
            q.set(Coord::new(2, 2), Action::Right, 5.0);
            q.set(Coord::new(3, 2), Action::Left, 5.0);
            q
        };
        let walk = |revisit_penalty| {
            let params = Hyperparameters {
                episodes:          1,
                max_episode_steps: Some(3),
                revisit_penalty,
                ..Default::default()
            };
            let mut rec = Recorder::default();
            Trainer::with_policy(params, Greedy)
                .unwrap()
                .train(&mut seeded(), &g, Coord::new(2, 2), &mut SimRng::new(0), &mut rec)
                .unwrap();
            rec.ends[0]
        };

        assert_eq!(walk(false).total_reward, -3);
        assert_eq!(walk(true).total_reward, -1 - 51 - 51);
        assert_eq!(walk(true).outcome, EpisodeOutcome::Truncated);
    }

    #[test]
    fn start_on_destination_takes_no_steps() {
        let dest = Coord::new(2, 2);
        let g = city(5, 5, dest);
        let mut q = QTable::for_grid(&g);
        let params = Hyperparameters { episodes: 10, ..Default::default() };
        let mut rec = Recorder::default();

        let report = train(&mut q, &g, dest, &params, &mut SimRng::new(3), &mut rec).unwrap();

        assert_eq!(report.total_steps, 0);
        assert_eq!(report.goal_episodes, 10);
        assert!(rec.ends.iter().all(|s| s.steps == 0 && s.total_reward == 0));
        assert!(rec.ends.iter().all(|s| s.outcome == EpisodeOutcome::Goal));
        assert_eq!(q, QTable::for_grid(&g));
    }

    #[test]
    fn perimeter_start_rejected() {
        let g = city(5, 5, Coord::new(2, 2));
        let mut q = QTable::for_grid(&g);
        let err = train(
            &mut q,
            &g,
            Coord::new(0, 2),
            &Hyperparameters::default(),
            &mut SimRng::new(0),
            &mut NoopObserver,
        )
        .unwrap_err();
        assert!(matches!(err, LearnError::City(_)));
    }

    #[test]
    fn mismatched_table_rejected() {
        let g = city(5, 5, Coord::new(2, 2));
        let mut q = QTable::new(6, 5);
        let err = train(
            &mut q,
            &g,
            Coord::new(1, 1),
            &Hyperparameters::default(),
            &mut SimRng::new(0),
            &mut NoopObserver,
        )
        .unwrap_err();
        assert!(matches!(err, LearnError::ShapeMismatch { .. }));
    }

    #[test]
    fn invalid_params_fail_before_training() {
        let params = Hyperparameters { epsilon: 0.0, ..Default::default() };
        assert!(matches!(
            Trainer::new(params),
            Err(LearnError::InvalidHyperparameter { name: "epsilon", .. })
        ));
    }
}

// ── Greedy extraction ─────────────────────────────────────────────────────────

#[cfg(test)]
mod greedy {
    use super::*;
    use crate::{LearnError, QTable, extract_greedy_path};

    #[test]
    fn untrained_table_drives_into_perimeter() {
        // All-zero rows pick Up until the top edge.
        let g = city(5, 5, Coord::new(3, 2));
        let q = QTable::for_grid(&g);
        let route = extract_greedy_path(&q, &g, Coord::new(1, 1), Coord::new(3, 2)).unwrap();
        assert_eq!(
            route.nodes,
            vec![Coord::new(1, 1), Coord::new(1, 2), Coord::new(1, 3), Coord::new(1, 4)]
        );
        assert!(!route.reaches(Coord::new(3, 2)));
        assert_eq!(route.metrics.nodes_examined, 3);
    }

    #[test]
    fn cycle_hits_move_budget() {
        let g = city(6, 6, Coord::new(4, 4));
        let mut q = QTable::for_grid(&g);
        q.set(Coord::new(1, 1), Action::Right, 1.0);
        q.set(Coord::new(2, 1), Action::Left, 1.0);
        let err = extract_greedy_path(&q, &g, Coord::new(1, 1), Coord::new(4, 4)).unwrap_err();
        assert_eq!(err, LearnError::NoConvergedPath { from: Coord::new(1, 1), steps: 24 });
    }

    #[test]
    fn start_at_destination_is_trivial() {
        let g = city(5, 5, Coord::new(2, 2));
        let q = QTable::for_grid(&g);
        let route = extract_greedy_path(&q, &g, Coord::new(2, 2), Coord::new(2, 2)).unwrap();
        assert!(route.is_trivial());
    }
}
