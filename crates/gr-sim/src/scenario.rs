//! A built scenario and the three-way strategy comparison.

use std::time::{Duration, Instant};

use gr_city::Grid;
use gr_core::{Route, SimRng};
use gr_learn::{
    LearnError, QTable, Trainer, TrainingObserver, TrainingReport, extract_greedy_path,
};
use gr_search::{AStarRouter, BfsRouter, Router, SearchError};

use crate::{ScenarioConfig, SimResult};

/// Method label used for the learned policy in comparisons and output rows.
pub const QLEARNING: &str = "qlearning";

/// Split a scenario seed into its traffic and training streams.
///
/// Both `build` and `compare` go through here, so re-running a comparison on
/// the same scenario repeats the same training.
pub(crate) fn streams(seed: u64) -> (SimRng, SimRng) {
    let mut root = SimRng::new(seed);
    let traffic = root.child(1);
    let training = root.child(2);
    (traffic, training)
}

// ── Outcomes ──────────────────────────────────────────────────────────────────

/// How one routing method fared.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum RouteStatus {
    /// The route ends at the destination.
    Reached,
    /// The greedy policy drove onto the perimeter before the destination.
    Stranded,
    /// The search frontier ran dry.
    NoPath,
    /// The greedy policy cycled until its move budget ran out.
    NotConverged,
}

impl RouteStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RouteStatus::Reached      => "reached",
            RouteStatus::Stranded     => "stranded",
            RouteStatus::NoPath       => "no_path",
            RouteStatus::NotConverged => "not_converged",
        }
    }
}

impl std::fmt::Display for RouteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of running one method on a scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodOutcome {
    pub method:  &'static str,
    pub status:  RouteStatus,
    /// `None` for `NoPath` and `NotConverged`.
    pub route:   Option<Route>,
    /// Wall-clock time of the routing call (excludes training).
    pub elapsed: Duration,
}

impl MethodOutcome {
    pub fn edge_count(&self) -> Option<usize> {
        self.route.as_ref().map(Route::edge_count)
    }

    pub fn nodes_examined(&self) -> usize {
        self.route.as_ref().map_or(0, |r| r.metrics.nodes_examined)
    }
}

/// Side-by-side results of every method on one scenario.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub scenario: String,
    /// BFS, A*, then Q-learning.
    pub outcomes: Vec<MethodOutcome>,
    pub training: TrainingReport,
}

impl Comparison {
    pub fn outcome(&self, method: &str) -> Option<&MethodOutcome> {
        self.outcomes.iter().find(|o| o.method == method)
    }
}

// ── Scenario ──────────────────────────────────────────────────────────────────

/// A shaped city plus the request to route across it.
///
/// Create via [`ScenarioBuilder`][crate::ScenarioBuilder].
pub struct Scenario {
    pub config: ScenarioConfig,
    pub grid:   Grid,
}

impl Scenario {
    pub(crate) fn new(config: ScenarioConfig, grid: Grid) -> Self {
        Self { config, grid }
    }

    /// Route with a deterministic search strategy.
    ///
    /// An exhausted frontier is an outcome (`NoPath`), not an error.
    pub fn run_router(&self, router: &dyn Router) -> SimResult<MethodOutcome> {
        let started = Instant::now();
        let result = router.route(&self.grid, self.config.start, self.config.destination);
        let elapsed = started.elapsed();
        let (status, route) = match result {
            Ok(route)                              => (RouteStatus::Reached, Some(route)),
            Err(SearchError::NoPathFound { .. })   => (RouteStatus::NoPath, None),
            Err(e)                                 => return Err(e.into()),
        };
        log::debug!("{} on {:?}: {status}", router.name(), self.config.name);
        Ok(MethodOutcome { method: router.name(), status, route, elapsed })
    }

    /// Train a fresh Q-table and extract its greedy route.
    ///
    /// Returns the outcome, the trained table and the training report.
    pub fn run_qlearning<O: TrainingObserver>(
        &self,
        observer: &mut O,
    ) -> SimResult<(MethodOutcome, QTable, TrainingReport)> {
        let (_, mut rng) = streams(self.config.seed);
        let trainer = Trainer::new(self.config.hyperparameters.clone())?;
        let mut table = QTable::for_grid(&self.grid);
        let report = trainer.train(&mut table, &self.grid, self.config.start, &mut rng, observer)?;

        let started = Instant::now();
        let dest = self.config.destination;
        let result = extract_greedy_path(&table, &self.grid, self.config.start, dest);
        let elapsed = started.elapsed();
        let (status, route) = match result {
            Ok(route) if route.reaches(dest)            => (RouteStatus::Reached, Some(route)),
            Ok(route)                                   => (RouteStatus::Stranded, Some(route)),
            Err(LearnError::NoConvergedPath { .. })     => (RouteStatus::NotConverged, None),
            Err(e)                                      => return Err(e.into()),
        };
        log::debug!("{QLEARNING} on {:?}: {status}", self.config.name);
        Ok((MethodOutcome { method: QLEARNING, status, route, elapsed }, table, report))
    }

    /// Run BFS, A* and Q-learning and collect their outcomes.
    pub fn compare<O: TrainingObserver>(&self, observer: &mut O) -> SimResult<Comparison> {
        let routers: [&dyn Router; 2] = [&BfsRouter, &AStarRouter];
        let mut outcomes = Vec::with_capacity(routers.len() + 1);
        for router in routers {
            outcomes.push(self.run_router(router)?);
        }
        let (learned, _, training) = self.run_qlearning(observer)?;
        outcomes.push(learned);

        for o in &outcomes {
            log::info!(
                "{:?} {:>9}: {:<13} edges={:<4} examined={} in {:?}",
                self.config.name,
                o.method,
                o.status.as_str(),
                o.edge_count().map_or_else(|| "-".to_owned(), |e| e.to_string()),
                o.nodes_examined(),
                o.elapsed,
            );
        }

        Ok(Comparison { scenario: self.config.name.clone(), outcomes, training })
    }
}
