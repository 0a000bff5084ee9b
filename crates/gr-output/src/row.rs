//! Plain data row types written by output backends.

use gr_core::Route;
use gr_learn::EpisodeStats;
use gr_sim::MethodOutcome;

/// One node of one method's route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteStepRow<'a> {
    pub scenario: &'a str,
    pub method:   &'a str,
    /// Zero-based position along the route; step 0 is the start.
    pub step:     u32,
    pub x:        u32,
    pub y:        u32,
}

impl<'a> RouteStepRow<'a> {
    /// One row per node of `route`.
    pub fn from_route(scenario: &'a str, method: &'a str, route: &Route) -> Vec<Self> {
        route
            .nodes
            .iter()
            .enumerate()
            .map(|(i, c)| RouteStepRow { scenario, method, step: i as u32, x: c.x, y: c.y })
            .collect()
    }
}

/// Summary of one method on one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonRow<'a> {
    pub scenario:       &'a str,
    pub method:         &'a str,
    pub status:         &'a str,
    /// `None` when the method produced no route.
    pub edges:          Option<usize>,
    pub elapsed_us:     u128,
    pub nodes_examined: usize,
}

impl<'a> ComparisonRow<'a> {
    pub fn from_outcome(scenario: &'a str, outcome: &MethodOutcome) -> Self {
        Self {
            scenario,
            method:         outcome.method,
            status:         outcome.status.as_str(),
            edges:          outcome.edge_count(),
            elapsed_us:     outcome.elapsed.as_micros(),
            nodes_examined: outcome.nodes_examined(),
        }
    }
}

/// One training episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeRow<'a> {
    pub scenario:     &'a str,
    pub episode:      u32,
    pub steps:        u32,
    pub total_reward: i64,
    pub outcome:      &'static str,
}

impl<'a> EpisodeRow<'a> {
    pub fn from_stats(scenario: &'a str, stats: &EpisodeStats) -> Self {
        Self {
            scenario,
            episode:      stats.episode,
            steps:        stats.steps,
            total_reward: stats.total_reward,
            outcome:      stats.outcome.as_str(),
        }
    }
}
