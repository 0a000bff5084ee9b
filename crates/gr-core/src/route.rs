//! Route value returned by every routing strategy.

use std::time::Duration;

use crate::Coord;

/// Cost of producing a route, for side-by-side strategy comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteMetrics {
    /// Wall-clock time spent inside the routing call.
    pub elapsed: Duration,
    /// Strategy-specific work counter: distinct nodes expanded (BFS),
    /// distinct nodes relaxed (A*), or moves taken (greedy Q policy).
    pub nodes_examined: usize,
}

/// Ordered node sequence from the start towards the destination.
///
/// A route always contains at least its start node.  It may stop short of the
/// destination (a greedy policy that drove into the perimeter); use
/// [`reaches`](Self::reaches) before treating it as a success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub nodes: Vec<Coord>,
    pub metrics: RouteMetrics,
}

impl Route {
    pub fn new(nodes: Vec<Coord>, metrics: RouteMetrics) -> Self {
        Self { nodes, metrics }
    }

    /// Number of moves (edges) in the route.
    pub fn edge_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Coord> {
        self.nodes.first().copied()
    }

    pub fn end(&self) -> Option<Coord> {
        self.nodes.last().copied()
    }

    /// `true` if the final node is `destination`.
    pub fn reaches(&self, destination: Coord) -> bool {
        self.end() == Some(destination)
    }

    /// `true` if the route has no moves.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// `true` if every consecutive pair is a single 4-neighbor step.
    pub fn is_contiguous(&self) -> bool {
        self.nodes.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }
}
