//! Breadth-first search that routes around perimeter and traffic nodes.
//!
//! # Frontier discipline
//!
//! FIFO queue seeded with the start.  A node is marked visited when it is
//! *dequeued*, so the same node may sit in the queue more than once before its
//! first expansion; later copies are skipped.  Because the queue is FIFO, the
//! first copy dequeued is the one enqueued first, so the path-so-far of every
//! node is recorded once, at first enqueue, as a parent pointer and rebuilt at
//! the end.
//!
//! A node is expanded only if it is neither perimeter nor traffic.  That
//! includes the start: a vehicle stuck in congestion has no route.

use std::collections::VecDeque;
use std::time::Instant;

use gr_city::Grid;
use gr_core::{Coord, NodeId, Route, RouteMetrics};

use crate::router::trace_back;
use crate::{Router, SearchError, SearchResult};

/// Unweighted shortest path over the drivable (non-perimeter, non-traffic)
/// subgraph.  `nodes_examined` is the number of distinct nodes expanded.
pub struct BfsRouter;

impl Router for BfsRouter {
    fn route(&self, grid: &Grid, from: Coord, to: Coord) -> SearchResult<Route> {
        grid.require_contains(from)?;
        grid.require_contains(to)?;
        bfs(grid, from, to)
    }

    fn name(&self) -> &'static str {
        "bfs"
    }
}

/// `true` if BFS may enter `c`.
#[inline]
fn drivable(grid: &Grid, c: Coord) -> bool {
    !grid.is_perimeter(c) && !grid.is_traffic(c)
}

fn bfs(grid: &Grid, from: Coord, to: Coord) -> SearchResult<Route> {
    let started = Instant::now();
    if !drivable(grid, from) {
        log::debug!("bfs {from} -> {to}: start is not drivable");
        return Err(SearchError::NoPathFound { from, to });
    }
    let n = grid.node_count();

    let mut visited  = vec![false; n];
    let mut enqueued = vec![false; n];
    // parent[v] = node that first enqueued v; INVALID for the start / unreached.
    let mut parent   = vec![NodeId::INVALID; n];
    let mut expanded = 0usize;

    let mut queue: VecDeque<Coord> = VecDeque::new();
    queue.push_back(from);
    enqueued[grid.node_id(from).index()] = true;

    while let Some(node) = queue.pop_front() {
        if node == to {
            let nodes = trace_back(grid, &parent, to);
            let metrics = RouteMetrics { elapsed: started.elapsed(), nodes_examined: expanded };
            log::debug!("bfs {from} -> {to}: {} edges, {expanded} expanded", nodes.len() - 1);
            return Ok(Route::new(nodes, metrics));
        }

        let id = grid.node_id(node);
        if visited[id.index()] {
            continue;
        }
        visited[id.index()] = true;
        expanded += 1;

        for next in grid.neighbors(node) {
            let nid = grid.node_id(next);
            if visited[nid.index()] || !drivable(grid, next) {
                continue;
            }
            if !enqueued[nid.index()] {
                enqueued[nid.index()] = true;
                parent[nid.index()] = id;
            }
            queue.push_back(next);
        }
    }

    log::debug!("bfs {from} -> {to}: frontier exhausted after {expanded} expansions");
    Err(SearchError::NoPathFound { from, to })
}
