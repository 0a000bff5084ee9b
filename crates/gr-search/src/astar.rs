//! A* search with the Manhattan heuristic.
//!
//! Every edge costs 1 and the Manhattan distance is admissible and consistent
//! for 4-neighbor moves, so the first time the destination is popped its path
//! is optimal.  A* does not avoid perimeter or traffic nodes; it is the
//! unconstrained shortest-path reference.
//!
//! Heap entries are `(f, seq, g, node)` behind `Reverse`; `seq` is a
//! monotonically increasing insertion counter, so ties on `f` pop in insertion
//! order and results are deterministic.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

use gr_city::Grid;
use gr_core::{Coord, NodeId, Route, RouteMetrics};

use crate::router::trace_back;
use crate::{Router, SearchError, SearchResult};

/// Optimal unit-cost router.  `nodes_examined` is the number of distinct
/// nodes that received a cost (the size of the cost map).
pub struct AStarRouter;

impl Router for AStarRouter {
    fn route(&self, grid: &Grid, from: Coord, to: Coord) -> SearchResult<Route> {
        grid.require_contains(from)?;
        grid.require_contains(to)?;
        astar(grid, from, to)
    }

    fn name(&self) -> &'static str {
        "astar"
    }
}

fn astar(grid: &Grid, from: Coord, to: Coord) -> SearchResult<Route> {
    let started = Instant::now();
    let n = grid.node_count();

    // cost[v] = best known g; u32::MAX for nodes not yet in the cost map.
    let mut cost    = vec![u32::MAX; n];
    let mut parent  = vec![NodeId::INVALID; n];
    let mut relaxed = 1usize;
    let mut seq     = 0u64;

    cost[grid.node_id(from).index()] = 0;

    let mut heap: BinaryHeap<Reverse<(u32, u64, u32, Coord)>> = BinaryHeap::new();
    heap.push(Reverse((from.manhattan(to), seq, 0, from)));

    while let Some(Reverse((_, _, g, node))) = heap.pop() {
        if node == to {
            let nodes = trace_back(grid, &parent, to);
            let metrics = RouteMetrics { elapsed: started.elapsed(), nodes_examined: relaxed };
            log::debug!("astar {from} -> {to}: {} edges, {relaxed} relaxed", nodes.len() - 1);
            return Ok(Route::new(nodes, metrics));
        }

        let id = grid.node_id(node);
        // Skip stale heap entries.
        if g > cost[id.index()] {
            continue;
        }

        for next in grid.neighbors(node) {
            let nid = grid.node_id(next);
            let new_cost = g + 1;
            if new_cost < cost[nid.index()] {
                if cost[nid.index()] == u32::MAX {
                    relaxed += 1;
                }
                cost[nid.index()] = new_cost;
                parent[nid.index()] = id;
                seq += 1;
                heap.push(Reverse((new_cost + next.manhattan(to), seq, new_cost, next)));
            }
        }
    }

    Err(SearchError::NoPathFound { from, to })
}
