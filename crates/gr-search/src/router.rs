//! Routing trait.
//!
//! # Pluggability
//!
//! The scenario layer calls the search baselines through [`Router`], so a new
//! deterministic strategy (Dijkstra with traffic weights, bidirectional BFS)
//! drops in without touching the comparison code.

use gr_city::Grid;
use gr_core::{Coord, NodeId, Route};

use crate::SearchResult;

/// Pluggable deterministic routing strategy.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`; routing reads the grid only, so
/// independent scenarios may be routed from several threads.
pub trait Router: Send + Sync {
    /// Compute a route from `from` to `to`.
    ///
    /// `from == to` yields a single-node route.  Coordinates outside the grid
    /// fail with [`gr_city::CityError::InvalidNode`].
    fn route(&self, grid: &Grid, from: Coord, to: Coord) -> SearchResult<Route>;

    /// Short label used in logs and output rows.
    fn name(&self) -> &'static str;
}

/// Rebuild the node sequence ending at `to` from a parent-pointer array.
///
/// The chain stops at the first node whose parent is `NodeId::INVALID` (the
/// start).
pub(crate) fn trace_back(grid: &Grid, parent: &[NodeId], to: Coord) -> Vec<Coord> {
    let mut nodes = vec![to];
    let mut cur = grid.node_id(to);
    while parent[cur.index()] != NodeId::INVALID {
        cur = parent[cur.index()];
        nodes.push(grid.coord(cur));
    }
    nodes.reverse();
    nodes
}
