//! Greedy route extraction from a trained table.

use std::time::Instant;

use gr_city::Grid;
use gr_core::{Coord, Route, RouteMetrics};

use crate::{LearnError, LearnResult, QTable};

/// Follow `argmax_a Q` from `start` until a terminal node or `dest` is
/// reached.
///
/// The walk may end on the perimeter; the route is still returned and
/// [`Route::reaches`] tells the caller whether it is a success.  A walk that
/// is still going after `2 × (W + H)` moves is a cycle and fails with
/// [`LearnError::NoConvergedPath`].  `nodes_examined` is the number of moves.
pub fn extract_greedy_path(
    table: &QTable,
    grid:  &Grid,
    start: Coord,
    dest:  Coord,
) -> LearnResult<Route> {
    grid.require_contains(start)?;
    grid.require_contains(dest)?;
    if !table.matches(grid) {
        return Err(LearnError::ShapeMismatch {
            table_width:  table.width(),
            table_height: table.height(),
            grid_width:   grid.width(),
            grid_height:  grid.height(),
        });
    }

    let started = Instant::now();
    let budget = 2 * (grid.width() + grid.height());
    let mut nodes = vec![start];
    let mut at = start;
    let mut moves = 0u32;

    while at != dest && !grid.is_terminal(at) {
        if moves == budget {
            log::debug!("greedy walk from {start} cycling after {moves} moves");
            return Err(LearnError::NoConvergedPath { from: start, steps: moves });
        }
        at = grid.step(at, table.best_action(at));
        nodes.push(at);
        moves += 1;
    }

    let metrics = RouteMetrics { elapsed: started.elapsed(), nodes_examined: moves as usize };
    Ok(Route::new(nodes, metrics))
}
