//! The `OutputWriter` trait implemented by backend writers.

use gr_sim::Comparison;

use crate::{ComparisonRow, EpisodeRow, OutputResult, RouteStepRow};

/// Trait implemented by result writers.
///
/// Errors raised while training is observed are stored by
/// [`TrainingOutputObserver`](crate::TrainingOutputObserver) and retrieved
/// with its `take_error`.
pub trait OutputWriter {
    /// Write the node rows of one route.
    fn write_route(&mut self, rows: &[RouteStepRow<'_>]) -> OutputResult<()>;

    /// Write one method summary row.
    fn write_comparison(&mut self, row: &ComparisonRow<'_>) -> OutputResult<()>;

    /// Write one training-episode row.
    fn write_episode(&mut self, row: &EpisodeRow<'_>) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;

    /// Write a summary row for every method in `cmp`, plus the route of
    /// every method that produced one.
    fn write_comparison_result(&mut self, cmp: &Comparison) -> OutputResult<()> {
        for outcome in &cmp.outcomes {
            self.write_comparison(&ComparisonRow::from_outcome(&cmp.scenario, outcome))?;
            if let Some(route) = &outcome.route {
                self.write_route(&RouteStepRow::from_route(&cmp.scenario, outcome.method, route))?;
            }
        }
        Ok(())
    }
}
