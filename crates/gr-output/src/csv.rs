//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `routes.csv`
//! - `comparison.csv`
//! - `episodes.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{ComparisonRow, EpisodeRow, OutputResult, RouteStepRow};

/// Writes results to three CSV files.
pub struct CsvWriter {
    routes:     Writer<File>,
    comparison: Writer<File>,
    episodes:   Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (truncating) the three CSV files and
    /// write their header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut routes = Writer::from_path(dir.join("routes.csv"))?;
        routes.write_record(["scenario", "method", "step", "x", "y"])?;

        let mut comparison = Writer::from_path(dir.join("comparison.csv"))?;
        comparison.write_record([
            "scenario",
            "method",
            "status",
            "edges",
            "elapsed_us",
            "nodes_examined",
        ])?;

        let mut episodes = Writer::from_path(dir.join("episodes.csv"))?;
        episodes.write_record(["scenario", "episode", "steps", "total_reward", "outcome"])?;

        Ok(Self { routes, comparison, episodes, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_route(&mut self, rows: &[RouteStepRow<'_>]) -> OutputResult<()> {
        for row in rows {
            self.routes.write_record(&[
                row.scenario.to_owned(),
                row.method.to_owned(),
                row.step.to_string(),
                row.x.to_string(),
                row.y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_comparison(&mut self, row: &ComparisonRow<'_>) -> OutputResult<()> {
        self.comparison.write_record(&[
            row.scenario.to_owned(),
            row.method.to_owned(),
            row.status.to_owned(),
            row.edges.map(|e| e.to_string()).unwrap_or_default(),
            row.elapsed_us.to_string(),
            row.nodes_examined.to_string(),
        ])?;
        Ok(())
    }

    fn write_episode(&mut self, row: &EpisodeRow<'_>) -> OutputResult<()> {
        self.episodes.write_record(&[
            row.scenario.to_owned(),
            row.episode.to_string(),
            row.steps.to_string(),
            row.total_reward.to_string(),
            row.outcome.to_owned(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.routes.flush()?;
        self.comparison.flush()?;
        self.episodes.flush()?;
        Ok(())
    }
}
