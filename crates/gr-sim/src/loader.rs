//! Batch scenario loader.
//!
//! # CSV format
//!
//! One row per scenario.  Every scenario uses default hyperparameters.
//!
//! ```csv
//! name,width,height,start_x,start_y,dest_x,dest_y,traffic,seed
//! small,6,6,1,1,4,4,none,1
//! rush-hour,20,15,2,2,17,11,heavy,7
//! ```
//!
//! `traffic` is `none`, `light`, `medium` or `heavy` (or the first letter).
//! Rows are only parsed here; geometry is validated by
//! [`ScenarioBuilder::build`](crate::ScenarioBuilder::build).

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use gr_city::TrafficLevel;
use gr_core::Coord;

use crate::{ScenarioConfig, SimError, SimResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ScenarioRecord {
    name:    String,
    width:   u32,
    height:  u32,
    start_x: u32,
    start_y: u32,
    dest_x:  u32,
    dest_y:  u32,
    traffic: String,
    seed:    u64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load scenario configs from a CSV file.
pub fn load_scenarios_csv(path: &Path) -> SimResult<Vec<ScenarioConfig>> {
    let file = std::fs::File::open(path)?;
    load_scenarios_reader(file)
}

/// Like [`load_scenarios_csv`] but accepts any `Read` source.
pub fn load_scenarios_reader<R: Read>(reader: R) -> SimResult<Vec<ScenarioConfig>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for (i, result) in csv_reader.deserialize::<ScenarioRecord>().enumerate() {
        let row = result.map_err(|e| SimError::Parse(e.to_string()))?;
        let traffic: TrafficLevel = row
            .traffic
            .parse()
            .map_err(|e| SimError::Parse(format!("row {}: {e}", i + 1)))?;

        let mut config = ScenarioConfig::new(
            row.name,
            row.width,
            row.height,
            Coord::new(row.start_x, row.start_y),
            Coord::new(row.dest_x, row.dest_y),
        );
        config.traffic = traffic;
        config.seed = row.seed;
        scenarios.push(config);
    }

    log::debug!("loaded {} scenario(s)", scenarios.len());
    Ok(scenarios)
}
