//! Fluent builder for a [`Scenario`].

use gr_city::{Grid, TrafficLevel, apply_traffic, set_destination};
use gr_core::Coord;
use gr_learn::Hyperparameters;

use crate::scenario::streams;
use crate::{Scenario, ScenarioConfig, SimError, SimResult};

/// Fluent builder for [`Scenario`].
///
/// # Required inputs
///
/// - width and height (both ≥ 4)
/// - start and destination (interior, distinct)
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                        |
/// |------------------------|--------------------------------|
/// | `.name(s)`             | `"scenario"`                   |
/// | `.traffic(level)`      | `TrafficLevel::None`           |
/// | `.seed(n)`             | `0`                            |
/// | `.hyperparameters(p)`  | `Hyperparameters::default()`   |
///
/// # Example
///
/// ```rust,ignore
/// let mut scenario = ScenarioBuilder::new(10, 10, Coord::new(1, 1), Coord::new(7, 6))
///     .traffic(TrafficLevel::Medium)
///     .seed(42)
///     .build()?;
/// let comparison = scenario.compare(&mut NoopObserver)?;
/// ```
pub struct ScenarioBuilder {
    config: ScenarioConfig,
}

impl ScenarioBuilder {
    pub fn new(width: u32, height: u32, start: Coord, destination: Coord) -> Self {
        Self { config: ScenarioConfig::new("scenario", width, height, start, destination) }
    }

    pub fn from_config(config: ScenarioConfig) -> Self {
        Self { config }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    pub fn traffic(mut self, level: TrafficLevel) -> Self {
        self.config.traffic = level;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn hyperparameters(mut self, params: Hyperparameters) -> Self {
        self.config.hyperparameters = params;
        self
    }

    /// Validate inputs, build and shape the grid, and return a ready-to-run
    /// [`Scenario`].
    ///
    /// Traffic is placed after the destination so the goal area stays
    /// clear.  The start node is not protected and may end up congested, in
    /// which case BFS reports no path.
    pub fn build(self) -> SimResult<Scenario> {
        let config = self.config;

        // ── Validate ──────────────────────────────────────────────────────
        let mut grid = Grid::build(config.width, config.height)?;
        grid.require_interior(config.start)?;
        grid.require_interior(config.destination)?;
        if config.start == config.destination {
            return Err(SimError::SameStartAndDestination(config.start));
        }
        config.hyperparameters.validate()?;

        // ── Shape ─────────────────────────────────────────────────────────
        set_destination(&mut grid, config.destination)?;
        let (mut traffic_rng, _) = streams(config.seed);
        apply_traffic(&mut grid, config.traffic, &mut traffic_rng)?;
        if grid.is_traffic(config.start) {
            log::warn!("scenario {:?}: start {} is congested", config.name, config.start);
        }

        log::info!(
            "scenario {:?}: {}x{} city, {} -> {}, {} traffic ({} congested)",
            config.name,
            config.width,
            config.height,
            config.start,
            config.destination,
            config.traffic,
            grid.traffic_nodes().len(),
        );

        Ok(Scenario::new(config, grid))
    }
}
