//! `gr-sim`: scenario orchestration for gridroute.
//!
//! A scenario is one city (size, destination, traffic preset, seed) plus a
//! start node.  Building it shapes the grid once; comparing runs every
//! routing method against that same grid.
//!
//! ```text
//! ScenarioConfig ─► ScenarioBuilder::build
//!                     Grid::build → set_destination → apply_traffic(seed.child(1))
//!                 ─► Scenario::compare
//!                     BFS, A*               (read-only)
//!                     Q-learning            (fresh QTable, seed.child(2))
//!                 ─► Comparison
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gr_core::Coord;
//! use gr_learn::NoopObserver;
//! use gr_sim::ScenarioBuilder;
//!
//! let scenario = ScenarioBuilder::new(8, 8, Coord::new(1, 1), Coord::new(6, 5))
//!     .seed(3)
//!     .build()?;
//! for outcome in scenario.compare(&mut NoopObserver)?.outcomes {
//!     println!("{}: {}", outcome.method, outcome.status);
//! }
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod loader;
pub mod scenario;

#[cfg(test)]
mod tests;

pub use builder::ScenarioBuilder;
pub use config::ScenarioConfig;
pub use error::{SimError, SimResult};
pub use loader::{load_scenarios_csv, load_scenarios_reader};
pub use scenario::{Comparison, MethodOutcome, QLEARNING, RouteStatus, Scenario};
