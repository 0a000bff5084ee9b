//! `gr-city`: the synthetic grid city and its reward shaping.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`grid`]    | `Grid` (SoA rewards + kinds), 4-neighbor adjacency           |
//! | [`reward`]  | Reward constants, `NodeKind`                                 |
//! | [`shaping`] | `set_destination`, `inject_traffic`, `TrafficLevel`, …       |
//! | [`error`]   | `CityError`, `CityResult<T>`                                 |
//!
//! # Lifecycle
//!
//! ```text
//! Grid::build(W, H)            perimeter = TERMINAL, interior = DEFAULT
//!   → set_destination(dest)    dest = GOAL, non-perimeter neighbors = NEAR_GOAL
//!   → apply_traffic(level)     random DEFAULT interior nodes → TRAFFIC
//!   → routers / trainer        read-only from here on
//! ```
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod grid;
pub mod reward;
pub mod shaping;


pub use error::{CityError, CityResult};
pub use grid::Grid;
pub use reward::NodeKind;
pub use shaping::{
    TrafficLevel, apply_traffic, incident_draws, inject_incidents, inject_traffic, mark_traffic,
    set_destination, set_reward, traffic_draws,
};
