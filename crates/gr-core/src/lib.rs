//! `gr-core`: foundational types for the `gridroute` workspace.
//!
//! This crate is a dependency of every other `gr-*` crate.  It intentionally
//! has no `gr-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`coord`]       | `Coord` (grid intersection identity), `I{x},{y}` text |
//! | [`ids`]         | `NodeId` dense index                                  |
//! | [`action`]      | `Action`, the four driving directions                 |
//! | [`route`]       | `Route`, `RouteMetrics`                               |
//! | [`rng`]         | `SimRng` (seeded, injectable)                         |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod action;
pub mod coord;
pub mod error;
pub mod ids;
pub mod rng;
pub mod route;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use action::Action;
pub use coord::Coord;
pub use error::{CoreError, CoreResult};
pub use ids::NodeId;
pub use rng::SimRng;
pub use route::{Route, RouteMetrics};
