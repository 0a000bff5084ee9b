//! `gr-search`: deterministic routing baselines.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`router`] | `Router` trait                                              |
//! | [`bfs`]    | `BfsRouter`, avoids perimeter and traffic nodes             |
//! | [`astar`]  | `AStarRouter`, Manhattan heuristic, no avoidance            |
//! | [`error`]  | `SearchError`, `SearchResult<T>`                            |
//!
//! Both routers are pure functions over `&Grid`: they never mutate rewards and
//! allocate their own visited/cost arrays per call.

pub mod astar;
pub mod bfs;
pub mod error;
pub mod router;


pub use astar::AStarRouter;
pub use bfs::BfsRouter;
pub use error::{SearchError, SearchResult};
pub use router::Router;
