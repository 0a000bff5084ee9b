//! `gr-output`: result writers for gridroute.
//!
//! | Backend | Files created                                      |
//! |---------|----------------------------------------------------|
//! | CSV     | `routes.csv`, `comparison.csv`, `episodes.csv`     |
//!
//! Backends implement [`OutputWriter`].  Training episodes stream through
//! [`TrainingOutputObserver`], which implements
//! `gr_learn::TrainingObserver`; finished comparisons are written with
//! [`OutputWriter::write_comparison_result`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use gr_output::{CsvWriter, OutputWriter, TrainingOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = TrainingOutputObserver::new(writer, &scenario.config.name);
//! let comparison = scenario.compare(&mut obs)?;
//! if let Some(e) = obs.take_error() { return Err(e.into()); }
//! let mut writer = obs.into_writer();
//! writer.write_comparison_result(&comparison)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TrainingOutputObserver;
pub use row::{ComparisonRow, EpisodeRow, RouteStepRow};
pub use writer::OutputWriter;
