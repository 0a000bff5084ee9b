//! `TrainingOutputObserver<W>` bridges `TrainingObserver` to an
//! `OutputWriter`.

use gr_learn::{EpisodeStats, TrainingObserver};

use crate::row::EpisodeRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`TrainingObserver`] that writes one row per episode to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After training returns, check for errors with
/// [`take_error`][Self::take_error].  The writer is not finished here, so it
/// can go on to receive the comparison rows.
pub struct TrainingOutputObserver<W: OutputWriter> {
    writer:     W,
    scenario:   String,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TrainingOutputObserver<W> {
    /// Create an observer that labels rows with `scenario`.
    pub fn new(writer: W, scenario: impl Into<String>) -> Self {
        Self { writer, scenario: scenario.into(), last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> TrainingObserver for TrainingOutputObserver<W> {
    fn on_episode_end(&mut self, stats: &EpisodeStats) {
        let row = EpisodeRow::from_stats(&self.scenario, stats);
        let result = self.writer.write_episode(&row);
        self.store_err(result);
    }
}
