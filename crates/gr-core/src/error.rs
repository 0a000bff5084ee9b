//! Core error type.
//!
//! Sub-crates define their own error enums; `CoreError` only covers the text
//! edge (`I{x},{y}` node names, action indices).

use thiserror::Error;

/// Errors produced by `gr-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("unknown action index {0} (expected 0..4)")]
    UnknownAction(usize),
}

/// Shorthand result type for `gr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
